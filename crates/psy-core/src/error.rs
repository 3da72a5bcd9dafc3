use thiserror::Error;

pub type PsyResult<T> = Result<T, PsyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsyError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Could not parse {quantity} from '{input}'")]
    Parse { input: String, quantity: &'static str },

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: &'static str },
}
