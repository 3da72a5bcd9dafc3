mod error;
mod report;
mod station;

use clap::{Parser, Subcommand};
use error::CliResult;
use psy_air::{
    PsychroState, SweepDefinition, SweepResult, SweepType, execute_temperature_sweep, p_atm_z,
};
use psy_core::{P_STD_PA, Quantity, UnitValue};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "psy-cli")]
#[command(about = "Psychroflow CLI - Moist-air properties from weather-station inputs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single observation
    Point {
        /// Dry-bulb temperature (e.g. 20C, 68F, 293.15K)
        #[arg(long, allow_hyphen_values = true)]
        t: String,
        /// Relative humidity (e.g. 0.55 or 55%)
        #[arg(long)]
        rh: String,
        /// Station elevation (e.g. 350m, 1200ft)
        #[arg(long, default_value = "0m", allow_hyphen_values = true)]
        z: String,
        /// Sea-level pressure (e.g. 1013.25hPa)
        #[arg(long)]
        p_sl: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every observation in a station YAML file
    Batch {
        /// Path to the station YAML file
        station_path: PathBuf,
        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Print a constant-RH chart line as CSV
    Sweep {
        /// Relative humidity held constant
        #[arg(long)]
        rh: String,
        /// First dry-bulb temperature
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// Last dry-bulb temperature
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        /// Number of points
        #[arg(long, default_value_t = 21)]
        points: usize,
        /// Station elevation
        #[arg(long, default_value = "0m", allow_hyphen_values = true)]
        z: String,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing; stdout carries the tables
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Point {
            t,
            rh,
            z,
            p_sl,
            json,
        } => cmd_point(&t, &rh, &z, p_sl.as_deref(), json),
        Commands::Batch { station_path, json } => cmd_batch(&station_path, json),
        Commands::Sweep {
            rh,
            from,
            to,
            points,
            z,
        } => cmd_sweep(&rh, &from, &to, points, &z),
    }
}

fn sea_level_pressure(p_sl: Option<&str>) -> CliResult<f64> {
    match p_sl {
        Some(text) => Ok(UnitValue::from_text(text, Quantity::Pressure)?.value()),
        None => Ok(P_STD_PA),
    }
}

/// Parsed inputs of a single-point evaluation.
struct PointInputs {
    t: UnitValue,
    rh: UnitValue,
    z: UnitValue,
    p_sl: f64,
}

impl PointInputs {
    fn parse(t: &str, rh: &str, z: &str, p_sl: Option<&str>) -> CliResult<Self> {
        Ok(Self {
            t: UnitValue::from_text(t, Quantity::Temperature)?,
            rh: UnitValue::from_text(rh, Quantity::RelativeHumidity)?,
            z: UnitValue::from_text(z, Quantity::Elevation)?,
            p_sl: sea_level_pressure(p_sl)?,
        })
    }

    fn evaluate(&self) -> CliResult<PsychroState> {
        Ok(PsychroState::from_elevation(
            self.t.value(),
            self.rh.value(),
            self.z.value(),
            self.p_sl,
        )?)
    }
}

fn cmd_point(t: &str, rh: &str, z: &str, p_sl: Option<&str>, json: bool) -> CliResult<()> {
    let inputs = PointInputs::parse(t, rh, z, p_sl)?;
    let state = inputs.evaluate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!(
        "Inputs: t = {}, rh = {}, z = {}",
        inputs.t.raw_text, inputs.rh.raw_text, inputs.z.raw_text
    );
    println!("  Atmospheric pressure: {:.1} Pa", state.p_atm_pa);
    println!("  Saturation pressure:  {:.2} Pa", state.p_ws_pa);
    println!("  Vapor pressure:       {:.2} Pa", state.p_w_pa);
    println!("  Humidity ratio:       {:.6} kg/kg", state.w);
    println!("  Enthalpy:             {:.3} kJ/kg", state.h_kj_per_kg);
    println!("  Wet-bulb:             {:.3} °C", state.t_wb_c);
    println!("  Wet-bulb depression:  {:.3} K", state.wet_bulb_depression());
    Ok(())
}

fn cmd_batch(station_path: &Path, json: bool) -> CliResult<()> {
    let station = station::load_station(station_path)?;
    let rows = report::evaluate_station(&station)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::write_csv(&rows, io::stdout().lock())?;
    }
    Ok(())
}

/// Constant-RH line from text inputs.
fn run_sweep(
    rh: &str,
    from: &str,
    to: &str,
    points: usize,
    z: &str,
) -> CliResult<(SweepDefinition, SweepResult)> {
    let rh = UnitValue::from_text(rh, Quantity::RelativeHumidity)?;
    let z = UnitValue::from_text(z, Quantity::Elevation)?;
    let sweep =
        SweepDefinition::from_text(from, to, Quantity::Temperature, points, SweepType::Linear)?;
    let result = execute_temperature_sweep(&sweep, rh.value(), p_atm_z(z.value(), P_STD_PA))?;
    Ok((sweep, result))
}

fn cmd_sweep(rh: &str, from: &str, to: &str, points: usize, z: &str) -> CliResult<()> {
    let (sweep, result) = run_sweep(rh, from, to, points, z)?;
    if result.num_failed > 0 {
        eprintln!(
            "{}: {} of {} points failed",
            sweep,
            result.num_failed,
            result.independent_values.len()
        );
    }
    report::write_csv(&report::sweep_rows(&result), io::stdout().lock())?;
    Ok(())
}
