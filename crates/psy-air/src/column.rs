//! Column-wise application of the evaluators.
//!
//! Every evaluator can be applied over ordered columns of observations. A
//! column is either a slice of optional values or a single value broadcast
//! against the other columns. Sliced columns in one call must share a length.
//! `None` in any input column gives `None` in that row of the output.
//!
//! Rows are independent, so evaluation runs on the rayon thread pool; output
//! order always matches input order.

use crate::elevation::p_atm_z;
use crate::enthalpy::{h_t_rh, h_t_w};
use crate::error::{AirError, AirResult};
use crate::humidity::{w_pw, w_t_rh};
use crate::saturation::{check_domain, p_ws_t};
use crate::wet_bulb::WetBulbSolver;
use psy_core::{P_STD_PA, from_option, to_option};
use rayon::prelude::*;
use tracing::debug;

/// One input column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Column<'a> {
    /// Single value broadcast to every row
    Scalar(Option<f64>),
    /// One value per row
    Values(&'a [Option<f64>]),
}

impl<'a> Column<'a> {
    /// Standard atmospheric pressure broadcast to every row.
    pub const STD_PRESSURE: Column<'static> = Column::Scalar(Some(P_STD_PA));

    /// Row count for sliced columns, `None` for broadcast scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Values(v) => Some(v.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Value at `row`.
    pub fn get(&self, row: usize) -> Option<f64> {
        match self {
            Self::Scalar(v) => *v,
            Self::Values(v) => v.get(row).copied().flatten(),
        }
    }
}

impl From<f64> for Column<'_> {
    fn from(v: f64) -> Self {
        Column::Scalar(to_option(v))
    }
}

impl From<Option<f64>> for Column<'_> {
    fn from(v: Option<f64>) -> Self {
        Column::Scalar(v)
    }
}

impl<'a> From<&'a [Option<f64>]> for Column<'a> {
    fn from(v: &'a [Option<f64>]) -> Self {
        Column::Values(v)
    }
}

impl<'a> From<&'a Vec<Option<f64>>> for Column<'a> {
    fn from(v: &'a Vec<Option<f64>>) -> Self {
        Column::Values(v.as_slice())
    }
}

/// Row count after broadcasting; 1 when every column is a scalar.
pub fn broadcast_len(columns: &[Column<'_>]) -> AirResult<usize> {
    let mut rows: Option<usize> = None;
    for len in columns.iter().filter_map(Column::len) {
        match rows {
            None => rows = Some(len),
            Some(expected) if expected != len => {
                return Err(AirError::LengthMismatch {
                    expected,
                    found: len,
                });
            }
            Some(_) => {}
        }
    }
    Ok(rows.unwrap_or(1))
}

/// Reject the whole column if any present temperature is outside the
/// saturation-pressure range.
pub fn validate_temperature_column(t: Column<'_>, rows: usize) -> AirResult<()> {
    if rows == 0 {
        return Ok(());
    }
    match t {
        Column::Scalar(v) => check_domain(from_option(v), None),
        Column::Values(_) => (0..rows).try_for_each(|i| check_domain(from_option(t.get(i)), Some(i))),
    }
}

fn map_rows<F>(columns: &[Column<'_>], f: F) -> AirResult<Vec<Option<f64>>>
where
    F: Fn(&[f64]) -> AirResult<f64> + Sync + Send,
{
    let rows = broadcast_len(columns)?;
    debug!(rows, columns = columns.len(), "evaluating columns");

    (0..rows)
        .into_par_iter()
        .map(|row| {
            let mut args = [0.0; 3];
            for (slot, col) in args.iter_mut().zip(columns) {
                match col.get(row) {
                    Some(v) => *slot = v,
                    None => return Ok(None),
                }
            }
            f(&args[..columns.len()]).map(to_option)
        })
        .collect()
}

/// Column form of [`crate::p_atm_z`].
pub fn p_atm_z_col(z: Column<'_>, p_sl: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    map_rows(&[z, p_sl], |a| Ok(p_atm_z(a[0], a[1])))
}

/// Column form of [`crate::p_ws_t`].
///
/// One out-of-range temperature fails the whole call.
pub fn p_ws_t_col(t: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    let rows = broadcast_len(&[t])?;
    validate_temperature_column(t, rows)?;
    map_rows(&[t], |a| p_ws_t(a[0]))
}

/// Column form of [`crate::w_pw`].
pub fn w_pw_col(p_w: Column<'_>, p_atm: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    map_rows(&[p_w, p_atm], |a| Ok(w_pw(a[0], a[1])))
}

/// Column form of [`crate::w_t_rh`].
///
/// One out-of-range temperature fails the whole call.
pub fn w_t_rh_col(t: Column<'_>, rh: Column<'_>, p_atm: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    let rows = broadcast_len(&[t, rh, p_atm])?;
    validate_temperature_column(t, rows)?;
    map_rows(&[t, rh, p_atm], |a| w_t_rh(a[0], a[1], a[2]))
}

/// Column form of [`crate::h_t_w`].
pub fn h_t_w_col(t: Column<'_>, w: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    map_rows(&[t, w], |a| Ok(h_t_w(a[0], a[1])))
}

/// Column form of [`crate::h_t_rh`].
///
/// One out-of-range temperature fails the whole call.
pub fn h_t_rh_col(t: Column<'_>, rh: Column<'_>, p_atm: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    let rows = broadcast_len(&[t, rh, p_atm])?;
    validate_temperature_column(t, rows)?;
    map_rows(&[t, rh, p_atm], |a| h_t_rh(a[0], a[1], a[2]))
}

/// Column form of [`crate::t_wb`].
///
/// Rows with a missing input are skipped without solving. A domain or
/// convergence failure in any solved row fails the call.
pub fn t_wb_col(t: Column<'_>, rh: Column<'_>, p_atm: Column<'_>) -> AirResult<Vec<Option<f64>>> {
    t_wb_col_with(&WetBulbSolver::default(), t, rh, p_atm)
}

/// [`t_wb_col`] with an explicit solver configuration.
pub fn t_wb_col_with(
    solver: &WetBulbSolver,
    t: Column<'_>,
    rh: Column<'_>,
    p_atm: Column<'_>,
) -> AirResult<Vec<Option<f64>>> {
    map_rows(&[t, rh, p_atm], |a| solver.solve(a[0], a[1], a[2]))
}
