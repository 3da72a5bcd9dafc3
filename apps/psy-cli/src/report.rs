//! Evaluation of station files and table rendering.

use crate::error::CliResult;
use crate::station::StationFile;
use psy_air::{Column, SweepResult, h_t_rh_col, p_atm_z, p_ws_t_col, t_wb_col, w_t_rh_col};
use serde::Serialize;
use std::io;
use tracing::info;

/// One evaluated observation; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub label: String,
    pub t_c: Option<f64>,
    pub rh: Option<f64>,
    pub p_atm_pa: f64,
    pub p_ws_pa: Option<f64>,
    pub w: Option<f64>,
    pub h_kj_per_kg: Option<f64>,
    pub t_wb_c: Option<f64>,
}

/// Evaluate every observation of a station column-wise.
pub fn evaluate_station(station: &StationFile) -> CliResult<Vec<BatchRow>> {
    let p_atm = p_atm_z(station.elevation_m, station.sea_level_pressure_pa);
    info!(
        station = %station.name,
        observations = station.observations.len(),
        p_atm,
        "evaluating station"
    );

    let t = station.temperatures();
    let rh = station.humidities();
    let p = Column::from(p_atm);

    let p_ws = p_ws_t_col((&t).into())?;
    let w = w_t_rh_col((&t).into(), (&rh).into(), p)?;
    let h = h_t_rh_col((&t).into(), (&rh).into(), p)?;
    let t_wb = t_wb_col((&t).into(), (&rh).into(), p)?;

    Ok(station
        .observations
        .iter()
        .enumerate()
        .map(|(i, obs)| BatchRow {
            label: obs.label.clone(),
            t_c: obs.t_c,
            rh: obs.rh,
            p_atm_pa: p_atm,
            p_ws_pa: p_ws[i],
            w: w[i],
            h_kj_per_kg: h[i],
            t_wb_c: t_wb[i],
        })
        .collect())
}

/// One point of a sweep; failed points keep only `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub x: f64,
    pub t_c: Option<f64>,
    pub rh: Option<f64>,
    pub w: Option<f64>,
    pub h_kj_per_kg: Option<f64>,
    pub t_wb_c: Option<f64>,
}

pub fn sweep_rows(result: &SweepResult) -> Vec<SweepRow> {
    result
        .independent_values
        .iter()
        .zip(&result.states)
        .map(|(&x, state)| SweepRow {
            x,
            t_c: state.map(|s| s.t_c),
            rh: state.map(|s| s.rh),
            w: state.map(|s| s.w),
            h_kj_per_kg: state.map(|s| s.h_kj_per_kg),
            t_wb_c: state.map(|s| s.t_wb_c),
        })
        .collect()
}

/// Write serializable rows as CSV with a header taken from the field names.
pub fn write_csv<T: Serialize, W: io::Write>(rows: &[T], out: W) -> CliResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
