//! FAO-56 Penman-Monteith reference evapotranspiration.
//!
//! Combines the radiation and psychrometric models into a per-day result:
//!
//! ETo = [0.408 Δ(Rn-G) + γ(900/(T+273))u₂(es-ea)] / [Δ + γ(1+0.34u₂)]
//!
//! with the soil heat flux G fixed at 0, which is the standard assumption
//! for daily time steps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::climate::{day_of_year, ClimateRecord, LocationParams};
use crate::psychrometric::{
    actual_vapor_pressure, mean_saturation_vapor_pressure, psychrometric_constant,
    slope_of_saturation_curve,
};
use crate::radiation::{
    clear_sky_radiation, daylight_hours, extraterrestrial_radiation, net_longwave, net_shortwave,
    solar_radiation, AngstromCoefficients,
};

/// Per-day reference evapotranspiration result, one per input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EToResult {
    pub date: NaiveDate,
    /// Reference evapotranspiration [mm/day], floored at 0
    pub eto: f64,
    /// Net radiation [MJ m⁻² day⁻¹]
    pub rn: f64,
    /// Mean saturation vapor pressure [kPa]
    pub es: f64,
    /// Actual vapor pressure [kPa]
    pub ea: f64,
    /// Slope of the saturation vapor pressure curve [kPa/°C]
    pub delta: f64,
    /// Psychrometric constant [kPa/°C]
    pub gamma: f64,
}

/// Compute reference evapotranspiration for one day of observations.
///
/// Always yields a finite, non-negative `eto` for finite inputs. Negative
/// theoretical values, possible under cold overcast humid conditions, are
/// reported as 0 since evapotranspiration cannot run backwards. Physical
/// validity of the inputs is not checked: `rh_mean > 100` produces
/// `ea > es` and flows through as-is.
pub fn compute_daily(record: &ClimateRecord, location: &LocationParams) -> EToResult {
    let j = day_of_year(record.date);
    let tmean = (record.tmax + record.tmin) / 2.0;

    // Radiation balance
    let ra = extraterrestrial_radiation(location.latitude, j);
    let n = daylight_hours(location.latitude, j);
    let rs = solar_radiation(record.sunshine, n, ra, AngstromCoefficients::default());
    let rso = clear_sky_radiation(location.altitude, ra);
    let rns = net_shortwave(rs);

    // Vapor pressure
    let es = mean_saturation_vapor_pressure(record.tmax, record.tmin);
    let ea = actual_vapor_pressure(record.tmax, record.tmin, record.rh_mean);

    let rnl = net_longwave(record.tmax, record.tmin, ea, rs, rso);
    let rn = rns - rnl;

    let delta = slope_of_saturation_curve(tmean);
    let gamma = psychrometric_constant(location.altitude);

    // G = 0 for daily time steps
    let g = 0.0;
    let u2 = record.wind;

    let numerator = 0.408 * delta * (rn - g) + gamma * (900.0 / (tmean + 273.0)) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    let eto = numerator / denominator;

    // Floor at 0 without masking a NaN from garbage input fields
    let eto = if eto < 0.0 { 0.0 } else { eto };

    EToResult {
        date: record.date,
        eto,
        rn,
        es,
        ea,
        delta,
        gamma,
    }
}

/// Compute ETo for a full series: a position-wise map, order-preserving.
pub fn compute_series(records: &[ClimateRecord], location: &LocationParams) -> Vec<EToResult> {
    records
        .iter()
        .map(|record| compute_daily(record, location))
        .collect()
}
