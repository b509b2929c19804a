//! Climate station observation types and unit helpers.
//!
//! A [`ClimateRecord`] is one day of station observations; [`LocationParams`]
//! describes the station itself and is shared read-only across a whole series.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of climate station observations.
///
/// `tmax >= tmin` is expected but not enforced: a reversed pair still yields
/// a defined numeric result downstream, never a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub date: NaiveDate,
    /// Daily maximum air temperature [°C]
    pub tmax: f64,
    /// Daily minimum air temperature [°C]
    pub tmin: f64,
    /// Mean relative humidity [%], nominally 0-100
    pub rh_mean: f64,
    /// Wind speed at 2 m reference height [m/s]
    pub wind: f64,
    /// Bright sunshine duration [hours]
    pub sunshine: f64,
}

/// Station location, shared across every record in a computation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationParams {
    /// Decimal degrees, positive north, -90..90
    pub latitude: f64,
    /// Meters above sea level, may be negative
    pub altitude: f64,
}

/// Convert degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Convert miles per hour to meters per second.
pub fn mph_to_ms(mph: f64) -> f64 {
    mph * 0.44704
}

/// 1-indexed ordinal day within the date's calendar year (J in FAO-56).
///
/// Leap years are handled by chrono: Feb 29 shifts every later ordinal by one
/// within that year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}
