//! Vapor pressure and psychrometric relationships (FAO-56 chapter 2).
//!
//! Pure functions of temperature [°C], relative humidity [%] and altitude
//! [m]. Pressures are in kPa.

/// Saturation vapor pressure e°(T) [kPa] (Tetens form).
pub fn saturation_vapor_pressure(t: f64) -> f64 {
    0.6108 * ((17.27 * t) / (t + 237.3)).exp()
}

/// Mean saturation vapor pressure es [kPa] from the daily extremes.
pub fn mean_saturation_vapor_pressure(tmax: f64, tmin: f64) -> f64 {
    (saturation_vapor_pressure(tmax) + saturation_vapor_pressure(tmin)) / 2.0
}

/// Actual vapor pressure ea [kPa] from mean relative humidity.
///
/// Deliberate approximation: only mean RH is available, not dew point, so ea
/// is taken as es scaled by RH. This diverges from the dew-point-based FAO-56
/// worked examples by up to ~0.6 mm/day of ETo in reference scenarios and is
/// kept as-is.
pub fn actual_vapor_pressure(tmax: f64, tmin: f64, rh_mean: f64) -> f64 {
    mean_saturation_vapor_pressure(tmax, tmin) * rh_mean / 100.0
}

/// Slope of the saturation vapor pressure curve Δ [kPa/°C] at temperature `t`.
pub fn slope_of_saturation_curve(t: f64) -> f64 {
    4098.0 * saturation_vapor_pressure(t) / (t + 237.3).powi(2)
}

/// Atmospheric pressure P [kPa] at a given altitude [m].
///
/// No clamping is applied: altitudes extreme enough to drive the pressure
/// base negative are the caller's responsibility.
pub fn atmospheric_pressure(altitude: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * altitude) / 293.0).powf(5.26)
}

/// Psychrometric constant γ [kPa/°C] at a given altitude [m].
pub fn psychrometric_constant(altitude: f64) -> f64 {
    0.000665 * atmospheric_pressure(altitude)
}
