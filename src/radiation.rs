//! Solar and longwave radiation estimation (FAO-56 chapter 3).
//!
//! Pure functions of latitude, day of year, altitude and sunshine duration.
//! All radiation quantities are in MJ m⁻² day⁻¹, angles in radians.

/// Solar constant [MJ m⁻² min⁻¹]
const SOLAR_CONSTANT: f64 = 0.0820;

/// Stefan-Boltzmann constant [MJ K⁻⁴ m⁻² day⁻¹]
const STEFAN_BOLTZMANN: f64 = 4.903e-9;

/// Albedo of the FAO-56 reference grass crop
const ALBEDO: f64 = 0.23;

/// Angström formula coefficients relating sunshine fraction to solar
/// radiation.
///
/// The defaults are the FAO-56 recommended global averages; stations with
/// local calibration data can substitute their own values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngstromCoefficients {
    /// Fraction of Ra reaching the ground on a fully overcast day
    pub a: f64,
    /// Additional fraction reaching the ground with full sunshine
    pub b: f64,
}

impl Default for AngstromCoefficients {
    fn default() -> Self {
        Self { a: 0.25, b: 0.50 }
    }
}

/// Inverse relative Earth-Sun distance factor dr for day of year `j`.
pub fn inverse_earth_sun_distance(j: u32) -> f64 {
    1.0 + 0.033 * (2.0 * std::f64::consts::PI * f64::from(j) / 365.0).cos()
}

/// Solar declination δ [rad] for day of year `j`.
pub fn solar_declination(j: u32) -> f64 {
    0.409 * (2.0 * std::f64::consts::PI * f64::from(j) / 365.0 - 1.39).sin()
}

/// Sunset hour angle ωs [rad] for latitude [degrees] and declination [rad].
///
/// The acos argument is clamped for latitudes beyond the polar circles:
/// below -1 means continuous daylight (returns π, a 24 h day), above 1 means
/// continuous night (returns 0). Without the clamp the value is undefined
/// around the solstices at polar latitudes.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let phi = latitude.to_radians();
    let x = -phi.tan() * declination.tan();
    if x < -1.0 {
        std::f64::consts::PI
    } else if x > 1.0 {
        0.0
    } else {
        x.acos()
    }
}

/// Extraterrestrial radiation Ra for latitude [degrees] and day of year.
pub fn extraterrestrial_radiation(latitude: f64, j: u32) -> f64 {
    let phi = latitude.to_radians();
    let decl = solar_declination(j);
    let ws = sunset_hour_angle(latitude, decl);
    let dr = inverse_earth_sun_distance(j);
    (24.0 * 60.0 / std::f64::consts::PI)
        * SOLAR_CONSTANT
        * dr
        * (ws * phi.sin() * decl.sin() + phi.cos() * decl.cos() * ws.sin())
}

/// Maximum possible daylight hours N.
pub fn daylight_hours(latitude: f64, j: u32) -> f64 {
    let decl = solar_declination(j);
    (24.0 / std::f64::consts::PI) * sunset_hour_angle(latitude, decl)
}

/// Solar radiation Rs from measured sunshine hours via the Angström formula.
///
/// When the day has no daylight at all (polar night) the sunshine fraction
/// is defined as 0, keeping the result finite; Ra is 0 there anyway.
pub fn solar_radiation(
    sunshine_hours: f64,
    daylight_hours: f64,
    ra: f64,
    angstrom: AngstromCoefficients,
) -> f64 {
    let sunshine_fraction = if daylight_hours > 0.0 {
        sunshine_hours / daylight_hours
    } else {
        0.0
    };
    (angstrom.a + angstrom.b * sunshine_fraction) * ra
}

/// Clear-sky radiation Rso at a given altitude [m].
pub fn clear_sky_radiation(altitude: f64, ra: f64) -> f64 {
    (0.75 + 2e-5 * altitude) * ra
}

/// Net shortwave radiation Rns for the reference crop.
pub fn net_shortwave(rs: f64) -> f64 {
    (1.0 - ALBEDO) * rs
}

/// Net outgoing longwave radiation Rnl.
///
/// Stefan-Boltzmann emission from the Kelvin-converted temperature extremes,
/// corrected for humidity (through `ea` [kPa]) and cloudiness (through
/// Rs/Rso). The cloudiness factor is defined as 0 when Rso is non-positive,
/// which happens during permanent polar night.
pub fn net_longwave(tmax: f64, tmin: f64, ea: f64, rs: f64, rso: f64) -> f64 {
    let tk_max = tmax + 273.16;
    let tk_min = tmin + 273.16;
    let avg_tk4 = (tk_max.powi(4) + tk_min.powi(4)) / 2.0;
    let humidity_factor = 0.34 - 0.14 * ea.sqrt();
    let cloud_factor = if rso > 0.0 {
        1.35 * (rs / rso) - 0.35
    } else {
        0.0
    };
    STEFAN_BOLTZMANN * avg_tk4 * humidity_factor * cloud_factor
}
