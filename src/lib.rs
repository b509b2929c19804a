//! Daily FAO-56 Penman-Monteith reference evapotranspiration (ETo) from
//! climate station observations, with monthly aggregation and CSV rendering.
//!
//! The pipeline is a composition of pure functions: raw CSV text →
//! [`climate::ClimateRecord`]s → [`eto::EToResult`]s →
//! [`export::MonthlySummary`]s → rendered tables. No component holds state
//! across calls and nothing here touches the file system or network.

pub mod climate;
pub mod csv_parser;
pub mod eto;
pub mod export;
pub mod psychrometric;
pub mod radiation;

pub use climate::{day_of_year, fahrenheit_to_celsius, mph_to_ms, ClimateRecord, LocationParams};
pub use csv_parser::{parse_climate_csv, parse_climate_csv_strict, ClimateCsvError};
pub use eto::{compute_daily, compute_series, EToResult};
pub use export::{aggregate_monthly, export_daily_csv, export_monthly_csv, MonthlySummary};
