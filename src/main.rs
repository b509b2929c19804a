use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eto_tracker::{aggregate_monthly, compute_series, parse_climate_csv};
use eto_tracker::{export_daily_csv, export_monthly_csv, LocationParams};

#[derive(Parser)]
#[command(name = "eto-tracker")]
#[command(about = "Compute daily FAO-56 reference evapotranspiration from a climate CSV", long_about = None)]
struct Cli {
    /// Path to the climate CSV (Date,Tmax,Tmin,RH,Wind,Sunshine)
    file: PathBuf,

    /// Station latitude in decimal degrees, positive north
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,

    /// Station altitude in meters above sea level
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    altitude: f64,

    /// Emit monthly summaries instead of the daily series
    #[arg(long)]
    monthly: bool,

    /// Output format: 'csv' or 'json'
    #[arg(long, default_value = "csv")]
    format: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,eto_tracker=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let location = LocationParams {
        latitude: cli.latitude,
        altitude: cli.altitude,
    };
    debug!(
        "Computing ETo for {:?} at lat {}, alt {} m",
        cli.file, location.latitude, location.altitude
    );

    let text = std::fs::read_to_string(&cli.file)?;
    let records = parse_climate_csv(&text);
    if records.is_empty() {
        return Err(format!("No valid climate records found in {:?}", cli.file).into());
    }
    info!("Parsed {} climate records", records.len());

    let results = compute_series(&records, &location);

    let output = match (cli.monthly, cli.format.as_str()) {
        (false, "csv") => export_daily_csv(&results),
        (true, "csv") => export_monthly_csv(&aggregate_monthly(&results)),
        (false, "json") => serde_json::to_string_pretty(&results)?,
        (true, "json") => serde_json::to_string_pretty(&aggregate_monthly(&results))?,
        (_, other) => {
            return Err(format!("Unknown output format '{other}' (expected csv or json)").into())
        }
    };
    println!("{output}");

    Ok(())
}
