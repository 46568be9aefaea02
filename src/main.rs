use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde_json::json;
use tracing::debug;

use weather_lookup::logging::init_tracing;
use weather_lookup::{
    Coordinates, DisplayState, FixedPosition, LocationInput, NoGeolocation, Presenter,
    WeatherApiClient, WeatherLookupConfig, WeatherLookupService, WeatherReport,
};

#[derive(Parser, Debug)]
#[command(name = "weather-lookup", version)]
#[command(about = "Current weather for a city or your position (Open-Meteo)")]
#[command(group(ArgGroup::new("place").required(true).args(["city", "latitude", "here"])))]
struct Cli {
    /// City name to geocode. Example: Lyon
    #[arg(long)]
    city: Option<String>,

    /// Device latitude (decimal). Example: 45.76
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Device longitude (decimal). Example: 4.83
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Use the device position; fails when no position is available
    #[arg(long, default_value_t = false)]
    here: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Writes display states to stdout
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&mut self, state: &DisplayState) {
        print!("{state}");
    }
}

fn print_json(result: &weather_lookup::Result<WeatherReport>) -> Result<()> {
    let value = match result {
        Ok(report) => serde_json::to_value(report)?,
        Err(e) => json!({ "code": e.code(), "message": e.to_string() }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = WeatherLookupConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    init_tracing(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    let api_client = WeatherApiClient::new(&config.api)?;
    let service = WeatherLookupService::new(api_client);

    let result = match (cli.city, cli.latitude, cli.longitude) {
        (Some(city), _, _) => service.lookup(LocationInput::Name(city)).await,
        (None, Some(lat), Some(lon)) => match Coordinates::new(lat, lon) {
            Ok(coordinates) => {
                let source = FixedPosition(coordinates);
                service.lookup_from_device(&source).await
            }
            Err(e) => Err(e),
        },
        _ => {
            debug!(here = cli.here, "No device geolocation capability");
            service.lookup_from_device(&NoGeolocation).await
        }
    };

    if cli.json {
        print_json(&result)?;
    } else {
        TerminalPresenter.present(&result);
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
