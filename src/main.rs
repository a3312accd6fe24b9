use std::env;
use std::io::{self, Write};
use anyhow::{Context, Result};
use log::{debug, error, info};
use crate::config::{load_config, Config};
use crate::errors::WeatherError;
use crate::logging::init_logging;

mod config;
mod errors;
mod logging;
mod report;
mod weather;

/// Prints today's and the weekly forecast for one week of weather data.
///
/// The week comes from the TOML file given as the first argument, or the built-in
/// sample week when no argument is given.
fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(&path).with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };

    init_logging(&config.general)?;
    info!("weekly-weather version: {}", env!("CARGO_PKG_VERSION"));

    let mut weather = config.week.to_weather()?;
    debug!("weather record: {} days, wind {} mph, code '{}'",
        weather.day_count(), weather.wind_speed_mph(), weather.weather_code());

    weather.derive_description();
    debug!("description: {}", weather.description().unwrap_or_default());

    let output = reports(&weather).inspect_err(|e| error!("report failed: {}", e))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Returns today's report followed by the weekly report, or nothing if either fails
///
/// # Arguments
///
/// * 'weather' - the weather record to report on
fn reports(weather: &weather::Weather) -> Result<String, WeatherError> {
    let mut output = weather.format_today_report()?;
    output.push_str(&weather.format_weekly_report()?);

    Ok(output)
}
