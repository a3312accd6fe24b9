use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::weather::Weather;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Week {
    pub highs: Vec<i32>,
    pub lows: Vec<i32>,
    pub day_count: i32,
    pub wind_speed_mph: i32,
    pub weather_code: String,
}

/// The sample week reported when no configuration file is given
impl Default for Week {
    fn default() -> Self {
        Week {
            highs: vec![78, 76, 80, 82, 85, 79, 75],
            lows: vec![75, 70, 75, 76, 75, 70, 69],
            day_count: 7,
            wind_speed_mph: 9,
            weather_code: "P".to_string(),
        }
    }
}

impl Week {
    /// Returns a new Weather record built from the configured week
    pub fn to_weather(&self) -> Result<Weather, ConfigError> {
        let mut chars = self.weather_code.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Ok(Weather::new(&self.highs, &self.lows, self.day_count, self.wind_speed_mph, code)),
            _ => Err(ConfigError::Invalid(format!(
                "weather code must be a single character, got '{}'", self.weather_code))),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: LevelFilter::Warn }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub week: Week,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
/// Sections or items missing from the file take their defaults.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
