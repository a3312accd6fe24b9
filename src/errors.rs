use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use thiserror::Error;

/// Errors raised by the computations and reports on a weather record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WeatherError {
    #[error("invalid day count: {0}, must be greater than zero")]
    InvalidDayCount(i32),
    #[error("index {index} out of range for {what} with length {len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "ConfigError::Io: {}", e),
            ConfigError::Parse(e) => write!(f, "ConfigError::Parse: {}", e),
            ConfigError::Invalid(e) => write!(f, "ConfigError::Invalid: {}", e),
        }
    }
}
impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl std::error::Error for ConfigError {}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError::Io(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError::Parse(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Invalid(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> LoggingError {
        LoggingError(format!("log file error: {}", e))
    }
}
impl From<ConfigErrors> for LoggingError {
    fn from(e: ConfigErrors) -> LoggingError {
        LoggingError(format!("logger config error: {}", e))
    }
}
impl From<SetLoggerError> for LoggingError {
    fn from(e: SetLoggerError) -> LoggingError {
        LoggingError(format!("logger already set: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_table() {
        let e = WeatherError::IndexOutOfRange { what: "day names", index: 7, len: 7 };
        assert_eq!(e.to_string(), "index 7 out of range for day names with length 7");
    }

    #[test]
    fn config_error_from_str_is_invalid() {
        let e = ConfigError::from("weather code must be a single character");
        assert!(matches!(e, ConfigError::Invalid(_)));
        assert_eq!(e.to_string(), "ConfigError::Invalid: weather code must be a single character");
    }
}
