use std::fmt;
use crate::errors::WeatherError;

/// Sky conditions selectable by a single letter weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Clear,
    Unknown,
}

impl WeatherCondition {
    /// Maps a weather code to its condition, any unrecognized code maps to Unknown
    ///
    /// # Arguments
    ///
    /// * 'code' - the weather code letter
    pub fn from_code(code: char) -> Self {
        match code {
            'S' => Self::Sunny,
            'P' => Self::PartlyCloudy,
            'C' => Self::Cloudy,
            'N' => Self::Clear,
            _ => Self::Unknown,
        }
    }

    /// Returns the report text for the condition
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunny => "SUNNY",
            Self::PartlyCloudy => "PARTLY CLOUDY",
            Self::Cloudy => "CLOUDY",
            Self::Clear => "CLEAR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One week of daily high and low temperatures (Fahrenheit) together with wind speed
/// and a weather code.
///
/// Temperatures are ordered Sunday to Saturday. The day count is the number of entries
/// every calculation reads from each sequence, it is checked on each read and not when
/// the record is created.
#[derive(Debug, Clone)]
pub struct Weather {
    highs: Vec<i32>,
    lows: Vec<i32>,
    day_count: i32,
    wind_speed_mph: i32,
    weather_code: char,
    description: Option<WeatherCondition>,
}

impl Weather {
    /// Returns a new Weather record holding its own copies of the given temperatures
    ///
    /// # Arguments
    ///
    /// * 'highs' - daily high temperatures
    /// * 'lows' - daily low temperatures
    /// * 'day_count' - number of days to read from each sequence
    /// * 'wind_speed_mph' - wind speed in miles per hour
    /// * 'weather_code' - weather code letter (S, P, C or N)
    pub fn new(highs: &[i32], lows: &[i32], day_count: i32, wind_speed_mph: i32, weather_code: char) -> Weather {
        Weather {
            highs: highs.to_vec(),
            lows: lows.to_vec(),
            day_count,
            wind_speed_mph,
            weather_code,
            description: None,
        }
    }

    pub fn highs(&self) -> &[i32] {
        &self.highs
    }

    pub fn lows(&self) -> &[i32] {
        &self.lows
    }

    pub fn day_count(&self) -> i32 {
        self.day_count
    }

    pub fn wind_speed_mph(&self) -> i32 {
        self.wind_speed_mph
    }

    pub fn weather_code(&self) -> char {
        self.weather_code
    }

    /// Returns the derived description, None until derive_description has been called
    pub fn description(&self) -> Option<&'static str> {
        self.description.map(|c| c.description())
    }

    /// Sets the description from the weather code
    pub fn derive_description(&mut self) {
        self.description = Some(WeatherCondition::from_code(self.weather_code));
    }

    /// Average of the high temperatures over the day count
    pub fn average_high(&self) -> Result<f64, WeatherError> {
        let days = window(&self.highs, self.day_count, "highs")?;
        Ok(average(days))
    }

    /// Average of the low temperatures over the day count
    pub fn average_low(&self) -> Result<f64, WeatherError> {
        let days = window(&self.lows, self.day_count, "lows")?;
        Ok(average(days))
    }

    /// Highest high temperature over the day count
    pub fn max_high(&self) -> Result<i32, WeatherError> {
        let days = window(&self.highs, self.day_count, "highs")?;

        let mut highest = days[0];
        for &t in &days[1..] {
            if t > highest {
                highest = t;
            }
        }
        Ok(highest)
    }

    /// Lowest low temperature over the day count
    pub fn min_low(&self) -> Result<i32, WeatherError> {
        let days = window(&self.lows, self.day_count, "lows")?;

        let mut lowest = days[0];
        for &t in &days[1..] {
            if t < lowest {
                lowest = t;
            }
        }
        Ok(lowest)
    }
}

/// Returns the first day_count entries of a temperature sequence.
///
/// # Arguments
///
/// * 'temps' - the temperature sequence
/// * 'day_count' - number of entries to read
/// * 'what' - sequence name used in the error
pub(crate) fn window<'a>(temps: &'a [i32], day_count: i32, what: &'static str) -> Result<&'a [i32], WeatherError> {
    if day_count <= 0 {
        return Err(WeatherError::InvalidDayCount(day_count));
    }
    let count = day_count as usize;

    temps.get(..count).ok_or(WeatherError::IndexOutOfRange {
        what,
        index: count - 1,
        len: temps.len(),
    })
}

fn average(days: &[i32]) -> f64 {
    let sum: i64 = days.iter().map(|&t| t as i64).sum();
    sum as f64 / days.len() as f64
}
