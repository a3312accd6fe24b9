use std::fmt::Write;
use chrono::Weekday;
use crate::errors::WeatherError;
use crate::weather::{window, Weather};

/// Calendar used for the per day listing, the first temperature entry is Sunday
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

fn day_line(high: i32, low: i32) -> String {
    format!("High: {} (F)  Low: {} (F)\n", high, low)
}

impl Weather {
    /// Formats the forecast for the first day (Sunday)
    pub fn format_today_report(&self) -> Result<String, WeatherError> {
        let high = self.highs().first().ok_or(WeatherError::IndexOutOfRange { what: "highs", index: 0, len: 0 })?;
        let low = self.lows().first().ok_or(WeatherError::IndexOutOfRange { what: "lows", index: 0, len: 0 })?;

        let mut report = String::from("SUNDAY FORECAST\n");
        report.push_str(&day_line(*high, *low));
        report.push('\n');

        Ok(report)
    }

    /// Formats the weekly forecast with averages, extremes and a listing of every day
    /// within the day count.
    ///
    /// Nothing is returned unless the whole report could be built, a day count past
    /// the seven day calendar fails with IndexOutOfRange.
    pub fn format_weekly_report(&self) -> Result<String, WeatherError> {
        let highs = window(self.highs(), self.day_count(), "highs")?;
        let lows = window(self.lows(), self.day_count(), "lows")?;

        let mut report = String::from("THE WEEKLY FORECAST\n");
        // Writing to a String can't fail
        let _ = writeln!(report, "Average Hi:  {:.2}", self.average_high()?);
        let _ = writeln!(report, "Average Low: {:.2}", self.average_low()?);
        report.push('\n');
        let _ = writeln!(report, "Highest Weekly Temperature: {} (F)", self.max_high()?);
        let _ = writeln!(report, "Lowest Weekly Temperature:  {} (F)", self.min_low()?);
        report.push('\n');

        for (i, (high, low)) in highs.iter().zip(lows).enumerate() {
            let day = WEEK.get(i).ok_or(WeatherError::IndexOutOfRange {
                what: "day names",
                index: i,
                len: WEEK.len(),
            })?;
            report.push_str(day_name(*day));
            report.push('\n');
            report.push_str(&day_line(*high, *low));
            report.push('\n');
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_OUTPUT: &str = "\
SUNDAY FORECAST
High: 78 (F)  Low: 75 (F)

THE WEEKLY FORECAST
Average Hi:  79.29
Average Low: 72.86

Highest Weekly Temperature: 85 (F)
Lowest Weekly Temperature:  69 (F)

Sunday
High: 78 (F)  Low: 75 (F)

Monday
High: 76 (F)  Low: 70 (F)

Tuesday
High: 80 (F)  Low: 75 (F)

Wednesday
High: 82 (F)  Low: 76 (F)

Thursday
High: 85 (F)  Low: 75 (F)

Friday
High: 79 (F)  Low: 70 (F)

Saturday
High: 75 (F)  Low: 69 (F)

";

    fn sample() -> Weather {
        Weather::new(&[78, 76, 80, 82, 85, 79, 75], &[75, 70, 75, 76, 75, 70, 69], 7, 9, 'P')
    }

    #[test]
    fn today_report() {
        let report = sample().format_today_report().unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines, vec!["SUNDAY FORECAST", "High: 78 (F)  Low: 75 (F)", ""]);
    }

    #[test]
    fn full_output_matches_sample() {
        let w = sample();
        let output = w.format_today_report().unwrap() + &w.format_weekly_report().unwrap();
        assert_eq!(output, SAMPLE_OUTPUT);
    }

    #[test]
    fn negative_temperatures_format() {
        let w = Weather::new(&[10, 5, 8, 12, 7, 9, 6], &[-10, -15, -8, -5, -12, -9, -11], 7, 20, 'C');
        let report = w.format_weekly_report().unwrap();
        assert!(report.contains("Average Low: -10.00\n"));
        assert!(report.contains("Lowest Weekly Temperature:  -15 (F)\n"));
        assert!(report.contains("Monday\nHigh: 5 (F)  Low: -15 (F)\n"));
    }

    #[test]
    fn short_week_lists_only_day_count() {
        let w = Weather::new(&[78, 76, 80, 82, 85, 79, 75], &[75, 70, 75, 76, 75, 70, 69], 2, 9, 'P');
        let report = w.format_weekly_report().unwrap();
        assert!(report.contains("Monday\n"));
        assert!(!report.contains("Tuesday"));
        assert!(report.contains("Average Hi:  77.00\n"));
    }

    #[test]
    fn day_count_past_calendar() {
        let w = Weather::new(&[70; 8], &[60; 8], 8, 5, 'S');
        assert!(w.average_high().is_ok());
        assert_eq!(
            w.format_weekly_report(),
            Err(WeatherError::IndexOutOfRange { what: "day names", index: 7, len: 7 })
        );
    }

    #[test]
    fn zero_day_count_fails_weekly_report() {
        let w = Weather::new(&[70; 7], &[60; 7], 0, 5, 'S');
        assert_eq!(w.format_weekly_report(), Err(WeatherError::InvalidDayCount(0)));
    }

    #[test]
    fn empty_week_fails_today_report() {
        let w = Weather::new(&[], &[], 7, 5, 'S');
        assert!(matches!(w.format_today_report(), Err(WeatherError::IndexOutOfRange { what: "highs", .. })));
    }
}
