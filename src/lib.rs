use std::fmt;

mod convert;
mod date;
mod error;
mod loader;
mod stats;
mod summary;

pub use convert::{
    convert_f_to_c, format_temperature, round_one_decimal, Celsius, Numeric, DEGREE_SYMBOL,
};
pub use date::convert_date;
pub use error::{LoadError, SummaryError};
pub use loader::{load_data_from_csv, try_load_data_from_csv};
pub use stats::{calculate_mean, find_max, find_min, Extremum};
pub use summary::{generate_daily_summary, generate_summary};

/// A raw temperature reading, either already a number or text that may parse
/// as one.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Reading {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Reading {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One day of weather data: an ISO 8601 timestamp followed by Fahrenheit
/// readings, the low first and then the high.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub date: String,
    // Only the first two are read, anything after is kept as is
    pub readings: Vec<Reading>,
}

impl WeatherRecord {
    pub fn new<R: Into<Reading>>(
        date: impl Into<String>,
        readings: impl IntoIterator<Item = R>,
    ) -> Self {
        Self {
            date: date.into(),
            readings: readings.into_iter().map(Into::into).collect(),
        }
    }

    /// Low temperature, in Fahrenheit.
    pub fn low(&self) -> Result<&Reading, SummaryError> {
        self.reading(1)
    }

    /// High temperature, in Fahrenheit.
    pub fn high(&self) -> Result<&Reading, SummaryError> {
        self.reading(2)
    }

    // Positions count the date as 0
    fn reading(&self, position: usize) -> Result<&Reading, SummaryError> {
        self.readings
            .get(position - 1)
            .ok_or_else(|| SummaryError::MissingReading {
                date: self.date.clone(),
                position,
            })
    }
}

/// Weather records in the order they were given, usually chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherDataset {
    pub records: Vec<WeatherRecord>,
}

impl WeatherDataset {
    pub fn summary(&self) -> Result<String, SummaryError> {
        generate_summary(&self.records)
    }

    pub fn daily_summary(&self) -> Result<String, SummaryError> {
        generate_daily_summary(&self.records)
    }
}

impl From<Vec<WeatherRecord>> for WeatherDataset {
    fn from(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }
}
