use std::fmt;

use crate::{Reading, SummaryError};

pub const DEGREE_SYMBOL: &str = "°C";

/// Best-effort conversion of a raw value into a float.
///
/// Strings are trimmed and then parsed, so `" 49 "`, `"30.5"` or `"inf"` are
/// all numbers while `"text"` is not.
pub trait Numeric: fmt::Display {
    fn to_f64(&self) -> Option<f64>;
}

impl Numeric for f64 {
    fn to_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Numeric for i32 {
    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Numeric for i64 {
    fn to_f64(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Numeric for str {
    fn to_f64(&self) -> Option<f64> {
        self.trim().parse().ok()
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Option<f64> {
        self.as_str().to_f64()
    }
}

impl Numeric for Reading {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Reading::Number(n) => Some(*n),
            Reading::Text(s) => s.to_f64(),
        }
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

/// Rounds to one decimal place.
///
/// Float formatting works on the exact binary value and breaks ties to even,
/// so `0.25` gives `0.2`. [`f64::round`] breaks ties away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Converts a temperature from Fahrenheit to Celsius, rounded to 1 decimal place.
pub fn convert_f_to_c<T: Numeric + ?Sized>(value: &T) -> Result<f64, SummaryError> {
    let fahrenheit = value.to_f64().ok_or_else(|| SummaryError::Coercion {
        value: value.to_string(),
    })?;
    Ok(round_one_decimal((fahrenheit - 32.0) * 5.0 / 9.0))
}

/// A temperature in degrees Celsius, displayed with its unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("nan")?;
        } else if value.is_finite() && value.fract() == 0.0 {
            // keep `20.0`, the plain formatter would print `20`
            write!(f, "{value:.1}")?;
        } else {
            write!(f, "{value}")?;
        }
        f.write_str(DEGREE_SYMBOL)
    }
}

/// Renders a temperature followed by `°C`. The value is printed as is, round it first.
pub fn format_temperature(value: f64) -> String {
    Celsius(value).to_string()
}
