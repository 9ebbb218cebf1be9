//! Celsius to Fahrenheit conversion

use serde::Serialize;
use std::fmt;

/// Pure: multiply by 9, divide by 5, add 32
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// A temperature shown in both scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub celsius: f64,
    pub fahrenheit: f64,
}

impl TemperatureReading {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
        }
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.1}°C", self.celsius)?;
        write!(f, "{:.1}°F", self.fahrenheit)
    }
}
