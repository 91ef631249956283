//! Weather observation model supplied by a weather-data provider

use serde::{Deserialize, Serialize};

/// A single weather reading used as input to the clothing advisor
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    /// Air temperature in Fahrenheit
    pub current_temperature: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Relative humidity in percent (0-100)
    pub humidity_percent: f64,
}

impl WeatherObservation {
    #[must_use]
    pub fn new(current_temperature: f64, wind_speed: f64, humidity_percent: f64) -> Self {
        Self {
            current_temperature,
            wind_speed,
            humidity_percent,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°F", self.current_temperature)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} mph", self.wind_speed)
    }

    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{:.0}%", self.humidity_percent)
    }
}
