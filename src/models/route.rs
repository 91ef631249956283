//! Running route model

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Running surface of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Track,
    Asphalt,
    Gravel,
    Trail,
    Dirt,
    Grass,
}

/// A recorded run over a named route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    pub name: String,
    /// Distance in miles
    pub length_miles: f64,
    /// Time taken, stored as whole seconds
    #[serde(with = "duration_seconds")]
    pub duration: Duration,
    pub date: NaiveDate,
    /// Elevation gain in feet
    pub elevation_feet: f64,
    pub terrain: Terrain,
}

impl Route {
    /// Average pace in minutes per mile, `None` unless both the length and
    /// the duration are positive
    #[must_use]
    pub fn pace_minutes_per_mile(&self) -> Option<f64> {
        if self.length_miles <= 0.0 || !self.length_miles.is_finite() {
            return None;
        }
        if self.duration <= Duration::zero() {
            return None;
        }
        let minutes = self.duration.num_milliseconds() as f64 / 60_000.0;
        Some(minutes / self.length_miles)
    }

    /// Format pace as `m:ss /mi`
    #[must_use]
    pub fn format_pace(&self) -> String {
        match self.pace_minutes_per_mile() {
            Some(pace) => {
                let total_seconds = (pace * 60.0).round() as i64;
                format!("{}:{:02} /mi", total_seconds / 60, total_seconds % 60)
            }
            None => "-- /mi".to_string(),
        }
    }

    /// Format distance with unit
    #[must_use]
    pub fn format_length(&self) -> String {
        format!("{:.2} mi", self.length_miles)
    }
}

mod duration_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = i64::deserialize(deserializer)?;
        Duration::try_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}
