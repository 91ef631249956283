//! Command implementations

use serde::Serialize;
use tracing::{debug, warn};

use crate::clothing::{self, ColdPreference, OutfitBand};
use crate::config::RunningBuddyConfig;
use crate::models::{OutfitRecommendation, WeatherObservation};
use crate::{Result, RunningBuddyError};

/// Inputs for the `recommend` command
#[derive(Debug, Clone, Copy)]
pub struct RecommendRequest {
    pub temperature: f64,
    pub wind: f64,
    pub humidity: f64,
    pub cold_preference: Option<f64>,
}

/// Everything the `recommend` command reports
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub weather: WeatherObservation,
    pub cold_preference: ColdPreference,
    pub adjusted_temperature: f64,
    pub band: OutfitBand,
    pub outfit: OutfitRecommendation,
}

impl RecommendationReport {
    /// Human-readable rendering for the terminal
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "Weather: {}, wind {}, humidity {}\nFeels like: {:.1}°F ({})\n  Headwear: {}\n  Top:      {}\n  Bottom:   {}",
            self.weather.format_temperature(),
            self.weather.format_wind(),
            self.weather.format_humidity(),
            self.adjusted_temperature,
            self.band,
            self.outfit.headwear,
            self.outfit.top,
            self.outfit.bottom,
        )
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RunningBuddyError::validation(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

/// Compute a recommendation for the requested weather
pub fn run_recommend(
    config: &RunningBuddyConfig,
    request: RecommendRequest,
) -> Result<RecommendationReport> {
    ensure_finite("temperature", request.temperature)?;
    ensure_finite("wind", request.wind)?;
    ensure_finite("humidity", request.humidity)?;
    if let Some(preference) = request.cold_preference {
        ensure_finite("cold preference", preference)?;
    }

    if request.wind < 0.0 {
        warn!("Negative wind speed {} mph", request.wind);
    }
    if !(0.0..=100.0).contains(&request.humidity) {
        warn!("Humidity {}% is outside 0-100", request.humidity);
    }

    let cold_preference = config.effective_cold_preference(request.cold_preference);
    if !cold_preference.is_validated() {
        warn!(
            "Cold preference {} is outside {}-{}, recommendation may be off",
            cold_preference,
            ColdPreference::MIN,
            ColdPreference::MAX
        );
    }

    let weather = WeatherObservation::new(request.temperature, request.wind, request.humidity);
    let adjusted_temperature = clothing::adjusted_temperature(&weather, cold_preference);
    let band = OutfitBand::for_temperature(adjusted_temperature);
    debug!(adjusted_temperature, %band, "Selected outfit band");

    Ok(RecommendationReport {
        weather,
        cold_preference,
        adjusted_temperature,
        band,
        outfit: band.outfit(),
    })
}
