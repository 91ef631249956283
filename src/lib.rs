//! `RunningBuddy` - weather-driven clothing recommendations for runners
//!
//! This library provides the clothing advisor, the running route model,
//! and the configuration and logging plumbing used by the CLI.

pub mod cli;
pub mod clothing;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export core types for public API
pub use clothing::{ColdPreference, OutfitBand, adjusted_temperature, recommend, select_band};
pub use config::RunningBuddyConfig;
pub use error::RunningBuddyError;
pub use models::{Bottom, Headwear, OutfitRecommendation, Route, Terrain, Top, WeatherObservation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RunningBuddyError>;
