//! Data models for the RunningBuddy application
//!
//! This module contains the core domain models organized by concern:
//! - Weather: observations fed into the clothing advisor
//! - Outfit: the recommended garments
//! - Route: recorded runs

pub mod outfit;
pub mod route;
pub mod weather;

// Re-export all public types for convenient access
pub use outfit::{Bottom, Headwear, OutfitRecommendation, Top};
pub use route::{Route, Terrain};
pub use weather::WeatherObservation;
