//! Clothing advisor
//!
//! Turns a weather observation and the runner's cold sensitivity into an
//! outfit. The advisor is a set of pure functions: the same inputs always
//! produce the same outfit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Bottom, Headwear, OutfitRecommendation, Top, WeatherObservation};

/// Degrees added per unit of cold preference
const PREFERENCE_WEIGHT: f64 = 2.0;
/// Humidity above which damp cold air feels colder
const HUMIDITY_THRESHOLD_PERCENT: f64 = 50.0;
/// Humidity only matters below this air temperature
const HUMIDITY_MAX_TEMPERATURE: f64 = 55.0;
const HUMIDITY_PENALTY: f64 = 10.0;

/// How cold-sensitive the runner is, higher meaning more sensitive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColdPreference(f64);

impl ColdPreference {
    /// Lower end of the range the adjustment is tuned for
    pub const MIN: f64 = 0.0;
    /// Upper end of the range the adjustment is tuned for
    pub const MAX: f64 = 5.0;

    /// Any value is accepted; see [`ColdPreference::is_validated`].
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the value lies within `MIN..=MAX`
    #[must_use]
    pub fn is_validated(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// Clamp into `MIN..=MAX`. NaN becomes `MIN`.
    #[must_use]
    pub fn clamped(self) -> Self {
        if self.0.is_nan() {
            return Self(Self::MIN);
        }
        Self(self.0.clamp(Self::MIN, Self::MAX))
    }
}

impl From<f64> for ColdPreference {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ColdPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// The five temperature bands, warmest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutfitBand {
    /// 70 and above
    Hot,
    /// 60 to 70
    Warm,
    /// 50 to 60
    Mild,
    /// 40 to 50
    Cool,
    /// below 40
    Cold,
}

impl OutfitBand {
    pub const ALL: [OutfitBand; 5] = [
        OutfitBand::Hot,
        OutfitBand::Warm,
        OutfitBand::Mild,
        OutfitBand::Cool,
        OutfitBand::Cold,
    ];

    /// Pick the band for an adjusted temperature.
    ///
    /// Lower bounds are inclusive. Anything that fails every comparison,
    /// NaN included, lands in [`OutfitBand::Cold`].
    #[must_use]
    pub fn for_temperature(adjusted_temperature: f64) -> Self {
        if adjusted_temperature >= 70.0 {
            OutfitBand::Hot
        } else if adjusted_temperature >= 60.0 {
            OutfitBand::Warm
        } else if adjusted_temperature >= 50.0 {
            OutfitBand::Mild
        } else if adjusted_temperature >= 40.0 {
            OutfitBand::Cool
        } else {
            OutfitBand::Cold
        }
    }

    /// The fixed outfit worn in this band
    #[must_use]
    pub const fn outfit(self) -> OutfitRecommendation {
        match self {
            OutfitBand::Hot => OutfitRecommendation::new(Headwear::None, Top::TankTop, Bottom::Shorts),
            OutfitBand::Warm => {
                OutfitRecommendation::new(Headwear::None, Top::ShortSleeves, Bottom::Shorts)
            }
            OutfitBand::Mild => {
                OutfitRecommendation::new(Headwear::HatAndGloves, Top::LongSleeves, Bottom::Jacket)
            }
            OutfitBand::Cool => {
                OutfitRecommendation::new(Headwear::HatAndGloves, Top::LongSleeves, Bottom::Shorts)
            }
            OutfitBand::Cold => OutfitRecommendation::new(
                Headwear::HatAndMittens,
                Top::LongSleevesAndJacket,
                Bottom::ShortsAndPants,
            ),
        }
    }
}

impl fmt::Display for OutfitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutfitBand::Hot => "hot",
            OutfitBand::Warm => "warm",
            OutfitBand::Mild => "mild",
            OutfitBand::Cool => "cool",
            OutfitBand::Cold => "cold",
        };
        f.write_str(name)
    }
}

/// Perceived temperature used to choose a band.
///
/// Wind is subtracted one degree per mph. Damp air below 55°F costs a
/// further ten degrees.
#[must_use]
pub fn adjusted_temperature(weather: &WeatherObservation, cold_preference: ColdPreference) -> f64 {
    let mut adjusted = weather.current_temperature + cold_preference.value() * PREFERENCE_WEIGHT
        - weather.wind_speed;

    if weather.humidity_percent > HUMIDITY_THRESHOLD_PERCENT
        && weather.current_temperature < HUMIDITY_MAX_TEMPERATURE
    {
        adjusted -= HUMIDITY_PENALTY;
    }

    adjusted
}

/// Band selected for the given conditions
#[must_use]
pub fn select_band(weather: &WeatherObservation, cold_preference: ColdPreference) -> OutfitBand {
    OutfitBand::for_temperature(adjusted_temperature(weather, cold_preference))
}

/// Recommend an outfit for the given conditions
#[must_use]
pub fn recommend(
    weather: &WeatherObservation,
    cold_preference: ColdPreference,
) -> OutfitRecommendation {
    select_band(weather, cold_preference).outfit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn weather(temperature: f64, wind: f64, humidity: f64) -> WeatherObservation {
        WeatherObservation::new(temperature, wind, humidity)
    }

    #[test]
    fn test_hot_day() {
        let outfit = recommend(&weather(75.0, 0.0, 20.0), ColdPreference::new(0.0));
        assert_eq!(outfit.headwear, Headwear::None);
        assert_eq!(outfit.top.label(), "tank top");
        assert_eq!(outfit.bottom.label(), "shorts");
    }

    #[test]
    fn test_damp_cold_day() {
        let conditions = weather(52.0, 5.0, 60.0);
        assert_eq!(adjusted_temperature(&conditions, ColdPreference::new(0.0)), 37.0);

        let outfit = recommend(&conditions, ColdPreference::new(0.0));
        assert_eq!(outfit.headwear.label(), "Hat and Mittens");
        assert_eq!(outfit.top.label(), "long sleeves + jacket");
        assert_eq!(outfit.bottom.label(), "shorts + pants");
    }

    #[test]
    fn test_cold_preference_shifts_band() {
        let conditions = weather(45.0, 0.0, 10.0);
        assert_eq!(adjusted_temperature(&conditions, ColdPreference::new(2.5)), 50.0);

        let outfit = recommend(&conditions, ColdPreference::new(2.5));
        assert_eq!(outfit.headwear.label(), "Hat + Gloves");
        assert_eq!(outfit.top.label(), "long sleeves");
        assert_eq!(outfit.bottom.label(), "jacket");
    }

    #[rstest]
    #[case(70.0, OutfitBand::Hot)]
    #[case(69.999, OutfitBand::Warm)]
    #[case(60.0, OutfitBand::Warm)]
    #[case(59.5, OutfitBand::Mild)]
    #[case(50.0, OutfitBand::Mild)]
    #[case(49.0, OutfitBand::Cool)]
    #[case(40.0, OutfitBand::Cool)]
    #[case(39.9, OutfitBand::Cold)]
    #[case(-20.0, OutfitBand::Cold)]
    #[case(f64::INFINITY, OutfitBand::Hot)]
    #[case(f64::NEG_INFINITY, OutfitBand::Cold)]
    #[case(f64::NAN, OutfitBand::Cold)]
    fn test_band_boundaries(#[case] adjusted: f64, #[case] expected: OutfitBand) {
        assert_eq!(OutfitBand::for_temperature(adjusted), expected);
    }

    #[rstest]
    #[case(55.0, 80.0)]
    #[case(90.0, 100.0)]
    #[case(54.0, 50.0)]
    #[case(20.0, 0.0)]
    fn test_humidity_correction_not_applied(#[case] temperature: f64, #[case] humidity: f64) {
        let conditions = weather(temperature, 0.0, humidity);
        assert_eq!(
            adjusted_temperature(&conditions, ColdPreference::default()),
            temperature
        );
    }

    #[test]
    fn test_humidity_correction_applied_just_below_limits() {
        let conditions = weather(54.9, 0.0, 50.1);
        let adjusted = adjusted_temperature(&conditions, ColdPreference::default());
        assert!((adjusted - 44.9).abs() < 1e-9);
    }

    #[test]
    fn test_wind_subtracts_linearly() {
        let calm = adjusted_temperature(&weather(65.0, 0.0, 30.0), ColdPreference::default());
        let breezy = adjusted_temperature(&weather(65.0, 12.0, 30.0), ColdPreference::default());
        assert_eq!(calm - breezy, 12.0);
    }

    #[test]
    fn test_out_of_range_preference_is_not_clamped() {
        let conditions = weather(50.0, 0.0, 0.0);
        assert_eq!(adjusted_temperature(&conditions, ColdPreference::new(10.0)), 70.0);
        assert_eq!(adjusted_temperature(&conditions, ColdPreference::new(-1.0)), 48.0);
        assert_eq!(select_band(&conditions, ColdPreference::new(10.0)), OutfitBand::Hot);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let conditions = weather(58.3, 4.2, 71.0);
        let preference = ColdPreference::new(1.7);
        let first = recommend(&conditions, preference);
        for _ in 0..10 {
            assert_eq!(recommend(&conditions, preference), first);
        }
    }

    #[test]
    fn test_every_band_has_distinct_outfit() {
        let outfits: std::collections::HashSet<_> =
            OutfitBand::ALL.iter().map(|band| band.outfit()).collect();
        assert_eq!(outfits.len(), OutfitBand::ALL.len());
    }

    #[test]
    fn test_selected_band_contains_temperature() {
        let mut temperature = -60.0;
        while temperature <= 120.0 {
            let (low, high) = match OutfitBand::for_temperature(temperature) {
                OutfitBand::Hot => (70.0, f64::INFINITY),
                OutfitBand::Warm => (60.0, 70.0),
                OutfitBand::Mild => (50.0, 60.0),
                OutfitBand::Cool => (40.0, 50.0),
                OutfitBand::Cold => (f64::NEG_INFINITY, 40.0),
            };
            assert!(low <= temperature && temperature < high, "temperature {temperature}");
            temperature += 0.25;
        }
    }

    #[test]
    fn test_select_band_composes_adjustment_and_threshold() {
        let conditions = weather(52.0, 5.0, 60.0);
        let preference = ColdPreference::new(1.0);
        let adjusted = adjusted_temperature(&conditions, preference);
        assert_eq!(adjusted, 39.0);
        assert_eq!(select_band(&conditions, preference), OutfitBand::for_temperature(adjusted));
        assert_eq!(select_band(&conditions, preference), OutfitBand::Cold);
    }

    #[test]
    fn test_cold_preference_range() {
        assert!(ColdPreference::new(0.0).is_validated());
        assert!(ColdPreference::new(5.0).is_validated());
        assert!(!ColdPreference::new(5.1).is_validated());
        assert!(!ColdPreference::new(-0.1).is_validated());
        assert!(!ColdPreference::new(f64::NAN).is_validated());

        assert_eq!(ColdPreference::new(7.0).clamped().value(), 5.0);
        assert_eq!(ColdPreference::new(-2.0).clamped().value(), 0.0);
        assert_eq!(ColdPreference::new(f64::NAN).clamped().value(), 0.0);
        assert_eq!(ColdPreference::new(3.3).clamped().value(), 3.3);
    }
}
