//! Outfit recommendation model
//!
//! Every garment slot is a closed set of variants. Each variant has exactly
//! one display label, which is also its serialized form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Headwear and hand covering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Headwear {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Hat + Gloves")]
    HatAndGloves,
    #[serde(rename = "Hat and Mittens")]
    HatAndMittens,
}

/// Upper body layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Top {
    #[serde(rename = "tank top")]
    TankTop,
    #[serde(rename = "short sleeves")]
    ShortSleeves,
    #[serde(rename = "long sleeves")]
    LongSleeves,
    #[serde(rename = "long sleeves + jacket")]
    LongSleevesAndJacket,
}

/// Lower body layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bottom {
    #[serde(rename = "shorts")]
    Shorts,
    #[serde(rename = "jacket")]
    Jacket,
    #[serde(rename = "shorts + pants")]
    ShortsAndPants,
}

impl Headwear {
    pub const ALL: [Headwear; 3] = [Headwear::None, Headwear::HatAndGloves, Headwear::HatAndMittens];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Headwear::None => "None",
            Headwear::HatAndGloves => "Hat + Gloves",
            Headwear::HatAndMittens => "Hat and Mittens",
        }
    }
}

impl Top {
    pub const ALL: [Top; 4] = [
        Top::TankTop,
        Top::ShortSleeves,
        Top::LongSleeves,
        Top::LongSleevesAndJacket,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Top::TankTop => "tank top",
            Top::ShortSleeves => "short sleeves",
            Top::LongSleeves => "long sleeves",
            Top::LongSleevesAndJacket => "long sleeves + jacket",
        }
    }
}

impl Bottom {
    pub const ALL: [Bottom; 3] = [Bottom::Shorts, Bottom::Jacket, Bottom::ShortsAndPants];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bottom::Shorts => "shorts",
            Bottom::Jacket => "jacket",
            Bottom::ShortsAndPants => "shorts + pants",
        }
    }
}

impl fmt::Display for Headwear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Top {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Bottom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete outfit for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub headwear: Headwear,
    pub top: Top,
    pub bottom: Bottom,
}

impl OutfitRecommendation {
    #[must_use]
    pub const fn new(headwear: Headwear, top: Top, bottom: Bottom) -> Self {
        Self {
            headwear,
            top,
            bottom,
        }
    }
}

impl fmt::Display for OutfitRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.headwear, self.top, self.bottom)
    }
}
