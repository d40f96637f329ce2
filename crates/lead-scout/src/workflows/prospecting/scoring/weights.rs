use serde::{Deserialize, Serialize};

/// Points awarded per scoring factor. Defaults reproduce the standard model;
/// the per-category caps are fixed regardless of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub fit_has_website: u8,
    pub fit_has_phone: u8,
    pub fit_operational: u8,
    pub signal_reviews_under_20: u8,
    pub signal_reviews_under_50: u8,
    pub signal_reviews_under_100: u8,
    pub signal_no_website: u8,
    pub signal_low_rating: u8,
    pub reach_has_phone: u8,
    pub reach_has_website: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fit_has_website: 15,
            fit_has_phone: 10,
            fit_operational: 15,
            signal_reviews_under_20: 25,
            signal_reviews_under_50: 15,
            signal_reviews_under_100: 5,
            signal_no_website: 5,
            signal_low_rating: 10,
            reach_has_phone: 10,
            reach_has_website: 10,
        }
    }
}
