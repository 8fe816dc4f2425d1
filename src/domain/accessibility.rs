//! Accessibility Rating
//!
//! Difficulty scale in [0.0, 1.0], in steps of 0.1.

use serde::{Deserialize, Serialize};

const STEPS: f64 = 10.0;

/// Accessibility rating, always clamped to [0, 1] and snapped to 0.1
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Accessibility(f64);

/// Display band used for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityBand {
    Easy,
    Moderate,
    Difficult,
}

impl Accessibility {
    pub const MIN: Accessibility = Accessibility(0.0);
    pub const MAX: Accessibility = Accessibility(1.0);

    /// Clamp and snap. Non-finite input falls back to the default (0.5).
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let clamped = value.clamp(Self::MIN.0, Self::MAX.0);
        Accessibility((clamped * STEPS).round() / STEPS)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of 0.1 steps, 0..=10
    fn tenths(self) -> u8 {
        (self.0 * STEPS).round() as u8
    }

    pub fn band(self) -> AccessibilityBand {
        match self.tenths() {
            0..=3 => AccessibilityBand::Easy,
            4..=7 => AccessibilityBand::Moderate,
            _ => AccessibilityBand::Difficult,
        }
    }

    /// One decimal, e.g. `0.5`
    pub fn display(self) -> String {
        format!("{:.1}", self.0)
    }
}

impl Default for Accessibility {
    fn default() -> Self {
        Accessibility(0.5)
    }
}

impl From<f64> for Accessibility {
    fn from(value: f64) -> Self {
        Accessibility::new(value)
    }
}

impl From<Accessibility> for f64 {
    fn from(rating: Accessibility) -> Self {
        rating.0
    }
}

impl AccessibilityBand {
    pub fn label(self) -> &'static str {
        match self {
            AccessibilityBand::Easy => "Easy",
            AccessibilityBand::Moderate => "Moderate",
            AccessibilityBand::Difficult => "Difficult",
        }
    }

    /// CSS class carrying the band color
    pub fn css_class(self) -> &'static str {
        match self {
            AccessibilityBand::Easy => "text-green",
            AccessibilityBand::Moderate => "text-yellow",
            AccessibilityBand::Difficult => "text-red",
        }
    }
}
