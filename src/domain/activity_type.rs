//! Activity Type
//!
//! Category tag attached to every to-do.

use serde::{Deserialize, Serialize};

/// Activity category
///
/// Stored as its lowercase tag. Tags outside the known set are kept verbatim
/// in `Other` so old or hand-edited data still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    #[default]
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
    Other(String),
}

/// The selectable categories, in form order
pub const ACTIVITY_TYPES: [ActivityType; 9] = [
    ActivityType::Education,
    ActivityType::Recreational,
    ActivityType::Social,
    ActivityType::Diy,
    ActivityType::Charity,
    ActivityType::Cooking,
    ActivityType::Relaxation,
    ActivityType::Music,
    ActivityType::Busywork,
];

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
            ActivityType::Other(tag) => tag,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "education" => ActivityType::Education,
            "recreational" => ActivityType::Recreational,
            "social" => ActivityType::Social,
            "diy" => ActivityType::Diy,
            "charity" => ActivityType::Charity,
            "cooking" => ActivityType::Cooking,
            "relaxation" => ActivityType::Relaxation,
            "music" => ActivityType::Music,
            "busywork" => ActivityType::Busywork,
            other => ActivityType::Other(other.to_string()),
        }
    }

    /// Human-readable label for the category selector
    pub fn label(&self) -> &str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "DIY",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
            ActivityType::Other(tag) => tag,
        }
    }

    /// Icon glyph; unknown categories get the generic list icon
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::Education => "📖",
            ActivityType::Recreational => "🚲",
            ActivityType::Social => "👥",
            ActivityType::Diy => "🔨",
            ActivityType::Charity => "❤️",
            ActivityType::Cooking => "🍴",
            ActivityType::Relaxation => "🌅",
            ActivityType::Music => "🎵",
            ActivityType::Busywork => "💼",
            ActivityType::Other(_) => "📋",
        }
    }
}

impl From<String> for ActivityType {
    fn from(tag: String) -> Self {
        ActivityType::from_str(&tag)
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        kind.as_str().to_string()
    }
}
