//! Sleep quality ratings.

use serde::{Deserialize, Serialize};

/// How well a night of sleep went, on a six-step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    VeryBad,
    Poor,
    SoSo,
    Ok,
    PrettyGood,
    Excellent,
}

impl SleepQuality {
    /// All ratings, worst first.
    pub const ALL: [Self; 6] = [
        Self::VeryBad,
        Self::Poor,
        Self::SoSo,
        Self::Ok,
        Self::PrettyGood,
        Self::Excellent,
    ];

    /// The numeric rating stored in the database (0-5).
    #[must_use]
    pub const fn as_rating(self) -> i64 {
        match self {
            Self::VeryBad => 0,
            Self::Poor => 1,
            Self::SoSo => 2,
            Self::Ok => 3,
            Self::PrettyGood => 4,
            Self::Excellent => 5,
        }
    }

    /// Convert a stored rating back to a quality.
    ///
    /// Returns `None` for out-of-range values, including the unset sentinel.
    #[must_use]
    pub const fn from_rating(rating: i64) -> Option<Self> {
        match rating {
            0 => Some(Self::VeryBad),
            1 => Some(Self::Poor),
            2 => Some(Self::SoSo),
            3 => Some(Self::Ok),
            4 => Some(Self::PrettyGood),
            5 => Some(Self::Excellent),
            _ => None,
        }
    }

    /// Parse a quality from command-line input.
    ///
    /// Accepts the numeric rating (`"0"`-`"5"`) or a name/alias
    /// (`"excellent"`, `"so-so"`, `"ok"`, ...).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(rating) = s.parse::<i64>() {
            return Self::from_rating(rating);
        }

        match s.to_lowercase().as_str() {
            "very-bad" | "very_bad" | "verybad" | "terrible" => Some(Self::VeryBad),
            "poor" | "bad" => Some(Self::Poor),
            "so-so" | "so_so" | "soso" | "meh" => Some(Self::SoSo),
            "ok" | "okay" | "fine" => Some(Self::Ok),
            "pretty-good" | "pretty_good" | "prettygood" | "good" => Some(Self::PrettyGood),
            "excellent" | "great" => Some(Self::Excellent),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryBad => "very bad",
            Self::Poor => "poor",
            Self::SoSo => "so-so",
            Self::Ok => "OK",
            Self::PrettyGood => "pretty good",
            Self::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
