//! Defines the [`ComfortLabel`] summarising a day's adverse-weather odds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single discrete classification of a day's averaged probabilities.
///
/// The variants are listed in the priority order used by
/// [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComfortLabel {
    VeryUncomfortable,
    Uncomfortable,
    VeryHot,
    VeryCold,
    VeryWindy,
    VeryWet,
    Comfortable,
}

impl ComfortLabel {
    /// Text shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortLabel::VeryUncomfortable => "Very Uncomfortable",
            ComfortLabel::Uncomfortable => "Uncomfortable",
            ComfortLabel::VeryHot => "Very Hot",
            ComfortLabel::VeryCold => "Very Cold",
            ComfortLabel::VeryWindy => "Very Windy",
            ComfortLabel::VeryWet => "Very Wet",
            ComfortLabel::Comfortable => "Comfortable",
        }
    }
}

impl fmt::Display for ComfortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
