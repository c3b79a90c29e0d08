//! Subject-matter partitions of the question bank.

use serde::{Deserialize, Serialize};

/// Which slice of the bank is in play, and how results are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The whole bank; results are mapped onto an IQ band.
    #[default]
    General,
    /// Ratio and mental-arithmetic questions.
    Math,
    /// Vocabulary and grammar questions.
    English,
}

impl Category {
    /// All categories in menu order.
    pub fn all() -> &'static [Self] {
        &[Self::General, Self::Math, Self::English]
    }

    /// Map a 1-based menu choice to a category.
    pub fn from_menu(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::General),
            2 => Some(Self::Math),
            3 => Some(Self::English),
            _ => None,
        }
    }

    /// Parse a category name as typed on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "iq" | "general" | "iq/general" => Some(Self::General),
            "math" | "maths" => Some(Self::Math),
            "english" => Some(Self::English),
            _ => None,
        }
    }

    /// Label shown in the category menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::General => "IQ Test",
            Self::Math => "Math Quiz",
            Self::English => "English Quiz",
        }
    }

    /// Whether final scores are reported with an IQ band.
    pub fn maps_to_iq(self) -> bool {
        matches!(self, Self::General)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "IQ/General"),
            Self::Math => write!(f, "Math"),
            Self::English => write!(f, "English"),
        }
    }
}
