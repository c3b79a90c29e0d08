//! Game modes.

/// How many players take part and how results are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// One player, one result.
    #[default]
    Solo,
    /// Two players, head to head.
    HeadToHead,
    /// Two or more players, tournament style.
    Group,
}

impl Mode {
    /// All modes in menu order.
    pub fn all() -> &'static [Self] {
        &[Self::Solo, Self::HeadToHead, Self::Group]
    }

    /// Map a 1-based menu choice to a mode.
    pub fn from_menu(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Solo),
            2 => Some(Self::HeadToHead),
            3 => Some(Self::Group),
            _ => None,
        }
    }

    /// Parse a mode name as typed on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "solo" => Some(Self::Solo),
            "duel" | "1v1" | "head to head" | "versus" => Some(Self::HeadToHead),
            "group" | "multi" | "multiplayer" | "party" => Some(Self::Group),
            _ => None,
        }
    }

    /// Label shown in the mode menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Solo => "Solo Play",
            Self::HeadToHead => "Challenge a Friend",
            Self::Group => "Challenge Multiple Friends",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "Solo"),
            Self::HeadToHead => write!(f, "Head-to-head"),
            Self::Group => write!(f, "Group"),
        }
    }
}
