use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two teams. Home attacks toward +x, away toward -x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Side {
    #[default]
    Home,
    Away,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Lowercase tag used in player keys ("home-3").
    pub const fn tag(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "home" => Some(Side::Home),
            "away" => Some(Side::Away),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "HOME"),
            Side::Away => write!(f, "AWAY"),
        }
    }
}
