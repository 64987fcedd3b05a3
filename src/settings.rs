//! Player settings
//!
//! Persisted under its own LocalStorage key, separately from highscores.

use serde::{Deserialize, Serialize};

/// Player avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Avatar {
    Wizard,
    Knight,
    Archer,
    Ninja,
}

impl Avatar {
    pub const ALL: [Avatar; 4] = [Avatar::Wizard, Avatar::Knight, Avatar::Archer, Avatar::Ninja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Avatar::Wizard => "wizard",
            Avatar::Knight => "knight",
            Avatar::Archer => "archer",
            Avatar::Ninja => "ninja",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Difficulty label shown on the play page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Class applied to `<body>`
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// The persisted settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub name: String,
    pub avatar: Avatar,
    pub difficulty: Difficulty,
    pub theme: Theme,
}

impl Settings {
    pub fn new(name: impl Into<String>, avatar: Avatar, difficulty: Difficulty, theme: Theme) -> Self {
        Self {
            name: name.into(),
            avatar,
            difficulty,
            theme,
        }
    }

    /// Shape check beyond what serde enforces
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Greeting shown on both pages
    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}
