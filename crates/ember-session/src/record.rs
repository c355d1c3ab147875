//! Session record data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Editor colour theme. Exactly two themes exist; toggling flips between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            _ => Err(()),
        }
    }
}

/// The persisted session: theme plus the paths open in tabs at last save,
/// in tab order. Paths are stored as given - duplicates are kept and order
/// is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl SessionRecord {
    pub fn new(theme: Theme, paths: Vec<PathBuf>) -> Self {
        Self { theme, paths }
    }
}
