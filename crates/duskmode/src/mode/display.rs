//! The light/dark enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownModeError;

/// The user's preferred display mode.
///
/// String forms are exactly `"light"` and `"dark"`. Parsing is
/// case-sensitive.
///
/// # Example
///
/// ```rust
/// use duskmode::DisplayMode;
///
/// assert_eq!("dark".parse::<DisplayMode>().unwrap(), DisplayMode::Dark);
/// assert!("Dark".parse::<DisplayMode>().is_err());
/// assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Returns the persisted string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

impl AsRef<str> for DisplayMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_default_is_light() {
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
    }

    #[test]
    fn test_display_mode_parse_exact() {
        assert_eq!("light".parse::<DisplayMode>(), Ok(DisplayMode::Light));
        assert_eq!("dark".parse::<DisplayMode>(), Ok(DisplayMode::Dark));
    }

    #[test]
    fn test_display_mode_parse_rejects_other_spellings() {
        for input in ["Dark", "DARK", " dark", "dark ", "", "purple"] {
            let err = input.parse::<DisplayMode>().unwrap_err();
            assert_eq!(err, UnknownModeError(input.to_string()));
        }
    }

    #[test]
    fn test_display_mode_toggled_flips() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
    }

    #[test]
    fn test_display_mode_display_matches_as_str() {
        assert_eq!(DisplayMode::Dark.to_string(), "dark");
        assert_eq!(DisplayMode::Light.to_string(), "light");
    }

    #[test]
    fn test_display_mode_serde_lowercase() {
        let json = serde_json::to_string(&DisplayMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: DisplayMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, DisplayMode::Light);
    }
}
