//! Unvalidated mode values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::display::DisplayMode;

/// The mode string held by a store.
///
/// Values read from storage or passed to
/// [`set_mode`](crate::ThemePreferenceStore::set_mode) are kept verbatim.
/// Only the exact string `"dark"` counts as dark; everything else,
/// including unknown strings, is treated as light when styles are applied.
///
/// # Example
///
/// ```rust
/// use duskmode::{DisplayMode, ModeValue};
///
/// let purple = ModeValue::from("purple");
/// assert!(!purple.is_dark());
/// assert_eq!(purple.known(), None);
/// assert_eq!(purple.effective(), DisplayMode::Light);
/// assert_eq!(purple.toggled(), DisplayMode::Light);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeValue(String);

impl ModeValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True iff the value is exactly `"dark"`.
    pub fn is_dark(&self) -> bool {
        self.known().is_some_and(DisplayMode::is_dark)
    }

    /// Returns the mode this value parses to, if it is one of the two exact forms.
    pub fn known(&self) -> Option<DisplayMode> {
        self.0.parse().ok()
    }

    /// Returns the mode used for styling: dark for exactly `"dark"`, light otherwise.
    pub fn effective(&self) -> DisplayMode {
        if self.is_dark() {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    /// Returns the value a toggle moves to.
    ///
    /// Exactly `"light"` goes to dark; anything else goes to light.
    pub fn toggled(&self) -> DisplayMode {
        if self.0 == DisplayMode::Light.as_str() {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ModeValue {
    fn default() -> Self {
        DisplayMode::default().into()
    }
}

impl From<DisplayMode> for ModeValue {
    fn from(mode: DisplayMode) -> Self {
        Self(mode.as_str().to_string())
    }
}

impl From<&str> for ModeValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ModeValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ModeValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ModeValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModeValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<DisplayMode> for ModeValue {
    fn eq(&self, other: &DisplayMode) -> bool {
        self.0 == other.as_str()
    }
}
