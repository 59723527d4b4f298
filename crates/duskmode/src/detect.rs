//! System color scheme detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};

use crate::mode::DisplayMode;

/// Function used to ask the host which mode it prefers.
///
/// Stores take one of these so tests can force a mode without touching
/// the OS.
pub type ModeDetector = fn() -> DisplayMode;

/// Detects the OS color scheme, reporting light when it cannot tell.
pub fn os_mode_detector() -> DisplayMode {
    match detect_os_mode() {
        OsMode::Dark => DisplayMode::Dark,
        _ => DisplayMode::Light,
    }
}
