//! Display mode values.
//!
//! This module provides:
//!
//! - [`DisplayMode`]: The two-valued light/dark enumeration
//! - [`ModeValue`]: The unvalidated string a store actually holds
//!
//! Persisted and assigned values are never validated, so the store keeps a
//! [`ModeValue`]. Anything that is not exactly `dark` behaves as light.

mod display;
mod value;

pub use display::DisplayMode;
pub use value::ModeValue;
