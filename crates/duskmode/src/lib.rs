//! # Duskmode - persisted light/dark display preference
//!
//! Duskmode keeps a single display mode consistent across three places: the
//! value held in memory, the value persisted in a key-value store, and the
//! classes on a document root element.
//!
//! ## Quick Start
//!
//! ```rust
//! use duskmode::{DisplayMode, MemoryStorage, RootElement, ThemePreferenceStore};
//!
//! let storage = MemoryStorage::new().with_entry("theme", "dark");
//! let mut store = ThemePreferenceStore::new(storage, RootElement::new());
//!
//! // Read the persisted mode once at startup and apply it.
//! store.initialize();
//! assert!(store.is_dark());
//! assert_eq!(store.target().class_attr(), "dark-mode");
//!
//! // Every change is persisted and applied before `toggle` returns.
//! store.toggle().unwrap();
//! assert_eq!(*store.current_mode(), DisplayMode::Light);
//! assert_eq!(store.target().class_attr(), "light-mode");
//! ```
//!
//! ## Concepts
//!
//! - [`ThemePreferenceStore`]: Owns the current mode, its storage, and its style target
//! - [`PreferenceStorage`]: Where the mode is persisted ([`MemoryStorage`], [`FileStorage`])
//! - [`StyleTarget`]: What receives the mode classes ([`RootElement`])
//! - [`ModeValue`]: The unvalidated mode string; only exactly `"dark"` is dark
//! - [`StoreConfig`]: Storage key, class names, and the fallback mode
//!
//! ## Unvalidated values
//!
//! Persisted and assigned values are kept verbatim. A stored `"purple"`
//! becomes the current mode, reports `is_dark() == false`, and gets the light
//! class:
//!
//! ```rust
//! use duskmode::{MemoryStorage, RootElement, ThemePreferenceStore};
//!
//! let storage = MemoryStorage::new().with_entry("theme", "purple");
//! let mut store = ThemePreferenceStore::new(storage, RootElement::new());
//! store.initialize();
//!
//! assert_eq!(store.current_mode().as_str(), "purple");
//! assert!(!store.is_dark());
//! assert!(store.target().contains("light-mode"));
//! ```

mod config;
mod detect;
mod document;
mod error;
mod mode;
mod storage;
mod store;

pub use config::{
    Fallback, StoreConfig, DEFAULT_DARK_CLASS, DEFAULT_LIGHT_CLASS, DEFAULT_STORAGE_KEY,
};
pub use detect::{os_mode_detector, ModeDetector};
pub use document::{RootElement, StyleTarget};
pub use error::{ConfigError, StorageError, UnknownModeError};
pub use mode::{DisplayMode, ModeValue};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{SubscriptionId, ThemePreferenceStore};
