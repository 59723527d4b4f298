//! The display preference store.
//!
//! [`ThemePreferenceStore`] owns the current mode, the storage it persists
//! to, and the style target it reconciles. It is single-threaded: mutation
//! goes through `&mut self` and change handlers are plain `FnMut` closures
//! without `Send` or `Sync` bounds.
//!
//! # Change propagation
//!
//! Every call to [`toggle`](ThemePreferenceStore::toggle) or
//! [`set_mode`](ThemePreferenceStore::set_mode) runs, in order:
//!
//! 1. write the new value to storage under the configured key
//! 2. apply the matching class to the style target
//! 3. call each subscriber in registration order
//!
//! Steps 1 and 2 cannot be unsubscribed. Setting the value it already holds
//! still counts as a change.
//!
//! [`initialize`](ThemePreferenceStore::initialize) never writes. It applies
//! the loaded value and calls subscribers only when that value differs from
//! the one held before.

use log::{debug, warn};

use crate::config::StoreConfig;
use crate::detect::{os_mode_detector, ModeDetector};
use crate::document::StyleTarget;
use crate::error::StorageError;
use crate::mode::{DisplayMode, ModeValue};
use crate::storage::PreferenceStorage;

/// Handle returned by [`ThemePreferenceStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeHandler = Box<dyn FnMut(&ModeValue)>;

/// Single source of truth for the current display mode.
///
/// # Example
///
/// ```rust
/// use duskmode::{MemoryStorage, RootElement, ThemePreferenceStore};
///
/// let mut store = ThemePreferenceStore::new(MemoryStorage::new(), RootElement::new());
/// store.initialize();
/// assert!(store.target().contains("light-mode"));
///
/// store.toggle().unwrap();
/// assert!(store.is_dark());
/// assert!(store.target().contains("dark-mode"));
/// assert!(!store.target().contains("light-mode"));
/// ```
pub struct ThemePreferenceStore<S, T> {
    mode: ModeValue,
    storage: S,
    target: T,
    config: StoreConfig,
    detector: ModeDetector,
    subscribers: Vec<(SubscriptionId, ChangeHandler)>,
    next_subscription: u64,
}

impl<S: PreferenceStorage, T: StyleTarget> ThemePreferenceStore<S, T> {
    /// Creates a store with the default configuration.
    ///
    /// The current mode starts as light. Nothing is read, written, or applied
    /// until [`initialize`](Self::initialize) runs.
    pub fn new(storage: S, target: T) -> Self {
        Self::with_config(storage, target, StoreConfig::default())
    }

    pub fn with_config(storage: S, target: T, config: StoreConfig) -> Self {
        Self {
            mode: ModeValue::default(),
            storage,
            target,
            config,
            detector: os_mode_detector,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the detector used by [`Fallback::System`](crate::Fallback::System).
    pub fn with_detector(mut self, detector: ModeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Loads the persisted mode and applies it.
    ///
    /// A present, non-empty value is taken verbatim without validation. An
    /// absent or empty value, or a failed read, leaves the configured
    /// fallback in place. Nothing is written. Subscribers are called after
    /// the apply step when the loaded value differs from the previous one.
    /// Running this again re-reads storage and re-applies.
    pub fn initialize(&mut self) {
        let key = &self.config.storage_key;
        let persisted = match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("could not read display mode from '{}': {}", key, err);
                None
            }
        };

        let loaded = match persisted.filter(|value| !value.is_empty()) {
            Some(value) => {
                debug!("loaded display mode '{}' from '{}'", value, key);
                ModeValue::from(value)
            }
            None => {
                let fallback = self.config.fallback.resolve(self.detector);
                debug!("no display mode under '{}', using {}", key, fallback);
                fallback.into()
            }
        };
        let previous = std::mem::replace(&mut self.mode, loaded);

        apply_classes(&mut self.target, &self.config, self.mode.effective());

        if previous != self.mode {
            self.notify();
        }
    }

    /// Reconciles the style target with `mode`.
    ///
    /// Exactly `"dark"` adds the dark class and removes the light class; any
    /// other value does the reverse. Applying the same mode twice leaves the
    /// same class set.
    pub fn apply_mode(&mut self, mode: impl AsRef<str>) {
        let mode = ModeValue::from(mode.as_ref()).effective();
        apply_classes(&mut self.target, &self.config, mode);
    }

    /// Flips to dark if the current mode is exactly `light`, otherwise to light.
    pub fn toggle(&mut self) -> Result<(), StorageError> {
        let next = self.mode.toggled();
        self.set_mode(next)
    }

    /// Sets the current mode to `mode` without validating it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails. The in-memory mode has
    /// already changed at that point; the style target and subscribers are
    /// left untouched for this change.
    pub fn set_mode(&mut self, mode: impl Into<ModeValue>) -> Result<(), StorageError> {
        self.mode = mode.into();
        self.propagate()
    }

    /// True iff the current mode is exactly `dark`.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn current_mode(&self) -> &ModeValue {
        &self.mode
    }

    /// Registers `handler` to run after every change, once it is persisted and applied.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ModeValue) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Removes a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn propagate(&mut self) -> Result<(), StorageError> {
        self.storage
            .set(&self.config.storage_key, self.mode.as_str())?;
        debug!(
            "persisted display mode '{}' under '{}'",
            self.mode, self.config.storage_key
        );

        apply_classes(&mut self.target, &self.config, self.mode.effective());
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        for (_, handler) in &mut self.subscribers {
            handler(&self.mode);
        }
    }
}

impl<S, T> std::fmt::Debug for ThemePreferenceStore<S, T>
where
    S: std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("mode", &self.mode)
            .field("storage", &self.storage)
            .field("target", &self.target)
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn apply_classes<T: StyleTarget>(target: &mut T, config: &StoreConfig, mode: DisplayMode) {
    let add = config.class_for(mode);
    target.add_class(add);
    target.remove_class(config.class_for(mode.toggled()));
    debug!("applied class '{}' for {} mode", add, mode);
}
