//! Error types for mode parsing, preference storage, and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a string is not exactly `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode '{0}' (expected 'light' or 'dark')")]
pub struct UnknownModeError(pub String);

/// Error returned by a [`PreferenceStorage`](crate::PreferenceStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("failed to access preference file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backing file exists but is not a JSON object of strings.
    #[error("preference file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A backend outside this crate refused the operation.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned when loading a [`StoreConfig`](crate::StoreConfig) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_error_display() {
        let err = UnknownModeError("purple".to_string());
        let msg = err.to_string();
        assert!(msg.contains("purple"));
        assert!(msg.contains("'light' or 'dark'"));
    }

    #[test]
    fn test_storage_io_error_display_includes_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_storage_unavailable_display() {
        let err = StorageError::Unavailable("quota exceeded".into());
        assert_eq!(
            err.to_string(),
            "preference storage unavailable: quota exceeded"
        );
    }
}
