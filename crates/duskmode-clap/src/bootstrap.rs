//! Application bootstrap: build the store once, initialize it, run a command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use duskmode::{FileStorage, RootElement, StoreConfig, ThemePreferenceStore};
use log::info;

use crate::cli::{Cli, Command};
use crate::report::Report;

/// Application name used for the default preference directory.
const APP_NAME: &str = "duskmode";

/// File name of the default preference store.
const STORE_FILE: &str = "preferences.json";

pub type FileStore = ThemePreferenceStore<FileStorage, RootElement>;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the full report.
    Report(Report),
    /// Print the class attribute only.
    Classes(String),
    /// Exit status only.
    Status(bool),
}

/// Exit status for a failed run; `is-dark` uses 0 and 1 for its answer.
pub const EXIT_ERROR: u8 = 2;

impl Outcome {
    /// Process exit status for a successful run.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Status(false) => 1,
            _ => 0,
        }
    }
}

/// Returns the default preference file path.
///
/// Falls back to the current directory when the user config directory is unknown.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(STORE_FILE)
}

/// Creates the store for `path` and initializes it.
pub fn open_store(path: &Path, config: Option<&Path>) -> Result<FileStore> {
    let config = match config {
        Some(config_path) => StoreConfig::load(config_path)
            .with_context(|| format!("loading store config {}", config_path.display()))?,
        None => StoreConfig::default(),
    };

    let mut store =
        ThemePreferenceStore::with_config(FileStorage::new(path), RootElement::new(), config);
    store.initialize();
    info!(
        "initialized display mode '{}' from {}",
        store.current_mode(),
        path.display()
    );
    Ok(store)
}

/// Runs `command` against an initialized store.
pub fn run_command(store: &mut FileStore, command: &Command) -> Result<Outcome> {
    let location = store.storage().path().display().to_string();

    match command {
        Command::Show => {}
        Command::Toggle => store
            .toggle()
            .context("persisting toggled display mode")?,
        Command::Set { mode } => store
            .set_mode(mode.as_str())
            .with_context(|| format!("persisting display mode '{}'", mode))?,
        Command::IsDark => return Ok(Outcome::Status(store.is_dark())),
        Command::Classes => return Ok(Outcome::Classes(store.target().class_attr())),
    }

    Ok(Outcome::Report(Report::capture(store, &location)))
}

/// Bootstraps the store from `cli` and runs its command.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let path = cli.store.clone().unwrap_or_else(default_store_path);
    let mut store = open_store(&path, cli.config.as_deref())?;
    let command = cli.command.clone().unwrap_or(Command::Show);
    run_command(&mut store, &command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(dir: &TempDir, args: &[&str]) -> Cli {
        let store = dir.path().join("prefs.json");
        let mut argv = vec!["duskmode".to_string(), "--store".to_string()];
        argv.push(store.display().to_string());
        argv.extend(args.iter().map(|a| a.to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    fn report(outcome: Outcome) -> Report {
        match outcome {
            Outcome::Report(report) => report,
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_default_store_path_ends_with_app_file() {
        let path = default_store_path();
        assert!(path.ends_with("duskmode/preferences.json"));
    }

    #[test]
    fn test_show_on_fresh_store_is_light() {
        let dir = TempDir::new().unwrap();
        let report = report(run(&cli(&dir, &[])).unwrap());
        assert_eq!(report.mode, "light");
        assert_eq!(report.classes, vec!["light-mode"]);
        assert!(!dir.path().join("prefs.json").exists());
    }

    #[test]
    fn test_toggle_persists_across_runs() {
        let dir = TempDir::new().unwrap();
        let toggled = report(run(&cli(&dir, &["toggle"])).unwrap());
        assert!(toggled.is_dark);

        assert_eq!(run(&cli(&dir, &["is-dark"])).unwrap(), Outcome::Status(true));
        assert_eq!(
            run(&cli(&dir, &["classes"])).unwrap(),
            Outcome::Classes("dark-mode".into())
        );
    }

    #[test]
    fn test_set_unknown_mode_is_kept() {
        let dir = TempDir::new().unwrap();
        let set = report(run(&cli(&dir, &["set", "purple"])).unwrap());
        assert_eq!(set.mode, "purple");
        assert!(!set.known);

        let shown = report(run(&cli(&dir, &["show"])).unwrap());
        assert_eq!(shown.mode, "purple");
        assert_eq!(shown.classes, vec!["light-mode"]);
    }

    #[test]
    fn test_config_file_changes_key_and_classes() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("duskmode.yaml");
        fs::write(&config, "storage_key: ui-theme\ndark_class: night\n").unwrap();
        let config = config.display().to_string();

        let set = report(run(&cli(&dir, &["--config", &config, "set", "dark"])).unwrap());
        assert_eq!(set.storage_key, "ui-theme");
        assert_eq!(set.classes, vec!["night"]);

        let raw = fs::read_to_string(dir.path().join("prefs.json")).unwrap();
        assert!(raw.contains("\"ui-theme\""));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml").display().to_string();
        assert!(run(&cli(&dir, &["--config", &missing])).is_err());
    }

    #[test]
    fn test_exit_status_separates_light_from_errors() {
        let dir = TempDir::new().unwrap();
        assert_eq!(run(&cli(&dir, &["is-dark"])).unwrap().exit_status(), 1);
        assert_eq!(run(&cli(&dir, &["set", "dark"])).unwrap().exit_status(), 0);
        assert_eq!(run(&cli(&dir, &["is-dark"])).unwrap().exit_status(), 0);
        assert_eq!(run(&cli(&dir, &["classes"])).unwrap().exit_status(), 0);

        let missing = dir.path().join("missing.yaml").display().to_string();
        assert!(run(&cli(&dir, &["--config", &missing, "is-dark"])).is_err());
        assert_ne!(EXIT_ERROR, Outcome::Status(false).exit_status());
        assert_ne!(EXIT_ERROR, Outcome::Status(true).exit_status());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("prefs.json"), "not json").unwrap();
        let err = run(&cli(&dir, &["toggle"])).unwrap_err();
        assert!(err.to_string().contains("persisting toggled display mode"));
    }
}
