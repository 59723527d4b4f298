//! Rendering the store state for the terminal.

use console::Style;
use duskmode::{PreferenceStorage, RootElement, ThemePreferenceStore};
use minijinja::{context, Environment, Value};
use serde::Serialize;

use crate::cli::OutputMode;

const REPORT_TEMPLATE: &str = r#"{{ "mode" | style("label") }}     {{ mode | style(mode_style) }}{% if not known %} {{ "(unknown, styled as light)" | style("muted") }}{% endif %}
{{ "classes" | style("label") }}  {{ classes | join(" ") }}
{{ "store" | style("label") }}    {{ store | style("muted") }}"#;

/// Snapshot of a store after a command ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub mode: String,
    pub is_dark: bool,
    pub known: bool,
    pub classes: Vec<String>,
    pub storage_key: String,
    pub store: String,
}

impl Report {
    pub fn capture<S: PreferenceStorage>(
        store: &ThemePreferenceStore<S, RootElement>,
        location: &str,
    ) -> Self {
        Self {
            mode: store.current_mode().to_string(),
            is_dark: store.is_dark(),
            known: store.current_mode().known().is_some(),
            classes: store.target().classes().map(str::to_string).collect(),
            storage_key: store.config().storage_key.clone(),
            store: location.to_string(),
        }
    }

    /// Renders the report for `mode`.
    ///
    /// Styled output uses a palette that matches the reported mode.
    pub fn render(&self, mode: OutputMode) -> Result<String, minijinja::Error> {
        if mode == OutputMode::Json {
            return serde_json::to_string_pretty(self).map_err(|e| {
                minijinja::Error::new(minijinja::ErrorKind::BadSerialization, e.to_string())
            });
        }

        let use_color = mode.should_use_color();
        let dark = self.is_dark;
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            if use_color {
                palette(&name, dark).apply_to(text).to_string()
            } else {
                text
            }
        });

        env.render_str(
            REPORT_TEMPLATE,
            context! {
                mode => &self.mode,
                mode_style => if self.is_dark { "dark" } else { "light" },
                known => self.known,
                classes => &self.classes,
                store => &self.store,
            },
        )
    }
}

fn palette(name: &str, dark: bool) -> Style {
    let style = Style::new().force_styling(true);
    match (name, dark) {
        ("label", true) => style.cyan().bold(),
        ("label", false) => style.blue().bold(),
        ("dark", _) => style.magenta().bold(),
        ("light", _) => style.yellow().bold(),
        ("muted", _) => style.dim(),
        _ => style,
    }
}
