//! CLI command handlers.
//!
//! Each handler renders to a `String` so output can be tested without a
//! terminal; `main` prints it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use travelconnect_core::{
    HomeScreen, Intent, Ionicons, ScreenConfig, StaticSession, render_outline,
};

use crate::cli::Commands;

/// Execute a CLI command, returning the text to print.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, an icon fails to
/// resolve under strict mode, or output cannot be serialized.
pub fn execute_command(command: Commands, config: &ScreenConfig) -> Result<String> {
    match command {
        Commands::Outline { email, json, .. } => cmd_outline(email, config, json),
        Commands::Tap { id, email } => cmd_tap(&id, email),
        Commands::Actions => cmd_actions(),
    }
}

/// Load the configuration named on the command line, or defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<ScreenConfig> {
    path.map_or_else(
        || Ok(ScreenConfig::default()),
        |p| {
            ScreenConfig::load(p)
                .with_context(|| format!("Failed to load screen config from {}", p.display()))
        },
    )
}

/// Log where the configuration came from.
///
/// Called once the subscriber is installed, since the config itself chooses
/// the log filter.
pub fn report_config(path: Option<&Path>, config: &ScreenConfig) {
    let viewport = config.viewport;
    match path {
        Some(path) => info!(
            path = %path.display(),
            width = viewport.width,
            height = viewport.height,
            strict_icons = config.strict_icons,
            "loaded screen config"
        ),
        None => debug!("using default screen config"),
    }
}

fn session_for(email: Option<String>) -> StaticSession {
    email.map_or_else(StaticSession::signed_out, StaticSession::signed_in)
}

fn cmd_outline(email: Option<String>, config: &ScreenConfig, json: bool) -> Result<String> {
    let tree = HomeScreen::new(session_for(email)).render();

    if json {
        return serde_json::to_string_pretty(&tree).context("Failed to serialize view tree");
    }

    let options = config.outline_options();
    info!(
        width = options.viewport.width,
        height = options.viewport.height,
        strict_icons = options.strict_icons,
        "rendering home screen outline"
    );
    render_outline(&tree, &Ionicons, &options).context("Failed to render outline")
}

fn cmd_tap(id: &str, email: Option<String>) -> Result<String> {
    let intent = HomeScreen::new(session_for(email)).tap(id);
    debug!(target_id = id, ?intent, "tap evaluated");
    Ok(describe_intent(&intent))
}

fn cmd_actions() -> Result<String> {
    let lines = HomeScreen::new(StaticSession::signed_out())
        .interactions()
        .into_iter()
        .map(|(id, intent)| format!("{id:<20} {}", describe_intent(&intent)))
        .collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

fn describe_intent(intent: &Intent) -> String {
    match intent {
        Intent::Navigate(route) => format!("navigate {route}"),
        Intent::None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_tap_settings_navigates() {
        let out = execute_command(
            Commands::Tap {
                id: "settings-button".to_string(),
                email: None,
            },
            &ScreenConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "navigate /settings");
    }

    #[test]
    fn test_tap_inert_tile() {
        let out = cmd_tap("quick-action-2", Some("me@trip.io".to_string())).unwrap();
        assert_eq!(out, "none");
    }

    #[test]
    fn test_actions_lists_every_touchable() {
        let out = cmd_actions().unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("settings-button"));
        assert!(lines[0].ends_with("navigate /settings"));
        assert!(lines[7].ends_with("none"));
    }

    #[test]
    fn test_outline_json_contains_email() {
        let out = cmd_outline(Some("me@trip.io".to_string()), &ScreenConfig::default(), true)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["id"], "home");
        assert!(out.contains("me@trip.io"));
    }

    #[test]
    fn test_outline_text_uses_fallback_identity() {
        let out = cmd_outline(None, &ScreenConfig::default(), false).unwrap();
        assert!(out.contains("\"Signed in\""));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_config_is_logged_by_installed_subscriber() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            report_config(Some(Path::new("screen.toml")), &ScreenConfig::default());
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("loaded screen config"));
        assert!(output.contains("screen.toml"));
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), ScreenConfig::default());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Some(Path::new("/no/such/screen.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load screen config"));
    }
}
