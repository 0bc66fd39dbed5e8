// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::page;
use crate::ui::snackbar;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Snackbar(snackbar::Message),
    /// Periodic tick for snackbar expiry and fade-in.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_POPUPS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme mode overriding the one stored in settings.
    pub theme: Option<ThemeMode>,
}
