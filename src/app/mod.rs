// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the demo page and the single snackbar queue, loads the
//! settings at startup, and routes every message through `update`. The queue
//! is handed to components explicitly through the update context; nothing
//! reaches for it globally.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::ui::page;
use crate::ui::snackbar::{Snackbar, SnackbarQueue};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    page: page::State,
    snackbars: SnackbarQueue,
    theme_mode: ThemeMode,
    /// Time of the latest tick, used to animate snackbars.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("modal_shown", &self.page.modal_shown())
            .field("snackbars", &self.snackbars.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed only once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            page: page::State::new(),
            snackbars: SnackbarQueue::default(),
            theme_mode: ThemeMode::System,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state from the settings file and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = App {
            snackbars: SnackbarQueue::new(config.snackbar.settings()),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            ..Self::default()
        };

        tracing::info!(
            theme_mode = ?app.theme_mode,
            capacity = app.snackbars.capacity().get(),
            lifetime_ms = app.snackbars.lifetime().as_millis() as u64,
            "application started"
        );

        // Show warnings for config loading issues
        if let Some(warning) = config_warning {
            match Snackbar::attention(warning) {
                Ok(snackbar) => {
                    app.snackbars.add(snackbar);
                }
                Err(err) => tracing::warn!(%err, "config warning could not be shown"),
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Popups")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            !self.snackbars.is_empty(),
            self.snackbars.is_animating(Instant::now()),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            snackbars: &mut self.snackbars,
            now: &mut self.now,
        };

        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            snackbars: &self.snackbars,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::{self, SnackbarKind};

    #[test]
    fn default_app_starts_empty() {
        let app = App::default();
        assert!(app.snackbars.is_empty());
        assert!(!app.page.modal_shown());
    }

    #[test]
    fn explicit_theme_flag_resolves_to_matching_theme() {
        let app = App {
            theme_mode: ThemeMode::Light,
            ..App::default()
        };
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn add_snack_then_dismiss_round_trip() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::AddSnackbar));

        let (key, entry) = app
            .snackbars
            .iter()
            .next()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .expect("snackbar should be queued");
        assert_eq!(entry.kind(), SnackbarKind::Success);

        let _ = app.update(Message::Snackbar(snackbar::Message::Dismiss(key)));
        assert!(app.snackbars.is_empty());
    }

    #[test]
    fn view_builds_with_modal_and_snackbars() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::ToggleModal));
        let _ = app.update(Message::Page(page::Message::AddSnackbar));
        let _ = app.view();
    }

    #[test]
    fn debug_output_summarizes_state() {
        let app = App::default();
        let output = format!("{:?}", app);
        assert!(output.contains("modal_shown"));
        assert!(output.contains("snackbars"));
    }
}
