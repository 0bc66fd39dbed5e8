// SPDX-License-Identifier: MPL-2.0
//! `iced_popups` provides two small popup widgets for Iced applications and a
//! demo page composing them.
//!
//! - [`ui::modal`]: a dialog that closes when the user presses outside of it
//!   (presses on its toggler excepted).
//! - [`ui::snackbar`]: a bounded, de-duplicating queue of timed, click
//!   dismissible notifications and the list that renders it.
//!
//! The binary wires both into an application with a settings file
//! (see [`config`]) and structured logging.

#![doc(html_root_url = "https://docs.rs/iced_popups/0.1.0")]

pub mod app;
pub mod error;
pub mod ui;

pub use app::config;
