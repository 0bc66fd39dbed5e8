// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes its `State`, a `Message` type and `view` functions, and the
//! application routes messages back through `update`.
//!
//! # Components
//!
//! - [`page`] - demo page with the `OPEN` and `Add Snack` actions
//! - [`modal`] - dialog that closes on outside presses
//! - [`snackbar`] - bounded, timed snackbar queue and its list view
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - button and container styles
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons for snackbar kinds

pub mod design_tokens;
pub mod icons;
pub mod modal;
pub mod page;
pub mod snackbar;
pub mod styles;
pub mod theming;
