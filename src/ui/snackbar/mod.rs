// SPDX-License-Identifier: MPL-2.0
//! Snackbar notifications.
//!
//! Snackbars are short-lived, click-dismissible messages shown in the
//! bottom-left corner. The application owns a single [`SnackbarQueue`] and
//! hands it (as `&mut SnackbarQueue`) to whatever needs to raise or dismiss a
//! snackbar, so no component has to look it up globally.
//!
//! # Components
//!
//! - [`kind`] - `SnackbarKind` severity levels
//! - [`entry`] - `Snackbar` entries and their `SnackbarKey`
//! - [`queue`] - `SnackbarQueue` bounded queue with expiry bookkeeping
//! - [`list`] - rendering of the queue
//!
//! # Usage
//!
//! ```
//! use iced_popups::ui::snackbar::{Snackbar, SnackbarQueue};
//!
//! let mut queue = SnackbarQueue::default();
//! queue.add(Snackbar::success("Saved").expect("non-empty message"));
//! queue.add(Snackbar::success("Saved").expect("non-empty message"));
//! assert_eq!(queue.len(), 1);
//! ```

pub mod entry;
pub mod kind;
pub mod list;
pub mod queue;

pub use entry::{Snackbar, SnackbarKey};
pub use kind::SnackbarKind;
pub use queue::{AddOutcome, Message, QueuedSnackbar, SnackbarQueue, SnackbarSettings};
