// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles for the demo page and the modal.

pub mod button;
pub mod container;
