// SPDX-License-Identifier: MPL-2.0
//! Snackbar severity kinds.

use crate::error::SnackbarError;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Severity of a snackbar. Picks the accent color and the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnackbarKind {
    Info,
    Success,
    Attention,
    Failed,
}

impl SnackbarKind {
    pub const ALL: [SnackbarKind; 4] = [
        SnackbarKind::Info,
        SnackbarKind::Success,
        SnackbarKind::Attention,
        SnackbarKind::Failed,
    ];

    /// Stable lowercase name, also the prefix of every [`SnackbarKey`](super::SnackbarKey).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SnackbarKind::Info => "info",
            SnackbarKind::Success => "success",
            SnackbarKind::Attention => "attention",
            SnackbarKind::Failed => "failed",
        }
    }

    /// Accent color of the icon strip.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            SnackbarKind::Info => palette::PRIMARY_500,
            SnackbarKind::Success => palette::SUCCESS_500,
            SnackbarKind::Attention => palette::WARNING_500,
            SnackbarKind::Failed => palette::ERROR_500,
        }
    }
}

impl fmt::Display for SnackbarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnackbarKind {
    type Err = SnackbarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SnackbarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| SnackbarError::UnknownKind(value.to_string()))
    }
}
