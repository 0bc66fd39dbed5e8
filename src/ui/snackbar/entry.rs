// SPDX-License-Identifier: MPL-2.0
//! Snackbar entries and their deduplication key.

use super::kind::SnackbarKind;
use crate::error::{Result, SnackbarError};
use std::fmt;

/// Identity of a snackbar: its kind name followed by its message.
///
/// Two snackbars with the same kind and message share a key and therefore
/// occupy the same slot in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnackbarKey(String);

impl SnackbarKey {
    #[must_use]
    pub fn new(kind: SnackbarKind, message: &str) -> Self {
        let mut key = String::with_capacity(kind.as_str().len() + message.len());
        key.push_str(kind.as_str());
        key.push_str(message);
        Self(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnackbarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A short-lived message shown in the snackbar list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snackbar {
    kind: SnackbarKind,
    message: String,
}

impl Snackbar {
    /// Creates a snackbar, trimming the message.
    ///
    /// # Errors
    ///
    /// Returns [`SnackbarError::EmptyMessage`] when nothing is left after trimming.
    pub fn new(kind: SnackbarKind, message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(SnackbarError::EmptyMessage.into());
        }

        let message = if trimmed.len() == message.len() {
            message
        } else {
            trimmed.to_string()
        };

        Ok(Self { kind, message })
    }

    /// Parses the kind from its textual name, then behaves like [`Snackbar::new`].
    ///
    /// # Errors
    ///
    /// Returns [`SnackbarError::UnknownKind`] or [`SnackbarError::EmptyMessage`].
    pub fn parse(kind: &str, message: impl Into<String>) -> Result<Self> {
        let kind = kind.parse::<SnackbarKind>()?;
        Self::new(kind, message)
    }

    pub fn info(message: impl Into<String>) -> Result<Self> {
        Self::new(SnackbarKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Result<Self> {
        Self::new(SnackbarKind::Success, message)
    }

    pub fn attention(message: impl Into<String>) -> Result<Self> {
        Self::new(SnackbarKind::Attention, message)
    }

    pub fn failed(message: impl Into<String>) -> Result<Self> {
        Self::new(SnackbarKind::Failed, message)
    }

    #[must_use]
    pub fn kind(&self) -> SnackbarKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn key(&self) -> SnackbarKey {
        SnackbarKey::new(self.kind, &self.message)
    }
}
