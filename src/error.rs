// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Snackbar(SnackbarError),
}

/// Reasons a snackbar request is refused before it reaches the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnackbarError {
    /// The kind is not one of `info`, `success`, `attention`, `failed`.
    UnknownKind(String),

    /// The message is empty or only whitespace.
    EmptyMessage,
}

impl fmt::Display for SnackbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnackbarError::UnknownKind(kind) => write!(f, "Unknown snackbar kind: {}", kind),
            SnackbarError::EmptyMessage => write!(f, "Snackbar message is empty"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Snackbar(e) => write!(f, "Snackbar Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SnackbarError> for Error {
    fn from(err: SnackbarError) -> Self {
        Error::Snackbar(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
