// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Snackbar**: queue capacity and entry lifetime bounds

// ==========================================================================
// Snackbar Defaults
// ==========================================================================

/// Default number of snackbars shown at once.
pub const DEFAULT_SNACKBAR_CAPACITY: usize = 5;

/// Minimum snackbar queue capacity.
pub const MIN_SNACKBAR_CAPACITY: usize = 1;

/// Maximum snackbar queue capacity.
pub const MAX_SNACKBAR_CAPACITY: usize = 20;

/// Default time a snackbar stays visible (in milliseconds).
pub const DEFAULT_SNACKBAR_LIFETIME_MS: u64 = 4000;

/// Minimum snackbar lifetime (in milliseconds).
pub const MIN_SNACKBAR_LIFETIME_MS: u64 = 500;

/// Maximum snackbar lifetime (in milliseconds).
pub const MAX_SNACKBAR_LIFETIME_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SNACKBAR_CAPACITY > 0);
    assert!(MIN_SNACKBAR_CAPACITY <= DEFAULT_SNACKBAR_CAPACITY);
    assert!(MAX_SNACKBAR_CAPACITY >= DEFAULT_SNACKBAR_CAPACITY);

    assert!(MIN_SNACKBAR_LIFETIME_MS > 0);
    assert!(MIN_SNACKBAR_LIFETIME_MS <= DEFAULT_SNACKBAR_LIFETIME_MS);
    assert!(MAX_SNACKBAR_LIFETIME_MS >= DEFAULT_SNACKBAR_LIFETIME_MS);
};
