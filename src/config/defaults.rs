// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Display policy for notifications raised without explicit options
//! - **Session API**: Endpoint and transport settings for the session client

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-expiry duration for a toast, in milliseconds.
///
/// A configured value of `0` disables auto-expiry entirely.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

// ==========================================================================
// Session API Defaults
// ==========================================================================

/// Default base URL of the session management API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api/sessions";

/// Request timeout applied to every session API call, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_HTTP_TIMEOUT_SECS > 0);
    assert!(!DEFAULT_API_BASE_URL.is_empty());
};
