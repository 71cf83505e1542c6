// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record and `Severity` enum used
//! throughout the notification system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Ids are allocated by the owning [`ToastStore`](super::ToastStore),
/// start at 1, and strictly increase for the lifetime of the store. They
/// are never reused, so a stale id held after dismissal stays harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value of this id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification tag attached to a toast.
///
/// The store treats severities as opaque labels; they carry no lifecycle
/// meaning. Presentation layers map them to styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

impl Severity {
    /// Short lowercase tag, as written in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ephemeral notification record.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast.
    id: ToastId,
    /// Severity level (presentation hint, not validated).
    severity: Severity,
    /// The message content, opaque to the store.
    message: String,
    /// When this toast was created.
    created_at: Instant,
}

impl Toast {
    pub(crate) fn new(id: ToastId, severity: Severity, message: String) -> Self {
        Self {
            id,
            severity,
            message,
            created_at: Instant::now(),
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message content.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
