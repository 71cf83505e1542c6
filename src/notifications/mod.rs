// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive, short-lived messages following toast/snackbar UX
//! patterns: raised in response to an action ("session created", "failed
//! to join"), displayed for a bounded time, dismissable early.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` record with severity levels
//! - [`store`] - `ToastStore` owning the active list and expiry timers
//!
//! # Usage
//!
//! ```no_run
//! use huddle_client::notifications::{Severity, ToastStore};
//!
//! let store = ToastStore::new();
//!
//! let id = store.show_with("Failed to join session", Severity::Error, None);
//!
//! // Rendering code observes, never mutates:
//! for toast in store.snapshot() {
//!     println!("[{}] {}", toast.severity(), toast.message());
//! }
//!
//! store.dismiss(id);
//! ```
//!
//! # Design Considerations
//!
//! - One expiry timer per toast; a dismissed toast makes its timer a no-op
//! - Insertion order is preserved; expiry order is not (a short toast may
//!   outlive-race a longer, earlier one)
//! - No cap on the active list and no deduplication; callers decide what
//!   is worth raising

mod store;
mod toast;

pub use store::{ToastDefaults, ToastStore};
pub use toast::{Severity, Toast, ToastId};
