// SPDX-License-Identifier: MPL-2.0
//! `huddle_client` is the client-side core of Huddle, a tool for shared
//! live sessions.
//!
//! It owns the toast notification lifecycle (creation, auto-expiry,
//! manual dismissal) and provides a thin REST client for the session API.
//! The two halves are deliberately decoupled: the session client reports
//! outcomes, and the caller decides which of them become toasts.
//!
//! ```no_run
//! use huddle_client::notifications::{Severity, ToastStore};
//! use huddle_client::session::SessionService;
//!
//! # async fn demo() -> huddle_client::error::Result<()> {
//! let toasts = ToastStore::new();
//! let sessions = SessionService::new("http://localhost:3001/api/sessions")?;
//!
//! match sessions.create(&serde_json::json!({ "hostName": "ada" })).await {
//!     Ok(_) => {
//!         toasts.success("Session created");
//!     }
//!     Err(err) => {
//!         toasts.show_with(
//!             format!("Failed to create session: {err}"),
//!             Severity::Error,
//!             None,
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/huddle_client/0.1.0")]

pub mod config;
pub mod error;
pub mod notifications;
pub mod session;
