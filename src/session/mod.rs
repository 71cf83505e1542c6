// SPDX-License-Identifier: MPL-2.0
//! Session management API client.
//!
//! The [`SessionService`] talks to the session endpoints and knows nothing
//! about notifications; callers decide which outcomes are worth a toast.

mod service;

pub use service::SessionService;
