// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`ToastStore`] owns the ordered list of active toasts and the id
//! counter. It arms one expiry timer per toast with a positive duration
//! and hands out read-only views for rendering.

use super::toast::{Severity, Toast, ToastId};
use crate::config::defaults::DEFAULT_TOAST_DURATION_MS;
use crate::config::Config;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

/// Policies applied when a toast is raised without an explicit severity
/// or duration.
///
/// `duration: None` means toasts never expire on their own and stay until
/// dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub severity: Severity,
    pub duration: Option<Duration>,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            duration: Some(Duration::from_millis(DEFAULT_TOAST_DURATION_MS)),
        }
    }
}

impl ToastDefaults {
    /// Builds defaults from a loaded configuration, falling back to the
    /// built-in values for fields the config leaves unset.
    ///
    /// A configured duration of `0` disables auto-expiry.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let base = Self::default();
        Self {
            severity: config.toast_severity.unwrap_or(base.severity),
            duration: match config.toast_duration_ms {
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms)),
                None => base.duration,
            },
        }
    }
}

#[derive(Debug)]
struct State {
    entries: Vec<Toast>,
    next_id: u64,
}

#[derive(Debug)]
struct Inner {
    state: Mutex<State>,
    view: watch::Sender<Vec<Toast>>,
    defaults: ToastDefaults,
}

/// Handle to the application's notification store.
///
/// Create one store at startup and clone the handle wherever toasts are
/// raised or rendered; clones share the same underlying state. All
/// mutation goes through [`show`](Self::show)/[`show_with`](Self::show_with)
/// and [`dismiss`](Self::dismiss); consumers only ever observe copies of
/// the list.
///
/// # Usage
///
/// ```no_run
/// use huddle_client::notifications::{Severity, ToastStore};
///
/// let store = ToastStore::new();
///
/// // Defaults: informational, expires after 3 seconds.
/// store.show("Link copied to clipboard");
///
/// // Sticky error, stays until dismissed.
/// let id = store.show_with("Connection lost", Severity::Error, None);
/// store.dismiss(id);
/// ```
#[derive(Debug, Clone)]
pub struct ToastStore {
    inner: Arc<Inner>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    /// Creates an empty store with the built-in display defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ToastDefaults::default())
    }

    /// Creates an empty store with the given display defaults.
    #[must_use]
    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        let (view, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    entries: Vec::new(),
                    next_id: 1,
                }),
                view,
                defaults,
            }),
        }
    }

    /// Raises a toast with the store's default severity and duration.
    ///
    /// Returns the allocated id before any expiry timer fires, so the
    /// caller can dismiss early.
    pub fn show(&self, message: impl Into<String>) -> ToastId {
        let defaults = self.inner.defaults;
        self.show_with(message, defaults.severity, defaults.duration)
    }

    /// Raises a success toast with the default duration.
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show_with(message, Severity::Success, self.inner.defaults.duration)
    }

    /// Raises a warning toast with the default duration.
    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show_with(message, Severity::Warning, self.inner.defaults.duration)
    }

    /// Raises an error toast with the default duration.
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show_with(message, Severity::Error, self.inner.defaults.duration)
    }

    /// Raises a toast with an explicit severity and duration.
    ///
    /// `None` and `Duration::ZERO` both disable auto-expiry; the toast
    /// then stays until [`dismiss`](Self::dismiss) is called. The message
    /// is accepted verbatim, this layer performs no validation.
    ///
    /// Arming the expiry timer needs a Tokio runtime. Without one the
    /// toast is still created (a warning is logged) and only goes away
    /// via manual dismissal.
    pub fn show_with(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> ToastId {
        let id = {
            let mut state = self.lock();
            let id = ToastId::new(state.next_id);
            state.next_id += 1;
            state.entries.push(Toast::new(id, severity, message.into()));
            self.publish(&state);
            id
        };

        if let Some(delay) = duration.filter(|d| !d.is_zero()) {
            self.arm_expiry(id, delay);
        }

        id
    }

    /// Dismisses a toast by its id.
    ///
    /// Returns `true` if the toast was present and removed. Unknown or
    /// already-dismissed ids are a no-op, which is what makes the expiry
    /// timer race-safe against manual dismissal: whichever runs second
    /// finds nothing to remove.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut state = self.lock();
        let Some(pos) = state.entries.iter().position(|t| t.id() == id) else {
            return false;
        };
        state.entries.remove(pos);
        self.publish(&state);
        true
    }

    /// Returns an owned snapshot of the active toasts, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().entries.clone()
    }

    /// Returns a live read-only view of the active toasts.
    ///
    /// The receiver wakes whenever the list changes; `borrow()` always
    /// yields the current list, oldest first. Dropping receivers is fine,
    /// the store publishes regardless.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.view.subscribe()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns whether there are no active toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn arm_expiry(&self, id: ToastId, delay: Duration) {
        // Weak handle: a pending timer must not prolong the store's life.
        let inner = Arc::downgrade(&self.inner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(inner) = inner.upgrade() {
                        ToastStore { inner }.dismiss(id);
                    }
                });
            }
            Err(_) => {
                log::warn!("no async runtime available; toast {id} will not auto-expire");
            }
        }
    }

    fn publish(&self, state: &State) {
        // Called with the state lock held so views update in mutation order.
        self.inner.view.send_replace(state.entries.clone());
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The lock is never held across an await; recover from poisoning
        // so raising and dismissing toasts stay total operations.
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
