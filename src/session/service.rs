// SPDX-License-Identifier: MPL-2.0
//! REST client for the session management API.
//!
//! Thin wrapper over the session endpoints: create, join by id, fetch
//! state, end. Request and response payloads are opaque JSON; this layer
//! never interprets them. Surfacing outcomes to the user (e.g. as toasts)
//! is the caller's job.

use crate::config::defaults::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::config::Config;
use crate::error::{Result, SessionError};
use serde_json::Value;
use std::time::Duration;

/// User agent sent with every API request.
const USER_AGENT: &str = concat!("Huddle/", env!("CARGO_PKG_VERSION"));

/// Client for the session management API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SessionService {
    client: reqwest::Client,
    base_url: String,
}

impl SessionService {
    /// Creates a service targeting `base_url`, e.g.
    /// `http://localhost:3001/api/sessions`. Trailing slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Creates a service from a loaded configuration, falling back to the
    /// built-in base URL when the config leaves it unset.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(base_url)
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new session. `POST {base}/create`.
    pub async fn create(&self, payload: &Value) -> Result<Value> {
        self.post_json(&self.url("create"), payload).await
    }

    /// Joins an existing session. `POST {base}/{id}/join`.
    pub async fn join(&self, session_id: &str, payload: &Value) -> Result<Value> {
        self.post_json(&self.url(&format!("{session_id}/join")), payload)
            .await
    }

    /// Fetches the current state of a session. `GET {base}/{id}`.
    pub async fn fetch(&self, session_id: &str) -> Result<Value> {
        let url = self.url(session_id);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SessionError::from)?;
        Self::decode(response).await
    }

    /// Ends a session on behalf of `user_id`. `POST {base}/{id}/end`.
    pub async fn end(&self, session_id: &str, user_id: &str) -> Result<Value> {
        let payload = serde_json::json!({ "userId": user_id });
        self.post_json(&self.url(&format!("{session_id}/end")), &payload)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json(&self, url: &str, payload: &Value) -> Result<Value> {
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(SessionError::from)?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            log::warn!("session API {url} returned {status}");
            return Err(SessionError::Status {
                code: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SessionError::InvalidBody(e.to_string()))?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_base_url() {
        let service = SessionService::new("http://localhost:3001/api/sessions//")
            .expect("failed to build client");
        assert_eq!(service.base_url(), "http://localhost:3001/api/sessions");
    }

    #[test]
    fn endpoints_are_rooted_at_the_base_url() {
        let service =
            SessionService::new("http://localhost:3001/api/sessions").expect("failed to build client");

        assert_eq!(
            service.url("create"),
            "http://localhost:3001/api/sessions/create"
        );
        assert_eq!(
            service.url("abc123/join"),
            "http://localhost:3001/api/sessions/abc123/join"
        );
        assert_eq!(service.url("abc123"), "http://localhost:3001/api/sessions/abc123");
    }

    #[test]
    fn from_config_falls_back_to_builtin_base_url() {
        let service = SessionService::from_config(&Config {
            api_base_url: None,
            toast_duration_ms: None,
            toast_severity: None,
        })
        .expect("failed to build client");

        assert_eq!(service.base_url(), DEFAULT_API_BASE_URL);
    }
}
