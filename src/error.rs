// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Session(SessionError),
}

/// Specific error types for session API failures.
/// Lets callers distinguish "the server said no" from "the server never
/// answered" when deciding what to surface to the user.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// The request never produced an HTTP response (DNS, connect, timeout)
    Transport(String),

    /// The server answered with a non-success status
    Status { code: u16, body: String },

    /// The response body was not valid JSON
    InvalidBody(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Transport(msg) => write!(f, "transport failure: {msg}"),
            SessionError::Status { code, body } => {
                if body.is_empty() {
                    write!(f, "server returned status {code}")
                } else {
                    write!(f, "server returned status {code}: {body}")
                }
            }
            SessionError::InvalidBody(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for SessionError {}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Error::Session(err)
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

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SessionError::InvalidBody(err.to_string())
        } else if let Some(status) = err.status() {
            SessionError::Status {
                code: status.as_u16(),
                body: String::new(),
            }
        } else {
            SessionError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
