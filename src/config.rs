//! Connection parameters for a Monarch device.

use std::time::Duration;

use crate::error::MonarchError;
use crate::protocol::{DEFAULT_PASSWORD, DEFAULT_TIMEOUT, DEFAULT_USERNAME};

/// Username/password pair sent with HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Address, credentials and timeout for one device.
///
/// Immutable once handed to a facade. An empty username means requests are
/// sent without an `Authorization` header.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    address: String,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl ConnectionConfig {
    /// Config for `address` (`host` or `host:port`) using the factory
    /// credentials and [`DEFAULT_TIMEOUT`].
    pub fn new(address: impl Into<String>) -> Result<Self, MonarchError> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(MonarchError::InvalidAddress(address));
        }

        Ok(Self {
            address: trimmed.to_string(),
            credentials: Some(Credentials {
                username: DEFAULT_USERNAME.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
            }),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replace the credentials. An empty `username` disables authentication.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        self.credentials = if username.is_empty() {
            None
        } else {
            Some(Credentials { username, password: password.into() })
        };
        self
    }

    /// Send requests without authentication.
    pub fn anonymous(mut self) -> Self {
        self.credentials = None;
        self
    }

    /// Timeout applied to the whole HTTP call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn auth(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }
}
