//! Upstream authentication secrets.
//!
//! The caller-ID API accepts four `e-auth*` headers. They are attached only
//! when `E_AUTH` is set; the remaining three fall back to fixed defaults.
//! Values are read once at startup and validated as header values then, so
//! building a request never fails on a bad secret.

use std::fmt;

use reqwest::header::HeaderValue;
use thiserror::Error;

pub const E_AUTH: &str = "E_AUTH";
pub const E_AUTH_V: &str = "E_AUTH_V";
pub const E_AUTH_C: &str = "E_AUTH_C";
pub const E_AUTH_K: &str = "E_AUTH_K";

const DEFAULT_AUTH_VERSION: &str = "e1";
const DEFAULT_AUTH_CLIENT: &str = "40";
const DEFAULT_AUTH_KEY: &str = "";

/// Errors raised while reading secrets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretsError {
    /// The variable holds characters that cannot be sent in a header.
    /// The value itself is deliberately not part of the message.
    #[error("environment variable {0} is not a valid HTTP header value")]
    InvalidHeaderValue(&'static str),
}

/// The resolved `e-auth*` header values.
#[derive(Clone)]
pub struct AuthHeaders {
    pub version: HeaderValue,
    pub token: HeaderValue,
    pub client: HeaderValue,
    pub key: HeaderValue,
}

/// Read-only upstream credentials.
#[derive(Clone, Default)]
pub struct AuthSecrets {
    headers: Option<AuthHeaders>,
}

impl AuthSecrets {
    /// No credentials: only the base headers are sent upstream.
    pub fn none() -> Self {
        Self::default()
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, SecretsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup.
    ///
    /// Empty values count as unset, so an empty `E_AUTH` disables the
    /// auth headers and empty overrides fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SecretsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let Some(token) = get(E_AUTH) else {
            return Ok(Self::none());
        };

        let headers = AuthHeaders {
            version: sensitive(E_AUTH_V, get(E_AUTH_V).as_deref().unwrap_or(DEFAULT_AUTH_VERSION))?,
            token: sensitive(E_AUTH, &token)?,
            client: sensitive(E_AUTH_C, get(E_AUTH_C).as_deref().unwrap_or(DEFAULT_AUTH_CLIENT))?,
            key: sensitive(E_AUTH_K, get(E_AUTH_K).as_deref().unwrap_or(DEFAULT_AUTH_KEY))?,
        };

        Ok(Self {
            headers: Some(headers),
        })
    }

    /// Whether the auth header block will be sent.
    pub fn is_configured(&self) -> bool {
        self.headers.is_some()
    }

    pub fn headers(&self) -> Option<&AuthHeaders> {
        self.headers.as_ref()
    }
}

impl fmt::Debug for AuthSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSecrets")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn sensitive(var: &'static str, value: &str) -> Result<HeaderValue, SecretsError> {
    let mut header = HeaderValue::from_str(value).map_err(|_| SecretsError::InvalidHeaderValue(var))?;
    header.set_sensitive(true);
    Ok(header)
}
