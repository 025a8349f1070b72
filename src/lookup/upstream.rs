//! Outbound request to the caller-ID API.
//!
//! # Responsibilities
//! - Build the fixed query string around the validated number
//! - Build the base headers plus the optional `e-auth*` block
//! - Issue one GET (redirects followed) and buffer the body as UTF-8
//!
//! # Design Decisions
//! - One shared `reqwest::Client`; clones share the connection pool
//! - The upstream's timeout is the client's total timeout, so a slow
//!   upstream surfaces as a transport error rather than a dropped request
//! - Status codes are not interpreted here; `outcome.rs` does that

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE, USER_AGENT,
};
use reqwest::redirect::Policy;
use thiserror::Error;
use url::Url;

use crate::config::schema::{TimeoutConfig, UpstreamConfig};
use crate::config::secrets::AuthSecrets;
use crate::lookup::number::PhoneNumber;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.eyecon-app.com/app/getnames.jsp";

/// Query parameters sent with every lookup, after `cli`.
pub const FIXED_QUERY: [(&str, &str); 6] = [
    ("lang", "en"),
    ("is_callerid", "true"),
    ("is_ic", "true"),
    ("cv", "vc_672_vn_4.2025.10.17.1932_a"),
    ("requestApi", "URLconnection"),
    ("source", "MenifaFragment"),
];

/// Errors raised while constructing the upstream client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid upstream base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// A fully buffered upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// The `content-type` header, empty when missing or not visible ASCII.
    pub content_type: String,
    pub body: String,
}

/// Build the upstream URL for one lookup: `cli` first, then the fixed set.
pub fn build_url(base: &Url, number: &PhoneNumber) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("cli", number.as_str())
        .extend_pairs(FIXED_QUERY);
    url
}

/// Build the outbound headers.
pub fn build_headers(secrets: &AuthSecrets) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(8);
    headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
    );

    if let Some(auth) = secrets.headers() {
        headers.insert(HeaderName::from_static("e-auth-v"), auth.version.clone());
        headers.insert(HeaderName::from_static("e-auth"), auth.token.clone());
        headers.insert(HeaderName::from_static("e-auth-c"), auth.client.clone());
        headers.insert(HeaderName::from_static("e-auth-k"), auth.key.clone());
    }

    headers
}

/// Client for the caller-ID API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
    secrets: Arc<AuthSecrets>,
}

impl UpstreamClient {
    /// Create a client from configuration and the startup secrets.
    pub fn new(
        upstream: &UpstreamConfig,
        timeouts: &TimeoutConfig,
        secrets: AuthSecrets,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(&upstream.base_url)?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .redirect(Policy::limited(upstream.max_redirects));
        if !upstream.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            secrets: Arc::new(secrets),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry the `e-auth*` headers.
    pub fn sends_auth(&self) -> bool {
        self.secrets.is_configured()
    }

    /// Perform the lookup and buffer the whole response.
    pub async fn fetch(&self, number: &PhoneNumber) -> Result<UpstreamResponse, reqwest::Error> {
        let response = self
            .http
            .get(build_url(&self.base_url, number))
            .headers(build_headers(&self.secrets))
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        // Always UTF-8, whatever charset the upstream declares.
        let body = String::from_utf8_lossy(&response.bytes().await?).into_owned();

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
