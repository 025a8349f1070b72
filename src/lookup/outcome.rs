//! Response normalization.
//!
//! Every lookup ends in exactly one of five shapes:
//!
//! | Outcome          | Status | Body                                              |
//! |------------------|--------|---------------------------------------------------|
//! | `Json`           | 200    | upstream JSON, verbatim                           |
//! | `Raw`            | 200    | `{"raw": <text>}`                                 |
//! | `InvalidInput`   | 400    | `{"error": <reason>}`                             |
//! | `UpstreamStatus` | 502    | `{"error", "http_code", "body_preview"}`          |
//! | `Transport`      | 502    | `{"error": "Fetch error", "detail": <message>}`   |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::lookup::error::{error_chain, InputError, LookupError};
use crate::lookup::upstream::UpstreamResponse;

/// Maximum number of characters of a failed upstream body echoed back.
pub const BODY_PREVIEW_CHARS: usize = 2000;

/// The normalized result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Upstream answered 200 with a JSON content type and a parseable body.
    Json(Value),
    /// Upstream answered 200 with anything else, or with unparseable JSON.
    Raw(String),
    /// The inbound `number` was rejected.
    InvalidInput(InputError),
    /// Upstream answered with a status other than 200.
    UpstreamStatus { http_code: u16, body_preview: String },
    /// The upstream call failed before a full response was read.
    Transport { detail: String },
}

impl LookupOutcome {
    /// Normalize a complete upstream response.
    pub fn from_upstream(response: UpstreamResponse) -> Self {
        if response.status != 200 {
            return Self::UpstreamStatus {
                http_code: response.status,
                body_preview: preview(&response.body),
            };
        }

        if response.content_type.contains("application/json") {
            if let Ok(value) = serde_json::from_str::<Value>(&response.body) {
                return Self::Json(value);
            }
        }

        Self::Raw(response.body)
    }

    /// A failed upstream call; `detail` is the full error chain.
    pub fn transport(err: &reqwest::Error) -> Self {
        Self::Transport {
            detail: error_chain(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Json(_) | Self::Raw(_) => StatusCode::OK,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { .. } | Self::Transport { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Raw(_) => "raw",
            Self::InvalidInput(_) => "invalid_input",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::Transport { .. } => "transport",
        }
    }

    /// The JSON body sent to the caller.
    pub fn into_body(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Raw(text) => json!({ "raw": text }),
            Self::InvalidInput(reason) => json!({ "error": reason.to_string() }),
            Self::UpstreamStatus {
                http_code,
                body_preview,
            } => json!({
                "error": "API request failed",
                "http_code": http_code,
                "body_preview": body_preview,
            }),
            Self::Transport { detail } => json!({
                "error": "Fetch error",
                "detail": detail,
            }),
        }
    }
}

impl From<LookupError> for LookupOutcome {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Input(reason) => Self::InvalidInput(reason),
            LookupError::Transport(e) => Self::transport(&e),
        }
    }
}

impl IntoResponse for LookupOutcome {
    fn into_response(self) -> Response {
        (self.status(), Json(self.into_body())).into_response()
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
