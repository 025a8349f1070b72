use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::HeaderMap,
};
use url::form_urlencoded;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::lookup::{log_chain, LookupError, LookupOutcome, PhoneNumber, UpstreamClient};
use crate::observability::metrics;

/// `GET /api/lookup?number=...`
///
/// Always answers with JSON; every failure is folded into a `LookupOutcome`.
pub async fn lookup(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> LookupOutcome {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    let outcome = match resolve(&state.upstream, query.as_deref()).await {
        Ok(outcome) => outcome,
        Err(LookupError::Transport(e)) => {
            let outcome = LookupOutcome::transport(&e);
            tracing::warn!(request_id = %request_id, error = %log_chain(e), "Upstream fetch failed");
            outcome
        }
        Err(e) => e.into(),
    };

    match &outcome {
        LookupOutcome::UpstreamStatus { http_code, .. } => {
            tracing::warn!(request_id = %request_id, http_code, "Upstream rejected lookup");
        }
        LookupOutcome::InvalidInput(reason) => {
            tracing::debug!(request_id = %request_id, reason = %reason, "Lookup rejected");
        }
        _ => {}
    }

    tracing::info!(
        request_id = %request_id,
        outcome = outcome.kind(),
        status = outcome.status().as_u16(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Lookup completed"
    );
    metrics::record_lookup(outcome.kind(), start_time);

    outcome
}

async fn resolve(upstream: &UpstreamClient, query: Option<&str>) -> Result<LookupOutcome, LookupError> {
    let raw = number_param(query).unwrap_or_default();
    let number = PhoneNumber::parse(&raw)?;

    let response = upstream.fetch(&number).await?;
    metrics::record_upstream_status(response.status);

    Ok(LookupOutcome::from_upstream(response))
}

/// First `number` value in the query string, percent-decoded.
fn number_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.into_owned())
}
