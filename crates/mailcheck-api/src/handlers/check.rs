//! Domain check handler

use axum::{body::Bytes, extract::State, Json};
use mailcheck_common::{CheckRequest, DomainCheckResult, Error};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Check a domain and return the full check history
///
/// The body is decoded by hand so that every decode failure, including a
/// missing `domainurl` or a missing `Content-Type`, is a 400 carrying the
/// decoder's message. Only the first JSON value is read; anything after it
/// is ignored.
pub async fn check_domain(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<DomainCheckResult>>, ApiError> {
    let request = decode_request(&body).map_err(|e| {
        warn!("Error decoding request: {}", e);
        Error::Validation(e)
    })?;

    let result = state.checker.check(&request.domain_url).await;
    let history = state.history.append_and_snapshot(result).await;

    debug!(entries = history.len(), "Returning check history");

    Ok(Json(history))
}

fn decode_request(body: &[u8]) -> Result<CheckRequest, String> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<CheckRequest>()
        .next()
    {
        Some(Ok(request)) => Ok(request),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("EOF".to_string()),
    }
}
