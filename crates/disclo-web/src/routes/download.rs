//! Download redirect route handler.

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use disclo_core::resolver;
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::Authorized;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub url: String,
}

/// GET /api/download - Redirect (302) to the resolved document URL.
pub async fn download(
    State(state): State<AppState>,
    _auth: Authorized,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let target = resolver::resolve(&query.url, &state.hosts).map_err(|e| {
        warn!(url = %query.url, "Unresolvable download link");
        ApiError::from(e)
    })?;

    let location = HeaderValue::from_str(&target.url).map_err(|_| {
        warn!(url = %target.url, "Resolved link is not a valid Location header");
        ApiError::BadRequest(format!("Invalid URL format: {}", query.url))
    })?;

    info!(rule = %target.rule, url = %target.url, "Redirecting download");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
