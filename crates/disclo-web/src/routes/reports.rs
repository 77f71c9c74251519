//! Report listing route handler.

use axum::{
    extract::{Query, State},
    Json,
};
use disclo_core::announcement::{self, model::Announcement};
use serde::Deserialize;

use crate::auth::Authorized;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportsQuery {
    #[serde(rename = "stockCode", alias = "stock_code")]
    pub stock_code: Option<String>,
    pub keyword: Option<String>,
}

/// GET /api/reports - List announcements for a stock code.
pub async fn list_reports(
    State(state): State<AppState>,
    _auth: Authorized,
    Query(query): Query<ReportsQuery>,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let stock_code = announcement::stock_code_or_default(
        query.stock_code.as_deref(),
        &state.default_stock_code,
    );

    let reports = announcement::list_announcements(
        state.source.as_ref(),
        stock_code,
        query.keyword.as_deref(),
    )
    .await?;

    Ok(Json(reports))
}
