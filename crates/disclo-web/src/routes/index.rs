//! Index route handler.
//!
//! Serves the embedded single-page front end.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the report browser page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
