//! Announcement fetching.

pub mod model;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::DiscloResult;
use model::{Announcement, DisclosureRecord};

/// Anything that can list disclosure records for a stock code.
///
/// A source with nothing to report for a code returns an empty list rather
/// than an error.
#[async_trait]
pub trait DisclosureSource: Send + Sync {
    async fn fetch(&self, stock_code: &str) -> DiscloResult<Vec<DisclosureRecord>>;
}

/// Use the requested stock code, or the default when it is missing or blank.
pub fn stock_code_or_default<'a>(requested: Option<&'a str>, default: &'a str) -> &'a str {
    match requested.map(str::trim) {
        Some(code) if !code.is_empty() => code,
        _ => default,
    }
}

/// Fetch announcements for a stock code, optionally filtered by keyword.
///
/// Source failures are returned as-is; there are no partial results.
pub async fn list_announcements(
    source: &dyn DisclosureSource,
    stock_code: &str,
    keyword: Option<&str>,
) -> DiscloResult<Vec<Announcement>> {
    info!(stock_code, ?keyword, "Fetching reports");

    let records = source.fetch(stock_code).await.map_err(|e| {
        error!(stock_code, error = %e, "Error fetching reports");
        e
    })?;

    let announcements = records.into_iter().map(Announcement::from_record).collect();
    Ok(filter_by_keyword(announcements, keyword))
}

/// Keep only announcements whose title contains the keyword. An empty or
/// missing keyword keeps everything.
pub fn filter_by_keyword(announcements: Vec<Announcement>, keyword: Option<&str>) -> Vec<Announcement> {
    match keyword {
        Some(k) if !k.is_empty() => announcements
            .into_iter()
            .filter(|a| a.title_contains(k))
            .collect(),
        _ => announcements,
    }
}
