//! cninfo HTTP client.
//!
//! Uses `/new/data/szse_stock.json` to map a stock code onto cninfo's
//! `orgId`, then pages through `/new/hisAnnouncement/query`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, FixedOffset, Utc};
use disclo_core::announcement::model::DisclosureRecord;
use disclo_core::announcement::DisclosureSource;
use disclo_core::config::CninfoConfig;
use disclo_core::{DiscloError, DiscloResult};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::wire::{QueryResponse, StockList, CST_OFFSET_SECS};

/// Upper bound on the search window, in days.
const MAX_LOOKBACK_DAYS: i64 = 36_500;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// cninfo disclosure client.
#[derive(Clone)]
pub struct CninfoClient {
    base_url: String,
    page_size: u32,
    max_pages: u32,
    lookback_days: i64,
    client: reqwest::Client,
}

impl CninfoClient {
    /// Create a new client from config.
    pub fn new(config: &CninfoConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            max_pages: config.max_pages.max(1),
            lookback_days: config.lookback_days.clamp(0, MAX_LOOKBACK_DAYS),
            client,
        }
    }

    /// Look up cninfo's `orgId` for a stock code.
    pub async fn org_id(&self, stock_code: &str) -> Result<Option<String>> {
        let response = self.client
            .get(format!("{}/new/data/szse_stock.json", self.base_url))
            .send()
            .await
            .context("Failed to connect to cninfo")?;

        let list: StockList = read_json(response, "stock list").await?;
        Ok(list.org_id(stock_code).map(str::to_string))
    }

    /// Fetch one page of announcements.
    pub async fn query_page(
        &self,
        stock_code: &str,
        org_id: &str,
        page: u32,
        date_range: &str,
    ) -> Result<QueryResponse> {
        let page_num = page.to_string();
        let page_size = self.page_size.to_string();
        let stock = format!("{},{}", stock_code, org_id);
        let form = [
            ("pageNum", page_num.as_str()),
            ("pageSize", page_size.as_str()),
            ("column", "szse"),
            ("tabName", "fulltext"),
            ("plate", ""),
            ("stock", stock.as_str()),
            ("searchkey", ""),
            ("secid", ""),
            ("category", ""),
            ("trade", ""),
            ("seDate", date_range),
            ("sortName", ""),
            ("sortType", ""),
            ("isHLtitle", "true"),
        ];

        let response = self.client
            .post(format!("{}/new/hisAnnouncement/query", self.base_url))
            .form(&form)
            .send()
            .await
            .context("Failed to connect to cninfo")?;

        read_json(response, "announcement query").await
    }

    /// Fetch all announcements for a stock code within the lookback window.
    pub async fn announcements(&self, stock_code: &str) -> Result<Vec<DisclosureRecord>> {
        let Some(org_id) = self.org_id(stock_code).await? else {
            info!(stock_code, "Stock code not listed on cninfo");
            return Ok(Vec::new());
        };

        let date_range = self.date_range();
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let response = self.query_page(stock_code, &org_id, page, &date_range).await?;
            let has_next = has_next_page(&response, page) && page < self.max_pages;
            let items = response.announcements.unwrap_or_default();
            if items.is_empty() {
                break;
            }

            debug!(stock_code, page, count = items.len(), "Fetched announcement page");
            for item in items {
                records.push(item.into_record(&self.base_url, stock_code, &org_id)?);
            }

            if !has_next {
                break;
            }
            page += 1;
        }

        info!(stock_code, count = records.len(), "Fetched announcements from cninfo");
        Ok(records)
    }

    /// `start~end` covering the lookback window, in China time.
    fn date_range(&self) -> String {
        let now = Utc::now();
        let end = FixedOffset::east_opt(CST_OFFSET_SECS)
            .map(|offset| now.with_timezone(&offset).date_naive())
            .unwrap_or_else(|| now.date_naive());
        let start = end
            .checked_sub_signed(Duration::days(self.lookback_days))
            .unwrap_or(end);
        format!("{}~{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
    }
}

fn has_next_page(response: &QueryResponse, page: u32) -> bool {
    response.has_more || page < response.total_pages
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("cninfo {} error ({}): {}", what, status, body);
    }

    response
        .json()
        .await
        .with_context(|| format!("Failed to parse cninfo {} response", what))
}

#[async_trait]
impl DisclosureSource for CninfoClient {
    async fn fetch(&self, stock_code: &str) -> DiscloResult<Vec<DisclosureRecord>> {
        self.announcements(stock_code)
            .await
            .map_err(|e| DiscloError::upstream(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(has_more: bool, total_pages: u32) -> QueryResponse {
        QueryResponse {
            announcements: None,
            has_more,
            total_pages,
        }
    }

    #[test]
    fn test_has_next_page() {
        assert!(has_next_page(&response(true, 0), 1));
        assert!(has_next_page(&response(false, 3), 2));
        assert!(!has_next_page(&response(false, 3), 3));
        assert!(!has_next_page(&response(false, 0), 1));
    }

    #[test]
    fn test_date_range_shape() {
        let client = CninfoClient::new(&CninfoConfig {
            lookback_days: 30,
            ..CninfoConfig::default()
        });
        let range = client.date_range();
        let (start, end) = range.split_once('~').unwrap();
        assert_eq!(start.len(), 10);
        assert_eq!(end.len(), 10);
        assert!(start < end);
    }

    #[test]
    fn test_huge_lookback_is_clamped() {
        let client = CninfoClient::new(&CninfoConfig {
            lookback_days: i64::MAX,
            ..CninfoConfig::default()
        });
        assert_eq!(client.lookback_days, MAX_LOOKBACK_DAYS);
        let range = client.date_range();
        let (start, end) = range.split_once('~').unwrap();
        assert!(start < end);

        let client = CninfoClient::new(&CninfoConfig {
            lookback_days: -5,
            ..CninfoConfig::default()
        });
        assert_eq!(client.lookback_days, 0);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CninfoClient::new(&CninfoConfig {
            base_url: "http://www.cninfo.com.cn/".to_string(),
            ..CninfoConfig::default()
        });
        assert_eq!(client.base_url, "http://www.cninfo.com.cn");
    }
}
