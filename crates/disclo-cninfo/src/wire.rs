//! cninfo wire types and their mapping onto disclosure records.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use disclo_core::announcement::model::DisclosureRecord;
use serde::Deserialize;
use url::Url;

/// cninfo reports announcement times in China Standard Time.
pub const CST_OFFSET_SECS: i32 = 8 * 3600;

/// `/new/data/szse_stock.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockList {
    #[serde(default)]
    pub stock_list: Vec<StockEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub code: String,
    pub org_id: String,
}

impl StockList {
    pub fn org_id(&self, code: &str) -> Option<&str> {
        self.stock_list
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.org_id.as_str())
    }
}

/// `/new/hisAnnouncement/query`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub announcements: Option<Vec<AnnouncementItem>>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, rename = "totalpages")]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementItem {
    pub sec_code: Option<String>,
    pub announcement_id: String,
    pub announcement_title: String,
    /// Milliseconds since the Unix epoch.
    pub announcement_time: i64,
}

/// Drop the `<em>` highlight tags the search wraps around matches.
pub fn clean_title(title: &str) -> String {
    title.replace("<em>", "").replace("</em>", "").trim().to_string()
}

/// Render a millisecond timestamp as a `YYYY-MM-DD` date in China time.
pub fn format_date(millis: i64) -> Result<String> {
    let offset = FixedOffset::east_opt(CST_OFFSET_SECS).context("invalid CST offset")?;
    let utc = DateTime::from_timestamp_millis(millis)
        .with_context(|| format!("announcement time out of range: {}", millis))?;
    Ok(utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
}

/// Build the interactive detail-page link for an announcement.
pub fn detail_link(base_url: &str, stock_code: &str, org_id: &str, id: &str, date: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &format!("{}/new/disclosure/detail", base_url),
        &[
            ("stockCode", stock_code),
            ("announcementId", id),
            ("orgId", org_id),
            ("announcementTime", date),
        ],
    )
    .context("Failed to build announcement link")?;
    Ok(url.to_string())
}

impl AnnouncementItem {
    /// Map a search hit onto a disclosure record.
    pub fn into_record(self, base_url: &str, stock_code: &str, org_id: &str) -> Result<DisclosureRecord> {
        let date = format_date(self.announcement_time)?;
        let code = self.sec_code.as_deref().unwrap_or(stock_code);
        let link = detail_link(base_url, code, org_id, &self.announcement_id, &date)?;

        Ok(DisclosureRecord {
            title: clean_title(&self.announcement_title),
            link,
            time: date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY_BODY: &str = r#"{
        "classifiedAnnouncements": null,
        "totalSecurities": 0,
        "totalAnnouncement": 2,
        "totalRecordNum": 2,
        "announcements": [
            {
                "secCode": "000001",
                "secName": "平安银行",
                "orgId": "gssz0000001",
                "announcementId": "1218563079",
                "announcementTitle": "平安银行：<em>2023</em>年第三季度报告",
                "announcementTime": 1702051200000,
                "adjunctUrl": "finalpage/2023-12-09/1218563079.PDF",
                "adjunctType": "PDF"
            },
            {
                "secCode": null,
                "announcementId": "1218000001",
                "announcementTitle": "董事会决议公告",
                "announcementTime": 1700000000000
            }
        ],
        "categoryList": null,
        "hasMore": false,
        "totalpages": 1
    }"#;

    #[test]
    fn test_parse_query_response() {
        let resp: QueryResponse = serde_json::from_str(QUERY_BODY).unwrap();
        assert_eq!(resp.total_pages, 1);
        assert!(!resp.has_more);
        assert_eq!(resp.announcements.unwrap().len(), 2);
    }

    #[test]
    fn test_null_announcements() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"announcements": null, "hasMore": false, "totalpages": 0}"#).unwrap();
        assert!(resp.announcements.is_none());
    }

    #[test]
    fn test_into_record() {
        let resp: QueryResponse = serde_json::from_str(QUERY_BODY).unwrap();
        let item = resp.announcements.unwrap().into_iter().next().unwrap();
        let record = item
            .into_record("http://www.cninfo.com.cn", "000001", "gssz0000001")
            .unwrap();

        assert_eq!(record.title, "平安银行：2023年第三季度报告");
        assert_eq!(record.time, "2023-12-09");
        assert_eq!(
            record.link,
            "http://www.cninfo.com.cn/new/disclosure/detail?stockCode=000001&announcementId=1218563079&orgId=gssz0000001&announcementTime=2023-12-09"
        );
    }

    #[test]
    fn test_date_uses_china_time() {
        // 2023-12-08T16:00:00Z is midnight on the 9th in Beijing.
        assert_eq!(format_date(1702051200000).unwrap(), "2023-12-09");
        assert_eq!(format_date(1702051199000).unwrap(), "2023-12-08");
    }

    #[test]
    fn test_org_id_lookup() {
        let list: StockList = serde_json::from_str(
            r#"{"stockList": [
                {"orgId": "gssz0000001", "category": "A股", "code": "000001", "pinyin": "payh", "zwjc": "平安银行"},
                {"orgId": "gssh0600519", "category": "A股", "code": "600519", "pinyin": "gzmt", "zwjc": "贵州茅台"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(list.org_id("600519"), Some("gssh0600519"));
        assert_eq!(list.org_id("999999"), None);
    }
}
