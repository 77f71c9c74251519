//! Announcement domain models.

use serde::{Deserialize, Serialize};

/// A row as handed back by a disclosure source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureRecord {
    pub title: String,
    pub link: String,
    pub time: String,
}

/// A disclosure announcement in the shape the API returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub announcement_title: String,
    pub adjunct_url: String,
    pub announcement_time: String,
}

impl Announcement {
    /// Create an Announcement from a source record.
    pub fn from_record(record: DisclosureRecord) -> Self {
        Self {
            announcement_title: record.title,
            adjunct_url: record.link,
            announcement_time: record.time,
        }
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, keyword: &str) -> bool {
        self.announcement_title
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
