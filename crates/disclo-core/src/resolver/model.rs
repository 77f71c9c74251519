//! Resolver domain models.

use serde::Serialize;
use url::Url;

use crate::error::{DiscloError, DiscloResult};

/// Default host serving raw announcement PDFs.
pub const DEFAULT_STATIC_HOST: &str = "http://static.cninfo.com.cn";

/// Default host of the vendor's download endpoint.
pub const DEFAULT_DOWNLOAD_HOST: &str = "http://www.cninfo.com.cn";

/// Which rule produced a download target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveRule {
    /// `{static}/finalpage/{date}/{id}.PDF`
    StaticFile,
    /// `{download}/new/announcement/download?bulletinId={id}`
    BulletinDownload,
    /// Input was already an http(s) URL.
    Passthrough,
}

impl ResolveRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaticFile => "static_file",
            Self::BulletinDownload => "bulletin_download",
            Self::Passthrough => "passthrough",
        }
    }
}

impl std::fmt::Display for ResolveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved download URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadTarget {
    pub url: String,
    pub rule: ResolveRule,
}

/// Identifying fields pulled out of a caller-supplied link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkParams {
    pub announcement_id: Option<String>,
    pub announcement_time: Option<String>,
}

/// Hosts the resolver rewrites links onto.
#[derive(Debug, Clone)]
pub struct ResolverHosts {
    pub(crate) static_host: Url,
    pub(crate) download_host: Url,
}

impl ResolverHosts {
    /// Parse both hosts. Each must be an absolute http(s) URL.
    pub fn new(static_host: &str, download_host: &str) -> DiscloResult<Self> {
        Ok(Self {
            static_host: parse_host(static_host)?,
            download_host: parse_host(download_host)?,
        })
    }

    /// The vendor's public hosts.
    pub fn cninfo() -> DiscloResult<Self> {
        Self::new(DEFAULT_STATIC_HOST, DEFAULT_DOWNLOAD_HOST)
    }
}

fn parse_host(raw: &str) -> DiscloResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| DiscloError::config(format!("invalid host '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(DiscloError::config(format!(
            "host '{}' must be an http(s) base URL",
            raw
        )));
    }
    Ok(url)
}
