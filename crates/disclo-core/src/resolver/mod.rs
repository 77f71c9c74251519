//! Download-link resolution.
//!
//! The vendor exposes the same document under several URL shapes: an
//! interactive detail page, an authenticated download endpoint and a static
//! file host. Bare download links tend to bounce to a login wall, so the
//! resolver rewrites whatever the caller hands in onto the most reliable
//! shape it can build, trying each rule in order:
//!
//! 1. `announcementId` + `announcementTime` date → static file host.
//! 2. `announcementId` only → download endpoint by `bulletinId`.
//! 3. Already an http(s) URL → unchanged.
//! 4. Anything else is rejected.
//!
//! Ids are passed through as they come; unseen id formats are not guessed at.

pub mod model;

use chrono::NaiveDate;
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::error::{DiscloError, DiscloResult};
use model::{DownloadTarget, LinkParams, ResolveRule, ResolverHosts};

type Rule = fn(&str, &LinkParams, &ResolverHosts) -> Option<String>;

/// Rules in priority order; the first one that yields a URL wins.
const RULES: &[(ResolveRule, Rule)] = &[
    (ResolveRule::StaticFile, static_file),
    (ResolveRule::BulletinDownload, bulletin_download),
    (ResolveRule::Passthrough, passthrough),
];

/// Resolve a caller-supplied link or identifier into a download target.
pub fn resolve(input: &str, hosts: &ResolverHosts) -> DiscloResult<DownloadTarget> {
    let params = extract_params(input);

    for (rule, apply) in RULES {
        if let Some(url) = apply(input, &params, hosts) {
            debug!(rule = %rule, %url, "Resolved download link");
            return Ok(DownloadTarget { url, rule: *rule });
        }
    }

    Err(DiscloError::invalid_url(input))
}

/// Pull `announcementId` and `announcementTime` out of a link.
///
/// Absolute URLs contribute their query string. Anything else is treated as
/// a bare query: the text after the first `?`, or the whole input.
pub fn extract_params(input: &str) -> LinkParams {
    let input = input.trim();
    let query = match Url::parse(input) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => {
            let tail = input.split_once('?').map_or(input, |(_, q)| q);
            tail.split('#').next().unwrap_or_default().to_string()
        }
    };

    let mut params = LinkParams::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "announcementId" if params.announcement_id.is_none() => {
                params.announcement_id = Some(value.to_string());
            }
            "announcementTime" if params.announcement_time.is_none() => {
                params.announcement_time = Some(value.to_string());
            }
            _ => {}
        }
    }
    params
}

/// The leading `YYYY-MM-DD` of an announcement time, if it is a real date.
///
/// Well-shaped but impossible dates such as `2023-02-30` yield `None`.
pub fn date_prefix(value: &str) -> Option<&str> {
    let prefix = value.get(..10)?;
    let bytes = prefix.as_bytes();
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()?;
    Some(prefix)
}

fn static_file(_input: &str, params: &LinkParams, hosts: &ResolverHosts) -> Option<String> {
    let id = params.announcement_id.as_deref()?;
    let date = params.announcement_time.as_deref().and_then(date_prefix)?;

    let file = format!("{}.PDF", id);

    let mut url = hosts.static_host.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["finalpage", date, file.as_str()]);
    Some(url.to_string())
}

fn bulletin_download(_input: &str, params: &LinkParams, hosts: &ResolverHosts) -> Option<String> {
    let id = params.announcement_id.as_deref()?;

    let mut url = hosts.download_host.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["new", "announcement", "download"]);
    url.query_pairs_mut().clear().append_pair("bulletinId", id);
    Some(url.to_string())
}

fn passthrough(input: &str, _params: &LinkParams, _hosts: &ResolverHosts) -> Option<String> {
    let input = input.trim();
    // The URL parser strips tabs and newlines, the Location header would not.
    if input.chars().any(char::is_control) {
        return None;
    }
    let url = Url::parse(input).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| input.to_string())
}
