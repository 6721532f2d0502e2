//! Core types for Reel

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Author of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// A video entry as served by the videos endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    /// HLS playlist used for streaming playback
    #[serde(rename = "hlsURL")]
    pub streaming_url: String,
    /// Progressive download of the full file
    #[serde(rename = "fullURL")]
    pub download_url: String,
    /// Markdown body
    pub description: String,
    /// Raw timestamp, e.g. `2022-09-20T14:02:11.123Z`
    pub published_at: String,
    pub author: Author,
}

impl Video {
    /// Parsed publish time, `None` if the server sent something unreadable
    pub fn published_date(&self) -> Option<DateTime<FixedOffset>> {
        parse_published_at(&self.published_at)
    }
}

/// Parse a `yyyy-MM-dd'T'HH:mm:ss.SSS` timestamp followed by `Z` or a `±HH:MM`
/// offset.
pub fn parse_published_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?;

    // RFC 3339 allows any fraction length; the feed always carries milliseconds.
    let (_, rest) = raw.split_once('.')?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    (digits == 3).then_some(parsed)
}
