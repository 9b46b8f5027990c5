use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a record returned by the API.
///
/// The backend is not consistent about id types, so both numbers and strings
/// are accepted and compared as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategory {
    pub id: RecordId,
    pub name: String,
}

/// An official developer communication scraped from a game forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub source_url: String,
    pub posted_at: DateTime<Utc>,
    pub author: Author,
    pub region: Region,
    pub forum_category: ForumCategory,
}

impl Post {
    /// Text shown on the card: the summary when present, otherwise the body.
    pub fn preview(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => summary,
            _ => &self.content,
        }
    }

    pub fn posted_date(&self) -> String {
        self.posted_at.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }

    pub fn posted_time(&self) -> String {
        self.posted_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Sort a page of posts newest first.
///
/// The server gives no ordering guarantee for a page.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}
