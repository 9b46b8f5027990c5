use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::domain::post::RecordId;

/// Narrowing filter for fragment search.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FragmentScope {
    #[default]
    Any,
    Retail,
    Ptr,
    Classic,
}

impl FragmentScope {
    /// Next scope in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FragmentScope::Any => FragmentScope::Retail,
            FragmentScope::Retail => FragmentScope::Ptr,
            FragmentScope::Ptr => FragmentScope::Classic,
            FragmentScope::Classic => FragmentScope::Any,
        }
    }

    /// Value for the `scope` query parameter; `Any` is never sent.
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            FragmentScope::Any => None,
            other => Some(other.into()),
        }
    }
}

/// A ranked, highlighted excerpt of a post matching a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub post_id: RecordId,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub text_html: Option<String>,
    #[serde(default)]
    pub matched_terms: Option<Vec<String>>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub post_title: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default, rename = "isPvP")]
    pub is_pvp: bool,
}

impl Fragment {
    /// Highlighted text when the server provided it, raw text otherwise.
    pub fn body(&self) -> &str {
        self.text_html.as_deref().unwrap_or(&self.text)
    }

    pub fn scope_label(&self) -> &str {
        self.scope.as_deref().unwrap_or("Retail")
    }

    pub fn posted_date(&self) -> String {
        self.posted_at.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }

    pub fn posted_time(&self) -> String {
        self.posted_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// One page of fragment results with its out-of-band pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentPage {
    pub fragments: Vec<Fragment>,
    /// Offset of the next page; `None` once the result set is exhausted.
    pub next_offset: Option<u64>,
    pub total: u64,
}

/// Parameters of a single `/search/fragments` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentQuery {
    pub query: String,
    pub limit: u32,
    pub offset: u64,
    pub dedupe: bool,
    pub scope: FragmentScope,
}

impl FragmentQuery {
    /// Query string pairs in the order the server documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.clone()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("dedupe", self.dedupe.to_string()),
        ];
        if let Some(scope) = self.scope.as_query_value() {
            params.push(("scope", scope.to_string()));
        }
        params
    }
}
