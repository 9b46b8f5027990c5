//! HTTP client for the blue-post REST API
//!
//! Three endpoints are used: the paged post feed, fragment search (offset
//! pagination with the cursor carried in response headers) and the topic list
//! backing autocomplete.

use std::time::Duration;

use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    domain::{
        fragment::{Fragment, FragmentPage, FragmentQuery},
        post::Post,
    },
    infrastructure::config::ApiConfig,
};

pub const NEXT_OFFSET_HEADER: &str = "X-Next-Offset";
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, timeout or undecodable body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs.max(1)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /BluePosts?page={page}&pageSize={page_size}`
    pub async fn fetch_posts(&self, page: u32, page_size: u32) -> Result<Vec<Post>, ApiError> {
        let response = self
            .http
            .get(self.url("BluePosts"))
            .query(&[("page", page), ("pageSize", page_size)])
            .send()
            .await?;
        json_body(check_status(response)?).await
    }

    /// `GET /search/fragments` for one page of fragments.
    pub async fn search_fragments(&self, query: &FragmentQuery) -> Result<FragmentPage, ApiError> {
        let response = self
            .http
            .get(self.url("search/fragments"))
            .query(&query.to_params())
            .send()
            .await?;
        let response = check_status(response)?;
        let (next_offset, total) = parse_pagination_headers(response.headers());
        let fragments: Vec<Fragment> = json_body(response).await?;

        tracing::debug!(
            offset = query.offset,
            received = fragments.len(),
            ?next_offset,
            ?total,
            "fragment page"
        );
        let total = total.unwrap_or(query.offset + fragments.len() as u64);
        Ok(FragmentPage {
            fragments,
            next_offset,
            total,
        })
    }

    /// `GET /topics`
    pub async fn fetch_topics(&self) -> Result<Vec<String>, ApiError> {
        let response = self.http.get(self.url("topics")).send().await?;
        json_body(check_status(response)?).await
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(response.json::<T>().await?)
}

/// Read `X-Next-Offset` and `X-Total-Count`. An empty, absent or malformed
/// next offset means the result set is exhausted.
pub fn parse_pagination_headers(headers: &HeaderMap) -> (Option<u64>, Option<u64>) {
    let number = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<u64>().ok())
    };
    (number(NEXT_OFFSET_HEADER), number(TOTAL_COUNT_HEADER))
}
