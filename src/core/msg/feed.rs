use serde::{Deserialize, Serialize};

use crate::{core::state::request::RequestToken, domain::post::Post};

/// Messages specific to FeedState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    /// Fetch page 1, replacing the list (initial load and refresh)
    LoadFirstPage,
    /// Reveal hidden posts, or fetch the next page when none are hidden
    LoadMore,
    /// A page fetch completed
    PageLoaded {
        token: RequestToken,
        page: u32,
        result: Result<Vec<Post>, String>,
    },
}

impl FeedMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}
