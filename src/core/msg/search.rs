use serde::{Deserialize, Serialize};

use crate::{
    core::state::request::RequestToken,
    domain::fragment::FragmentPage,
};

/// Messages specific to SearchState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    /// Start a new query from offset 0; an empty query clears the search
    Submit(String),
    /// Re-run the active query from offset 0
    Refresh,
    /// Fetch the next offset of the active query
    LoadMore,
    /// Advance to the next scope and restart an active query
    CycleScope,
    ToggleDedupe,
    /// Drop the query and its results
    Clear,
    /// A fragment fetch completed
    PageLoaded {
        token: RequestToken,
        offset: u64,
        result: Result<FragmentPage, String>,
    },
}

impl SearchMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}
