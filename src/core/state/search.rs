use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::search::SearchMsg, state::request::RequestTracker},
    domain::fragment::{Fragment, FragmentPage, FragmentQuery, FragmentScope},
};

/// Filters applied to every fragment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub scope: FragmentScope,
    pub dedupe: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            scope: FragmentScope::Any,
            dedupe: true,
        }
    }
}

/// Fragment search results for the active query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub fragments: Vec<Fragment>,
    /// Offset of the next page; `None` once exhausted
    pub next_offset: Option<u64>,
    /// Server's total-count hint
    pub total: u64,
    pub filters: SearchFilters,
    pub request: RequestTracker,
    pub page_size: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(10, SearchFilters::default())
    }
}

impl SearchState {
    pub fn new(page_size: u32, filters: SearchFilters) -> Self {
        Self {
            query: String::new(),
            fragments: vec![],
            next_offset: None,
            total: 0,
            filters,
            request: RequestTracker::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_offset.is_none()
    }

    /// SearchState-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::Submit(query) => {
                let query = query.trim();
                if query.is_empty() {
                    self.clear();
                    return vec![];
                }
                self.query = query.to_string();
                self.restart()
            }

            SearchMsg::Refresh => {
                if self.is_active() {
                    self.restart()
                } else {
                    vec![]
                }
            }

            SearchMsg::LoadMore => {
                if !self.is_active() {
                    return vec![];
                }
                let Some(offset) = self.next_offset else {
                    return vec![];
                };
                match self.request.try_begin() {
                    Some(token) => vec![Cmd::search_fragments(token, self.query_at(offset))],
                    None => vec![],
                }
            }

            SearchMsg::CycleScope => {
                self.filters.scope = self.filters.scope.next();
                self.restart_if_active()
            }

            SearchMsg::ToggleDedupe => {
                self.filters.dedupe = !self.filters.dedupe;
                self.restart_if_active()
            }

            SearchMsg::Clear => {
                self.clear();
                vec![]
            }

            SearchMsg::PageLoaded {
                token,
                offset,
                result,
            } => {
                if !self.request.finish(token) {
                    log::debug!("Dropping stale fragment page at offset {offset} ({token:?})");
                    return vec![];
                }
                match result {
                    Ok(page) => {
                        self.apply_page(offset, page);
                        vec![]
                    }
                    Err(error) => {
                        vec![Cmd::log_error(format!(
                            "Fragment search for '{}' at offset {offset} failed: {error}",
                            self.query
                        ))]
                    }
                }
            }
        }
    }

    fn query_at(&self, offset: u64) -> FragmentQuery {
        FragmentQuery {
            query: self.query.clone(),
            limit: self.page_size,
            offset,
            dedupe: self.filters.dedupe,
            scope: self.filters.scope,
        }
    }

    /// Discard results and fetch offset 0, superseding any in-flight request.
    fn restart(&mut self) -> Vec<Cmd> {
        self.fragments.clear();
        self.total = 0;
        self.next_offset = Some(0);
        let token = self.request.begin();
        vec![Cmd::search_fragments(token, self.query_at(0))]
    }

    fn restart_if_active(&mut self) -> Vec<Cmd> {
        if self.is_active() {
            self.restart()
        } else {
            vec![]
        }
    }

    fn clear(&mut self) {
        self.query.clear();
        self.fragments.clear();
        self.total = 0;
        self.next_offset = None;
        self.request.invalidate();
    }

    fn apply_page(&mut self, offset: u64, page: FragmentPage) {
        if offset == 0 {
            self.fragments.clear();
        }
        let short = page.fragments.len() < self.page_size as usize;
        self.fragments.extend(page.fragments);
        self.next_offset = if short { None } else { page.next_offset };
        self.total = page.total;
    }
}
