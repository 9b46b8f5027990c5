use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg, state::request::RequestTracker},
    domain::post::{sort_newest_first, Post, RecordId},
};

/// Shown in place of the feed when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load posts. Please try again later.";

/// Latest-posts feed: accumulated pages plus the revealed prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    pub posts: Vec<Post>,
    /// Number of leading posts that are rendered
    pub displayed: usize,
    /// 1-based page number of the next fetch
    pub next_page: u32,
    pub has_more: bool,
    pub request: RequestTracker,
    pub load_error: Option<String>,
    pub page_size: u32,
    pub display_step: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl FeedState {
    pub fn new(page_size: u32, display_step: usize) -> Self {
        Self {
            posts: vec![],
            displayed: 0,
            next_page: 1,
            has_more: true,
            request: RequestTracker::new(),
            load_error: None,
            page_size: page_size.max(1),
            display_step: display_step.max(1),
        }
    }

    pub fn displayed_posts(&self) -> &[Post] {
        &self.posts[..self.displayed.min(self.posts.len())]
    }

    pub fn has_hidden(&self) -> bool {
        self.displayed < self.posts.len()
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    /// Whether another "load more" could show anything new.
    pub fn can_load_more(&self) -> bool {
        self.has_hidden() || self.has_more
    }

    /// FeedState-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::LoadFirstPage => {
                let token = self.request.begin();
                vec![Cmd::fetch_posts(token, 1, self.page_size)]
            }

            FeedMsg::LoadMore => {
                if self.has_hidden() {
                    self.reveal_next();
                    return vec![];
                }
                if !self.has_more {
                    return vec![];
                }
                match self.request.try_begin() {
                    Some(token) => vec![Cmd::fetch_posts(token, self.next_page, self.page_size)],
                    None => vec![],
                }
            }

            FeedMsg::PageLoaded {
                token,
                page,
                result,
            } => {
                if !self.request.finish(token) {
                    log::debug!("Dropping stale feed page {page} ({token:?})");
                    return vec![];
                }
                match result {
                    Ok(posts) => {
                        self.apply_page(page, posts);
                        vec![]
                    }
                    Err(error) => {
                        if self.posts.is_empty() {
                            self.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
                        }
                        vec![Cmd::log_error(format!(
                            "Failed to load posts page {page}: {error}"
                        ))]
                    }
                }
            }
        }
    }

    fn apply_page(&mut self, page: u32, mut posts: Vec<Post>) {
        self.has_more = posts.len() == self.page_size as usize;
        sort_newest_first(&mut posts);

        if page <= 1 {
            self.posts.clear();
            self.displayed = 0;
        }

        let mut seen: HashSet<RecordId> = self.posts.iter().map(|p| p.id.clone()).collect();
        self.posts
            .extend(posts.into_iter().filter(|p| seen.insert(p.id.clone())));

        self.next_page = page + 1;
        self.load_error = None;
        self.reveal_next();
    }

    fn reveal_next(&mut self) {
        self.displayed = (self.displayed + self.display_step).min(self.posts.len());
    }
}
