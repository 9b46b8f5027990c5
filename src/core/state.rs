use serde::{Deserialize, Serialize};

pub mod feed;
pub mod request;
pub mod search;
pub mod system;
pub mod topics;
pub mod ui;

pub use feed::FeedState;
pub use search::{SearchFilters, SearchState};
pub use system::SystemState;
pub use topics::TopicsState;
pub use ui::{Focus, UiState};

use crate::{domain::dock::DockConfig, infrastructure::config::Config};

/// Which result list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Feed,
    Search,
}

/// Unified application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub mode: Mode,
    pub feed: FeedState,
    pub search: SearchState,
    pub topics: TopicsState,
    pub ui: UiState,
    pub system: SystemState,
    #[serde(skip)]
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with page sizes and filters taken from config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            feed: FeedState::new(config.feed.page_size, config.feed.display_step),
            search: SearchState::new(
                config.search.page_size,
                SearchFilters {
                    scope: config.search.scope,
                    dedupe: config.search.dedupe,
                },
            ),
            config,
            ..Default::default()
        }
    }

    pub fn is_searching(&self) -> bool {
        self.mode == Mode::Search
    }

    pub fn dock_config(&self) -> DockConfig {
        DockConfig::from(&self.config.hero)
    }

    /// Whether the mode-appropriate list could grow on "load more"
    pub fn can_load_more(&self) -> bool {
        match self.mode {
            Mode::Feed => self.feed.can_load_more(),
            Mode::Search => self.search.is_active() && !self.search.is_exhausted(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.mode {
            Mode::Feed => self.feed.is_loading(),
            Mode::Search => self.search.is_loading(),
        }
    }

    /// Number of rendered items in the active list
    pub fn visible_len(&self) -> usize {
        match self.mode {
            Mode::Feed => self.feed.displayed_posts().len(),
            Mode::Search => self.search.fragments.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.mode, Mode::Feed);
        assert!(state.feed.posts.is_empty());
        assert!(!state.search.is_active());
        assert!(!state.system.should_quit);
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn test_new_with_config_applies_sizes() {
        let mut config = Config::default();
        config.feed.page_size = 25;
        config.feed.display_step = 5;
        config.search.page_size = 15;
        config.search.dedupe = false;

        let state = AppState::new_with_config(config);

        assert_eq!(state.feed.page_size, 25);
        assert_eq!(state.feed.display_step, 5);
        assert_eq!(state.search.page_size, 15);
        assert!(!state.search.filters.dedupe);
    }

    #[test]
    fn test_state_serializes_without_config() -> serde_json::Result<()> {
        let state = AppState::default();
        let json = serde_json::to_value(&state)?;

        assert!(json.get("config").is_none());
        assert_eq!(json["mode"], "Feed");
        Ok(())
    }
}
