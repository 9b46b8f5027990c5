use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::{ApiCmd, Cmd},
        msg::topics::TopicsMsg,
    },
    domain::topics::{fallback_topics, suggest},
};

/// Autocomplete dropdown for the search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsState {
    pub topics: Vec<String>,
    pub suggestions: Vec<String>,
    pub highlighted: usize,
    pub open: bool,
}

impl Default for TopicsState {
    fn default() -> Self {
        Self {
            topics: fallback_topics(),
            suggestions: vec![],
            highlighted: 0,
            open: false,
        }
    }
}

impl TopicsState {
    /// Highlighted suggestion while the dropdown is open
    pub fn selected(&self) -> Option<&str> {
        if !self.open {
            return None;
        }
        self.suggestions.get(self.highlighted).map(String::as_str)
    }

    pub fn update(&mut self, msg: TopicsMsg) -> Vec<Cmd> {
        match msg {
            TopicsMsg::Load => vec![Cmd::Api(ApiCmd::FetchTopics)],

            TopicsMsg::Loaded(Ok(topics)) => {
                if topics.is_empty() {
                    self.topics = fallback_topics();
                } else {
                    self.topics = topics;
                }
                vec![]
            }

            TopicsMsg::Loaded(Err(error)) => {
                self.topics = fallback_topics();
                vec![Cmd::log_error(format!(
                    "Failed to load topics, using fallback list: {error}"
                ))]
            }

            TopicsMsg::Refresh(input) => {
                self.suggestions = suggest(&self.topics, &input);
                self.highlighted = 0;
                self.open = !self.suggestions.is_empty();
                vec![]
            }

            TopicsMsg::SelectNext => {
                if self.open && !self.suggestions.is_empty() {
                    self.highlighted = (self.highlighted + 1) % self.suggestions.len();
                }
                vec![]
            }

            TopicsMsg::SelectPrev => {
                if self.open && !self.suggestions.is_empty() {
                    let len = self.suggestions.len();
                    self.highlighted = (self.highlighted + len - 1) % len;
                }
                vec![]
            }

            TopicsMsg::Dismiss => {
                self.open = false;
                vec![]
            }
        }
    }
}
