use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::scroll::ViewportMetrics,
};

/// Which widget receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Results,
    Search,
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub focus: Focus,
    pub input: String,
    pub viewport: ViewportMetrics,
    /// Feed scroll offset saved while search results are shown
    pub saved_feed_scroll: Option<u16>,
}

impl UiState {
    pub fn is_searching_input(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn scroll_top(&self) -> u16 {
        self.viewport.scroll_top
    }

    /// Handles the messages that only touch UiState. Cross-state messages
    /// (submit, escape, suggestions, load more) are coordinated in `update`.
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusSearch => {
                self.focus = Focus::Search;
            }
            UiMsg::FocusResults => {
                self.focus = Focus::Results;
            }
            UiMsg::InsertChar(c) => {
                self.input.push(c);
            }
            UiMsg::DeleteChar => {
                self.input.pop();
            }
            UiMsg::ClearInput => {
                self.input.clear();
            }
            UiMsg::ScrollBy(delta) => {
                self.viewport = self.viewport.scrolled_by(delta);
            }
            UiMsg::ScrollToTop => {
                self.viewport.scroll_top = 0;
            }
            UiMsg::ScrollToBottom => {
                self.viewport.scroll_top = self.viewport.max_scroll_top();
            }
            UiMsg::ViewportChanged {
                client_height,
                content_height,
            } => {
                self.viewport = ViewportMetrics {
                    scroll_top: self.viewport.scroll_top,
                    client_height,
                    content_height,
                }
                .clamped();
            }
            UiMsg::SubmitInput
            | UiMsg::EscapeInput
            | UiMsg::SuggestionNext
            | UiMsg::SuggestionPrev
            | UiMsg::LoadMore => {}
        }
        vec![]
    }
}
