use serde::{Deserialize, Serialize};

pub mod feed;
pub mod search;
pub mod system;
pub mod topics;
pub mod ui;

use feed::FeedMsg;
use search::SearchMsg;
use system::SystemMsg;
use topics::TopicsMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Latest-posts feed (delegated to FeedState)
    Feed(FeedMsg),

    // Fragment search (delegated to SearchState, mode switching in update)
    Search(SearchMsg),

    // Autocomplete (delegated to TopicsState)
    Topics(TopicsMsg),

    // Input focus, editing and scrolling
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Feed(msg) => msg.is_frequent(),
            Msg::Search(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Topics(_) => false,
        }
    }
}
