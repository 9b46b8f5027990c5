use serde::{Deserialize, Serialize};

/// Messages specific to TopicsState (autocomplete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicsMsg {
    /// Fetch the topic list from the server
    Load,
    Loaded(Result<Vec<String>, String>),
    /// Recompute suggestions for the current input
    Refresh(String),
    SelectNext,
    SelectPrev,
    /// Close the dropdown without touching the input
    Dismiss,
}
