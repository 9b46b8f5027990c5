use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusSearch,
    FocusResults,

    // Search input editing
    InsertChar(char),
    DeleteChar,
    ClearInput,
    SubmitInput,
    EscapeInput,
    SuggestionNext,
    SuggestionPrev,

    // Results viewport
    ScrollBy(i32),
    ScrollToTop,
    ScrollToBottom,
    ViewportChanged {
        client_height: u16,
        content_height: u16,
    },

    /// Explicit "load more" for the current mode
    LoadMore,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ViewportChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ui_msg_serde() -> Result<()> {
        let msg = UiMsg::InsertChar('h');
        let s = serde_json::to_string(&msg)?;
        let back: UiMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }

    #[test]
    fn ui_msg_frequent() {
        assert!(UiMsg::ViewportChanged {
            client_height: 10,
            content_height: 20
        }
        .is_frequent());
        assert!(!UiMsg::ScrollBy(1).is_frequent());
    }
}
