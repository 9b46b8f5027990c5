use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (input, renderer, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input (raw terminal events)
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),

    // Renderer feedback: results viewport size after layout
    Viewport {
        client_height: u16,
        content_height: u16,
    },
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::Viewport { .. } | RawMsg::Mouse(_)
        )
    }
}
