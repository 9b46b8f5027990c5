use serde::{Deserialize, Serialize};

/// Geometry of the results viewport, in terminal rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// First visible content row.
    pub scroll_top: u16,
    /// Number of visible rows.
    pub client_height: u16,
    /// Total number of content rows.
    pub content_height: u16,
}

impl ViewportMetrics {
    /// Largest valid `scroll_top` for the current content.
    pub fn max_scroll_top(&self) -> u16 {
        self.content_height.saturating_sub(self.client_height)
    }

    /// Whether the bottom of the viewport is within `threshold` rows of the end.
    pub fn is_near_bottom(&self, threshold: u16) -> bool {
        u32::from(self.scroll_top) + u32::from(self.client_height) + u32::from(threshold)
            >= u32::from(self.content_height)
    }

    /// Move by `delta` rows, clamped to the content.
    pub fn scrolled_by(self, delta: i32) -> Self {
        let target = (i32::from(self.scroll_top) + delta).clamp(0, i32::from(self.max_scroll_top()));
        Self {
            scroll_top: u16::try_from(target).unwrap_or(self.scroll_top),
            ..self
        }
    }

    /// Clamp `scroll_top` after the content or viewport shrank.
    pub fn clamped(self) -> Self {
        Self {
            scroll_top: self.scroll_top.min(self.max_scroll_top()),
            ..self
        }
    }
}
