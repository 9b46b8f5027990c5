use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState, domain::scroll::ViewportMetrics, infrastructure::tui,
    presentation::components::Components,
};

#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    /// Draw one frame and return the results viewport it laid out
    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<ViewportMetrics> {
        let mut metrics = ViewportMetrics::default();
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            metrics = self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(metrics)
    }
}
