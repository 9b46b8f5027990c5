//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState, domain::scroll::ViewportMetrics,
    presentation::widgets::status_bar::StatusBarWidget,
};

pub mod home;

pub use home::HomeComponent;

/// Status bar rows at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 2;

#[derive(Debug, Default)]
pub struct Components {
    pub home: HomeComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            home: HomeComponent::new(),
        }
    }

    /// Render one frame and return the results viewport observed while
    /// laying it out.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) -> ViewportMetrics {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(frame.area());

        let metrics = self.home.view(state, frame, layout[0]);
        frame.render_widget(
            StatusBarWidget::new(state, &state.config.styles),
            layout[1],
        );
        metrics
    }
}
