use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::{AppState, Mode},
    presentation::config::styles::Styles,
};

pub const HINTS: &str = "/ search · j/k scroll · L more · r refresh · s scope · d dedupe · q quit";

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
    styles: &'a Styles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState, styles: &'a Styles) -> Self {
        Self { state, styles }
    }

    /// What is on screen and whether more is coming
    pub fn summary(&self) -> String {
        let state = self.state;
        let mut parts = match state.mode {
            Mode::Feed => vec![
                "Latest posts".to_string(),
                format!("{} shown", state.feed.displayed_posts().len()),
            ],
            Mode::Search => vec![
                format!("Search \"{}\"", state.search.query),
                format!(
                    "{} of {}",
                    state.search.fragments.len(),
                    state.search.total.max(state.search.fragments.len() as u64)
                ),
                format!("scope {}", state.search.filters.scope),
            ],
        };
        if state.is_loading() {
            parts.push("loading…".to_string());
        } else if !state.can_load_more() && state.visible_len() > 0 {
            parts.push("end".to_string());
        }
        parts.join(" · ")
    }

}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        Paragraph::new(Line::styled(self.summary(), self.styles.style("status")))
            .render(layout[0], buf);
        Paragraph::new(Line::styled(HINTS, self.styles.style("hint"))).render(layout[1], buf);
    }
}
