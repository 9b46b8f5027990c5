//! Home component
//!
//! The single screen of the client: hero search bar on top, the active
//! result list below it, the autocomplete dropdown drawn over the list.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Mode},
    domain::{dock::derive_animation_state, scroll::ViewportMetrics},
    presentation::widgets::{
        filter_bar::FilterBarWidget,
        hero::{hero_layout, HeroWidget, SCROLL_HINT},
        suggestions::SuggestionsWidget,
    },
};

pub mod list;

pub use list::ResultsListComponent;

#[derive(Debug, Default)]
pub struct HomeComponent {
    list: ResultsListComponent,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            list: ResultsListComponent::new(),
        }
    }

    /// Whether the scope/dedupe row is shown
    pub fn shows_filters(state: &AppState) -> bool {
        state.is_searching() || state.ui.is_searching_input()
    }

    /// Render the home view and return the results viewport
    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) -> ViewportMetrics {
        let styles = &state.config.styles;
        let params =
            derive_animation_state(f64::from(state.ui.scroll_top()), &state.dock_config());
        let layout = hero_layout(area, &params);

        frame.render_widget(
            HeroWidget::new(
                &state.ui.input,
                state.ui.is_searching_input(),
                layout,
                styles,
            ),
            layout.hero,
        );

        let mut rest = Rect {
            y: layout.hero.bottom(),
            height: area.bottom().saturating_sub(layout.hero.bottom()),
            ..area
        };

        if Self::shows_filters(state) && rest.height > 1 {
            let row = Rect { height: 1, ..rest };
            frame.render_widget(
                FilterBarWidget::new(state.search.filters, styles),
                Rect {
                    x: layout.input.x + 1,
                    width: layout.input.width.saturating_sub(1),
                    ..row
                },
            );
            rest.y += 1;
            rest.height -= 1;
        }

        let dropdown_top = rest.y;

        // keep at least one row for the list
        let gap = (layout.results_gap + layout.results_shift).min(rest.height.saturating_sub(1));
        if gap > 0 && state.mode == Mode::Feed && params.raw_progress == 0.0 {
            frame.render_widget(
                Paragraph::new(Line::styled(SCROLL_HINT, styles.style("hint")))
                    .alignment(Alignment::Center),
                Rect { height: 1, ..rest },
            );
        }
        rest.y += gap;
        rest.height -= gap;

        let metrics = self.list.view(state, frame, rest, layout.dim_results);

        let suggestions = SuggestionsWidget::new(&state.topics, styles);
        let height = suggestions
            .height()
            .min(area.bottom().saturating_sub(dropdown_top));
        if height > 0 {
            frame.render_widget(
                suggestions,
                Rect {
                    y: dropdown_top,
                    height,
                    ..layout.input
                },
            );
        }

        metrics
    }
}
