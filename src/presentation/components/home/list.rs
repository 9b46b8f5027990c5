//! Results list component
//!
//! Renders the mode-appropriate result list as one scrollable column of
//! pre-wrapped lines and reports the resulting viewport geometry.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Mode},
    domain::scroll::ViewportMetrics,
    presentation::{
        config::styles::Styles,
        widgets::{fragment_card::FragmentCard, post_card::PostCard},
    },
};

/// Results list component
///
/// Stateless: the scroll offset lives in `UiState`.
#[derive(Debug, Clone, Default)]
pub struct ResultsListComponent;

impl ResultsListComponent {
    pub fn new() -> Self {
        Self
    }

    /// All lines of the active list, cards followed by a status footer
    pub fn lines(state: &AppState, width: u16) -> Vec<Line<'static>> {
        let styles = &state.config.styles;
        match state.mode {
            Mode::Feed => Self::feed_lines(state, styles, width),
            Mode::Search => Self::search_lines(state, styles, width),
        }
    }

    fn feed_lines(state: &AppState, styles: &Styles, width: u16) -> Vec<Line<'static>> {
        let feed = &state.feed;
        let posts = feed.displayed_posts();

        if posts.is_empty() {
            let placeholder = if feed.is_loading() {
                Line::styled("Loading posts…", styles.style("status"))
            } else if let Some(error) = &feed.load_error {
                Line::styled(error.clone(), styles.style("error"))
            } else {
                Line::styled("No posts yet.", styles.style("status"))
            };
            return vec![placeholder];
        }

        let mut lines: Vec<Line<'static>> = posts
            .iter()
            .flat_map(|post| PostCard::new(post, styles).lines(width))
            .collect();
        let footer = if feed.is_loading() {
            Line::styled("Loading more posts…", styles.style("status"))
        } else if feed.can_load_more() {
            Line::styled("Scroll or press L for more", styles.style("hint"))
        } else {
            Line::styled("You're all caught up.", styles.style("status"))
        };
        lines.push(footer);
        lines
    }

    fn search_lines(state: &AppState, styles: &Styles, width: u16) -> Vec<Line<'static>> {
        let search = &state.search;

        if search.fragments.is_empty() {
            let placeholder = if search.is_loading() {
                Line::styled("Searching…", styles.style("status"))
            } else {
                Line::styled(
                    format!("No fragments match \"{}\".", search.query),
                    styles.style("status"),
                )
            };
            return vec![placeholder];
        }

        let mut lines: Vec<Line<'static>> = search
            .fragments
            .iter()
            .flat_map(|fragment| FragmentCard::new(fragment, styles).lines(width))
            .collect();
        let footer = if search.is_loading() {
            Line::styled("Loading more fragments…", styles.style("status"))
        } else if !search.is_exhausted() {
            Line::styled("Scroll or press L for more", styles.style("hint"))
        } else {
            Line::styled("End of results.", styles.style("status"))
        };
        lines.push(footer);
        lines
    }

    /// Render the list and return the geometry the renderer observed
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, dim: bool) -> ViewportMetrics {
        let block = Block::default().padding(Padding::horizontal(1));
        let inner = block.inner(area);
        let lines = Self::lines(state, inner.width);

        let metrics = ViewportMetrics {
            scroll_top: state.ui.scroll_top(),
            client_height: inner.height,
            content_height: u16::try_from(lines.len()).unwrap_or(u16::MAX),
        }
        .clamped();

        let style = if dim {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(style)
            .scroll((metrics.scroll_top, 0));
        frame.render_widget(paragraph, area);

        metrics
    }
}
