//! Hero search bar and the scroll-linked layout around it.
//!
//! Rows stand in for pixels: the hero shrinks from its expanded height to a
//! docked three-row input box as the results scroll, and the results area
//! slides up under it.

use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::dock::{AnimationParams, ResultsPadding},
    presentation::config::styles::Styles,
};

/// Bordered input box
pub const DOCKED_HEIGHT: u16 = 3;
/// Title and subtitle rows above the input when fully expanded
pub const EXPANDED_EXTRA: u16 = 2;
pub const MIN_INPUT_WIDTH: u16 = 24;
/// Share of the viewport a floating results padding may take
const FLOAT_SHARE: f64 = 0.25;
/// Gap kept under the hero while it floats
const FIXED_GAP: u16 = 1;
/// Translate units per row of results offset
const TRANSLATE_PER_ROW: f64 = 20.0;

pub const TITLE: &str = "BLUE POSTS";
pub const SUBTITLE: &str = "Developer posts, searchable";
pub const PLACEHOLDER: &str = "Search blue posts…";
pub const SCROLL_HINT: &str = "∨";

/// Screen regions derived from the animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLayout {
    pub hero: Rect,
    pub input: Rect,
    /// Rows between the hero and the results list
    pub results_gap: u16,
    /// Extra downward offset of the results list
    pub results_shift: u16,
    pub dim_results: bool,
}

pub fn hero_layout(area: Rect, params: &AnimationParams) -> HeroLayout {
    let extra = if params.compact {
        0
    } else {
        (f64::from(EXPANDED_EXTRA) * (1.0 - params.eased)).round() as u16
    };
    let height = (DOCKED_HEIGHT + extra).min(area.height);
    let hero = Rect { height, ..area };

    let width = ((f64::from(area.width) * params.scale).round() as u16)
        .max(MIN_INPUT_WIDTH)
        .min(area.width);
    let input_height = DOCKED_HEIGHT.min(height);
    let input = Rect {
        x: area.x + (area.width - width) / 2,
        y: hero.bottom() - input_height,
        width,
        height: input_height,
    };

    let results_gap = match params.results_padding {
        ResultsPadding::Docked => 0,
        ResultsPadding::Floating { viewport_fraction } => {
            (viewport_fraction * f64::from(area.height) * FLOAT_SHARE).round() as u16 + FIXED_GAP
        }
    };

    HeroLayout {
        hero,
        input,
        results_gap,
        results_shift: (params.results_translate / TRANSLATE_PER_ROW).round() as u16,
        dim_results: params.results_opacity < 0.5,
    }
}

/// Title block plus the search input
pub struct HeroWidget<'a> {
    input: &'a str,
    focused: bool,
    layout: HeroLayout,
    styles: &'a Styles,
}

impl<'a> HeroWidget<'a> {
    pub fn new(input: &'a str, focused: bool, layout: HeroLayout, styles: &'a Styles) -> Self {
        Self {
            input,
            focused,
            layout,
            styles,
        }
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![];
        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, self.styles.style("placeholder")));
        } else {
            let style = if self.focused {
                self.styles.style("input_focused")
            } else {
                self.styles.style("input")
            };
            spans.push(Span::styled(self.input, style));
        }
        if self.focused {
            spans.push(Span::styled("▏", self.styles.style("input_focused")));
        }
        Line::from(spans)
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let HeroLayout { hero, input, .. } = self.layout;

        let title_rows = hero.height.saturating_sub(input.height);
        if title_rows > 0 {
            let mut lines = vec![Line::styled(TITLE, self.styles.style("hero_title"))];
            if title_rows > 1 {
                lines.push(Line::styled(SUBTITLE, self.styles.style("meta")));
            }
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(Rect::new(hero.x, hero.y, hero.width, title_rows), buf);
        }

        let border_style = if self.focused {
            self.styles.style("input_focused")
        } else {
            self.styles.style("input")
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        // show the end of long queries
        let inner_width = input.width.saturating_sub(3);
        let line = self.input_line();
        let overflow = (line.width() as u16).saturating_sub(inner_width);
        Paragraph::new(line)
            .block(block)
            .scroll((0, overflow))
            .render(input, buf);
    }
}
