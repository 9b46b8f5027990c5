use ratatui::{prelude::*, widgets::*};

use crate::{core::state::TopicsState, presentation::config::styles::Styles};

/// Autocomplete dropdown drawn over the results, right under the input
pub struct SuggestionsWidget<'a> {
    topics: &'a TopicsState,
    styles: &'a Styles,
}

impl<'a> SuggestionsWidget<'a> {
    pub fn new(topics: &'a TopicsState, styles: &'a Styles) -> Self {
        Self { topics, styles }
    }

    /// Rows needed including the border; zero when closed
    pub fn height(&self) -> u16 {
        if !self.topics.open || self.topics.suggestions.is_empty() {
            return 0;
        }
        u16::try_from(self.topics.suggestions.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Widget for SuggestionsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.height() == 0 || area.height == 0 {
            return;
        }
        let items: Vec<Line> = self
            .topics
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                if i == self.topics.highlighted {
                    Line::styled(format!("› {topic}"), self.styles.style("suggestion_selected"))
                } else {
                    Line::styled(format!("  {topic}"), self.styles.style("suggestion"))
                }
            })
            .collect();

        Clear.render(area, buf);
        Paragraph::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.style("dimmed")),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_topics() -> TopicsState {
        TopicsState {
            suggestions: vec!["Delves".into(), "Delve rewards".into()],
            highlighted: 1,
            open: true,
            ..TopicsState::default()
        }
    }

    #[test]
    fn test_height_follows_suggestions() {
        let styles = Styles::default();
        let topics = open_topics();
        assert_eq!(SuggestionsWidget::new(&topics, &styles).height(), 4);

        let closed = TopicsState {
            open: false,
            ..open_topics()
        };
        assert_eq!(SuggestionsWidget::new(&closed, &styles).height(), 0);
    }

    #[test]
    fn test_render_marks_highlighted_row() {
        let styles = Styles::default();
        let topics = open_topics();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        SuggestionsWidget::new(&topics, &styles).render(area, &mut buf);

        let row = |y: u16| -> String { (0..30).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(1).contains("  Delves"));
        assert!(row(2).contains("› Delve rewards"));
    }
}
