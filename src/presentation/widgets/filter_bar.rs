use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::SearchFilters, domain::fragment::FragmentScope,
    presentation::config::styles::Styles,
};

/// Scope and dedupe toggles for fragment search
pub struct FilterBarWidget<'a> {
    filters: SearchFilters,
    styles: &'a Styles,
}

impl<'a> FilterBarWidget<'a> {
    pub fn new(filters: SearchFilters, styles: &'a Styles) -> Self {
        Self { filters, styles }
    }

    fn toggle(&self, label: String, active: bool) -> Span<'static> {
        let style = if active {
            self.styles.style("filter_active")
        } else {
            self.styles.style("filter")
        };
        Span::styled(label, style)
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("scope ", self.styles.style("meta"))];
        for scope in FragmentScope::iter() {
            let active = scope == self.filters.scope;
            let label = if active {
                format!("[{scope}]")
            } else {
                format!(" {scope} ")
            };
            spans.push(self.toggle(label, active));
        }
        spans.push(Span::styled("  dedupe ", self.styles.style("meta")));
        let dedupe = if self.filters.dedupe { "[on]" } else { "[off]" };
        spans.push(self.toggle(dedupe.to_string(), self.filters.dedupe));
        spans.push(Span::styled("  s/d to change", self.styles.style("hint")));
        Line::from(spans)
    }
}

impl Widget for FilterBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_line_marks_active_scope() {
        let styles = Styles::default();
        let filters = SearchFilters {
            scope: FragmentScope::Ptr,
            dedupe: false,
        };
        let line = FilterBarWidget::new(filters, &styles).line().to_string();

        assert!(line.contains("[ptr]"));
        assert!(line.contains(" retail "));
        assert!(line.contains("dedupe [off]"));
    }

    #[test]
    fn test_default_filters() {
        let styles = Styles::default();
        let line = FilterBarWidget::new(SearchFilters::default(), &styles)
            .line()
            .to_string();

        assert!(line.starts_with("scope [any]"));
        assert!(line.contains("dedupe [on]"));
        assert_eq!(line.matches('[').count(), 2);
    }
}
