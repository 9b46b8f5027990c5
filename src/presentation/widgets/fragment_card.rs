use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{
        fragment::Fragment,
        markup::parse_highlights,
        rich_text::{transform, Block},
        text::{wrap_styled, wrap_words},
    },
    presentation::config::styles::Styles,
};

const BULLET: &str = "• ";
const BULLET_INDENT: &str = "  ";

/// One search hit: post title, badges, and the structured excerpt
#[derive(Clone, Debug)]
pub struct FragmentCard<'a> {
    fragment: &'a Fragment,
    styles: &'a Styles,
}

impl<'a> FragmentCard<'a> {
    pub fn new(fragment: &'a Fragment, styles: &'a Styles) -> Self {
        Self { fragment, styles }
    }

    pub fn meta(&self) -> String {
        let fragment = self.fragment;
        let mut parts: Vec<String> = [&fragment.author_name, &fragment.region, &fragment.category]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();
        parts.push(format!(
            "{} {}",
            fragment.posted_date(),
            fragment.posted_time()
        ));
        parts.join(" · ")
    }

    fn header(&self, width: usize) -> Vec<Line<'static>> {
        let mut badges = vec![Span::styled(
            format!("[{}]", self.fragment.scope_label()),
            self.styles.style("badge"),
        )];
        if self.fragment.is_pvp {
            badges.push(Span::raw(" "));
            badges.push(Span::styled("[PvP]", self.styles.style("pvp")));
        }

        let mut lines: Vec<Line<'static>> = wrap_words(&self.fragment.post_title, width)
            .into_iter()
            .map(|l| Line::styled(l, self.styles.style("title")))
            .collect();
        lines.push(Line::from(badges));
        lines.extend(
            wrap_words(&self.meta(), width)
                .into_iter()
                .map(|l| Line::styled(l, self.styles.style("meta"))),
        );
        lines
    }

    /// Wrap one line of highlighted text, prefixing the first output line
    /// with `first` and the rest with `rest`.
    fn highlighted(
        &self,
        text: &str,
        base: Style,
        width: usize,
        (first, rest): (&'static str, &'static str),
    ) -> Vec<Line<'static>> {
        let runs: Vec<(String, bool)> = parse_highlights(text)
            .into_iter()
            .map(|s| (s.text, s.highlighted))
            .collect();
        let highlight = base.patch(self.styles.style("highlight"));
        let prefix_width = first.chars().count();

        wrap_styled(&runs, width.saturating_sub(prefix_width).max(1))
            .into_iter()
            .enumerate()
            .map(|(i, runs)| {
                let prefix = if i == 0 { first } else { rest };
                let mut spans = vec![];
                if !prefix.is_empty() {
                    spans.push(Span::styled(prefix, self.styles.style("bullet")));
                }
                spans.extend(runs.into_iter().map(|(text, highlighted)| {
                    Span::styled(text, if highlighted { highlight } else { base })
                }));
                Line::from(spans)
            })
            .collect()
    }

    fn body(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![];
        for block in transform(self.fragment.body()) {
            match block {
                Block::Heading(text) => {
                    lines.extend(self.highlighted(
                        &text,
                        self.styles.style("heading"),
                        width,
                        ("", ""),
                    ));
                }
                Block::List(items) => {
                    for item in items {
                        lines.extend(self.highlighted(
                            &item,
                            Style::default(),
                            width,
                            (BULLET, BULLET_INDENT),
                        ));
                    }
                }
                Block::Paragraph(text) => {
                    lines.extend(self.highlighted(&text, Style::default(), width, ("", "")));
                }
            }
        }
        lines
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(1));
        let mut lines = self.header(width);
        lines.extend(self.body(width));

        if let Some(terms) = self.fragment.matched_terms.as_ref().filter(|t| !t.is_empty()) {
            lines.extend(
                wrap_words(&format!("matched: {}", terms.join(", ")), width)
                    .into_iter()
                    .map(|l| Line::styled(l, self.styles.style("hint"))),
            );
        }
        lines.push(Line::styled(
            self.fragment.source_url.clone(),
            self.styles.style("hint"),
        ));
        lines.push(Line::styled("─".repeat(width), self.styles.style("dimmed")));
        lines
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl Widget for FragmentCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}
