use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{
        markup::strip_tags,
        post::Post,
        text::{truncate_lines, wrap_words},
    },
    presentation::config::styles::Styles,
};

/// Preview lines shown per post before the text is cut off
pub const PREVIEW_LINES: usize = 4;

/// One post in the latest-posts feed
#[derive(Clone, Debug)]
pub struct PostCard<'a> {
    post: &'a Post,
    styles: &'a Styles,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a Post, styles: &'a Styles) -> Self {
        Self { post, styles }
    }

    pub fn meta(&self) -> String {
        let author = match &self.post.author.role {
            Some(role) if !role.is_empty() => format!("{} ({role})", self.post.author.name),
            _ => self.post.author.name.clone(),
        };
        format!(
            "{author} · {} · {} · {} {}",
            self.post.region.name,
            self.post.forum_category.name,
            self.post.posted_date(),
            self.post.posted_time()
        )
    }

    /// Card content wrapped to `width` columns, separator included
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(1));
        let mut lines = vec![];

        lines.extend(
            wrap_words(&self.post.title, width)
                .into_iter()
                .map(|l| Line::styled(l, self.styles.style("title"))),
        );
        lines.extend(
            wrap_words(&self.meta(), width)
                .into_iter()
                .map(|l| Line::styled(l, self.styles.style("meta"))),
        );

        let preview = strip_tags(self.post.preview());
        lines.extend(
            truncate_lines(wrap_words(&preview, width), PREVIEW_LINES)
                .into_iter()
                .map(Line::raw),
        );

        lines.push(Line::styled(
            self.post.source_url.clone(),
            self.styles.style("hint"),
        ));
        lines.push(Line::styled("─".repeat(width), self.styles.style("dimmed")));
        lines
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::post::fixtures;

    fn rendered(card: PostCard<'_>, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_meta_includes_author_role_and_region() {
        let mut post = fixtures::post(1, 0);
        post.author.role = Some("Community Manager".into());
        let styles = Styles::default();
        let meta = PostCard::new(&post, &styles).meta();

        assert!(meta.starts_with(&format!("{} (Community Manager)", post.author.name)));
        assert!(meta.contains(&post.region.name));
        assert!(meta.contains(&post.forum_category.name));
    }

    #[test]
    fn test_lines_prefer_summary_and_strip_markup() {
        let mut post = fixtures::post(1, 0);
        post.summary = Some("<p>Tuning &amp; fixes</p>".into());
        let styles = Styles::default();
        let lines = PostCard::new(&post, &styles).lines(60);
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();

        assert!(text.iter().any(|l| l == "Tuning & fixes"));
        assert_eq!(text.last().map(|l| l.chars().count()), Some(60));
    }

    #[test]
    fn test_preview_is_truncated() {
        let mut post = fixtures::post(1, 0);
        post.summary = None;
        post.content = "word ".repeat(200);
        let styles = Styles::default();
        let card = PostCard::new(&post, &styles);
        let lines: Vec<String> = card.lines(20).iter().map(ToString::to_string).collect();

        assert!(lines.iter().any(|l| l == "..."));
        assert_eq!(usize::from(card.calculate_height(20)), lines.len());
    }

    #[test]
    fn test_render_shows_title() {
        let post = fixtures::post(7, 0);
        let styles = Styles::default();
        let area = Rect::new(0, 0, 60, 8);
        let screen = rendered(PostCard::new(&post, &styles), area);

        assert_eq!(screen[0], post.title);
    }
}
