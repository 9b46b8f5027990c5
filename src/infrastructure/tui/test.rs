use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Headless terminal on ratatui's `TestBackend`.
/// - enter/exit only flip a flag (no raw mode / alternate screen).
/// - next() pops queued events and yields `None` once the queue is empty.
/// - draw() counts frames and keeps the last buffer for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Rendered screen as text, one string per row
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Whether any rendered row contains `needle`
    pub fn screen_contains(&self, needle: &str) -> bool {
        self.screen_lines().iter().any(|line| line.contains(needle))
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_are_replayed_in_order() {
        let mut tui = TestTui::with_events(20, 5, [Event::Tick, Event::Render]).unwrap();
        tui.enqueue_event(Event::Quit);

        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Render));
        assert_eq!(tui.next().await, Some(Event::Quit));
        assert_eq!(tui.next().await, None);
    }

    #[test]
    fn test_draw_is_counted_and_captured() {
        let mut tui = TestTui::new(20, 2).unwrap();
        tui.draw(&mut |f| f.render_widget(Paragraph::new("blue posts"), f.area()))
            .unwrap();

        assert_eq!(tui.draw_count(), 1);
        assert!(tui.screen_contains("blue posts"));
        assert_eq!(tui.screen_lines().len(), 2);
    }

    #[test]
    fn test_resize_changes_screen() {
        let mut tui = TestTui::new(20, 2).unwrap();
        tui.resize(Rect::new(0, 0, 30, 4)).unwrap();
        tui.draw(&mut |_| {}).unwrap();

        assert_eq!(tui.screen_lines().len(), 4);
        assert_eq!(tui.screen_lines()[0].chars().count(), 30);
    }
}
