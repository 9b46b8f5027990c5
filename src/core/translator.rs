use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{feed::FeedMsg, search::SearchMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, Mode},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // Renderer feedback
        RawMsg::Viewport {
            client_height,
            content_height,
        } => vec![Msg::Ui(UiMsg::ViewportChanged {
            client_height,
            content_height,
        })],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Context-sensitive key bindings
    if state.ui.is_searching_input() {
        translate_search_input_keys(key, state)
    } else {
        translate_results_keys(key, state)
    }
}

/// Key bindings while the search box has focus
fn translate_search_input_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Ui(UiMsg::EscapeInput)],
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SubmitInput)],
        KeyCode::Backspace => vec![Msg::Ui(UiMsg::DeleteChar)],
        KeyCode::Tab => vec![Msg::Ui(UiMsg::FocusResults)],

        KeyCode::Down if state.topics.open => vec![Msg::Ui(UiMsg::SuggestionNext)],
        KeyCode::Up if state.topics.open => vec![Msg::Ui(UiMsg::SuggestionPrev)],
        KeyCode::Down => vec![Msg::Ui(UiMsg::ScrollBy(1))],
        KeyCode::Up => vec![Msg::Ui(UiMsg::ScrollBy(-1))],
        KeyCode::PageDown => vec![Msg::Ui(UiMsg::ScrollBy(page_rows(state)))],
        KeyCode::PageUp => vec![Msg::Ui(UiMsg::ScrollBy(-page_rows(state)))],

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![Msg::Ui(UiMsg::ClearInput)]
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![Msg::Ui(UiMsg::InsertChar(c))]
        }

        _ => vec![],
    }
}

/// Key bindings while the result list has focus
fn translate_results_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollBy(-1))],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollBy(1))],
        Action::PageUp => vec![Msg::Ui(UiMsg::ScrollBy(-page_rows(state)))],
        Action::PageDown => vec![Msg::Ui(UiMsg::ScrollBy(page_rows(state)))],
        Action::ScrollToTop => vec![Msg::Ui(UiMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Ui(UiMsg::ScrollToBottom)],
        Action::FocusSearch => vec![Msg::Ui(UiMsg::FocusSearch)],
        Action::LoadMore => vec![Msg::Ui(UiMsg::LoadMore)],
        Action::Refresh => match state.mode {
            Mode::Feed => vec![Msg::Feed(FeedMsg::LoadFirstPage)],
            Mode::Search => vec![Msg::Search(SearchMsg::Refresh)],
        },
        Action::CycleScope => vec![Msg::Search(SearchMsg::CycleScope)],
        Action::ToggleDedupe => vec![Msg::Search(SearchMsg::ToggleDedupe)],
        Action::ClearSearch => {
            if state.is_searching() || !state.ui.input.is_empty() {
                vec![Msg::Search(SearchMsg::Clear)]
            } else {
                vec![]
            }
        }
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let step = i32::from(state.config.ui.scroll_step.max(1));
    match mouse.kind {
        MouseEventKind::ScrollDown => vec![Msg::Ui(UiMsg::ScrollBy(step))],
        MouseEventKind::ScrollUp => vec![Msg::Ui(UiMsg::ScrollBy(-step))],
        _ => vec![],
    }
}

/// Pasted text goes into the search box; newlines are dropped
fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    if !state.ui.is_searching_input() {
        return vec![];
    }
    text.chars()
        .filter(|c| !c.is_control())
        .map(|c| Msg::Ui(UiMsg::InsertChar(c)))
        .collect()
}

/// Rows moved by a page scroll: one viewport, keeping a line of context
fn page_rows(state: &AppState) -> i32 {
    i32::from(state.ui.viewport.client_height.saturating_sub(1).max(1))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        core::state::Focus, infrastructure::config::Config,
        presentation::config::keybindings::KeyBindings,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_state() -> AppState {
        let mut config = Config::default();

        let mut bindings = HashMap::new();
        bindings.insert(vec![key(KeyCode::Char('q'))], Action::Quit);
        bindings.insert(vec![key(KeyCode::Char('j'))], Action::ScrollDown);
        bindings.insert(vec![key(KeyCode::Char('k'))], Action::ScrollUp);
        bindings.insert(vec![key(KeyCode::PageDown)], Action::PageDown);
        bindings.insert(vec![key(KeyCode::Char('g'))], Action::ScrollToTop);
        bindings.insert(
            vec![KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)],
            Action::ScrollToBottom,
        );
        bindings.insert(vec![key(KeyCode::Char('/'))], Action::FocusSearch);
        bindings.insert(vec![key(KeyCode::Char('r'))], Action::Refresh);
        bindings.insert(vec![key(KeyCode::Char('s'))], Action::CycleScope);
        bindings.insert(vec![key(KeyCode::Char('d'))], Action::ToggleDedupe);
        bindings.insert(vec![key(KeyCode::Esc)], Action::ClearSearch);
        config.keybindings = KeyBindings(bindings);

        AppState::new_with_config(config)
    }

    fn search_focused() -> AppState {
        let mut state = create_test_state();
        state.ui.focus = Focus::Search;
        state
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        let result = translate_raw_to_domain(RawMsg::Quit, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let result = translate_raw_to_domain(RawMsg::Resize(100, 50), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Resize(100, 50))]);
    }

    #[test]
    fn test_translate_global_keys() {
        for state in [create_test_state(), search_focused()] {
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            let result = translate_raw_to_domain(RawMsg::Key(ctrl_c), &state);
            assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);
        }
    }

    #[rstest]
    #[case(KeyCode::Char('j'), Msg::Ui(UiMsg::ScrollBy(1)))]
    #[case(KeyCode::Char('k'), Msg::Ui(UiMsg::ScrollBy(-1)))]
    #[case(KeyCode::Char('g'), Msg::Ui(UiMsg::ScrollToTop))]
    #[case(KeyCode::Char('/'), Msg::Ui(UiMsg::FocusSearch))]
    #[case(KeyCode::Char('s'), Msg::Search(SearchMsg::CycleScope))]
    #[case(KeyCode::Char('d'), Msg::Search(SearchMsg::ToggleDedupe))]
    #[case(KeyCode::Char('r'), Msg::Feed(FeedMsg::LoadFirstPage))]
    #[case(KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    fn test_translate_results_keys(#[case] code: KeyCode, #[case] expected: Msg) {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn test_refresh_in_search_mode() {
        let mut state = create_test_state();
        state.mode = Mode::Search;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('r'))), &state);

        assert_eq!(result, vec![Msg::Search(SearchMsg::Refresh)]);
    }

    #[test]
    fn test_page_down_uses_viewport_height() {
        let mut state = create_test_state();
        state.ui.viewport.client_height = 20;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::PageDown)), &state);

        assert_eq!(result, vec![Msg::Ui(UiMsg::ScrollBy(19))]);
    }

    #[test]
    fn test_clear_search_only_when_searching() {
        let mut state = create_test_state();
        let esc = RawMsg::Key(key(KeyCode::Esc));

        assert!(translate_raw_to_domain(esc.clone(), &state).is_empty());

        state.mode = Mode::Search;
        assert_eq!(
            translate_raw_to_domain(esc, &state),
            vec![Msg::Search(SearchMsg::Clear)]
        );
    }

    #[test]
    fn test_search_input_typing() {
        let state = search_focused();

        // bound keys are plain text while typing
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('q'))), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::InsertChar('q'))]);

        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        let result = translate_raw_to_domain(RawMsg::Key(shifted), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::InsertChar('Q'))]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Backspace)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::DeleteChar)]);

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        let result = translate_raw_to_domain(RawMsg::Key(ctrl_u), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::ClearInput)]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::SubmitInput)]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::EscapeInput)]);
    }

    #[test]
    fn test_arrows_follow_dropdown() {
        let mut state = search_focused();

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Down)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::ScrollBy(1))]);

        state.topics.open = true;
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Down)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::SuggestionNext)]);
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Up)), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::SuggestionPrev)]);
    }

    #[test]
    fn test_enter_on_open_dropdown_submits() {
        let mut state = search_focused();
        state.ui.input = "class".into();
        state.topics.open = true;
        state.topics.suggestions = vec!["Class Tuning".into(), "Classic".into()];
        state.topics.highlighted = 1;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state);

        assert_eq!(result, vec![Msg::Ui(UiMsg::SubmitInput)]);
    }

    #[test]
    fn test_translate_mouse_wheel() {
        let state = create_test_state();
        let step = i32::from(state.config.ui.scroll_step);
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            translate_raw_to_domain(RawMsg::Mouse(wheel(MouseEventKind::ScrollDown)), &state),
            vec![Msg::Ui(UiMsg::ScrollBy(step))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Mouse(wheel(MouseEventKind::ScrollUp)), &state),
            vec![Msg::Ui(UiMsg::ScrollBy(-step))]
        );
        assert!(translate_raw_to_domain(RawMsg::Mouse(wheel(MouseEventKind::Moved)), &state)
            .is_empty());
    }

    #[test]
    fn test_translate_viewport_report() {
        let state = create_test_state();

        let result = translate_raw_to_domain(
            RawMsg::Viewport {
                client_height: 12,
                content_height: 80,
            },
            &state,
        );

        assert_eq!(
            result,
            vec![Msg::Ui(UiMsg::ViewportChanged {
                client_height: 12,
                content_height: 80
            })]
        );
    }

    #[test]
    fn test_translate_unknown_keys_ignored() {
        let state = create_test_state();

        let f1 = KeyEvent {
            code: KeyCode::F(1),
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert!(translate_raw_to_domain(RawMsg::Key(f1), &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_paste_only_into_search_box() {
        let mut state = create_test_state();
        let raw = RawMsg::Paste("mythic+\n".to_string());

        assert!(translate_raw_to_domain(raw.clone(), &state).is_empty());

        state.ui.focus = Focus::Search;
        let result = translate_raw_to_domain(raw, &state);
        let typed: String = result
            .into_iter()
            .filter_map(|msg| match msg {
                Msg::Ui(UiMsg::InsertChar(c)) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(typed, "mythic+");
    }
}
