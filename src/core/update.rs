use crate::core::{
    cmd::Cmd,
    msg::{feed::FeedMsg, search::SearchMsg, topics::TopicsMsg, ui::UiMsg, Msg},
    state::{AppState, Focus, Mode},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Feed messages (delegated to FeedState)
        Msg::Feed(feed_msg) => state.feed.update(feed_msg),

        // Search messages: submit and clear also switch modes
        Msg::Search(SearchMsg::Submit(query)) => submit_query(&mut state, query),
        Msg::Search(SearchMsg::Clear) => {
            state.ui.input.clear();
            state.topics.update(TopicsMsg::Refresh(String::new()));
            leave_search(&mut state)
        }
        Msg::Search(search_msg) => state.search.update(search_msg),

        // Autocomplete messages (delegated to TopicsState)
        Msg::Topics(topics_msg) => state.topics.update(topics_msg),

        Msg::Ui(ui_msg) => update_ui(&mut state, ui_msg),
    };
    (state, commands)
}

fn update_ui(state: &mut AppState, msg: UiMsg) -> Vec<Cmd> {
    match msg {
        UiMsg::InsertChar(_) | UiMsg::DeleteChar | UiMsg::ClearInput => {
            let mut cmds = state.ui.update(msg);
            let input = state.ui.input.clone();
            cmds.extend(state.topics.update(TopicsMsg::Refresh(input)));
            if state.ui.input.trim().is_empty() && state.is_searching() {
                cmds.extend(leave_search(state));
            }
            cmds
        }

        UiMsg::SubmitInput => {
            let query = match state.topics.selected() {
                Some(topic) => topic.to_string(),
                None => state.ui.input.trim().to_string(),
            };
            submit_query(state, query)
        }

        UiMsg::EscapeInput => {
            if state.topics.open {
                state.topics.update(TopicsMsg::Dismiss)
            } else {
                state.ui.update(UiMsg::FocusResults)
            }
        }

        UiMsg::SuggestionNext => state.topics.update(TopicsMsg::SelectNext),
        UiMsg::SuggestionPrev => state.topics.update(TopicsMsg::SelectPrev),

        UiMsg::ScrollBy(_)
        | UiMsg::ScrollToTop
        | UiMsg::ScrollToBottom
        | UiMsg::ViewportChanged { .. } => {
            let mut cmds = state.ui.update(msg);
            cmds.extend(maybe_load_more(state));
            cmds
        }

        UiMsg::LoadMore => load_more(state),

        UiMsg::FocusSearch | UiMsg::FocusResults => state.ui.update(msg),
    }
}

/// Enter Search mode with a fresh query, or leave it for an empty one.
fn submit_query(state: &mut AppState, query: String) -> Vec<Cmd> {
    let query = query.trim().to_string();
    if query.is_empty() {
        return leave_search(state);
    }

    if state.mode == Mode::Feed {
        state.ui.saved_feed_scroll = Some(state.ui.scroll_top());
        state.mode = Mode::Search;
    }
    state.ui.input.clone_from(&query);
    state.ui.focus = Focus::Results;
    state.ui.viewport.scroll_top = 0;
    state.topics.update(TopicsMsg::Dismiss);

    log::info!("Searching fragments for '{query}'");
    state.search.update(SearchMsg::Submit(query))
}

/// Drop the search and show the feed where the user left it.
fn leave_search(state: &mut AppState) -> Vec<Cmd> {
    let cmds = state.search.update(SearchMsg::Clear);
    if state.mode == Mode::Search {
        state.mode = Mode::Feed;
        // clamped against the feed content on the next viewport report
        state.ui.viewport.scroll_top = state.ui.saved_feed_scroll.take().unwrap_or(0);
    }
    cmds
}

/// Infinite-scroll trigger, evaluated after every scroll or viewport change.
/// The request tracker keeps it from issuing a second fetch while one is in flight.
fn maybe_load_more(state: &mut AppState) -> Vec<Cmd> {
    let threshold = state.config.ui.load_more_threshold;
    if !state.ui.viewport.is_near_bottom(threshold) {
        return vec![];
    }
    load_more(state)
}

fn load_more(state: &mut AppState) -> Vec<Cmd> {
    match state.mode {
        Mode::Feed => state.feed.update(FeedMsg::LoadMore),
        Mode::Search => state.search.update(SearchMsg::LoadMore),
    }
}
