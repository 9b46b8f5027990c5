use serde::{Deserialize, Serialize};

use crate::{core::state::request::RequestToken, domain::fragment::FragmentQuery};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner on Render/Resize events, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Remote API requests. Every fetch carries the token its response is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiCmd {
    FetchPosts {
        token: RequestToken,
        page: u32,
        page_size: u32,
    },
    SearchFragments {
        token: RequestToken,
        query: FragmentQuery,
    },
    FetchTopics,
}

/// Elm-like command definitions
/// Represents side effects (network communication, logging, terminal control)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Network
    Api(ApiCmd),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
}

impl Cmd {
    pub fn fetch_posts(token: RequestToken, page: u32, page_size: u32) -> Cmd {
        Cmd::Api(ApiCmd::FetchPosts {
            token,
            page,
            page_size,
        })
    }

    pub fn search_fragments(token: RequestToken, query: FragmentQuery) -> Cmd {
        Cmd::Api(ApiCmd::SearchFragments { token, query })
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }

    /// Human-readable name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::Api(ApiCmd::FetchPosts { page, .. }) => format!("FetchPosts(page={page})"),
            Cmd::Api(ApiCmd::SearchFragments { query, .. }) => {
                format!("SearchFragments(offset={})", query.offset)
            }
            Cmd::Api(ApiCmd::FetchTopics) => "FetchTopics".to_string(),
            Cmd::Tui(TuiCommand::Resize { width, height }) => format!("Resize({width}x{height})"),
            Cmd::LogError { .. } => "LogError".to_string(),
        }
    }
}
