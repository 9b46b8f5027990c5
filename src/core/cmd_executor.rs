use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{ApiCmd, Cmd, TuiCommand},
        msg::{feed::FeedMsg, search::SearchMsg, topics::TopicsMsg, Msg},
    },
    infrastructure::api::ApiClient,
};

const NO_API_CLIENT: &str = "API client not configured";

/// Command executor that runs Elm commands as side effects.
/// Network commands run on their own tokio task and report back as `Msg`.
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    api: Option<Arc<ApiClient>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor without network access
    pub fn new(msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender,
            api: None,
            tui_sender: None,
        }
    }

    pub fn new_with_api(msg_sender: mpsc::UnboundedSender<Msg>, api: Arc<ApiClient>) -> Self {
        Self {
            msg_sender,
            api: Some(api),
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Api(api_cmd) => self.spawn_api(api_cmd.clone())?,

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{}", message);
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Run the request on a tokio task; the result comes back through the message channel.
    /// Without a client the failure is reported immediately so the busy flag is released.
    fn spawn_api(&self, api_cmd: ApiCmd) -> Result<()> {
        let Some(api) = self.api.clone() else {
            log::warn!("{NO_API_CLIENT}; failing {api_cmd:?}");
            self.msg_sender
                .send(failure_msg(api_cmd, NO_API_CLIENT.to_string()))?;
            return Ok(());
        };

        let sender = self.msg_sender.clone();
        tokio::spawn(async move {
            let msg = run_api(&api, api_cmd).await;
            if sender.send(msg).is_err() {
                log::debug!("Runtime gone before API response was delivered");
            }
        });
        Ok(())
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_api: self.api.is_some(),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

async fn run_api(api: &ApiClient, api_cmd: ApiCmd) -> Msg {
    match api_cmd {
        ApiCmd::FetchPosts {
            token,
            page,
            page_size,
        } => {
            let result = api
                .fetch_posts(page, page_size)
                .await
                .map_err(|e| e.to_string());
            Msg::Feed(FeedMsg::PageLoaded {
                token,
                page,
                result,
            })
        }
        ApiCmd::SearchFragments { token, query } => {
            let result = api
                .search_fragments(&query)
                .await
                .map_err(|e| e.to_string());
            Msg::Search(SearchMsg::PageLoaded {
                token,
                offset: query.offset,
                result,
            })
        }
        ApiCmd::FetchTopics => {
            let result = api.fetch_topics().await.map_err(|e| e.to_string());
            Msg::Topics(TopicsMsg::Loaded(result))
        }
    }
}

fn failure_msg(api_cmd: ApiCmd, error: String) -> Msg {
    match api_cmd {
        ApiCmd::FetchPosts { token, page, .. } => Msg::Feed(FeedMsg::PageLoaded {
            token,
            page,
            result: Err(error),
        }),
        ApiCmd::SearchFragments { token, query } => Msg::Search(SearchMsg::PageLoaded {
            token,
            offset: query.offset,
            result: Err(error),
        }),
        ApiCmd::FetchTopics => Msg::Topics(TopicsMsg::Loaded(Err(error))),
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_api: bool,
    pub has_tui_sender: bool,
}
