use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::api::ApiClient,
};

const NO_EXECUTOR: &str = "No command executor available. Use set_executor() to configure.";

/// Owns `AppState` and drives the translate → update → execute cycle
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a runtime without side effects; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a runtime whose executor has no API client; network commands
    /// fail immediately and report back as errors
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor();
        runtime
    }

    pub fn new_with_api(initial_state: AppState, api: Arc<ApiClient>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new_with_api(runtime.msg_tx.clone(), api));
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new(self.msg_tx.clone()));
    }

    /// Route `TuiCommand`s to the runner
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        let Some(executor) = &mut self.cmd_executor else {
            return Err(NO_EXECUTOR.to_string());
        };
        executor.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Sender for messages produced outside the runtime
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err(NO_EXECUTOR.to_string());
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<(), String> {
        let Some(executor) = &self.cmd_executor else {
            return Err(NO_EXECUTOR.to_string());
        };
        executor
            .execute_command(cmd)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Apply one message and queue its commands
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate raw input, then apply queued and externally sent messages
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // API results posted by the executor
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute the resulting commands
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        if self.cmd_executor.is_none() {
            return Ok(vec![]);
        }
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let executor = self.cmd_executor.as_ref().map(CmdExecutor::get_stats);
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            feed_posts_count: self.state.feed.posts.len(),
            fragments_count: self.state.search.fragments.len(),
            is_searching: self.state.is_searching(),
            has_executor: executor.is_some(),
            has_api: executor.is_some_and(|stats| stats.has_api),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub feed_posts_count: usize,
    pub fragments_count: usize,
    pub is_searching: bool,
    pub has_executor: bool,
    pub has_api: bool,
}
