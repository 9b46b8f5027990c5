use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{feed::FeedMsg, topics::TopicsMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::scroll::ViewportMetrics,
    infrastructure::{
        api::ApiClient,
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders after updates
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    /// Last (client_height, content_height) reported back to the runtime
    last_viewport: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Compose the runtime, terminal and event source.
    /// Without an API client every request fails with an error message.
    pub async fn new_with_config(
        config: Config,
        api: Option<Arc<ApiClient>>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = match api {
            Some(api) => Runtime::new_with_api(initial_state, api),
            None => Runtime::new_with_executor(initial_state),
        };

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime
            .add_tui_sender(tui_tx)
            .map_err(|e| color_eyre::eyre::eyre!(e))?;

        runtime.send_msg(Msg::Feed(FeedMsg::LoadFirstPage));
        runtime.send_msg(Msg::Topics(TopicsMsg::Load));

        Ok(Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            tui_rx,
            last_viewport: None,
        })
    }

    pub async fn new_with_real(
        config: Config,
        api: Option<Arc<ApiClient>>,
        tui: Arc<Mutex<RealTui>>,
    ) -> Result<Self> {
        let events = EventSource::real(Arc::<Mutex<RealTui>>::clone(&tui));
        Self::new_with_config(config, api, tui, events).await
    }

    /// Run until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.event_loop().await;

        // restore the terminal even when the loop failed
        let exit = self.tui.lock().await.exit();
        result.and(exit)
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            let render = match self.events.next().await {
                Some(event) => self.handle_event(event),
                None => {
                    // idle event source: yield briefly to avoid a busy loop
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    true
                }
            };

            self.update_cycle();

            let mut resized = false;
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
                self.tui
                    .lock()
                    .await
                    .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                resized = true;
            }

            if render || resized {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Forward a terminal event; returns whether a frame should be drawn
    fn handle_event(&mut self, event: tui::Event) -> bool {
        let raw = match event {
            tui::Event::Init | tui::Event::Render => return true,
            tui::Event::Error => {
                log::warn!("terminal event stream reported an error");
                return false;
            }
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Quit => RawMsg::Quit,
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            tui::Event::Paste(text) => RawMsg::Paste(text),
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
        };
        self.runtime.send_raw_msg(raw);
        false
    }

    fn update_cycle(&mut self) {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for line in log.iter().filter(|l| l.starts_with('✗')) {
                    log::warn!("{line}");
                }
            }
            Err(e) => log::error!("Runtime error: {e}"),
        }
    }

    async fn render(&mut self) -> Result<()> {
        let metrics = self.renderer.render(&self.tui, self.runtime.state()).await?;
        self.report_viewport(metrics);
        Ok(())
    }

    /// Feed layout changes back so scroll clamping and infinite scroll see
    /// the real geometry
    fn report_viewport(&mut self, metrics: ViewportMetrics) {
        let observed = (metrics.client_height, metrics.content_height);
        if self.last_viewport == Some(observed) {
            return;
        }
        self.last_viewport = Some(observed);
        self.runtime.send_raw_msg(RawMsg::Viewport {
            client_height: metrics.client_height,
            content_height: metrics.content_height,
        });
    }
}
