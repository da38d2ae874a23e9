use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{session::SessionMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        api::BlogApi,
        config::Config,
        storage::SessionStore,
        tui::{event_source::EventSource, Event, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the application: reads terminal events, runs the update cycle
/// and renders when something asked for it.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner reading events from `events` and drawing on `tui`
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
        api: Arc<dyn BlogApi>,
        sessions: SessionStore,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, api, sessions);

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime
            .add_tui_sender(tui_tx)
            .map_err(|e| color_eyre::eyre::eyre!(e))?;
        runtime
            .add_render_request_sender(render_tx)
            .map_err(|e| color_eyre::eyre::eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            tui_rx,
            render_rx,
        })
    }

    /// Create a runner that reads events from the terminal it draws on
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        api: Arc<dyn BlogApi>,
        sessions: SessionStore,
    ) -> Result<Self> {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, events, api, sessions)
    }

    /// Run the main loop until the state asks to quit or events run out
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        // Session Manager initializes on load, then the list is fetched
        self.runtime.send_msg(Msg::Session(SessionMsg::Restore));

        loop {
            let mut saw_render = false;

            match self.events.next().await {
                Some(event) => saw_render = self.handle_event(event),
                None => self.runtime.send_raw_msg(RawMsg::Quit),
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            // Host-side commands
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                        saw_render = true;
                    }
                }
            }

            let mut render_requests = 0;
            while self.render_rx.try_recv().is_ok() {
                render_requests += 1;
            }

            if render_requests > 0 || saw_render {
                self.render().await?;
            }

            let system = &self.runtime.state().system;
            if system.should_quit {
                break;
            }
            if system.should_suspend {
                self.suspend().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Forwards a terminal event; returns whether it asks for a frame
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Render => return true,
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event error".to_string())),
            Event::Init => return true,
            Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Mouse(_) => {}
        }
        false
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.enter()?;
        }
        self.runtime.send_msg(Msg::System(SystemMsg::Resume));
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
