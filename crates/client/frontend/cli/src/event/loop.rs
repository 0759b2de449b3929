//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! One `tokio::select!` alternates between the runtime's broadcast stream and
//! a fixed-rate tick that polls the keyboard and animates the spinner.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::{PlayerCommand, RuntimeEvent, RuntimeHandle};
use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{self, Duration},
};
use tracing::{debug, info, warn};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    presentation::{terminal::Tui, ui},
    state::AppState,
};
use client_frontend_core::{EventImpact, FrontendConfig, GameEventConsumer};

const FRAME_INTERVAL_MS: u64 = 16;

/// Whether the loop should keep going.
type Continue = bool;

pub struct EventLoop {
    events: broadcast::Receiver<RuntimeEvent>,
    handle: RuntimeHandle,
    input: InputHandler,
    consumer: GameEventConsumer,
    app_state: AppState,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        events: broadcast::Receiver<RuntimeEvent>,
        handle: RuntimeHandle,
        consumer: GameEventConsumer,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            events,
            handle,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            frontend_config,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameEventConsumer> {
        self.render(terminal)?;

        let mut frame_tick = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frame_tick.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            let keep_going = tokio::select! {
                result = self.events.recv() => self.handle_runtime_event(result, terminal)?,
                _ = frame_tick.tick() => self.handle_input_tick(terminal).await?,
            };
            if !keep_going {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Apply the first event plus whatever else is already queued, then
    /// redraw once.
    fn handle_runtime_event(
        &mut self,
        first: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<Continue> {
        let mut impact = EventImpact::none();
        let mut next = Some(first);
        let mut handled = 0;

        while let Some(result) = next.take() {
            match result {
                Ok(event) => {
                    impact = impact.combine(self.consumer.on_event(&event));
                }
                Err(RecvError::Closed) => {
                    warn!(target: "cli::event", "event stream closed");
                    return Ok(false);
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(target: "cli::event", skipped, "dropped stale events");
                }
            }

            handled += 1;
            if handled < self.frontend_config.channels.event_buffer {
                next = match self.events.try_recv() {
                    Ok(event) => Some(Ok(event)),
                    Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                        Some(Err(RecvError::Lagged(skipped)))
                    }
                    Err(_) => None,
                };
            }
        }

        if impact.shutdown {
            info!(target: "cli::event", "runtime shut down");
            return Ok(false);
        }
        if impact.requires_redraw {
            self.render(terminal)?;
        }
        Ok(true)
    }

    /// Poll for keyboard input and animate the spinner.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<Continue> {
        let spinner_moved = self.app_state.tick() && self.consumer.game().is_loading();

        if !term_event::poll(Duration::from_millis(0))? {
            if spinner_moved {
                self.render(terminal)?;
            }
            return Ok(true);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(width, height) => {
                debug!(target: "cli::event", width, height, "terminal resized");
                self.render(terminal)?;
                Ok(true)
            }
            _ => {
                if spinner_moved {
                    self.render(terminal)?;
                }
                Ok(true)
            }
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<Continue> {
        let command = match self.input.handle_key(key, self.consumer.game().scene()) {
            KeyAction::Quit => {
                if self.app_state.quitting {
                    return Ok(false);
                }
                self.app_state.quitting = true;
                self.render(terminal)?;
                PlayerCommand::Quit
            }
            KeyAction::Submit(command) => command,
            KeyAction::None => return Ok(true),
        };

        debug!(target: "cli::event", ?command, "submitting command");
        if let Err(error) = self.handle.submit(command).await {
            warn!(target: "cli::event", %error, "runtime is gone");
            return Ok(false);
        }
        Ok(true)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view_model = self.consumer.view_model();
        let ctx = ui::RenderContext {
            view_model: &view_model,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
