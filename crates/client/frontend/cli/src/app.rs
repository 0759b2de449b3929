//! Glue code tying the runtime handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use runtime::RuntimeHandle;

use crate::{config::CliConfig, event::EventLoop, presentation::terminal};
use client_frontend_core::{Frontend, FrontendConfig, GameEventConsumer};

/// Terminal frontend. Owns no game state beyond the latest snapshot.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        info!("CLI frontend starting");

        // Subscribe before the snapshot so nothing published in between is lost.
        let events = handle.subscribe();
        let initial_state = handle.query_state().await?;

        let mut consumer =
            GameEventConsumer::new(initial_state, self.frontend_config.messages.capacity);
        consumer.push_info("Welcome to the arena. Press [n] to find a monster.");

        let event_loop = EventLoop::new(
            events,
            handle,
            consumer,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        info!(
            messages = consumer.message_log().len(),
            level = consumer.game().level(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
