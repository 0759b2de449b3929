//! High-level runtime orchestrator.
//!
//! The runtime owns the battle worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the game.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_content::MonsterSource;
use game_core::{Game, GameConfig, PcgRng, RngOracle};

use crate::api::{PlayerCommand, Result, RuntimeError, RuntimeHandle};
use crate::events::RuntimeEvent;
use crate::workers::{BattleWorker, Command};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the battle loop
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.handle.subscribe()
    }

    /// Wait for the worker to stop on its own, after a quit.
    pub async fn wait(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Ask the worker to quit and wait for it.
    ///
    /// Succeeds if the worker already stopped.
    pub async fn shutdown(self) -> Result<()> {
        match self.handle.submit(PlayerCommand::Quit).await {
            Ok(()) | Err(RuntimeError::CommandChannelClosed) => {}
            Err(other) => return Err(other),
        }
        self.wait().await
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<Game>,
    source: Option<Arc<dyn MonsterSource>>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            source: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules configuration
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Set the required monster source
    pub fn source(mut self, source: impl MonsterSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Set a shared monster source
    pub fn shared_source(mut self, source: Arc<dyn MonsterSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the damage roll source (default: entropy-seeded [`PcgRng`])
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Provide initial game state (default: a fresh player at camp)
    pub fn initial_state(mut self, state: Game) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let source = self.source.ok_or(RuntimeError::MissingSource)?;
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::from_entropy()) as Box<dyn RngOracle>);
        let game = self.state.unwrap_or_default();

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (event_tx, _event_rx) =
            broadcast::channel::<RuntimeEvent>(self.config.event_buffer_size.max(1));

        let worker = BattleWorker::new(
            game,
            rng,
            self.config.game_config,
            source,
            command_rx,
            command_tx.downgrade(),
            event_tx.clone(),
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_tx),
            worker_handle,
        })
    }
}
