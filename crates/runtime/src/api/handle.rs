//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing. Commands are fire-and-forget:
//! their outcome arrives as a [`RuntimeEvent`] on the subscription.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::Game;

use super::command::PlayerCommand;
use super::errors::{Result, RuntimeError};
use crate::events::RuntimeEvent;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<RuntimeEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<RuntimeEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Queue a player command behind everything already in the inbox.
    pub async fn submit(&self, command: PlayerCommand) -> Result<()> {
        self.command_tx
            .send(Command::Apply(command.into()))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<Game> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Receive every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.event_tx.subscribe()
    }
}
