//! Battle worker that owns the authoritative [`game_core::Game`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle) and from the
//! effect tasks it spawns, applies them through [`BattleEngine`] one at a
//! time, and publishes the outcome to subscribers.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use game_content::MonsterSource;
use game_core::{BattleEngine, BattleEvent, Effect, FetchFailure, Game, GameConfig, RngOracle};

use crate::events::RuntimeEvent;

/// Messages accepted by the worker inbox.
pub enum Command {
    /// Feed an event to the engine. Player input, fetch completions and
    /// timer expiries all arrive this way, in order.
    Apply(BattleEvent),
    /// Return a snapshot of the current state.
    QueryState { reply: oneshot::Sender<Game> },
}

/// Background task that processes battle events.
pub struct BattleWorker {
    game: Game,
    rng: Box<dyn RngOracle>,
    config: GameConfig,
    source: Arc<dyn MonsterSource>,
    command_rx: mpsc::Receiver<Command>,
    // Weak so the inbox closes once every handle is gone.
    command_tx: mpsc::WeakSender<Command>,
    event_tx: broadcast::Sender<RuntimeEvent>,
}

impl BattleWorker {
    pub fn new(
        game: Game,
        rng: Box<dyn RngOracle>,
        config: GameConfig,
        source: Arc<dyn MonsterSource>,
        command_rx: mpsc::Receiver<Command>,
        command_tx: mpsc::WeakSender<Command>,
        event_tx: broadcast::Sender<RuntimeEvent>,
    ) -> Self {
        info!(
            target: "runtime::worker",
            scene = %game.scene(),
            hit_points = game.player().hit_points,
            monster_turn_delay_ms = config.monster_turn_delay.as_millis() as u64,
            "battle worker initialized"
        );

        Self {
            game,
            rng,
            config,
            source,
            command_rx,
            command_tx,
            event_tx,
        }
    }

    /// Main worker loop.
    ///
    /// Ends on quit or once every sender is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.command_rx.recv().await {
            match command {
                Command::Apply(event) => {
                    if self.handle_event(event).is_break() {
                        break;
                    }
                }
                Command::QueryState { reply } => {
                    if reply.send(self.game.clone()).is_err() {
                        debug!(target: "runtime::worker", "QueryState reply channel closed (caller dropped)");
                    }
                }
            }
        }

        debug!(target: "runtime::worker", "battle worker stopped");
    }

    fn handle_event(&mut self, event: BattleEvent) -> ControlFlow<()> {
        let cause = event.kind();
        let mut engine = BattleEngine::new(&mut self.game, &mut *self.rng, &self.config);

        match engine.apply(event) {
            Ok(effects) => {
                debug!(
                    target: "runtime::worker",
                    %cause,
                    scene = %self.game.scene(),
                    turn = %self.game.turn(),
                    effects = effects.len(),
                    "event applied"
                );
                self.publish(RuntimeEvent::StateChanged {
                    cause,
                    game: self.game.clone(),
                });

                for effect in effects {
                    self.execute(effect)?;
                }
                ControlFlow::Continue(())
            }
            Err(reason) => {
                debug!(
                    target: "runtime::worker",
                    %cause,
                    reason = reason.as_str(),
                    "event rejected"
                );
                self.publish(RuntimeEvent::Rejected { cause, reason });
                ControlFlow::Continue(())
            }
        }
    }

    fn execute(&self, effect: Effect) -> ControlFlow<()> {
        match effect {
            Effect::FetchMonster => self.spawn_fetch(),
            Effect::ScheduleMonsterAttack { delay } => self.spawn_monster_turn(delay),
            Effect::Exit => {
                info!(target: "runtime::worker", "quit requested, shutting down");
                self.publish(RuntimeEvent::Shutdown);
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn spawn_fetch(&self) {
        let Some(command_tx) = self.command_tx.upgrade() else {
            return;
        };
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let result = source.fetch_random_monster().await.map_err(|error| {
                warn!(target: "runtime::worker", %error, "monster fetch failed");
                FetchFailure::new(error.to_string())
            });

            if command_tx
                .send(Command::Apply(BattleEvent::MonsterFetched(result)))
                .await
                .is_err()
            {
                debug!(target: "runtime::worker", "fetch finished after worker stopped");
            }
        });
    }

    fn spawn_monster_turn(&self, delay: Duration) {
        let Some(command_tx) = self.command_tx.upgrade() else {
            return;
        };

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if command_tx
                .send(Command::Apply(BattleEvent::MonsterAttack))
                .await
                .is_err()
            {
                debug!(target: "runtime::worker", "monster turn fired after worker stopped");
            }
        });
    }

    fn publish(&self, event: RuntimeEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }
}
