//! Utilities for reacting to runtime events inside UI layers.
use game_core::{EventKind, Game, Rejection};
use runtime::RuntimeEvent;
use tracing::trace;

use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::view_model::ViewModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    pub shutdown: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            shutdown: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            shutdown: false,
        }
    }

    pub const fn shutdown() -> Self {
        Self {
            requires_redraw: false,
            shutdown: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            shutdown: self.shutdown || other.shutdown,
        }
    }
}

/// Tracks the latest game snapshot and turns runtime events into log lines.
#[derive(Clone, Debug)]
pub struct GameEventConsumer {
    game: Game,
    log: MessageLog,
}

impl GameEventConsumer {
    pub fn new(game: Game, message_capacity: usize) -> Self {
        Self {
            game,
            log: MessageLog::new(message_capacity),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel::from_game(&self.game)
    }

    pub fn message_log(&self) -> &MessageLog {
        &self.log
    }

    pub fn on_event(&mut self, event: &RuntimeEvent) -> EventImpact {
        match event {
            RuntimeEvent::StateChanged { cause, game } => {
                self.record(*cause, game);
                self.game = game.clone();
                EventImpact::redraw()
            }
            RuntimeEvent::Rejected { cause, reason } => {
                trace!(target: "frontend::event", %cause, reason = reason.as_str(), "input ignored");
                match rejection_hint(reason) {
                    Some(hint) => {
                        self.push_message(hint, MessageLevel::Warning);
                        EventImpact::redraw()
                    }
                    None => EventImpact::none(),
                }
            }
            RuntimeEvent::Shutdown => EventImpact::shutdown(),
        }
    }

    fn record(&mut self, cause: EventKind, game: &Game) {
        let messages = game.messages();
        let level = self.game.level().max(game.level());
        let mut push = |text: &Option<String>, severity| {
            if let Some(text) = text {
                self.log.push(MessageEntry::new(text.clone(), level, severity));
            }
        };

        match cause {
            EventKind::PlayerAttack => {
                push(&messages.player_action, MessageLevel::Info);
                if !game.is_in_battle() {
                    push(&messages.notice, MessageLevel::Info);
                }
            }
            EventKind::MonsterAttack => {
                push(&messages.monster_action, MessageLevel::Info);
                if !game.is_in_battle() {
                    push(&messages.notice, MessageLevel::Warning);
                }
            }
            EventKind::Rest | EventKind::GiveUp => push(&messages.notice, MessageLevel::Info),
            EventKind::MonsterFetched => {
                let error = game.error().map(|e| format!("Error: {e}"));
                push(&error, MessageLevel::Error);
            }
            EventKind::StartBattle | EventKind::Quit => {}
        }
    }

    /// Log a line that did not come from the runtime.
    pub fn push_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.log
            .push(MessageEntry::new(text, self.game.level(), level));
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push_message(text, MessageLevel::Info);
    }
}

/// Player-facing explanation for rejections worth surfacing.
fn rejection_hint(reason: &Rejection) -> Option<&'static str> {
    match reason {
        Rejection::RestAlreadyUsed => Some("You have already rested at this camp."),
        Rejection::NothingToHeal => Some("You are already at full health."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BattleEngine, BattleEvent, GameConfig, Monster, ScriptedRng};

    use super::*;

    fn changed(cause: EventKind, game: &Game) -> RuntimeEvent {
        RuntimeEvent::StateChanged {
            cause,
            game: game.clone(),
        }
    }

    #[test]
    fn logs_attacks_and_kill() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::new([3]);
        let config = GameConfig::default();
        let mut consumer = GameEventConsumer::new(game.clone(), 8);

        for event in [
            BattleEvent::StartBattle,
            BattleEvent::MonsterFetched(Ok(Monster::new("Rat", 2, 10))),
            BattleEvent::PlayerAttack,
        ] {
            let cause = event.kind();
            BattleEngine::new(&mut game, &mut rng, &config)
                .apply(event)
                .unwrap();
            let impact = consumer.on_event(&changed(cause, &game));
            assert!(impact.requires_redraw);
        }

        let texts: Vec<_> = consumer
            .message_log()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, ["You hit Rat for 3 damage!", "You have slain Rat!"]);
        assert_eq!(consumer.game().level(), 1);
        assert_eq!(consumer.message_log().iter().last().map(|e| e.level_at), Some(1));
    }

    #[test]
    fn only_rest_rejections_are_surfaced() {
        let mut consumer = GameEventConsumer::new(Game::default(), 8);

        let silent = consumer.on_event(&RuntimeEvent::Rejected {
            cause: EventKind::PlayerAttack,
            reason: Rejection::NotInBattle,
        });
        let hinted = consumer.on_event(&RuntimeEvent::Rejected {
            cause: EventKind::Rest,
            reason: Rejection::NothingToHeal,
        });

        assert_eq!(silent, EventImpact::none());
        assert!(hinted.requires_redraw);
        assert_eq!(consumer.message_log().len(), 1);
        assert_eq!(
            consumer.message_log().iter().next().map(|e| e.level),
            Some(MessageLevel::Warning)
        );
    }

    #[test]
    fn shutdown_is_reported() {
        let mut consumer = GameEventConsumer::new(Game::default(), 8);
        assert!(consumer.on_event(&RuntimeEvent::Shutdown).shutdown);
    }
}
