//! Inputs and outputs of the battle reducer.

use std::time::Duration;

use crate::state::Monster;

/// Why a monster could not be fetched.
///
/// The content layer owns the detailed error. The engine only needs a
/// message it can surface to the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything that can drive a state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// Leave camp and look for a fight.
    StartBattle,
    /// The asynchronous fetch issued by `StartBattle` completed.
    MonsterFetched(Result<Monster, FetchFailure>),
    /// Recover hit points at camp.
    Rest,
    /// The player swings at the current monster.
    PlayerAttack,
    /// The monster's delayed answer to a player attack.
    MonsterAttack,
    /// Retreat from battle back to camp.
    GiveUp,
    /// Leave the game.
    Quit,
}

impl BattleEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::StartBattle => EventKind::StartBattle,
            Self::MonsterFetched(_) => EventKind::MonsterFetched,
            Self::Rest => EventKind::Rest,
            Self::PlayerAttack => EventKind::PlayerAttack,
            Self::MonsterAttack => EventKind::MonsterAttack,
            Self::GiveUp => EventKind::GiveUp,
            Self::Quit => EventKind::Quit,
        }
    }
}

/// Payload-free tag of a [`BattleEvent`], for logs and subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    StartBattle,
    MonsterFetched,
    Rest,
    PlayerAttack,
    MonsterAttack,
    GiveUp,
    Quit,
}

/// Follow-up work requested by a transition.
///
/// The engine never performs I/O or waits. The runtime executes effects and
/// feeds their results back as new events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a random monster and deliver [`BattleEvent::MonsterFetched`].
    FetchMonster,
    /// Deliver [`BattleEvent::MonsterAttack`] once `delay` has elapsed.
    ScheduleMonsterAttack { delay: Duration },
    /// Stop processing events.
    Exit,
}
