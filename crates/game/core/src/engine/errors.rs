//! Guard rejections raised by the battle engine.

use crate::state::{Scene, Turn};

/// A command arrived while its precondition was false.
///
/// Rejections are not failures: the state is left untouched and the caller
/// is free to ignore them. They exist so the runtime can log why an input
/// had no effect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("a monster fetch is already in flight")]
    FetchInFlight,

    #[error("no monster fetch is pending")]
    NoFetchPending,

    #[error("only available at camp (scene is {scene})")]
    NotInCamp { scene: Scene },

    #[error("no battle is in progress")]
    NotInBattle,

    #[error("it is not the player's turn (turn is {turn})")]
    NotPlayersTurn { turn: Turn },

    #[error("it is not the monster's turn (turn is {turn})")]
    NotMonstersTurn { turn: Turn },

    #[error("a combatant is already down")]
    CombatantDown,

    #[error("rest has already been taken this visit")]
    RestAlreadyUsed,

    #[error("nothing to heal")]
    NothingToHeal,
}

impl Rejection {
    /// Returns a static string identifier for this rejection.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FetchInFlight => "fetch_in_flight",
            Self::NoFetchPending => "no_fetch_pending",
            Self::NotInCamp { .. } => "not_in_camp",
            Self::NotInBattle => "not_in_battle",
            Self::NotPlayersTurn { .. } => "not_players_turn",
            Self::NotMonstersTurn { .. } => "not_monsters_turn",
            Self::CombatantDown => "combatant_down",
            Self::RestAlreadyUsed => "rest_already_used",
            Self::NothingToHeal => "nothing_to_heal",
        }
    }
}
