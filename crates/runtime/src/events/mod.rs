//! Events published by the runtime after each processed input.
use game_core::{EventKind, Game, Rejection};

#[derive(Clone, Debug)]
pub enum RuntimeEvent {
    /// An event was accepted; `game` is the state right after it.
    StateChanged { cause: EventKind, game: Game },
    /// An event arrived while its guard was false. State is unchanged.
    Rejected { cause: EventKind, reason: Rejection },
    /// The worker stopped after a quit.
    Shutdown,
}

impl RuntimeEvent {
    pub fn game(&self) -> Option<&Game> {
        match self {
            Self::StateChanged { game, .. } => Some(game),
            _ => None,
        }
    }
}
