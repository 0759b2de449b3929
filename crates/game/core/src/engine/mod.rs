//! Battle state machine.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`Game`]:
//! `(Game, BattleEvent) -> (Game, Vec<Effect>)`. Every mutation of player or
//! monster flows through one of its entry points, which keeps HP clamping,
//! the once-per-visit rest, and the level reset on death in one place.

mod errors;
mod event;
mod transition;

pub use errors::Rejection;
pub use event::{BattleEvent, Effect, EventKind, FetchFailure};

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Game;

/// Effects produced by an accepted transition.
pub type Effects = Vec<Effect>;

/// Engine bound to one game, one random source, and one configuration.
///
/// Cheap to construct: build one per event.
pub struct BattleEngine<'a, R>
where
    R: RngOracle + ?Sized,
{
    state: &'a mut Game,
    rng: &'a mut R,
    config: &'a GameConfig,
}

impl<'a, R> BattleEngine<'a, R>
where
    R: RngOracle + ?Sized,
{
    pub fn new(state: &'a mut Game, rng: &'a mut R, config: &'a GameConfig) -> Self {
        Self { state, rng, config }
    }

    /// Applies an event, returning the effects to execute.
    ///
    /// On `Err` the state is unchanged.
    pub fn apply(&mut self, event: BattleEvent) -> Result<Effects, Rejection> {
        match event {
            BattleEvent::StartBattle => self.start_battle(),
            BattleEvent::MonsterFetched(result) => self.monster_fetched(result),
            BattleEvent::Rest => self.rest(),
            BattleEvent::PlayerAttack => self.player_attack(),
            BattleEvent::MonsterAttack => self.monster_attack(),
            BattleEvent::GiveUp => self.give_up(),
            BattleEvent::Quit => Ok(self.quit()),
        }
    }
}
