//! Battle rules and game state for the arena.
//!
//! `game-core` defines the canonical rules (damage rolls, scene and turn
//! transitions) and the state they act on. It performs no I/O and never
//! waits: the runtime feeds it events and executes the [`Effect`]s it
//! returns. All state mutation flows through [`engine::BattleEngine`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use combat::{max_damage, roll_damage};
pub use config::GameConfig;
pub use engine::{BattleEngine, BattleEvent, Effect, Effects, EventKind, FetchFailure, Rejection};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use state::{Attack, Game, Item, Messages, Monster, Player, Scene, Stats, Turn};
