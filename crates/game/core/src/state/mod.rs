//! Authoritative game state representation.
//!
//! [`Game`] is the aggregate root: player, current monster, scene, turn, and
//! the transient flags presentation needs. Other crates read it through
//! accessors and mutate it only through [`BattleEngine`](crate::BattleEngine).
pub mod types;

pub use types::{Attack, Item, Messages, Monster, Player, Scene, Stats, Turn};

use crate::config::GameConfig;

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub(crate) player: Player,
    pub(crate) monster: Option<Monster>,
    pub(crate) scene: Scene,
    pub(crate) turn: Turn,
    /// A monster fetch is in flight.
    pub(crate) loading: bool,
    /// Rest was taken during this camp visit.
    pub(crate) rest_used: bool,
    /// Kills since the last death or retreat.
    pub(crate) level: u32,
    pub(crate) messages: Messages,
    /// Last fetch failure, cleared on the next battle attempt.
    pub(crate) error: Option<String>,
}

impl Game {
    /// Starts a game at camp.
    ///
    /// Hit points above [`GameConfig::MAX_HIT_POINTS`] are clamped.
    pub fn new(mut player: Player) -> Self {
        player.hit_points = player.hit_points.min(GameConfig::MAX_HIT_POINTS);
        Self {
            player,
            monster: None,
            scene: Scene::Spawn,
            turn: Turn::Player,
            loading: false,
            rest_used: false,
            level: 0,
            messages: Messages::default(),
            error: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn rest_used(&self) -> bool {
        self.rest_used
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_battle(&self) -> bool {
        self.scene == Scene::Battle
    }

    /// Whether a rest would be accepted right now.
    pub fn can_rest(&self) -> bool {
        self.scene == Scene::Spawn
            && !self.loading
            && !self.rest_used
            && self.player.is_alive()
            && self.player.is_wounded()
    }

    /// Ends the battle and returns to camp.
    ///
    /// Resets everything that is tied to a single camp visit.
    pub(crate) fn return_to_camp(&mut self) {
        self.scene = Scene::Spawn;
        self.turn = Turn::Player;
        self.rest_used = false;
        self.monster = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::default())
    }
}
