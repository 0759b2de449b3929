use std::collections::BTreeMap;

use super::{Item, Stats};
use crate::config::GameConfig;

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub race: String,
    pub stats: Stats,
    pub armor_class: i32,
    /// Always within `0..=GameConfig::MAX_HIT_POINTS`.
    pub hit_points: u32,
    /// Not consumed by any rule yet.
    pub mana: u32,
    pub inventory: Vec<Item>,
    /// Slot name to equipped item.
    pub equipped: BTreeMap<String, Item>,
}

impl Player {
    pub fn new(race: impl Into<String>) -> Self {
        Self {
            race: race.into(),
            stats: Stats::default(),
            armor_class: GameConfig::PLAYER_ARMOR_CLASS,
            hit_points: GameConfig::MAX_HIT_POINTS,
            mana: 0,
            inventory: Vec::new(),
            equipped: BTreeMap::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn is_wounded(&self) -> bool {
        self.hit_points < GameConfig::MAX_HIT_POINTS
    }

    /// Heals up to `amount`, clamped at the maximum. Returns HP gained.
    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(GameConfig::MAX_HIT_POINTS.saturating_sub(self.hit_points));
        self.hit_points += gained;
        gained
    }

    pub(crate) fn heal_fully(&mut self) {
        self.hit_points = GameConfig::MAX_HIT_POINTS;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Human")
    }
}
