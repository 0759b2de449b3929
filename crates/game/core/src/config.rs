use std::time::Duration;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Pause between the player's attack and the monster's answer.
    pub monster_turn_delay: Duration,
}

impl GameConfig {
    // ===== rule constants =====
    /// Hit point ceiling for the player. Every heal clamps here.
    pub const MAX_HIT_POINTS: u32 = 100;
    /// Hit points restored by a single rest at camp.
    pub const REST_HEAL: u32 = 50;
    /// Damage ceiling before the armor class bonus is added.
    pub const BASE_MAX_DAMAGE: u32 = 8;
    /// Extra damage ceiling per point the attacker's AC exceeds the defender's.
    pub const DAMAGE_PER_AC_POINT: u32 = 2;
    /// Armor class of a freshly created player.
    pub const PLAYER_ARMOR_CLASS: i32 = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MONSTER_TURN_DELAY_MS: u64 = 200;

    pub fn new() -> Self {
        Self {
            monster_turn_delay: Duration::from_millis(Self::DEFAULT_MONSTER_TURN_DELAY_MS),
        }
    }

    pub fn with_monster_turn_delay(monster_turn_delay: Duration) -> Self {
        Self { monster_turn_delay }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
