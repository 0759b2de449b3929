//! Damage calculation and application.

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Highest damage an attacker can roll against a defender.
///
/// # Formula
///
/// ```text
/// max = BASE_MAX_DAMAGE + DAMAGE_PER_AC_POINT * max(0, attacker_ac - defender_ac)
/// ```
///
/// A better armored attacker gets a higher ceiling. A worse armored one is
/// never penalised below the base.
pub fn max_damage(attacker_ac: i32, defender_ac: i32) -> u32 {
    let advantage = attacker_ac.saturating_sub(defender_ac).max(0) as u32;
    GameConfig::BASE_MAX_DAMAGE
        .saturating_add(advantage.saturating_mul(GameConfig::DAMAGE_PER_AC_POINT))
}

/// Roll damage uniformly in `[0, max_damage(attacker_ac, defender_ac)]`.
///
/// A roll of 0 is a miss. This is a magnitude check, not a to-hit check.
pub fn roll_damage<R>(rng: &mut R, attacker_ac: i32, defender_ac: i32) -> u32
where
    R: RngOracle + ?Sized,
{
    rng.range(0, max_damage(attacker_ac, defender_ac))
}

/// Apply damage to current HP, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
