//! One transition per [`BattleEvent`](super::BattleEvent).
//!
//! Each handler checks its guard first and returns a [`Rejection`] before
//! touching any state, so a rejected event is always a no-op.

use super::{BattleEngine, Effect, Effects, FetchFailure, Rejection};
use crate::combat::{apply_damage, roll_damage};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Monster, Scene, Turn};

impl<R> BattleEngine<'_, R>
where
    R: RngOracle + ?Sized,
{
    /// Leave camp and request a monster.
    ///
    /// A dead player starts a fresh life at full health.
    pub fn start_battle(&mut self) -> Result<Effects, Rejection> {
        self.require_camp()?;
        if self.state.loading {
            return Err(Rejection::FetchInFlight);
        }

        if !self.state.player.is_alive() {
            self.state.player.heal_fully();
        }
        self.state.messages.clear();
        self.state.error = None;
        self.state.turn = Turn::Player;
        self.state.loading = true;

        Ok(vec![Effect::FetchMonster])
    }

    /// Settle the fetch issued by [`Self::start_battle`].
    ///
    /// Failure leaves the player at camp with the error recorded.
    pub fn monster_fetched(
        &mut self,
        result: Result<Monster, FetchFailure>,
    ) -> Result<Effects, Rejection> {
        if !self.state.loading || self.state.scene != Scene::Spawn {
            return Err(Rejection::NoFetchPending);
        }

        self.state.loading = false;
        self.state.messages.notice = None;
        match result {
            Ok(monster) => {
                self.state.monster = Some(monster);
                self.state.scene = Scene::Battle;
                self.state.turn = Turn::Player;
                self.state.error = None;
            }
            Err(failure) => {
                self.state.error = Some(failure.message);
            }
        }

        Ok(Vec::new())
    }

    /// Heal at camp, once per visit.
    pub fn rest(&mut self) -> Result<Effects, Rejection> {
        self.require_camp()?;
        if self.state.loading {
            return Err(Rejection::FetchInFlight);
        }
        if self.state.rest_used {
            return Err(Rejection::RestAlreadyUsed);
        }
        if !self.state.player.is_alive() || !self.state.player.is_wounded() {
            return Err(Rejection::NothingToHeal);
        }

        let healed = self.state.player.heal(GameConfig::REST_HEAL);
        self.state.rest_used = true;
        self.state.messages.notice = Some(format!("You rest and regain {healed} HP."));

        Ok(Vec::new())
    }

    /// Player strikes the monster, then either wins or hands over the turn.
    pub fn player_attack(&mut self) -> Result<Effects, Rejection> {
        self.require_turn(Turn::Player)?;
        let player_ac = self.state.player.armor_class;
        let monster = match self.state.monster.as_mut() {
            Some(monster) if monster.is_alive() && self.state.player.is_alive() => monster,
            _ => return Err(Rejection::CombatantDown),
        };

        let damage = roll_damage(&mut *self.rng, player_ac, monster.armor_class);
        monster.hit_points = apply_damage(monster.hit_points, damage);
        let name = monster.name.clone();
        let slain = !monster.is_alive();

        self.state.messages.player_action = Some(if damage == 0 {
            format!("You miss {name}!")
        } else {
            format!("You hit {name} for {damage} damage!")
        });

        if slain {
            self.state.level += 1;
            self.state.messages.notice = Some(format!("You have slain {name}!"));
            self.state.return_to_camp();
            return Ok(Vec::new());
        }

        self.state.turn = Turn::Monster;
        Ok(vec![Effect::ScheduleMonsterAttack {
            delay: self.config.monster_turn_delay,
        }])
    }

    /// Monster answers, then either kills the player or hands the turn back.
    pub fn monster_attack(&mut self) -> Result<Effects, Rejection> {
        self.require_turn(Turn::Monster)?;
        let monster = match self.state.monster.as_ref() {
            Some(monster) if monster.is_alive() && self.state.player.is_alive() => monster,
            _ => return Err(Rejection::CombatantDown),
        };

        let damage = roll_damage(
            &mut *self.rng,
            monster.armor_class,
            self.state.player.armor_class,
        );
        let line = match (damage, monster.signature_attack()) {
            (0, _) => format!("{} misses you!", monster.name),
            (_, Some(attack)) => format!(
                "{} hits you with {attack} for {damage} damage!",
                monster.name
            ),
            (_, None) => format!("{} hits you for {damage} damage!", monster.name),
        };

        let player = &mut self.state.player;
        player.hit_points = apply_damage(player.hit_points, damage);
        self.state.messages.monster_action = Some(line);

        if !self.state.player.is_alive() {
            let level = self.state.level;
            self.state.messages.notice = Some(format!("You died at level {level}!"));
            self.state.level = 0;
            self.state.return_to_camp();
            return Ok(Vec::new());
        }

        self.state.turn = Turn::Player;
        Ok(Vec::new())
    }

    /// Retreat to camp at full health, forfeiting the level streak.
    pub fn give_up(&mut self) -> Result<Effects, Rejection> {
        if self.state.scene != Scene::Battle {
            return Err(Rejection::NotInBattle);
        }

        self.state.player.heal_fully();
        self.state.level = 0;
        self.state.messages.notice = Some("You gave up and retreated to camp.".to_string());
        self.state.return_to_camp();

        Ok(Vec::new())
    }

    /// Always accepted.
    pub fn quit(&mut self) -> Effects {
        vec![Effect::Exit]
    }

    fn require_camp(&self) -> Result<(), Rejection> {
        match self.state.scene {
            Scene::Spawn => Ok(()),
            scene => Err(Rejection::NotInCamp { scene }),
        }
    }

    fn require_turn(&self, expected: Turn) -> Result<(), Rejection> {
        if self.state.scene != Scene::Battle {
            return Err(Rejection::NotInBattle);
        }
        match (expected, self.state.turn) {
            (Turn::Player, Turn::Player) | (Turn::Monster, Turn::Monster) => Ok(()),
            (Turn::Player, turn) => Err(Rejection::NotPlayersTurn { turn }),
            (Turn::Monster, turn) => Err(Rejection::NotMonstersTurn { turn }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::BattleEvent;
    use crate::env::ScriptedRng;
    use crate::state::{Attack, Game};

    fn goblin() -> Monster {
        Monster::new("Goblin", 10, 12).with_attack(Attack::named("Scimitar"))
    }

    fn apply(
        game: &mut Game,
        rng: &mut ScriptedRng,
        event: BattleEvent,
    ) -> Result<Effects, Rejection> {
        let config = GameConfig::default();
        BattleEngine::new(game, rng, &config).apply(event)
    }

    /// Fresh game already in battle against `monster`.
    fn in_battle(monster: Monster) -> Game {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();
        apply(&mut game, &mut rng, BattleEvent::StartBattle).unwrap();
        apply(&mut game, &mut rng, BattleEvent::MonsterFetched(Ok(monster))).unwrap();
        game
    }

    #[test]
    fn start_battle_requests_a_fetch() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();

        let effects = apply(&mut game, &mut rng, BattleEvent::StartBattle).unwrap();

        assert_eq!(effects, vec![Effect::FetchMonster]);
        assert!(game.is_loading());
        assert_eq!(game.scene(), Scene::Spawn);
    }

    #[test]
    fn start_battle_is_not_reentrant() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();
        apply(&mut game, &mut rng, BattleEvent::StartBattle).unwrap();

        let before = game.clone();
        let second = apply(&mut game, &mut rng, BattleEvent::StartBattle);

        assert_eq!(second, Err(Rejection::FetchInFlight));
        assert_eq!(game, before);
    }

    #[test]
    fn start_battle_revives_a_dead_player() {
        let mut game = Game::default();
        game.player.hit_points = 0;
        game.error = Some("boom".into());
        let mut rng = ScriptedRng::default();

        apply(&mut game, &mut rng, BattleEvent::StartBattle).unwrap();

        assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);
        assert!(game.error().is_none());
    }

    #[test]
    fn failed_fetch_stays_at_camp_with_error() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();
        apply(&mut game, &mut rng, BattleEvent::StartBattle).unwrap();

        let failure = FetchFailure::new("upstream unavailable");
        apply(&mut game, &mut rng, BattleEvent::MonsterFetched(Err(failure))).unwrap();

        assert_eq!(game.scene(), Scene::Spawn);
        assert!(!game.is_loading());
        assert_eq!(game.error(), Some("upstream unavailable"));
        assert!(game.monster().is_none());
    }

    #[test]
    fn unsolicited_fetch_result_is_rejected() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();

        let result = apply(&mut game, &mut rng, BattleEvent::MonsterFetched(Ok(goblin())));

        assert_eq!(result, Err(Rejection::NoFetchPending));
        assert_eq!(game, Game::default());
    }

    #[test]
    fn rest_heals_at_most_fifty_once_per_visit() {
        let mut game = Game::default();
        game.player.hit_points = 30;
        let mut rng = ScriptedRng::default();

        apply(&mut game, &mut rng, BattleEvent::Rest).unwrap();
        assert_eq!(game.player().hit_points, 80);
        assert!(game.rest_used());
        assert_eq!(
            game.messages().notice.as_deref(),
            Some("You rest and regain 50 HP.")
        );

        game.player.hit_points = 60;
        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::Rest),
            Err(Rejection::RestAlreadyUsed)
        );
        assert_eq!(game.player().hit_points, 60);
    }

    #[test]
    fn rest_tops_up_without_exceeding_maximum() {
        let mut game = Game::default();
        game.player.hit_points = 90;
        let mut rng = ScriptedRng::default();

        apply(&mut game, &mut rng, BattleEvent::Rest).unwrap();

        assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);
        assert_eq!(
            game.messages().notice.as_deref(),
            Some("You rest and regain 10 HP.")
        );
    }

    #[test]
    fn rest_is_refused_at_full_health_or_when_dead() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();
        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::Rest),
            Err(Rejection::NothingToHeal)
        );

        game.player.hit_points = 0;
        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::Rest),
            Err(Rejection::NothingToHeal)
        );
        assert!(!game.rest_used());
    }

    #[test]
    fn rest_is_refused_in_battle() {
        let mut game = in_battle(goblin());
        game.player.hit_points = 20;
        let mut rng = ScriptedRng::default();

        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::Rest),
            Err(Rejection::NotInCamp {
                scene: Scene::Battle
            })
        );
    }

    #[test]
    fn non_lethal_hit_hands_turn_to_monster_after_delay() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([4]);

        let effects = apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        assert_eq!(
            effects,
            vec![Effect::ScheduleMonsterAttack {
                delay: Duration::from_millis(200)
            }]
        );
        assert_eq!(game.turn(), Turn::Monster);
        assert_eq!(game.monster().map(|m| m.hit_points), Some(6));
        assert_eq!(
            game.messages().player_action.as_deref(),
            Some("You hit Goblin for 4 damage!")
        );
    }

    #[test]
    fn zero_roll_is_a_miss() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([0]);

        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        assert_eq!(game.monster().map(|m| m.hit_points), Some(10));
        assert_eq!(
            game.messages().player_action.as_deref(),
            Some("You miss Goblin!")
        );
        assert_eq!(game.turn(), Turn::Monster);
    }

    #[test]
    fn attacking_out_of_turn_is_ignored() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([3, 3]);
        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        let before = game.clone();
        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::PlayerAttack),
            Err(Rejection::NotPlayersTurn {
                turn: Turn::Monster
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn monster_attack_outside_its_turn_is_ignored() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([5]);

        let result = apply(&mut game, &mut rng, BattleEvent::MonsterAttack);

        assert_eq!(
            result,
            Err(Rejection::NotMonstersTurn { turn: Turn::Player })
        );
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn killing_blow_levels_up_and_returns_to_camp() {
        let mut game = in_battle(Monster::new("Rat", 3, 10));
        game.rest_used = true;
        let mut rng = ScriptedRng::new([7]);

        let effects = apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        assert!(effects.is_empty());
        assert_eq!(game.level(), 1);
        assert_eq!(game.scene(), Scene::Spawn);
        assert_eq!(game.turn(), Turn::Player);
        assert!(!game.rest_used());
        assert!(game.monster().is_none());
        assert_eq!(
            game.messages().notice.as_deref(),
            Some("You have slain Rat!")
        );
    }

    #[test]
    fn monster_hit_uses_signature_attack_name() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([1, 6]);
        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        apply(&mut game, &mut rng, BattleEvent::MonsterAttack).unwrap();

        assert_eq!(game.player().hit_points, 94);
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(
            game.messages().monster_action.as_deref(),
            Some("Goblin hits you with Scimitar for 6 damage!")
        );
    }

    #[test]
    fn monster_without_attacks_still_hits() {
        let mut game = in_battle(Monster::new("Ooze", 20, 8));
        let mut rng = ScriptedRng::new([1, 2]);
        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();
        apply(&mut game, &mut rng, BattleEvent::MonsterAttack).unwrap();

        assert_eq!(
            game.messages().monster_action.as_deref(),
            Some("Ooze hits you for 2 damage!")
        );
    }

    #[test]
    fn death_resets_level_and_rest() {
        let mut game = in_battle(Monster::new("Ogre", 50, 20));
        game.level = 3;
        game.rest_used = true;
        game.player.hit_points = 5;
        let mut rng = ScriptedRng::new([1, 9]);
        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();

        apply(&mut game, &mut rng, BattleEvent::MonsterAttack).unwrap();

        assert_eq!(game.player().hit_points, 0);
        assert_eq!(game.level(), 0);
        assert!(!game.rest_used());
        assert_eq!(game.scene(), Scene::Spawn);
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(
            game.messages().notice.as_deref(),
            Some("You died at level 3!")
        );
    }

    #[test]
    fn give_up_heals_and_resets() {
        let mut game = in_battle(goblin());
        game.level = 2;
        game.rest_used = true;
        game.player.hit_points = 12;
        let mut rng = ScriptedRng::default();

        apply(&mut game, &mut rng, BattleEvent::GiveUp).unwrap();

        assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);
        assert_eq!(game.level(), 0);
        assert!(!game.rest_used());
        assert_eq!(game.scene(), Scene::Spawn);
        assert!(game.monster().is_none());
        assert_eq!(
            game.messages().notice.as_deref(),
            Some("You gave up and retreated to camp.")
        );
    }

    #[test]
    fn give_up_at_camp_is_ignored() {
        let mut game = Game::default();
        let mut rng = ScriptedRng::default();
        assert_eq!(
            apply(&mut game, &mut rng, BattleEvent::GiveUp),
            Err(Rejection::NotInBattle)
        );
    }

    #[test]
    fn stale_monster_turn_after_give_up_is_ignored() {
        let mut game = in_battle(goblin());
        let mut rng = ScriptedRng::new([2, 8]);
        apply(&mut game, &mut rng, BattleEvent::PlayerAttack).unwrap();
        apply(&mut game, &mut rng, BattleEvent::GiveUp).unwrap();

        let before = game.clone();
        let result = apply(&mut game, &mut rng, BattleEvent::MonsterAttack);

        assert_eq!(result, Err(Rejection::NotInBattle));
        assert_eq!(game, before);
    }

    #[test]
    fn quit_is_accepted_everywhere() {
        let mut rng = ScriptedRng::default();
        let mut camp = Game::default();
        let mut battle = in_battle(goblin());
        assert_eq!(
            apply(&mut camp, &mut rng, BattleEvent::Quit),
            Ok(vec![Effect::Exit])
        );
        assert_eq!(
            apply(&mut battle, &mut rng, BattleEvent::Quit),
            Ok(vec![Effect::Exit])
        );
    }
}
