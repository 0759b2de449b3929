use game_core::{
    BattleEngine, BattleEvent, Effect, FetchFailure, Game, GameConfig, Monster, Player, Scene,
    ScriptedRng, Turn,
};

fn step(game: &mut Game, rng: &mut ScriptedRng, event: BattleEvent) -> Vec<Effect> {
    let config = GameConfig::default();
    BattleEngine::new(game, rng, &config)
        .apply(event)
        .expect("event should be accepted")
}

#[test]
fn fight_to_victory_with_scripted_rolls() {
    let mut game = Game::default();
    let mut rng = ScriptedRng::new([5, 0, 5]);

    let effects = step(&mut game, &mut rng, BattleEvent::StartBattle);
    assert_eq!(effects, vec![Effect::FetchMonster]);

    let monster = Monster::new("Skeleton", 10, 12).with_description("Rattling bones.");
    step(&mut game, &mut rng, BattleEvent::MonsterFetched(Ok(monster)));
    assert_eq!(game.scene(), Scene::Battle);
    assert_eq!(game.turn(), Turn::Player);

    let effects = step(&mut game, &mut rng, BattleEvent::PlayerAttack);
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleMonsterAttack { .. }]
    ));
    assert_eq!(game.monster().map(|m| m.hit_points), Some(5));
    assert_eq!(game.turn(), Turn::Monster);

    step(&mut game, &mut rng, BattleEvent::MonsterAttack);
    assert_eq!(
        game.messages().monster_action.as_deref(),
        Some("Skeleton misses you!")
    );
    assert_eq!(game.turn(), Turn::Player);
    assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);

    let effects = step(&mut game, &mut rng, BattleEvent::PlayerAttack);
    assert!(effects.is_empty());
    assert_eq!(game.level(), 1);
    assert_eq!(game.scene(), Scene::Spawn);
    assert!(game.monster().is_none());
    assert_eq!(
        game.messages().player_action.as_deref(),
        Some("You hit Skeleton for 5 damage!")
    );
}

#[test]
fn failed_fetch_never_enters_battle() {
    let mut game = Game::default();
    let mut rng = ScriptedRng::default();

    step(&mut game, &mut rng, BattleEvent::StartBattle);
    step(
        &mut game,
        &mut rng,
        BattleEvent::MonsterFetched(Err(FetchFailure::new("no CR 1 monsters found"))),
    );

    assert_eq!(game.scene(), Scene::Spawn);
    assert!(!game.is_loading());
    assert_eq!(game.error(), Some("no CR 1 monsters found"));

    // Player attack has nothing to hit.
    let config = GameConfig::default();
    let rejected = BattleEngine::new(&mut game, &mut rng, &config).apply(BattleEvent::PlayerAttack);
    assert!(rejected.is_err());
    assert_eq!(game.scene(), Scene::Spawn);

    // Retrying clears the error.
    step(&mut game, &mut rng, BattleEvent::StartBattle);
    assert!(game.error().is_none());
    assert!(game.is_loading());
}

#[test]
fn rest_is_available_again_after_a_new_battle_cycle() {
    let mut game = Game::default();
    let mut rng = ScriptedRng::new([1, 8, 20]);

    step(&mut game, &mut rng, BattleEvent::StartBattle);
    step(
        &mut game,
        &mut rng,
        BattleEvent::MonsterFetched(Ok(Monster::new("Bandit", 11, 12))),
    );
    step(&mut game, &mut rng, BattleEvent::PlayerAttack);
    step(&mut game, &mut rng, BattleEvent::MonsterAttack);
    step(&mut game, &mut rng, BattleEvent::PlayerAttack);
    assert_eq!(game.scene(), Scene::Spawn);
    assert_eq!(game.player().hit_points, 92);

    step(&mut game, &mut rng, BattleEvent::Rest);
    assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);
    assert!(game.rest_used());
    assert!(!game.can_rest());
}

#[test]
fn overfull_player_is_clamped_before_the_first_fight() {
    let player = Player {
        hit_points: 500,
        ..Player::default()
    };
    let mut game = Game::new(player);
    assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS);

    let mut rng = ScriptedRng::new([1, 1]);
    step(&mut game, &mut rng, BattleEvent::StartBattle);
    step(
        &mut game,
        &mut rng,
        BattleEvent::MonsterFetched(Ok(Monster::new("Ogre", 50, 12))),
    );
    step(&mut game, &mut rng, BattleEvent::PlayerAttack);
    step(&mut game, &mut rng, BattleEvent::MonsterAttack);

    assert_eq!(game.player().hit_points, GameConfig::MAX_HIT_POINTS - 1);
}
