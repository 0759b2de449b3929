//! Plain-text render contract.
//!
//! [`render_text`] is a pure function of the view model and a terminal
//! width. Richer frontends draw the same information with widgets but share
//! [`wrap_text`] and [`wrap_width`].
use std::fmt::Write;

use game_core::{Scene, Turn};

use crate::view_model::ViewModel;

pub const GAME_TITLE: &str = "Open5e Arena";

/// Narrowest column budget text is ever wrapped to.
pub const MIN_WRAP_WIDTH: usize = 10;

/// Width assumed before the terminal has reported its size.
pub const FALLBACK_WIDTH: usize = 80;

pub const LOADING_TEXT: &str = "Fetching a monster...";

/// Column budget for wrapped text on a terminal `width` columns wide.
pub fn wrap_width(width: usize) -> usize {
    width.saturating_sub(2).max(MIN_WRAP_WIDTH)
}

/// Greedy word wrap. Existing line breaks are kept and words longer than
/// `width` are left whole on their own line.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::with_capacity(text.len());

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
    }

    out
}

/// Render one frame as text.
///
/// `width` is the terminal width; `0` means unknown.
pub fn render_text(view: &ViewModel, width: usize) -> String {
    let width = if width == 0 { FALLBACK_WIDTH } else { width };
    let wrap = wrap_width(width);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "-- {} --", view.title(GAME_TITLE));

    if view.scene == Scene::Spawn {
        if let Some(notice) = &view.notice {
            let _ = writeln!(out, "{}\n", wrap_text(notice, wrap));
        }
    }

    if view.loading {
        let _ = writeln!(out, "{LOADING_TEXT}");
        return out;
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {}", wrap_text(error, wrap));
    }

    match (&view.scene, &view.monster) {
        (Scene::Battle, Some(monster)) => {
            let _ = writeln!(
                out,
                "Description:\n{}\n",
                wrap_text(&monster.description, wrap)
            );
            let _ = writeln!(out, "Enemy: {}", monster.name);
            let _ = writeln!(
                out,
                "Enemy HP:{} AC:{}\n",
                monster.hit_points, monster.armor_class
            );
            let _ = writeln!(out, "Turn: {}\n", view.turn);

            let lines: Vec<_> = [&view.monster_action, &view.player_action]
                .into_iter()
                .flatten()
                .collect();
            for line in &lines {
                let _ = writeln!(out, "{}", wrap_text(line, wrap));
            }
            if !lines.is_empty() {
                out.push('\n');
            }

            let _ = writeln!(
                out,
                "Player HP:{} AC:{}",
                view.player.hit_points, view.player.armor_class
            );
            match view.turn {
                Turn::Player => out.push_str("[1] Attack  [q] Give up\n"),
                Turn::Monster => {
                    if let Some(intent) = view.monster_intent() {
                        let _ = writeln!(out, "{intent}");
                    }
                }
            }
        }
        _ => {
            let _ = writeln!(
                out,
                "Player HP:{} AC:{}\n",
                view.player.hit_points, view.player.armor_class
            );
            out.push_str("[n] Next battle\n");
            if view.can_rest {
                out.push_str("[r] Rest\n");
            }
            out.push_str("[q] Quit\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use game_core::{
        Attack, BattleEngine, BattleEvent, Game, GameConfig, Monster, ScriptedRng,
    };

    use super::*;

    fn drive(game: &mut Game, rng: &mut ScriptedRng, events: Vec<BattleEvent>) {
        let config = GameConfig::default();
        for event in events {
            BattleEngine::new(game, rng, &config).apply(event).unwrap();
        }
    }

    fn wolf() -> Monster {
        Monster::new("Wolf", 11, 13)
            .with_description("A lean grey wolf with hungry eyes.")
            .with_attack(Attack::named("Bite"))
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("the quick brown fox", 10), "the quick\nbrown fox");
        assert_eq!(wrap_text("a\nb c", 3), "a\nb c");
        assert_eq!(wrap_text("supercalifragilistic is long", 10), "supercalifragilistic\nis long");
    }

    #[test]
    fn wrap_width_never_below_minimum() {
        assert_eq!(wrap_width(80), 78);
        assert_eq!(wrap_width(5), MIN_WRAP_WIDTH);
        assert_eq!(wrap_width(0), MIN_WRAP_WIDTH);
    }

    #[test]
    fn fresh_camp_menu() {
        let view = ViewModel::from_game(&Game::default());
        let text = render_text(&view, 80);

        assert_eq!(
            text,
            "-- Open5e Arena --\nPlayer HP:100 AC:16\n\n[n] Next battle\n[q] Quit\n"
        );
    }

    #[test]
    fn loading_hides_the_menu() {
        let mut game = Game::default();
        drive(&mut game, &mut ScriptedRng::default(), vec![BattleEvent::StartBattle]);

        let text = render_text(&ViewModel::from_game(&game), 80);

        assert!(text.ends_with("Fetching a monster...\n"));
        assert!(!text.contains("[n]"));
    }

    #[test]
    fn battle_screen_on_player_turn() {
        let mut game = Game::default();
        drive(
            &mut game,
            &mut ScriptedRng::default(),
            vec![BattleEvent::StartBattle, BattleEvent::MonsterFetched(Ok(wolf()))],
        );

        let text = render_text(&ViewModel::from_game(&game), 24);

        assert!(text.contains("Description:\nA lean grey wolf with\nhungry eyes.\n"));
        assert!(text.contains("Enemy: Wolf\nEnemy HP:11 AC:13\n"));
        assert!(text.contains("Turn: Player\n"));
        assert!(text.ends_with("Player HP:100 AC:16\n[1] Attack  [q] Give up\n"));
    }

    #[test]
    fn monster_turn_shows_intent() {
        let mut game = Game::default();
        drive(
            &mut game,
            &mut ScriptedRng::new([4]),
            vec![
                BattleEvent::StartBattle,
                BattleEvent::MonsterFetched(Ok(wolf())),
                BattleEvent::PlayerAttack,
            ],
        );

        let text = render_text(&ViewModel::from_game(&game), 80);

        assert!(text.contains("You hit Wolf for 4 damage!\n\n"));
        assert!(text.ends_with("Wolf uses Bite!\n"));
        assert!(!text.contains("[1] Attack"));
    }

    #[test]
    fn level_and_rest_after_a_kill() {
        let mut game = Game::default();
        let weak = Monster::new("Rat", 1, 10);
        drive(
            &mut game,
            &mut ScriptedRng::new([1, 5]),
            vec![
                BattleEvent::StartBattle,
                BattleEvent::MonsterFetched(Ok(Monster::new("Bat", 5, 12))),
                BattleEvent::PlayerAttack,
                BattleEvent::MonsterAttack,
                BattleEvent::GiveUp,
                BattleEvent::StartBattle,
                BattleEvent::MonsterFetched(Ok(weak)),
            ],
        );
        drive(&mut game, &mut ScriptedRng::new([1]), vec![BattleEvent::PlayerAttack]);

        let text = render_text(&ViewModel::from_game(&game), 80);

        assert!(text.starts_with("-- Open5e Arena - Level 1 --\nYou have slain Rat!\n\n"));
        assert!(text.contains("Player HP:100 AC:16"));
        assert!(!text.contains("[r] Rest"));
    }

    #[test]
    fn rest_hint_only_when_wounded() {
        let mut game = Game::default();
        drive(
            &mut game,
            &mut ScriptedRng::new([1, 7, 1]),
            vec![
                BattleEvent::StartBattle,
                BattleEvent::MonsterFetched(Ok(Monster::new("Bat", 2, 20))),
                BattleEvent::PlayerAttack,
                BattleEvent::MonsterAttack,
                BattleEvent::PlayerAttack,
            ],
        );

        let text = render_text(&ViewModel::from_game(&game), 80);

        assert!(text.contains("Player HP:93 AC:16"));
        assert!(text.contains("[r] Rest\n"));
    }

    #[test]
    fn fetch_error_is_shown_at_camp() {
        let mut game = Game::default();
        drive(
            &mut game,
            &mut ScriptedRng::default(),
            vec![
                BattleEvent::StartBattle,
                BattleEvent::MonsterFetched(Err(game_core::FetchFailure::new("offline"))),
            ],
        );

        let text = render_text(&ViewModel::from_game(&game), 80);

        assert!(text.contains("Error: offline\n"));
        assert!(text.contains("[n] Next battle"));
    }
}
