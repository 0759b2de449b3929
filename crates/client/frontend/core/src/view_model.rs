//! View-model snapshots derived from [`game_core::Game`].
use game_core::{Game, GameConfig, Monster, Player, Scene, Turn};

/// Everything a presentation layer needs to draw one frame.
///
/// Pure projection: building one never touches the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub scene: Scene,
    pub turn: Turn,
    pub level: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub can_rest: bool,
    pub player: PlayerView,
    pub monster: Option<MonsterView>,
    pub notice: Option<String>,
    pub player_action: Option<String>,
    pub monster_action: Option<String>,
}

impl ViewModel {
    pub fn from_game(game: &Game) -> Self {
        let messages = game.messages();
        Self {
            scene: game.scene(),
            turn: game.turn(),
            level: game.level(),
            loading: game.is_loading(),
            error: game.error().map(str::to_owned),
            can_rest: game.can_rest(),
            player: PlayerView::from_player(game.player()),
            monster: game.monster().map(MonsterView::from_monster),
            notice: messages.notice.clone(),
            player_action: messages.player_action.clone(),
            monster_action: messages.monster_action.clone(),
        }
    }

    pub fn in_battle(&self) -> bool {
        self.scene == Scene::Battle && self.monster.is_some()
    }

    pub fn is_monster_turn(&self) -> bool {
        self.in_battle() && self.turn == Turn::Monster
    }

    /// Flavor line shown while the monster winds up its answer.
    pub fn monster_intent(&self) -> Option<String> {
        if !self.is_monster_turn() {
            return None;
        }
        let monster = self.monster.as_ref()?;
        Some(match &monster.attack {
            Some(attack) => format!("{} uses {attack}!", monster.name),
            None => format!("{} attacks!", monster.name),
        })
    }

    /// Title line, with the kill streak once there is one.
    pub fn title(&self, name: &str) -> String {
        if self.level > 0 {
            format!("{name} - Level {}", self.level)
        } else {
            name.to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub race: String,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub armor_class: i32,
}

impl PlayerView {
    fn from_player(player: &Player) -> Self {
        Self {
            race: player.race.clone(),
            hit_points: player.hit_points,
            max_hit_points: GameConfig::MAX_HIT_POINTS,
            armor_class: player.armor_class,
        }
    }

    /// Remaining health in `[0.0, 1.0]`, for gauges.
    pub fn health_ratio(&self) -> f64 {
        if self.max_hit_points == 0 {
            return 0.0;
        }
        (f64::from(self.hit_points) / f64::from(self.max_hit_points)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterView {
    pub name: String,
    /// Already replaced with a placeholder when the source had none.
    pub description: String,
    pub hit_points: u32,
    pub armor_class: i32,
    pub challenge_rating: String,
    pub attack: Option<String>,
}

impl MonsterView {
    fn from_monster(monster: &Monster) -> Self {
        Self {
            name: monster.name.clone(),
            description: monster.display_description().to_string(),
            hit_points: monster.hit_points,
            armor_class: monster.armor_class,
            challenge_rating: monster.challenge_rating.clone(),
            attack: monster.signature_attack().map(str::to_owned),
        }
    }
}
