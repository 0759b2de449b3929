use game_core::BattleEvent;

/// Inputs a player can issue.
///
/// Fetch completions and monster turns are produced by the runtime itself
/// and cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerCommand {
    StartBattle,
    Rest,
    Attack,
    GiveUp,
    Quit,
}

impl From<PlayerCommand> for BattleEvent {
    fn from(command: PlayerCommand) -> Self {
        match command {
            PlayerCommand::StartBattle => BattleEvent::StartBattle,
            PlayerCommand::Rest => BattleEvent::Rest,
            PlayerCommand::Attack => BattleEvent::PlayerAttack,
            PlayerCommand::GiveUp => BattleEvent::GiveUp,
            PlayerCommand::Quit => BattleEvent::Quit,
        }
    }
}
