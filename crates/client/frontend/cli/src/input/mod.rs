//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Scene;
use runtime::PlayerCommand;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded command to the runtime.
    Submit(PlayerCommand),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into player commands.
///
/// The same key means different things at camp and in battle: `q` quits
/// from camp but only retreats from a fight.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, scene: Scene) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match scene {
            Scene::Spawn => self.camp_key(key.code),
            Scene::Battle => self.battle_key(key.code),
        }
    }

    fn camp_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'n' => KeyAction::Submit(PlayerCommand::StartBattle),
                'r' => KeyAction::Submit(PlayerCommand::Rest),
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn battle_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc => KeyAction::Submit(PlayerCommand::GiveUp),
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                '1' | 'a' => KeyAction::Submit(PlayerCommand::Attack),
                'q' => KeyAction::Submit(PlayerCommand::GiveUp),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_camp_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), Scene::Spawn),
            KeyAction::Submit(PlayerCommand::StartBattle)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('R')), Scene::Spawn),
            KeyAction::Submit(PlayerCommand::Rest)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Scene::Spawn),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), Scene::Spawn),
            KeyAction::None
        );
    }

    #[test]
    fn maps_battle_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), Scene::Battle),
            KeyAction::Submit(PlayerCommand::Attack)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('a')), Scene::Battle),
            KeyAction::Submit(PlayerCommand::Attack)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Scene::Battle),
            KeyAction::Submit(PlayerCommand::GiveUp)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), Scene::Battle),
            KeyAction::Submit(PlayerCommand::GiveUp)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), Scene::Battle),
            KeyAction::None
        );
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl('c'), Scene::Spawn), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('c'), Scene::Battle), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('a'), Scene::Battle), KeyAction::None);
    }
}
