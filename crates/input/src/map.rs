//! Key mapping from terminal events to game commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward to the game state.
    Game(GameAction),
    /// Start or stop background music.
    ToggleMusic,
}

impl KeyCommand {
    /// Whether the command is still honoured once the game is over.
    pub fn available_after_game_over(&self) -> bool {
        matches!(
            self,
            KeyCommand::Game(GameAction::Restart) | KeyCommand::ToggleMusic
        )
    }
}

/// Map keyboard input to commands.
///
/// Release events are ignored; repeats behave like presses.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let action = match key.code {
        // Movement
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => GameAction::RotateCw,
        KeyCode::Char('z') | KeyCode::Char('Z') => GameAction::RotateCcw,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('c') | KeyCode::Char('C') => GameAction::Hold,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Char('g') | KeyCode::Char('G') => GameAction::ToggleGhost,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Restart,

        KeyCode::Char('m') | KeyCode::Char('M') => return Some(KeyCommand::ToggleMusic),
        _ => return None,
    };
    Some(KeyCommand::Game(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
