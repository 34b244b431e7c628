//! Keyboard handling for game controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputEvent;

/// Map a key press to a game input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') => Some(InputEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(InputEvent::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Some(InputEvent::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::RotateCw),
        KeyCode::Char('z') => Some(InputEvent::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::ForceResolve),

        _ => None,
    }
}

/// Restart request (routed to `Game::reset`, not an input event).
pub fn is_reset_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
