//! Input collaborator: translates terminal key events into game commands.
//!
//! Arrow keys and WASD steer; `q`, Esc, or Ctrl-C quit; `c` asks for a
//! replay (only honored on the game-over screen).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Command, Direction};

/// Map one key press. Keys with no game meaning return `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Steer(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Steer(Direction::Right))
        }
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::PlayAgain),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_steer() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(Command::Steer(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Down)),
            Some(Command::Steer(Direction::Down))
        );
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(Command::Steer(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(Command::Steer(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_steers() {
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(Command::Steer(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('A'))),
            Some(Command::Steer(Direction::Left))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_replay_key() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(Command::PlayAgain));
        assert_eq!(map_key(press(KeyCode::Char('C'))), Some(Command::PlayAgain));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
