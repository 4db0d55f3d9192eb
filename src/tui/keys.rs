/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into UI actions. Calendar navigation is
/// wrapped as [`UiAction::Calendar`] and goes through the command queue;
/// everything else is handled by the app itself.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::action::Action;
use crate::types::{Direction, NavigationUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Calendar(Action),
    ToggleExpanded,
    Quit,
}

fn change(unit: NavigationUnit, direction: Direction) -> Option<UiAction> {
    Some(UiAction::Calendar(Action::Change { unit, direction }))
}

/// Map a key press to an action, or None for unbound keys
pub fn key_to_action(key: KeyEvent) -> Option<UiAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Left | KeyCode::Char('h') => change(NavigationUnit::Month, Direction::Prev),
        KeyCode::Right | KeyCode::Char('l') => change(NavigationUnit::Month, Direction::Next),
        KeyCode::Up | KeyCode::Char('k') => change(NavigationUnit::Year, Direction::Prev),
        KeyCode::Down | KeyCode::Char('j') => change(NavigationUnit::Year, Direction::Next),
        KeyCode::Char('t') | KeyCode::Home => Some(UiAction::Calendar(Action::JumpToToday)),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiAction::ToggleExpanded),
        _ => None,
    };

    trace!("KEY: {:?} -> {:?}", key.code, action);
    action
}
