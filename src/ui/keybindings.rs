// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Command, MenuAction};

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Up,
    Down,
    Enter,
    Back,
    Select,
    Cancel,
    Quit,
    None,
}

impl NavigationAction {
    /// Command for the top screen, if the action maps to one.
    pub fn command(self) -> Option<Command> {
        match self {
            NavigationAction::Up => Some(Command::MoveUp),
            NavigationAction::Down => Some(Command::MoveDown),
            NavigationAction::Enter => Some(Command::ActivateSelected),
            NavigationAction::Back => Some(Command::Menu(MenuAction::Up)),
            NavigationAction::Select => Some(Command::Menu(MenuAction::Select)),
            NavigationAction::Cancel => Some(Command::Menu(MenuAction::Cancel)),
            NavigationAction::Quit => Some(Command::Quit),
            NavigationAction::None => None,
        }
    }
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return NavigationAction::Quit;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => NavigationAction::Enter,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('h') => {
            NavigationAction::Back
        }
        KeyCode::Char('s') => NavigationAction::Select,
        KeyCode::Char('c') => NavigationAction::Cancel,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

/// Key hint shown next to a menu entry.
pub fn menu_key(action: MenuAction) -> &'static str {
    match action {
        MenuAction::Select => "s",
        MenuAction::Cancel => "c",
        MenuAction::Up => "←",
    }
}
