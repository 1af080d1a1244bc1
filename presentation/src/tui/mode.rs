//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: move between fields, check, new drink
//! - Insert mode: edit the focused guess

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and game commands
    #[default]
    Normal,
    /// Editing the focused guess field
    Insert,
}

impl InputMode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start editing the focused field
    EnterInsert,
    /// Stop editing
    ExitToNormal,
    /// Focus the next field
    FocusNext,
    /// Focus the previous field
    FocusPrev,
    /// Append a character to the focused guess
    InsertChar(char),
    /// Remove the last character of the focused guess
    DeleteChar,
    /// Empty the focused guess
    ClearField,
    /// Judge all guesses
    CheckAnswer,
    /// Pick another drink
    NewDrink,
    /// Toggle help overlay
    ToggleHelp,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: InputMode, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Insert => Self::handle_insert(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::EnterInsert,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

            (KeyCode::Tab, _) | (KeyCode::Right, _) => Action::FocusNext,
            (KeyCode::Char('l'), KeyModifiers::NONE) => Action::FocusNext,
            (KeyCode::BackTab, _) | (KeyCode::Left, _) => Action::FocusPrev,
            (KeyCode::Char('h'), KeyModifiers::NONE) => Action::FocusPrev,

            (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CheckAnswer,
            (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NewDrink,
            (KeyCode::Char('x'), KeyModifiers::NONE) => Action::ClearField,

            (KeyCode::Char('?'), _) => Action::ToggleHelp,
            (KeyCode::Esc, _) => Action::ExitToNormal,

            _ => Action::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Action::ExitToNormal,
            (KeyCode::Enter, _) => Action::CheckAnswer,
            (KeyCode::Tab, _) => Action::FocusNext,
            (KeyCode::BackTab, _) => Action::FocusPrev,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearField,
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::InsertChar(c),
            _ => Action::None,
        }
    }
}
