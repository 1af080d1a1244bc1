//! TUI (Text User Interface) module for barista-quiz
//!
//! A single-screen ratatui game: the order header, one guess panel per
//! ingredient, and a status bar. Key handling is vim-like.

mod app;
mod event;
mod mode;
mod observer;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use mode::{Action, InputMode, KeyHandler};
pub use observer::TuiRoundObserver;
pub use state::TuiState;
pub use widgets::{
    GameLayout, guess_panel::GuessInputPanel, header::HeaderWidget, help::HelpWidget,
    status_bar::StatusBarWidget,
};
