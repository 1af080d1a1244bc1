//! TUI application: main loop over the round controller
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ──> KeyHandler ──> handle_action ──> RoundController
//!   │                                            └─ drain event_rx <──┘ (TuiRoundObserver)
//!   └─ tick_interval (flash expiry)
//! ```
//!
//! Observer events are applied before `handle_action` returns, so the next
//! key always sees the state left by the previous one.

use super::event::TuiEvent;
use super::mode::{Action, InputMode, KeyHandler};
use super::observer::TuiRoundObserver;
use super::state::TuiState;
use super::widgets::{
    GameLayout, guess_panel::GuessInputPanel, header::HeaderWidget, help::HelpWidget,
    status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use barista_application::{DrinkPicker, RoundController, RoundError};
use barista_domain::Ingredient;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Main TUI application
pub struct TuiApp<P: DrinkPicker> {
    controller: RoundController<P>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    config: TuiConfig,
    state: TuiState,
}

impl<P: DrinkPicker> TuiApp<P> {
    /// Wrap a controller, routing its round events into the UI
    pub fn new(controller: RoundController<P>, config: TuiConfig) -> Self {
        let (tx, event_rx) = mpsc::unbounded_channel();
        let controller = controller.with_observer(Arc::new(TuiRoundObserver::new(tx)));
        Self {
            controller,
            event_rx,
            config,
            state: TuiState::new(),
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn controller(&self) -> &RoundController<P> {
        &self.controller
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick_interval());

        // First order
        self.handle_action(Action::NewDrink);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(term_event)) => self.handle_terminal_event(term_event),
                        Some(Err(e)) => {
                            warn!("Terminal event error: {}", e);
                        }
                        None => break,
                    }
                }

                _ = tick.tick() => {
                    if let Some(ttl) = self.config.flash_ttl() {
                        self.state.expire_flash(ttl);
                    }
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(self.state.mode, key);
                self.handle_action(action);
            }
            // Resize just needs a redraw, which the loop does anyway
            _ => {}
        }
    }

    /// Apply one user action to the controller and UI state
    pub fn handle_action(&mut self, action: Action) {
        self.dispatch(action);
        self.drain_events();
    }

    fn dispatch(&mut self, action: Action) {
        if self.state.show_help && !matches!(action, Action::ToggleHelp | Action::Quit) {
            self.state.show_help = false;
            return;
        }

        match action {
            Action::EnterInsert => self.state.mode = InputMode::Insert,
            Action::ExitToNormal => self.state.mode = InputMode::Normal,
            Action::FocusNext => self.state.focus_next(),
            Action::FocusPrev => self.state.focus_prev(),
            Action::InsertChar(_) | Action::DeleteChar | Action::ClearField => {
                self.edit_focused(&action);
            }
            Action::CheckAnswer => {
                self.state.mode = InputMode::Normal;
                if let Err(e) = self.controller.check_answer() {
                    self.report(e);
                }
            }
            Action::NewDrink => {
                if let Err(e) = self.controller.start_new_round() {
                    self.report(e);
                }
            }
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Quit => self.state.should_quit = true,
            Action::None => {}
        }
    }

    fn edit_focused(&mut self, action: &Action) {
        let focus = self.state.focus;
        let mut change = None;
        GuessInputPanel::new(focus, self.controller.guess(focus), None)
            .handle_edit(action, |ingredient, value| change = Some((ingredient, value)));

        if let Some((ingredient, value)) = change
            && let Err(e) = self.controller.update_guess(ingredient, value)
        {
            self.report(e);
        }
    }

    fn report(&mut self, error: RoundError) {
        if error.is_no_active_round() {
            debug!("Ignored input without a drink: {}", error);
            self.state.set_flash("No order yet. Press n for a drink");
        } else {
            warn!("Round error: {}", error);
            self.state.set_flash(error.to_string());
        }
    }

    /// Apply round events queued by the observer
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let layout = GameLayout::compute(frame.area(), self.config.stack_threshold);
        let snapshot = self.controller.snapshot();

        frame.render_widget(
            HeaderWidget::new(&snapshot, self.state.rounds_played),
            layout.header,
        );

        for ingredient in Ingredient::ALL {
            let panel = GuessInputPanel::new(
                ingredient,
                &snapshot.guesses[ingredient],
                snapshot.verdicts[ingredient],
            )
            .focused(ingredient == self.state.focus)
            .editing(ingredient == self.state.focus && self.state.mode == InputMode::Insert);
            frame.render_widget(panel, layout.panels[ingredient]);
        }

        frame.render_widget(StatusBarWidget::new(&self.state), layout.status_bar);

        if self.state.show_help {
            let help_area = GameLayout::centered_overlay(70, 80, frame.area());
            frame.render_widget(HelpWidget::new(), help_area);
        }
    }
}
