//! Status bar widget: mode indicator, key hints and flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(mode: InputMode) -> &'static str {
        match mode {
            InputMode::Normal => "i:edit  Tab:next  c:check  n:new drink  ?:help  q:quit",
            InputMode::Insert => "Enter:check  Tab:next  Esc:normal  Ctrl+C:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_span = Span::styled(
            format!(" {} ", mode_text),
            Style::default()
                .fg(Color::Black)
                .bg(mode.color())
                .add_modifier(Modifier::BOLD),
        );
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![mode_span]), mode_width);

        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.as_str(),
            None => Self::hints(mode),
        };

        // Long flashes (e.g. a user-supplied drink name) are cut to the free space
        let available = area.width.saturating_sub(mode_width.saturating_add(1));
        let right_width = u16::try_from(right_text.chars().count())
            .unwrap_or(u16::MAX)
            .min(available);
        if right_width > 0 {
            let right_x = area.right().saturating_sub(right_width.saturating_add(1));
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width);
        }
    }
}
