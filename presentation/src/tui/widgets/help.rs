//! Help overlay widget

use barista_domain::Ingredient;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
#[derive(Default)]
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn heading(text: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn key(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<12}"), Style::default().fg(Color::Yellow)),
            Span::raw(desc),
        ])
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::heading("Normal mode"),
            Self::key("i / Enter", "Edit the focused guess"),
            Self::key("Tab / l / →", "Next field"),
            Self::key("S-Tab / h / ←", "Previous field"),
            Self::key("x", "Clear the focused guess"),
            Self::key("c", "Check all guesses"),
            Self::key("n", "Serve a new drink"),
            Self::key("?", "Toggle this help"),
            Self::key("q / Ctrl+C", "Quit"),
            Line::from(""),
            Self::heading("Insert mode"),
            Self::key("Enter", "Check all guesses"),
            Self::key("Backspace", "Delete character"),
            Self::key("Ctrl+U", "Clear the field"),
            Self::key("Esc", "Back to normal mode"),
            Line::from(""),
            Self::heading("Verdicts"),
            Line::from(vec![
                Span::styled("correct", Style::default().fg(Color::Green)),
                Span::raw("  exactly the drink's ingredient"),
            ]),
            Line::from(vec![
                Span::styled("partial-correct", Style::default().fg(Color::Yellow)),
                Span::raw("  a real option, but not this drink's"),
            ]),
            Line::from(vec![
                Span::styled("incorrect", Style::default().fg(Color::Red)),
                Span::raw("  not one of the options"),
            ]),
            Line::from(""),
            Self::heading("Options"),
        ];
        for ingredient in Ingredient::ALL {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", ingredient.title()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    ingredient.catalog().join(", "),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Help (? to close) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
