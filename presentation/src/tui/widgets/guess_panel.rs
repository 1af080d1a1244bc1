//! Guess input panel: one ingredient's text field, choices and verdict
//!
//! The panel owns no state. It renders what it is given and turns edit
//! actions into a new raw value handed to the caller's callback; the caller
//! decides where that value goes.

use crate::tui::mode::Action;
use barista_domain::{Ingredient, Verdict};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub struct GuessInputPanel<'a> {
    ingredient: Ingredient,
    value: &'a str,
    choices: &'a [&'a str],
    verdict: Option<Verdict>,
    focused: bool,
    editing: bool,
}

impl<'a> GuessInputPanel<'a> {
    pub fn new(ingredient: Ingredient, value: &'a str, verdict: Option<Verdict>) -> Self {
        Self {
            ingredient,
            value,
            choices: ingredient.catalog(),
            verdict,
            focused: false,
            editing: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Apply an edit action to the current value.
    ///
    /// Calls `on_change` with the ingredient and the new raw text and returns
    /// true when the action is an edit; non-edit actions are ignored.
    pub fn handle_edit(&self, action: &Action, on_change: impl FnOnce(Ingredient, String)) -> bool {
        let new_value = match action {
            Action::InsertChar(c) => {
                let mut value = self.value.to_string();
                value.push(*c);
                value
            }
            Action::DeleteChar => {
                let mut value = self.value.to_string();
                value.pop();
                value
            }
            Action::ClearField => String::new(),
            _ => return false,
        };
        on_change(self.ingredient, new_value);
        true
    }

    fn verdict_span(&self) -> Span<'static> {
        match self.verdict {
            Some(verdict) => Span::styled(
                format!(" {} ", verdict.as_str()),
                Style::default()
                    .fg(Color::Black)
                    .bg(verdict_color(verdict))
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("unchecked", Style::default().fg(Color::DarkGray)),
        }
    }

    fn value_line(&self) -> Line<'a> {
        let value_style = match self.verdict {
            Some(verdict) => Style::default().fg(verdict_color(verdict)),
            None => Style::default().fg(Color::White),
        };

        let mut spans = vec![Span::styled("> ", Style::default().fg(Color::DarkGray))];
        if self.value.is_empty() && !self.editing {
            spans.push(Span::styled(
                "Guess the ingredient...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(self.value, value_style));
        }
        if self.editing {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::Green),
            ));
        }
        Line::from(spans)
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::PartialCorrect => Color::Yellow,
        Verdict::Incorrect => Color::Red,
    }
}

impl<'a> Widget for GuessInputPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.editing {
            Style::default().fg(Color::Green)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .title(format!(" {} ", self.ingredient.title()))
            .border_style(border_style);

        let mut lines = vec![
            self.value_line(),
            Line::from(vec![Span::raw("  "), self.verdict_span()]),
            Line::from(""),
        ];
        for choice in self.choices {
            let style = if *choice == self.value {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(format!("  • {choice}"), style)));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(panel: GuessInputPanel<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_insert_char_appends() {
        let panel = GuessInputPanel::new(Ingredient::Milk, "oa", None);
        let mut seen = None;
        let handled = panel.handle_edit(&Action::InsertChar('t'), |i, v| seen = Some((i, v)));
        assert!(handled);
        assert_eq!(seen, Some((Ingredient::Milk, "oat".to_string())));
    }

    #[test]
    fn test_delete_and_clear() {
        let panel = GuessInputPanel::new(Ingredient::Syrup, "mochaa", None);
        let mut seen = String::new();
        panel.handle_edit(&Action::DeleteChar, |_, v| seen = v);
        assert_eq!(seen, "mocha");

        panel.handle_edit(&Action::ClearField, |_, v| seen = v);
        assert_eq!(seen, "");
    }

    #[test]
    fn test_delete_on_empty_stays_empty() {
        let panel = GuessInputPanel::new(Ingredient::Blended, "", None);
        let mut seen = None;
        panel.handle_edit(&Action::DeleteChar, |_, v| seen = Some(v));
        assert_eq!(seen, Some(String::new()));
    }

    #[test]
    fn test_non_edit_actions_do_not_call_back() {
        let panel = GuessInputPanel::new(Ingredient::Milk, "oat", None);
        let mut called = false;
        assert!(!panel.handle_edit(&Action::CheckAnswer, |_, _| called = true));
        assert!(!panel.handle_edit(&Action::FocusNext, |_, _| called = true));
        assert!(!called);
    }

    #[test]
    fn test_no_input_time_validation() {
        // off-catalog text is forwarded untouched
        let panel = GuessInputPanel::new(Ingredient::Temperature, "boilin", None);
        let mut seen = String::new();
        panel.handle_edit(&Action::InsertChar('g'), |_, v| seen = v);
        assert_eq!(seen, "boiling");
    }

    #[test]
    fn test_renders_title_value_choices_and_verdict() {
        let panel = GuessInputPanel::new(Ingredient::Blended, "maybe", Some(Verdict::Incorrect));
        let content = rendered(panel, 30, 8);
        assert!(content.contains("Blended"));
        assert!(content.contains("maybe"));
        assert!(content.contains("incorrect"));
        assert!(content.contains("yes"));
        assert!(content.contains("no"));
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let panel = GuessInputPanel::new(Ingredient::Milk, "", None);
        let content = rendered(panel, 40, 10);
        assert!(content.contains("Guess the ingredient..."));
        assert!(content.contains("almond"));
    }
}
