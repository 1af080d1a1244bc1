//! Header widget: the customer's order line and round phase

use barista_domain::{RoundPhase, RoundSnapshot};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    snapshot: &'a RoundSnapshot,
    rounds_played: usize,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(snapshot: &'a RoundSnapshot, rounds_played: usize) -> Self {
        Self {
            snapshot,
            rounds_played,
        }
    }
}

fn phase_label(phase: RoundPhase) -> (&'static str, Color) {
    match phase {
        RoundPhase::Empty => ("Waiting", Color::DarkGray),
        RoundPhase::InProgress => ("Guessing", Color::Yellow),
        RoundPhase::Checked => ("Checked", Color::Green),
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let drink_name = self.snapshot.drink_name.as_deref().unwrap_or("...");
        let (phase_text, phase_color) = phase_label(self.snapshot.phase);

        let line = Line::from(vec![
            Span::styled("☕ ", Style::default().fg(Color::Yellow)),
            Span::raw("Hi! I would like to order a: "),
            Span::styled(
                drink_name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(phase_text, Style::default().fg(phase_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Barista Quiz · round {} ", self.rounds_played))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_domain::{Drink, Ingredient, IngredientMap, Recipe, Round};

    fn latte() -> Drink {
        let recipe = Recipe::from_fn(|i| {
            match i {
                Ingredient::Temperature => "hot",
                Ingredient::Syrup => "none",
                Ingredient::Milk => "cow",
                Ingredient::Blended => "no",
            }
            .to_string()
        });
        Drink::new("Latte", recipe).unwrap()
    }

    fn render_to_string(snapshot: &RoundSnapshot) -> String {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(snapshot, 3).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_shows_order_line() {
        let snapshot = Round::start(latte()).snapshot();
        let content = render_to_string(&snapshot);
        assert!(content.contains("Hi! I would like to order a:"));
        assert!(content.contains("Latte"));
        assert!(content.contains("Guessing"));
        assert!(content.contains("round 3"));
    }

    #[test]
    fn test_header_before_first_round() {
        let snapshot = Round::empty().snapshot();
        assert_eq!(snapshot.guesses, IngredientMap::default());
        let content = render_to_string(&snapshot);
        assert!(content.contains("Waiting"));
    }
}
