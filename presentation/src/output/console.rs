//! Console output formatter for the drink menu

use barista_domain::{Drink, Ingredient};
use colored::Colorize;

/// Formats game data for plain console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the drink menu with every recipe
    pub fn format_drinks(drinks: &[Drink], source: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} drinks ({})\n\n",
            "Menu:".cyan().bold(),
            drinks.len(),
            source
        ));

        for drink in drinks {
            output.push_str(&format!("{}\n", format!("── {} ──", drink.name()).yellow().bold()));
            for (ingredient, value) in drink.recipe().iter() {
                let value = if ingredient.accepts(value) {
                    value.normal()
                } else {
                    format!("{value} (not a listed choice)").red()
                };
                output.push_str(&format!("  {:<13} {}\n", ingredient.title(), value));
            }
            output.push('\n');
        }

        output.push_str(&Self::format_catalog());
        output
    }

    /// Format the valid choices of every ingredient
    pub fn format_catalog() -> String {
        let mut output = format!("{}\n", "Choices:".cyan().bold());
        for ingredient in Ingredient::ALL {
            output.push_str(&format!(
                "  {:<13} {}\n",
                ingredient.title(),
                ingredient.catalog().join(", ")
            ));
        }
        output
    }
}
