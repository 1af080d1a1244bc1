//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for barista-quiz
#[derive(Parser, Debug)]
#[command(name = "barista-quiz")]
#[command(author, version, about = "Guess the recipe of a randomly ordered drink")]
#[command(long_about = r#"
Barista Quiz shows you a drink order and asks you to guess its recipe:
temperature, syrup, milk and whether it is blended.

Each field is checked separately:
  correct          exactly the recipe's value
  partial-correct  a valid choice, but not this drink's
  incorrect        not one of the listed choices

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./barista.toml      Project-level config
3. ~/.config/barista-quiz/config.toml   Global config

Example:
  barista-quiz
  barista-quiz --drinks my-menu.json --clear-on-edit
  barista-quiz --list-drinks
"#)]
pub struct Cli {
    /// Drink dataset (JSON) to use instead of the bundled menu
    #[arg(long, value_name = "PATH")]
    pub drinks: Option<PathBuf>,

    /// Seed for drink selection (same seed, same drink order)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Clear all verdicts as soon as a guess is edited after a check
    #[arg(long)]
    pub clear_on_edit: bool,

    /// Print the drink menu and exit
    #[arg(long)]
    pub list_drinks: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
