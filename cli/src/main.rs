//! CLI entrypoint for Barista Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use barista_application::{DrinkRepository, RoundController};
use barista_domain::{ConfigIssue, Severity};
use barista_infrastructure::{
    ConfigLoader, FileConfig, GameOverrides, JsonDrinkRepository, RandomDrinkPicker,
};
use barista_presentation::{Cli, ConsoleFormatter, OutputConfig, TuiApp, TuiConfig};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "barista-quiz.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // The TUI owns the terminal, so logs go to a file
    let _log_guard = init_logging(cli.verbose);

    info!("Starting Barista Quiz");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    config.game.apply_overrides(GameOverrides {
        drinks_file: cli.drinks.clone(),
        seed: cli.seed,
        clear_verdicts_on_edit: cli.clear_on_edit,
    });

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("error: {}", issue.message),
            Severity::Warning => {
                warn!("{}", issue.message);
                eprintln!("warning: {}", issue.message);
            }
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let output = OutputConfig {
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let repository = load_repository(&config)?;

    if cli.list_drinks {
        println!(
            "{}",
            ConsoleFormatter::format_drinks(repository.get_all(), repository.source())
        );
        return Ok(());
    }

    let picker = RandomDrinkPicker::from_seed_option(config.game.seed);
    let controller =
        RoundController::new(&repository, picker)?.with_behavior(config.game.to_behavior());

    let tui_config = TuiConfig {
        flash_seconds: config.tui.flash_seconds,
        tick_millis: config.effective_tick_millis(),
        stack_threshold: config.tui.stack_threshold,
    };

    let mut app = TuiApp::new(controller, tui_config);
    app.run().await.context("Terminal UI failed")?;

    info!("Goodbye");
    Ok(())
}

/// Load `game.drinks_file` (already overridden by `--drinks`), else the bundled menu
fn load_repository(config: &FileConfig) -> Result<JsonDrinkRepository> {
    let repository = match config.game.drinks_path() {
        Some(path) => JsonDrinkRepository::from_file(&path)
            .with_context(|| format!("Failed to load drinks from {}", path.display()))?,
        None => JsonDrinkRepository::embedded().context("Bundled drink menu is invalid")?,
    };

    info!(
        "Using {} drinks from {}",
        repository.get_all().len(),
        repository.source()
    );
    Ok(repository)
}

/// Log to `<data_dir>/barista-quiz/barista-quiz.log`; verbosity comes from `-v`
fn init_logging(verbose: u8) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = ConfigLoader::log_dir()?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}
