use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use monthgrid::commands;
use monthgrid::config;
use monthgrid::navigation::{CalendarNavigation, CalendarServices};
use monthgrid::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "monthgrid")]
#[command(about = "Month calendar grid", long_about = "Month calendar grid\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Initial month for interactive mode, YYYY-MM-DD or YYYY-MM (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Locale for month and weekday names (overrides the config file)
    #[arg(short, long)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one or more months as text
    Show {
        /// Date in YYYY-MM-DD or YYYY-MM format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Locale for month and weekday names (e.g. en, fr, de_DE)
        #[arg(short, long)]
        locale: Option<String>,

        /// Number of consecutive months to print
        #[arg(short, long, default_value_t = 1)]
        months: usize,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("locale: {}", if cfg.locale.is_empty() { "(environment)" } else { cfg.locale.as_str() });
    println!("show_spillover: {}", cfg.show_spillover);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("day_fg: {:?}", cfg.theme.day_fg);
    println!("today_fg: {:?}", cfg.theme.today_fg);
    println!("weekday_fg: {:?}", cfg.theme.weekday_fg);
    println!("spillover_fg: {:?}{}",
        cfg.theme.spillover_fg(),
        if cfg.theme.spillover_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the interactive calendar
fn run_tui_mode(
    date: Option<&str>,
    locale: Option<&str>,
    config: &config::Config,
) -> anyhow::Result<()> {
    let initial = commands::parse_date_parts(date)?;
    let labels = commands::resolve_locale(locale.unwrap_or(&config.locale))?;
    let services = CalendarServices::with_labels(Arc::new(labels));
    let navigation =
        CalendarNavigation::new(initial, services).context("Failed to build calendar")?;

    tui::run(navigation, config).context("Error running TUI")
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match cli.command {
        None => run_tui_mode(cli.date.as_deref(), cli.locale.as_deref(), &config),
        Some(Commands::Config) => {
            handle_config_command(&config);
            Ok(())
        }
        Some(Commands::Show { date, locale, months }) => {
            commands::show::run(date, locale, months, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
