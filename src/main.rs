mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use clap::{ArgAction, Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::demo;
use crate::cmd::ticket::{self, TicketArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "helpdesk",
    author,
    version,
    about = "Helpdesk ticket factory and hour recalculation"
)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bug report and request walkthrough.
    ///
    /// The per-setter "hours left" lines are logged at INFO; pass -v to see them.
    Demo,
    /// Build one ticket, set its hours and recalculate through modifiers.
    Ticket(TicketArgs),
    /// Inspect configuration.
    Config(ConfigArgs),
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = AppConfig::load()?;
    tracing::debug!(?config, "loaded configuration");

    let output = match cli.command {
        Commands::Config(args) => config_cmd::run(&config, args.command)?,
        Commands::Demo => demo::run(&AppContext::with_tracing(config))?,
        Commands::Ticket(args) => ticket::run(&AppContext::with_tracing(config), args)?,
    };

    println!("{output}");
    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbosity, rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn level_from_verbosity(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .parse_lossy(rust_log.unwrap_or_default())
}
