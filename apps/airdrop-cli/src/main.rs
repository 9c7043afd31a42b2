use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::AirdropConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "airdrop")]
#[command(about = "Send one token transfer per input line, then confirm each one landed")]
#[command(version)]
struct Cli {
    /// Recipients file, one `<recipient>;<amount>` per line
    input: PathBuf,

    /// Outcome file; `<transaction id>,<input line>` is appended per transfer
    output: PathBuf,

    /// Distribution configuration file
    #[arg(short, long, default_value = "airdrop.yaml")]
    config: PathBuf,

    /// Only confirm the ids already recorded in OUTPUT (INPUT is not read)
    #[arg(long)]
    check_only: bool,

    /// Log more (-v debug, -vv trace); ignored when RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AirdropConfig::load(&cli.config)?;

    if cli.check_only {
        commands::check_outcomes::execute(&config, &cli.output).await
    } else {
        commands::distribute::execute(&config, &cli.input, &cli.output).await
    }
}
