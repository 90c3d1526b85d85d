/// Tubedeck - replay and check playback event scripts
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubedeck_cli::{check, load_script, replay, CliConfig};

#[derive(Parser)]
#[command(name = "tubedeck")]
#[command(about = "Drive the Tubedeck playback engine from event scripts", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./tubedeck.toml when present)
    #[arg(short, long, global = true, env = "TUBEDECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script through the controller with a simulated backend
    Replay {
        /// JSON array of player events
        script: PathBuf,

        /// Sample the backend clock after every event
        #[arg(long)]
        poll: bool,
    },
    /// Run a script through the reducer and stop at the first invariant violation
    Check {
        /// JSON array of player events
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays line-delimited JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubedeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    match cli.command {
        Commands::Replay { script, poll } => run_replay(&script, &config, poll),
        Commands::Check { script } => run_check(&script, &config),
    }
}

fn run_replay(script: &Path, config: &CliConfig, poll: bool) -> anyhow::Result<ExitCode> {
    let events = load_script(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    tracing::info!(events = events.len(), script = %script.display(), "Replaying script");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = replay(events, config, poll, &mut out)?;

    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;

    if summary.violations.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run_check(script: &Path, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let events = load_script(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;

    let report = check(&events, config.controller_config().initial_volume);

    match report.failure {
        Some(failure) => {
            println!(
                "Invariant violated after event {} ({}): {}",
                failure.index,
                failure.event.name(),
                failure.violation
            );
            Ok(ExitCode::FAILURE)
        }
        None => {
            println!("{} events applied, all invariants hold", report.applied);
            Ok(ExitCode::SUCCESS)
        }
    }
}
