//! AuthenticAI console — terminal front end for the simulated verification
//! console.

mod interactive;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use authentic_console::{catalog, ConsoleConfig, ConsoleEvent, ConsoleSession, ShutdownController};
use authentic_types::{ConsoleState, ScanResult};
use authentic_utils::{format_duration, LogFormat};
use clap::Parser;
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(
    name = "authentic-console",
    about = "AuthenticAI truth verification console (simulated)",
    version
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for reproducible scans.
    #[arg(long, global = true, env = "AUTHENTIC_SEED")]
    seed: Option<u64>,

    /// Probability that a scan ends verified, in [0, 1].
    #[arg(long, global = true, env = "AUTHENTIC_VERIFIED_PROBABILITY")]
    verified_probability: Option<f64>,

    /// Skip every timeline delay.
    #[arg(long, global = true, env = "AUTHENTIC_FAST")]
    fast: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "AUTHENTIC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "AUTHENTIC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run a single scan.
    Scan {
        /// Content to verify.
        #[arg(conflicts_with = "preset")]
        text: Option<String>,

        /// Scan sample preset N (1-3) instead of TEXT.
        #[arg(long)]
        preset: Option<usize>,

        /// Print the result record as JSON instead of the console view.
        #[arg(long)]
        json: bool,
    },
    /// Line-oriented console: every non-empty line is scanned.
    Interactive,
    /// List the sample content presets.
    Presets,
    /// Show the system event log.
    Events,
    /// Show the trust network nodes.
    Nodes,
}

/// Build the effective configuration: file (or defaults), then CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConsoleConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(p) = cli.verified_probability {
        config.verified_probability = p;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format.as_str().to_string();
    }
    if cli.fast {
        config = config.without_delays();
    }

    config.validate()?;
    Ok(config)
}

/// How a driven scan ended.
pub(crate) enum ScanEnd {
    Completed(ScanResult),
    Interrupted,
}

/// Forward session events to stdout until the scan completes or the session
/// drops back to `Idle`, which happens when shutdown interrupts it.
pub(crate) async fn drive_scan(
    session: &mut ConsoleSession,
    events: &mut broadcast::Receiver<ConsoleEvent>,
    echo: bool,
) -> anyhow::Result<ScanEnd> {
    let mut out = io::stdout();
    loop {
        match events.recv().await {
            Ok(event) => {
                if echo {
                    render::event(&mut out, &event)?;
                    out.flush()?;
                }
                match event {
                    ConsoleEvent::StatsUpdated(_) => break,
                    ConsoleEvent::StateChanged {
                        to: ConsoleState::Idle,
                        ..
                    } => return Ok(ScanEnd::Interrupted),
                    _ => {}
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "console fell behind the event stream");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    session.wait().await;
    Ok(match session.result() {
        Some(result) => ScanEnd::Completed(result),
        None => ScanEnd::Interrupted,
    })
}

async fn run_scan(
    config: &ConsoleConfig,
    text: Option<String>,
    preset: Option<usize>,
    json: bool,
    shutdown: &ShutdownController,
) -> anyhow::Result<()> {
    let input = match (text, preset) {
        (_, Some(number)) => catalog::preset(number)?.content.to_string(),
        (Some(text), None) => text,
        (None, None) => anyhow::bail!("nothing to scan: pass TEXT or --preset N"),
    };

    let mut session = ConsoleSession::new(config).with_shutdown(shutdown);
    let mut events = session.subscribe();
    let echo = !json;

    let mut out = io::stdout();
    if echo {
        render::header(&mut out, session.state(), &session.stats())?;
        writeln!(out)?;
    }

    let started = Instant::now();
    session.start(input)?;
    match drive_scan(&mut session, &mut events, echo).await? {
        ScanEnd::Completed(result) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        ScanEnd::Completed(_) => {
            writeln!(out, "scan completed in {}", format_duration(started.elapsed()))?;
            writeln!(out)?;
            writeln!(out, "{}", render::FOOTER)?;
        }
        ScanEnd::Interrupted => {
            writeln!(out, "scan interrupted")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let format: LogFormat = config
        .log_format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    authentic_utils::init_logging(format, &config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let shutdown = Arc::new(ShutdownController::new());
    {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move { shutdown.wait_for_signal().await });
    }

    let mut out = io::stdout();
    match cli.command {
        Command::Scan { text, preset, json } => {
            run_scan(&config, text, preset, json, &shutdown).await?;
        }
        Command::Interactive => {
            interactive::run(&config, &shutdown).await?;
        }
        Command::Presets => render::presets(&mut out, &catalog::PRESETS)?,
        Command::Events => render::system_events(&mut out, &catalog::SYSTEM_EVENTS)?,
        Command::Nodes => render::trust_nodes(&mut out, &catalog::TRUST_NODES)?,
    }

    Ok(())
}
