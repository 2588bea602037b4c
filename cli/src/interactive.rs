//! Line-oriented console session on stdin.
//!
//! Each non-empty line is scanned. Lines starting with `:` are commands.

use std::io::{self, Write};

use authentic_console::{ConsoleConfig, ConsoleEvent, ConsoleSession, ShutdownController};
use authentic_types::ConsoleError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

use crate::{drive_scan, render, ScanEnd};

const HELP: &str = "\
commands:
  <text>        scan the text
  :preset N     scan sample preset N
  :presets      list sample presets
  :stats        show session counters
  :status       show console state
  :reset        clear result, log and input
  :events       show the system event log
  :nodes        show trust network nodes
  :help         this message
  :quit         leave";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Scan(String),
    Preset(usize),
    Presets,
    Stats,
    Status,
    Reset,
    Events,
    Nodes,
    Help,
    Quit,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Scan(line.to_string());
    };
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("preset"), Some(n)) => match n.parse() {
            Ok(n) => Command::Preset(n),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        (Some("presets"), None) => Command::Presets,
        (Some("stats"), None) => Command::Stats,
        (Some("status"), None) => Command::Status,
        (Some("reset"), None) => Command::Reset,
        (Some("events"), None) => Command::Events,
        (Some("nodes"), None) => Command::Nodes,
        (Some("help"), None) => Command::Help,
        (Some("quit" | "q" | "exit"), None) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn discard_pending(events: &mut broadcast::Receiver<ConsoleEvent>) {
    while events.try_recv().is_ok() {}
}

pub async fn run(config: &ConsoleConfig, shutdown: &ShutdownController) -> anyhow::Result<()> {
    let mut session = ConsoleSession::new(config).with_shutdown(shutdown);
    let mut events = session.subscribe();
    let mut stop = shutdown.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    render::header(&mut out, session.state(), &session.stats())?;
    render::idle_banner(&mut out)?;
    writeln!(out, "type :help for commands")?;

    loop {
        write!(out, "\u{276f} ")?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            () = stop.recv() => break,
        };
        let Some(line) = line else { break };

        let input = match parse_line(&line) {
            Command::Scan(text) => text,
            Command::Preset(n) => match session.select_preset(n) {
                Ok(()) => session.input().as_str().to_string(),
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            Command::Presets => {
                render::presets(&mut out, &authentic_console::catalog::PRESETS)?;
                continue;
            }
            Command::Stats => {
                render::stats_row(&mut out, &session.stats())?;
                continue;
            }
            Command::Status => {
                render::header(&mut out, session.state(), &session.stats())?;
                if let Some(result) = session.result() {
                    writeln!(
                        out,
                        "last result: {} ({}%)",
                        result.status(),
                        result.score()
                    )?;
                }
                continue;
            }
            Command::Reset => {
                session.reset();
                discard_pending(&mut events);
                render::idle_banner(&mut out)?;
                continue;
            }
            Command::Events => {
                render::system_events(&mut out, &authentic_console::catalog::SYSTEM_EVENTS)?;
                continue;
            }
            Command::Nodes => {
                render::trust_nodes(&mut out, &authentic_console::catalog::TRUST_NODES)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(cmd) => {
                writeln!(out, "unknown command {cmd:?}, type :help")?;
                continue;
            }
        };

        match session.start(input) {
            Ok(_) => {}
            Err(ConsoleError::EmptyInput) => {
                writeln!(out, "input is empty, nothing to scan")?;
                continue;
            }
            Err(ConsoleError::ShuttingDown) => break,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        }

        match drive_scan(&mut session, &mut events, true).await? {
            ScanEnd::Completed(_) => writeln!(out)?,
            ScanEnd::Interrupted => {
                writeln!(out, "scan interrupted")?;
                break;
            }
        }
    }

    tracing::info!(stats = ?session.stats(), "console session closed");
    Ok(())
}
