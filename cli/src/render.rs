//! Terminal rendering of console events and catalog tables.

use std::io::{self, Write};

use authentic_console::catalog::{self, Preset, SystemEvent, TrustNode};
use authentic_console::{ConsoleEvent, FormattedResult, ResultFormatter};
use authentic_types::{ConsoleState, ScanStats};

pub const TITLE: &str = "AuthenticAI \u{b7} TRUTH\u{b7}VERIFICATION\u{b7}SYSTEM";
pub const FOOTER: &str = "AUTHENTICAI \u{b7} TRUTH VERIFICATION ENGINE \u{b7} v3.1.4";

/// `2847` → `2,847`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn header(w: &mut impl Write, state: ConsoleState, stats: &ScanStats) -> io::Result<()> {
    let lights: Vec<String> = catalog::indicators(state)
        .iter()
        .map(|(label, lit)| format!("{} {label}", if *lit { '\u{25cf}' } else { '\u{25cb}' }))
        .collect();
    writeln!(w, "{TITLE}    {}", lights.join("  "))?;
    stats_row(w, stats)
}

pub fn stats_row(w: &mut impl Write, stats: &ScanStats) -> io::Result<()> {
    writeln!(
        w,
        "VERIFIED {}  \u{2502}  FLAGGED {}  \u{2502}  PENDING {}",
        group_thousands(stats.verified),
        group_thousands(stats.flagged),
        group_thousands(stats.pending)
    )
}

pub fn idle_banner(w: &mut impl Write) -> io::Result<()> {
    for line in catalog::IDLE_BANNER {
        writeln!(w, "\u{203a} {line}")?;
    }
    Ok(())
}

/// Render one event as console lines.
pub fn event(w: &mut impl Write, event: &ConsoleEvent) -> io::Result<()> {
    match event {
        ConsoleEvent::StateChanged { to, .. } => match to {
            ConsoleState::Scanning => writeln!(w, "SCAN LOG"),
            ConsoleState::Idle => writeln!(w, "\u{2014} console reset \u{2014}"),
            ConsoleState::Verified | ConsoleState::Failed => Ok(()),
        },
        ConsoleEvent::LogAppended { line, .. } => writeln!(w, "\u{203a} {line}"),
        ConsoleEvent::ResultReady(result) => result_panel(w, &ResultFormatter::format(result)),
        ConsoleEvent::StatsUpdated(stats) => stats_row(w, stats),
    }
}

pub fn result_panel(w: &mut impl Write, formatted: &FormattedResult) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}  TRUST SCORE {}", formatted.status, formatted.score)?;
    writeln!(w, "TRUST INDEX {}", formatted.trust_index)?;
    writeln!(w, "HASH DIGEST")?;
    writeln!(w, "  {}", formatted.digest)?;
    for flag in &formatted.flags {
        writeln!(w, "  \u{2022} {flag}")?;
    }
    writeln!(w, "TS: {}", formatted.timestamp)
}

pub fn presets(w: &mut impl Write, presets: &[Preset]) -> io::Result<()> {
    writeln!(w, "\u{2014} SAMPLE CONTENT PRESETS \u{2014}")?;
    for preset in presets {
        writeln!(w, "{} \u{203a} {}", preset.label(), preset.preview())?;
    }
    Ok(())
}

pub fn system_events(w: &mut impl Write, events: &[SystemEvent]) -> io::Result<()> {
    writeln!(w, "\u{2014} SYSTEM EVENT LOG \u{2014}")?;
    for event in events {
        writeln!(w, "{event}")?;
    }
    Ok(())
}

pub fn trust_nodes(w: &mut impl Write, nodes: &[TrustNode]) -> io::Result<()> {
    writeln!(w, "\u{2014} TRUST NETWORK NODES \u{2014}")?;
    for node in nodes {
        writeln!(
            w,
            "{:<8} {:>6}  {}",
            node.id,
            node.ping_label(),
            node.status.as_str()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use authentic_types::{Digest, Outcome, ScanResult};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(193), "193");
        assert_eq!(group_thousands(2847), "2,847");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn stats_row_uses_grouped_counts() {
        let out = render(|w| stats_row(w, &ScanStats::default()));
        assert_eq!(out, "VERIFIED 2,847  \u{2502}  FLAGGED 193  \u{2502}  PENDING 12\n");
    }

    #[test]
    fn header_lights_sync_only_while_scanning() {
        let idle = render(|w| header(w, ConsoleState::Idle, &ScanStats::default()));
        assert!(idle.contains("\u{25cb} SYNC"));
        let scanning = render(|w| header(w, ConsoleState::Scanning, &ScanStats::default()));
        assert!(scanning.contains("\u{25cf} SYNC"));
    }

    #[test]
    fn log_lines_are_prefixed() {
        let out = render(|w| {
            event(
                w,
                &ConsoleEvent::LogAppended {
                    index: 0,
                    line: "Parsing content payload...".into(),
                },
            )
        });
        assert_eq!(out, "\u{203a} Parsing content payload...\n");
    }

    #[test]
    fn result_panel_shows_grouped_digest_and_flags() {
        let at = "2026-10-17T00:00:00Z".parse().unwrap();
        let result = ScanResult::new(Outcome::Verified, 92, Digest::new([0xab; 32]), at).unwrap();
        let out = render(|w| event(w, &ConsoleEvent::ResultReady(result)));
        assert!(out.contains("VERIFIED  TRUST SCORE 92%"));
        assert!(out.contains("TRUST INDEX 92/100"));
        assert!(out.contains(&["abababab"; 8].join(" ")));
        assert!(out.contains("\u{2022} SOURCE_TRUSTED"));
        assert!(out.contains("TS: 2026-10-17T00:00:00.000Z"));
    }

    #[test]
    fn catalog_tables_render_every_row() {
        let out = render(|w| presets(w, &catalog::PRESETS));
        assert_eq!(out.lines().count(), 1 + catalog::PRESETS.len());
        let out = render(|w| system_events(w, &catalog::SYSTEM_EVENTS));
        assert_eq!(out.lines().count(), 1 + catalog::SYSTEM_EVENTS.len());
        let out = render(|w| trust_nodes(w, &catalog::TRUST_NODES));
        assert!(out.contains("NODE-D2"));
        assert!(out.contains("degraded"));
    }
}
