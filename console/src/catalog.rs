//! Static display data shown around the scanner: sample presets, the idle
//! banner, the system event log, the trust network table and the header
//! status indicators.

use authentic_types::{ConsoleError, ConsoleState};
use serde::Serialize;
use std::fmt;

/// A sample input the operator can load with one keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub number: usize,
    pub content: &'static str,
}

impl Preset {
    pub const PREVIEW_CHARS: usize = 80;

    pub fn label(&self) -> String {
        format!("PRESET_{}", self.number)
    }

    /// First [`Self::PREVIEW_CHARS`] characters followed by an ellipsis.
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(Self::PREVIEW_CHARS).collect();
        format!("{head}\u{2026}")
    }
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        number: 1,
        content: "\u{1f6e1}\u{fe0f} Zero-day vulnerabilities are the ghost passages of software architecture. They exist before anyone knows to look for them. Always audit your dependencies.",
    },
    Preset {
        number: 2,
        content: "AI-powered vishing attacks are cloning voices with 99.7% fidelity. If your CEO is asking for gift cards over the phone \u{2014} that's not your CEO.",
    },
    Preset {
        number: 3,
        content: "Multi-factor authentication isn't magic. A well-placed reverse proxy can still intercept your session token. MFA buys time, not immunity.",
    },
];

/// Look up a preset by its 1-based number.
pub fn preset(number: usize) -> Result<Preset, ConsoleError> {
    PRESETS
        .iter()
        .find(|p| p.number == number)
        .copied()
        .ok_or(ConsoleError::UnknownPreset(number))
}

/// Lines shown while the console is idle with an empty log.
pub const IDLE_BANNER: [&str; 3] = [
    "Awaiting content payload...",
    "Neural networks: online",
    "Trust chain: synchronized",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventLevel {
    Verify,
    Alert,
    Warn,
}

impl EventLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verify => "VERIFY",
            Self::Alert => "ALERT",
            Self::Warn => "WARN",
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padded so the log columns line up.
        f.pad(self.as_str())
    }
}

/// One line of the system event log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SystemEvent {
    pub timestamp: &'static str,
    pub level: EventLevel,
    pub content_id: &'static str,
    pub verdict: &'static str,
}

impl fmt::Display for SystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \u{b7} {:<6} \u{b7} Content ID #{} \u{2014} {}",
            self.timestamp, self.level, self.content_id, self.verdict
        )
    }
}

const fn event(
    timestamp: &'static str,
    level: EventLevel,
    content_id: &'static str,
    verdict: &'static str,
) -> SystemEvent {
    SystemEvent {
        timestamp,
        level,
        content_id,
        verdict,
    }
}

pub const SYSTEM_EVENTS: [SystemEvent; 8] = [
    event(
        "2026-02-18T04:23:11Z",
        EventLevel::Verify,
        "a7f2b9",
        "AUTHENTICATED",
    ),
    event(
        "2026-02-18T04:18:44Z",
        EventLevel::Alert,
        "3c91de",
        "SIGNATURE_MISMATCH",
    ),
    event(
        "2026-02-18T04:12:02Z",
        EventLevel::Verify,
        "8e4fa1",
        "AUTHENTICATED",
    ),
    event(
        "2026-02-18T04:07:55Z",
        EventLevel::Verify,
        "2d7bc3",
        "AUTHENTICATED",
    ),
    event(
        "2026-02-18T03:58:31Z",
        EventLevel::Alert,
        "f5a203",
        "AI_GENERATED_FLAG",
    ),
    event(
        "2026-02-18T03:44:17Z",
        EventLevel::Verify,
        "91c6e8",
        "AUTHENTICATED",
    ),
    event(
        "2026-02-18T03:31:09Z",
        EventLevel::Warn,
        "b48da5",
        "LOW_CONFIDENCE",
    ),
    event(
        "2026-02-18T03:22:40Z",
        EventLevel::Verify,
        "6f3e91",
        "AUTHENTICATED",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Online,
    Degraded,
    Offline,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Degraded => "degraded",
            Self::Offline => "offline",
        }
    }
}

/// A trust network node as shown in the network table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrustNode {
    pub id: &'static str,
    /// Round-trip time in milliseconds; `None` when offline.
    pub ping_ms: Option<u32>,
    pub status: NodeStatus,
}

impl TrustNode {
    pub fn ping_label(&self) -> String {
        match self.ping_ms {
            Some(ms) => format!("{ms}ms"),
            None => "\u{2014}".to_string(),
        }
    }
}

pub const TRUST_NODES: [TrustNode; 6] = [
    TrustNode {
        id: "NODE-A1",
        ping_ms: Some(12),
        status: NodeStatus::Online,
    },
    TrustNode {
        id: "NODE-B7",
        ping_ms: Some(34),
        status: NodeStatus::Online,
    },
    TrustNode {
        id: "NODE-C4",
        ping_ms: Some(8),
        status: NodeStatus::Online,
    },
    TrustNode {
        id: "NODE-D2",
        ping_ms: Some(67),
        status: NodeStatus::Degraded,
    },
    TrustNode {
        id: "NODE-E9",
        ping_ms: Some(15),
        status: NodeStatus::Online,
    },
    TrustNode {
        id: "NODE-F3",
        ping_ms: None,
        status: NodeStatus::Offline,
    },
];

/// Header indicators and whether each is lit in `state`.
pub fn indicators(state: ConsoleState) -> [(&'static str, bool); 3] {
    [
        ("NEURAL", true),
        ("CHAIN", true),
        ("SYNC", state == ConsoleState::Scanning),
    ]
}
