use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Phase;

/// Every observable clock change produces an Event.
/// The host routes them: some become desktop notifications, all can be
/// logged or printed as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A fresh run began at set 1.
    ClockStarted {
        phase: Phase,
        set_index: u32,
        minutes_remaining: u32,
        at: DateTime<Utc>,
    },
    /// The current interval was restarted as a full work interval.
    ClockRewound {
        phase: Phase,
        set_index: u32,
        minutes_remaining: u32,
        at: DateTime<Utc>,
    },
    /// A countdown expired; describes the NEW phase and set.
    PhaseChanged {
        phase: Phase,
        set_index: u32,
        minutes_remaining: u32,
        at: DateTime<Utc>,
    },
    /// The pause gate flipped. Not forwarded to the notifier.
    PauseToggled { paused: bool, at: DateTime<Utc> },
    /// Read-only state snapshot for the status query.
    StateSnapshot {
        phase: Phase,
        set_index: u32,
        minutes_remaining: u32,
        paused: bool,
        display: String,
        at: DateTime<Utc>,
    },
}
