//! Interval clock state machine.
//!
//! The clock is a pure state machine. It does not use internal threads or
//! the wall clock - the host delivers one tick per minute and routes the
//! returned events to the notification dispatcher.
//!
//! ## Phase cycle
//!
//! ```text
//! Work -> (ShortBreak -> Work) x (sets_until_long_break - 1) -> LongBreak -> Work -> ...
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::intervals::Intervals;
use crate::error::ClockError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Notification title for this phase.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
        }
    }
}

/// Minute-granularity work/break clock.
///
/// One instance per tick source. Commands return the event the host should
/// hand to [`crate::notify::dispatch`]; `tick` returns an event only when a
/// phase transition happened.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    intervals: Intervals,
    phase: Phase,
    set_index: u32,
    minutes_remaining: u32,
    paused: bool,
    running: bool,
}

impl IntervalClock {
    /// Create a clock in the stopped state. `start` begins the sequence.
    pub fn new(intervals: Intervals) -> Self {
        Self {
            intervals,
            phase: Phase::Work,
            set_index: 1,
            minutes_remaining: intervals.work_minutes,
            paused: false,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_index(&self) -> u32 {
        self.set_index
    }

    pub fn minutes_remaining(&self) -> u32 {
        self.minutes_remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn intervals(&self) -> &Intervals {
        &self.intervals
    }

    /// Status-surface string: `W{set}-{min}`, `B{set}-{min}`, or `LB-{min}`.
    pub fn display(&self) -> String {
        match self.phase {
            Phase::Work => format!("W{}-{}", self.set_index, self.minutes_remaining),
            Phase::ShortBreak => format!("B{}-{}", self.set_index, self.minutes_remaining),
            Phase::LongBreak => format!("LB-{}", self.minutes_remaining),
        }
    }

    /// Build a full state snapshot event.
    ///
    /// # Errors
    ///
    /// `ClockError::Inactive` if no run is active.
    pub fn snapshot(&self) -> Result<Event, ClockError> {
        if !self.running {
            return Err(ClockError::Inactive);
        }
        Ok(Event::StateSnapshot {
            phase: self.phase,
            set_index: self.set_index,
            minutes_remaining: self.minutes_remaining,
            paused: self.paused,
            display: self.display(),
            at: Utc::now(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh run at set 1 of a full work interval.
    ///
    /// Calling this on a running clock fully resets the sequence; it never
    /// resumes a prior run. The host must also reset its tick source so the
    /// first decrement lands a full period later.
    ///
    /// # Errors
    ///
    /// Rejects non-positive interval parameters.
    pub fn start(&mut self) -> Result<Event, ClockError> {
        self.intervals.validate()?;
        self.phase = Phase::Work;
        self.set_index = 1;
        self.minutes_remaining = self.intervals.work_minutes;
        self.paused = false;
        self.running = true;
        Ok(Event::ClockStarted {
            phase: self.phase,
            set_index: self.set_index,
            minutes_remaining: self.minutes_remaining,
            at: Utc::now(),
        })
    }

    /// Restart the current interval as a work interval, keeping the set index.
    ///
    /// # Errors
    ///
    /// `ClockError::Inactive` if no run is active.
    pub fn rewind(&mut self) -> Result<Event, ClockError> {
        if !self.running {
            return Err(ClockError::Inactive);
        }
        self.phase = Phase::Work;
        self.minutes_remaining = self.intervals.work_minutes;
        Ok(Event::ClockRewound {
            phase: self.phase,
            set_index: self.set_index,
            minutes_remaining: self.minutes_remaining,
            at: Utc::now(),
        })
    }

    /// End the run. Subsequent ticks are inert; no event is produced.
    ///
    /// # Errors
    ///
    /// `ClockError::Inactive` if no run is active.
    pub fn stop(&mut self) -> Result<(), ClockError> {
        if !self.running {
            return Err(ClockError::Inactive);
        }
        self.running = false;
        Ok(())
    }

    /// Flip the pause gate. Paused ticks change nothing; the tick source
    /// keeps its cadence.
    ///
    /// # Errors
    ///
    /// `ClockError::Inactive` if no run is active.
    pub fn toggle_pause(&mut self) -> Result<Event, ClockError> {
        if !self.running {
            return Err(ClockError::Inactive);
        }
        self.paused = !self.paused;
        Ok(Event::PauseToggled {
            paused: self.paused,
            at: Utc::now(),
        })
    }

    /// Deliver one minute tick.
    ///
    /// Returns an event only when the countdown expired and a phase
    /// transition happened; the event describes the new phase and set.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || self.paused {
            return None;
        }
        self.minutes_remaining = self.minutes_remaining.saturating_sub(1);
        if self.minutes_remaining > 0 {
            return None;
        }
        self.advance();
        Some(Event::PhaseChanged {
            phase: self.phase,
            set_index: self.set_index,
            minutes_remaining: self.minutes_remaining,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// One step of the phase table. Exactly one transition per tick.
    fn advance(&mut self) {
        match self.phase {
            Phase::LongBreak => {
                self.phase = Phase::Work;
                self.set_index = 1;
                self.minutes_remaining = self.intervals.work_minutes;
            }
            Phase::ShortBreak => {
                self.phase = Phase::Work;
                self.set_index += 1;
                self.minutes_remaining = self.intervals.work_minutes;
            }
            Phase::Work if self.set_index >= self.intervals.sets_until_long_break => {
                self.phase = Phase::LongBreak;
                self.set_index = 1;
                self.minutes_remaining = self.intervals.long_break_minutes;
            }
            Phase::Work => {
                self.phase = Phase::ShortBreak;
                self.minutes_remaining = self.intervals.short_break_minutes;
            }
        }
    }
}
