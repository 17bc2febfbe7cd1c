//! Best-effort desktop notifications.
//!
//! Delivery is fire-and-forget: a missing notification daemon must never
//! crash or block the clock, so failures are logged and dropped.

use log::warn;

use crate::clock::Phase;
use crate::events::Event;

/// Notification transport.
pub trait Notifier {
    /// Deliver a notification. Implementations must not block the caller
    /// or propagate delivery failures.
    fn notify(&self, title: &str, body: &str);
}

/// Desktop notification daemon transport.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if let Err(e) = notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .show()
        {
            warn!("notification delivery failed: {e}");
        }
    }
}

/// Discards everything. Used for `--no-notify` runs.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Route an event to the notifier.
///
/// Starts, rewinds, phase changes, and status snapshots notify; pause
/// toggles stay silent.
pub fn dispatch(event: &Event, notifier: &dyn Notifier) {
    let (phase, set_index, minutes_remaining) = match event {
        Event::ClockStarted {
            phase,
            set_index,
            minutes_remaining,
            ..
        }
        | Event::ClockRewound {
            phase,
            set_index,
            minutes_remaining,
            ..
        }
        | Event::PhaseChanged {
            phase,
            set_index,
            minutes_remaining,
            ..
        }
        | Event::StateSnapshot {
            phase,
            set_index,
            minutes_remaining,
            ..
        } => (*phase, *set_index, *minutes_remaining),
        Event::PauseToggled { .. } => return,
    };
    let (title, body) = notification_content(phase, set_index, minutes_remaining);
    notifier.notify(&title, &body);
}

fn notification_content(phase: Phase, set_index: u32, minutes_remaining: u32) -> (String, String) {
    (
        phase.title().to_string(),
        format!("{set_index} set\n{minutes_remaining} minute(s) left"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{IntervalClock, Intervals};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.sent.borrow_mut().push((title.into(), body.into()));
        }
    }

    #[test]
    fn start_event_notifies_with_phase_title() {
        let notifier = RecordingNotifier::default();
        let mut clock = IntervalClock::new(Intervals::default());
        let event = clock.start().unwrap();
        dispatch(&event, &notifier);
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Work");
        assert_eq!(sent[0].1, "1 set\n25 minute(s) left");
    }

    #[test]
    fn transition_notifies_for_the_new_phase() {
        let notifier = RecordingNotifier::default();
        let mut clock = IntervalClock::new(Intervals {
            work_minutes: 1,
            ..Intervals::default()
        });
        clock.start().unwrap();
        let event = clock.tick().expect("transition");
        dispatch(&event, &notifier);
        let sent = notifier.sent.borrow();
        assert_eq!(sent[0].0, "Short break");
        assert_eq!(sent[0].1, "1 set\n5 minute(s) left");
    }

    #[test]
    fn long_break_title_is_distinct() {
        let notifier = RecordingNotifier::default();
        let mut clock = IntervalClock::new(Intervals {
            work_minutes: 1,
            sets_until_long_break: 1,
            ..Intervals::default()
        });
        clock.start().unwrap();
        let event = clock.tick().expect("transition");
        dispatch(&event, &notifier);
        assert_eq!(notifier.sent.borrow()[0].0, "Long break");
    }

    #[test]
    fn pause_toggle_is_silent() {
        let notifier = RecordingNotifier::default();
        let mut clock = IntervalClock::new(Intervals::default());
        clock.start().unwrap();
        let event = clock.toggle_pause().unwrap();
        dispatch(&event, &notifier);
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn snapshot_notifies_current_state() {
        let notifier = RecordingNotifier::default();
        let mut clock = IntervalClock::new(Intervals::default());
        clock.start().unwrap();
        clock.tick();
        let snap = clock.snapshot().unwrap();
        dispatch(&snap, &notifier);
        assert_eq!(notifier.sent.borrow()[0].1, "1 set\n24 minute(s) left");
    }
}
