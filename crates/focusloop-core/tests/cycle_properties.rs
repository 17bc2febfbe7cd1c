//! Property tests for the interval cycle.

use focusloop_core::{IntervalClock, Intervals, Phase};
use proptest::prelude::*;

fn arb_intervals() -> impl Strategy<Value = Intervals> {
    (1u32..=90, 1u32..=30, 1u32..=45, 1u32..=8).prop_map(|(work, short, long, sets)| Intervals {
        work_minutes: work,
        short_break_minutes: short,
        long_break_minutes: long,
        sets_until_long_break: sets,
    })
}

proptest! {
    #[test]
    fn cycle_is_exactly_periodic(intervals in arb_intervals()) {
        let mut clock = IntervalClock::new(intervals);
        clock.start().unwrap();
        for _ in 0..intervals.cycle_minutes() {
            clock.tick();
        }
        prop_assert_eq!(clock.phase(), Phase::Work);
        prop_assert_eq!(clock.set_index(), 1);
        prop_assert_eq!(clock.minutes_remaining(), intervals.work_minutes);
    }

    #[test]
    fn invariants_hold_at_every_tick(intervals in arb_intervals(), ticks in 0usize..600) {
        let mut clock = IntervalClock::new(intervals);
        clock.start().unwrap();
        for _ in 0..ticks {
            clock.tick();
            prop_assert!(clock.set_index() >= 1);
            prop_assert!(clock.set_index() <= intervals.sets_until_long_break);
            // a transition resets the countdown, so 0 is never observable
            prop_assert!(clock.minutes_remaining() >= 1);
        }
    }

    #[test]
    fn rewind_keeps_the_set_index(intervals in arb_intervals(), ticks in 0usize..300) {
        let mut clock = IntervalClock::new(intervals);
        clock.start().unwrap();
        for _ in 0..ticks {
            clock.tick();
        }
        let set_before = clock.set_index();
        clock.rewind().unwrap();
        prop_assert_eq!(clock.phase(), Phase::Work);
        prop_assert_eq!(clock.minutes_remaining(), intervals.work_minutes);
        prop_assert_eq!(clock.set_index(), set_before);
    }
}
