//! Scheduler ordering guarantees.

use proptest::prelude::*;

use pairup::scheduler::Scheduler;

#[test]
fn test_fires_in_due_time_order_with_fifo_ties() {
    let mut sched = Scheduler::new();
    // (delay, tag) with deliberate ties and out-of-order insertion.
    sched.after(0.5, "t5-first");
    sched.after(0.2, "t2");
    sched.after(0.5, "t5-second");
    sched.after(0.0, "t0");
    sched.after(0.5, "t5-third");

    let fired = sched.tick(1.0);

    assert_eq!(fired, vec!["t0", "t2", "t5-first", "t5-second", "t5-third"]);
}

#[test]
fn test_partial_advance_fires_only_what_is_due() {
    let mut sched = Scheduler::new();
    for i in 0..10 {
        sched.after(i as f32 * 0.1, i);
    }

    // now = 0.35: entries due at 0.0, 0.1, 0.2, 0.3.
    let fired = sched.tick(0.35);
    assert_eq!(fired, vec![0, 1, 2, 3]);
    assert_eq!(sched.len(), 6);

    let rest = sched.tick(10.0);
    assert_eq!(rest, vec![4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_chained_continuations_take_one_tick_each() {
    // A three-step sequence where each fired step schedules the next at
    // zero delay: steps run on consecutive ticks, never batched into one.
    let mut sched = Scheduler::new();
    sched.after(0.0, 1);

    let mut log = Vec::new();
    for _ in 0..3 {
        for step in sched.tick(0.016) {
            log.push(step);
            if step < 3 {
                sched.after(0.0, step + 1);
            }
        }
    }

    assert_eq!(log, vec![1, 2, 3]);
}

proptest! {
    /// For any delays, payloads come out sorted by due time, insertion
    /// order breaking ties, each exactly once.
    #[test]
    fn prop_drain_order_is_due_then_insertion(delays in prop::collection::vec(0u32..100, 1..50)) {
        let mut sched = Scheduler::new();
        for (seq, &delay) in delays.iter().enumerate() {
            sched.after(delay as f32 * 0.01, (delay, seq));
        }

        let fired = sched.tick(2.0);

        prop_assert_eq!(fired.len(), delays.len());
        for window in fired.windows(2) {
            let (d0, s0) = window[0];
            let (d1, s1) = window[1];
            prop_assert!(d0 < d1 || (d0 == d1 && s0 < s1));
        }
    }

    /// Splitting the same span into many ticks fires the same payloads.
    #[test]
    fn prop_firing_is_tick_granularity_independent(delays in prop::collection::vec(0u32..50, 1..30)) {
        let mut coarse = Scheduler::new();
        let mut fine = Scheduler::new();
        for (seq, &delay) in delays.iter().enumerate() {
            coarse.after(delay as f32, seq);
            fine.after(delay as f32, seq);
        }

        let all_at_once = coarse.tick(100.0);

        let mut accumulated = Vec::new();
        for _ in 0..100 {
            accumulated.extend(fine.tick(1.0));
        }

        prop_assert_eq!(all_at_once, accumulated);
    }
}
