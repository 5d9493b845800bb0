//! Single-CPU timeline replay.
//!
//! # Algorithm
//!
//! Replays an already-ordered job sequence on one non-preemptive CPU
//! starting at t=0. For each job in order:
//!
//! 1. `start = max(current_time, arrival_time)`
//! 2. `end = start + execution_time`
//! 3. `current_time = end`
//!
//! O(n) over the ordered sequence. Jobs never run concurrently; a job
//! ordered before it has arrived inserts an idle gap instead of
//! preempting anything.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use crate::models::{Job, ScheduledSlot, Timeline};

/// Replays an ordered job sequence on a single CPU.
///
/// Produces one slot per job, preserving the given order. The ordering
/// itself is the policy's responsibility; this function only enforces
/// arrival times and run-to-completion execution.
///
/// A job with zero execution time yields a zero-width slot.
///
/// # Example
///
/// ```
/// use sched_compare::models::Job;
/// use sched_compare::scheduler::replay;
///
/// let ordered = vec![
///     Job::new("J2", 2.0, 3.0, 6.0, 5.0),
///     Job::new("J1", 0.0, 5.0, 10.0, 3.0),
/// ];
/// let timeline = replay(&ordered);
/// assert_eq!(timeline.slots[0].start_time, 2.0);
/// assert_eq!(timeline.slots[1].start_time, 5.0);
/// assert_eq!(timeline.makespan(), 10.0);
/// ```
pub fn replay(ordered: &[Job]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut current_time = 0.0_f64;

    for job in ordered {
        let start_time = current_time.max(job.arrival_time);
        let end_time = start_time + job.execution_time;
        timeline.push(ScheduledSlot::new(&job.id, start_time, end_time));
        current_time = end_time;
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_back_to_back() {
        let ordered = vec![
            Job::new("J1", 0.0, 2.0, 10.0, 1.0),
            Job::new("J2", 0.0, 3.0, 10.0, 1.0),
        ];
        let timeline = replay(&ordered);
        assert_eq!(timeline.len(), 2);
        assert!((timeline.slots[0].start_time - 0.0).abs() < 1e-10);
        assert!((timeline.slots[0].end_time - 2.0).abs() < 1e-10);
        assert!((timeline.slots[1].start_time - 2.0).abs() < 1e-10);
        assert!((timeline.slots[1].end_time - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_replay_waits_for_arrival() {
        // First in order but arrives at 2 → idle gap [0, 2).
        let ordered = vec![
            Job::new("J2", 2.0, 3.0, 6.0, 5.0),
            Job::new("J1", 0.0, 5.0, 10.0, 3.0),
        ];
        let timeline = replay(&ordered);
        assert!((timeline.slots[0].start_time - 2.0).abs() < 1e-10);
        assert!((timeline.slots[0].end_time - 5.0).abs() < 1e-10);
        // J1 already arrived, runs immediately after J2
        assert!((timeline.slots[1].start_time - 5.0).abs() < 1e-10);
        assert!((timeline.slots[1].end_time - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_replay_preserves_order() {
        let ordered = vec![
            Job::new("c", 0.0, 1.0, 10.0, 1.0),
            Job::new("a", 0.0, 1.0, 10.0, 1.0),
            Job::new("b", 0.0, 1.0, 10.0, 1.0),
        ];
        let timeline = replay(&ordered);
        let ids: Vec<&str> = timeline.slots.iter().map(|s| s.job_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_replay_slots_never_overlap() {
        let ordered = vec![
            Job::new("J1", 5.0, 2.0, 20.0, 1.0),
            Job::new("J2", 0.0, 3.0, 20.0, 1.0),
            Job::new("J3", 9.0, 1.0, 20.0, 1.0),
        ];
        let timeline = replay(&ordered);
        for pair in timeline.slots.windows(2) {
            assert!(pair[1].start_time >= pair[0].end_time);
        }
    }

    #[test]
    fn test_replay_slot_duration_equals_execution_time() {
        let ordered = vec![
            Job::new("J1", 3.0, 4.0, 20.0, 1.0),
            Job::new("J2", 0.0, 2.5, 20.0, 1.0),
        ];
        let timeline = replay(&ordered);
        assert!((timeline.slots[0].duration() - 4.0).abs() < 1e-10);
        assert!((timeline.slots[1].duration() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_replay_zero_execution_time() {
        let ordered = vec![
            Job::new("J1", 0.0, 0.0, 5.0, 1.0),
            Job::new("J2", 0.0, 2.0, 5.0, 1.0),
        ];
        let timeline = replay(&ordered);
        // Zero-width slot, clock not advanced
        assert!((timeline.slots[0].duration() - 0.0).abs() < 1e-10);
        assert!((timeline.slots[1].start_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_replay_empty() {
        let timeline = replay(&[]);
        assert!(timeline.is_empty());
        assert!((timeline.makespan() - 0.0).abs() < 1e-10);
    }
}
