//! Timeline (solution) model.
//!
//! A timeline is the output of one policy run: one slot per job, in the
//! order the simulator executed them on the single CPU.

use serde::{Deserialize, Serialize};

/// A contiguous execution interval assigned to one job.
///
/// `end_time - start_time` equals the job's execution time: scheduling is
/// non-preemptive, so every job receives its full requested time in one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSlot {
    /// Identifier of the job this slot executes.
    pub job_id: String,
    /// Start time.
    pub start_time: f64,
    /// End time (`start_time` + execution time).
    pub end_time: f64,
}

impl ScheduledSlot {
    /// Creates a new slot.
    pub fn new(job_id: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            job_id: job_id.into(),
            start_time,
            end_time,
        }
    }

    /// Allocated duration (end - start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A complete single-CPU timeline.
///
/// Slots appear in execution order and never overlap; consecutive slots
/// may be separated by idle gaps when a job had not yet arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slots in execution order.
    pub slots: Vec<ScheduledSlot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: ScheduledSlot) {
        self.slots.push(slot);
    }

    /// Makespan: latest end time across all slots. 0.0 when empty.
    pub fn makespan(&self) -> f64 {
        self.slots.iter().map(|s| s.end_time).fold(0.0, f64::max)
    }

    /// Finds the slot for a given job.
    pub fn slot_for_job(&self, job_id: &str) -> Option<&ScheduledSlot> {
        self.slots.iter().find(|s| s.job_id == job_id)
    }

    /// Total busy time: sum of all slot durations.
    pub fn busy_time(&self) -> f64 {
        self.slots.iter().map(|s| s.duration()).sum()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
