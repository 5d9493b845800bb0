//! Job model.
//!
//! A job is the unit of work submitted to the scheduling policies:
//! it arrives at some instant, requires a fixed amount of CPU time,
//! and carries a deadline and a relative weight.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A job to be scheduled on a single CPU.
///
/// Jobs are immutable inputs: policies reorder copies and the simulator
/// never mutates them. All times share one caller-defined unit relative
/// to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier, assigned by the caller.
    pub id: String,
    /// Instant the job becomes eligible to run.
    pub arrival_time: f64,
    /// CPU time the job requires (run-to-completion).
    pub execution_time: f64,
    /// Latest completion time the job should meet. Jobs that cannot meet
    /// it are still scheduled; the breach shows up in the metrics.
    pub deadline: f64,
    /// Relative importance. Consulted only by the weighted policy.
    pub weight: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(
        id: impl Into<String>,
        arrival_time: f64,
        execution_time: f64,
        deadline: f64,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            execution_time,
            deadline,
            weight,
        }
    }

    /// Whether the deadline leaves room for the full execution time
    /// starting at arrival. A `false` here does not prevent scheduling.
    pub fn deadline_is_feasible(&self) -> bool {
        self.arrival_time + self.execution_time <= self.deadline
    }
}
