//! Policy comparison driver.
//!
//! Runs every built-in policy over the same job set and packages each
//! run's timeline, metrics, and composite score into a [`PolicyResult`].
//! The three runs are independent: each policy sorts its own copy of the
//! jobs and replays its own timeline.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dispatching::policies::{Edf, Sjf, Weighted};
use crate::dispatching::DispatchingPolicy;
use crate::models::{Job, ScheduledSlot};
use crate::scheduler::{overall_score, replay, TimelineMetrics};
use crate::validation::{validate_jobs, ValidationError};

/// Outcome of one policy run over a job set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    /// Display name of the policy that produced this result.
    pub name: String,
    /// Makespan of the run.
    pub total_execution_time: f64,
    /// Mean turnaround across jobs.
    pub average_turnaround_time: f64,
    /// Busy fraction of the CPU, in [0, 1] for well-formed inputs.
    pub cpu_utilization: f64,
    /// Jain's fairness index.
    pub fairness_index: f64,
    /// Composite score in [0, 100].
    pub overall_score: f64,
    /// Execution slots in the order the jobs ran.
    pub job_schedule: Vec<ScheduledSlot>,
}

/// Errors rejected at the driver boundary, before any policy runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The job collection was empty.
    EmptyJobSet,
    /// One or more jobs failed structural validation.
    InvalidInput(Vec<ValidationError>),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyJobSet => f.write_str("job collection is empty"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid job input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    f.write_str(&e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Runs a single policy over a job set.
///
/// Sorts a copy of the jobs by the policy, replays the order on the CPU,
/// and derives metrics and the composite score. Assumes the job set has
/// already passed validation.
pub fn run_policy(policy: &dyn DispatchingPolicy, jobs: &[Job]) -> PolicyResult {
    let ordered = policy.order(jobs);
    let timeline = replay(&ordered);
    let metrics = TimelineMetrics::calculate(&timeline, jobs);
    let score = overall_score(&metrics);

    debug!(
        "{}: makespan={} turnaround={:.3} utilization={:.3} fairness={:.3} score={:.2}",
        policy.name(),
        metrics.total_execution_time,
        metrics.average_turnaround_time,
        metrics.cpu_utilization,
        metrics.fairness_index,
        score
    );

    PolicyResult {
        name: policy.name().to_string(),
        total_execution_time: metrics.total_execution_time,
        average_turnaround_time: metrics.average_turnaround_time,
        cpu_utilization: metrics.cpu_utilization,
        fairness_index: metrics.fairness_index,
        overall_score: score,
        job_schedule: timeline.slots,
    }
}

/// Runs all built-in policies over one job set.
///
/// Returns exactly three results in fixed order: SJF, EDF, Weighted.
/// Fails fast on invalid input; no partial results are produced.
///
/// # Example
///
/// ```
/// use sched_compare::models::Job;
/// use sched_compare::scheduler::compare_policies;
///
/// let jobs = vec![
///     Job::new("J1", 0.0, 5.0, 10.0, 3.0),
///     Job::new("J2", 2.0, 3.0, 6.0, 5.0),
/// ];
/// let results = compare_policies(&jobs).unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].name, "Shortest Job First (SJF)");
/// ```
pub fn compare_policies(jobs: &[Job]) -> Result<Vec<PolicyResult>, ScheduleError> {
    if jobs.is_empty() {
        return Err(ScheduleError::EmptyJobSet);
    }
    validate_jobs(jobs).map_err(ScheduleError::InvalidInput)?;

    let policies: [&dyn DispatchingPolicy; 3] = [&Sjf, &Edf, &Weighted];
    Ok(policies.iter().map(|p| run_policy(*p, jobs)).collect())
}

/// The result with the highest composite score.
///
/// Ties go to the earliest result in driver order.
pub fn best_policy(results: &[PolicyResult]) -> Option<&PolicyResult> {
    results.iter().reduce(|best, r| {
        if r.overall_score > best.overall_score {
            r
        } else {
            best
        }
    })
}
