//! Dispatching policies for job ordering.
//!
//! A policy maps a job set to an execution order by scoring each job on a
//! single attribute; the timeline simulator then replays that order on the
//! CPU. Policies never consult arrival times: a job ordered before its
//! arrival is simply delayed by the simulator.
//!
//! # Usage
//!
//! ```
//! use sched_compare::dispatching::{policies, DispatchingPolicy};
//! use sched_compare::models::Job;
//!
//! let jobs = vec![
//!     Job::new("J1", 0.0, 5.0, 10.0, 3.0),
//!     Job::new("J2", 2.0, 3.0, 6.0, 5.0),
//! ];
//! let ordered = policies::Sjf.order(&jobs);
//! assert_eq!(ordered[0].id, "J2");
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod policies;

use std::fmt::Debug;

use crate::models::Job;

/// Score returned by a dispatching policy.
///
/// Lower scores = higher priority (scheduled first).
pub type PolicyScore = f64;

/// A greedy ordering policy over a job set.
///
/// # Score Convention
/// **Lower score = scheduled earlier.** Policies that prefer larger
/// attribute values (e.g. weight) negate their score.
///
/// # Tie Policy
/// [`order`](DispatchingPolicy::order) uses a stable sort, so jobs with
/// equal scores keep their relative input order.
pub trait DispatchingPolicy: Send + Sync + Debug {
    /// Display name of the policy (e.g. "Shortest Job First (SJF)").
    fn name(&self) -> &'static str;

    /// Evaluates the ordering score of a job. Lower = earlier.
    fn evaluate(&self, job: &Job) -> PolicyScore;

    /// Returns a newly ordered copy of the job set. The input is never
    /// mutated.
    fn order(&self, jobs: &[Job]) -> Vec<Job> {
        let mut ordered = jobs.to_vec();
        ordered.sort_by(|a, b| {
            self.evaluate(a)
                .partial_cmp(&self.evaluate(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ordered
    }
}
