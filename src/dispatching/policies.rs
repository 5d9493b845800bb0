//! Built-in dispatching policies.
//!
//! # Policies
//!
//! - **SJF**: ascending execution time
//! - **EDF**: ascending deadline
//! - **Weighted**: descending weight
//!
//! # Score Convention
//! All policies return lower scores for jobs to be scheduled earlier.
//!
//! # References
//! - Smith (1956), optimal for mean flow time on a single machine
//! - Jackson (1955), optimal for maximum lateness on a single machine

use super::{DispatchingPolicy, PolicyScore};
use crate::models::Job;

/// Shortest Job First.
///
/// Orders jobs by ascending execution time. Minimizes average flow time
/// on a single machine when all jobs are available at t=0.
///
/// # Reference
/// Smith (1956).
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "Shortest Job First (SJF)"
    }

    fn evaluate(&self, job: &Job) -> PolicyScore {
        job.execution_time
    }
}

/// Earliest Deadline First.
///
/// Orders jobs by ascending deadline. The greedy, non-preemptive variant:
/// the order is fixed up front and never revised as jobs arrive.
///
/// # Reference
/// Jackson (1955); Liu & Layland (1973) for the preemptive analysis.
#[derive(Debug, Clone, Copy)]
pub struct Edf;

impl DispatchingPolicy for Edf {
    fn name(&self) -> &'static str {
        "Earliest Deadline First (EDF)"
    }

    fn evaluate(&self, job: &Job) -> PolicyScore {
        job.deadline
    }
}

/// Weighted job scheduling.
///
/// Orders jobs by descending weight. A greedy approximation: the highest
/// weight always runs first, with no interval selection or lookahead.
/// (Negated because lower score = scheduled earlier in convention.)
#[derive(Debug, Clone, Copy)]
pub struct Weighted;

impl DispatchingPolicy for Weighted {
    fn name(&self) -> &'static str {
        "Weighted Job Scheduling"
    }

    fn evaluate(&self, job: &Job) -> PolicyScore {
        -job.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(id: &str, execution_time: f64, deadline: f64, weight: f64) -> Job {
        Job::new(id, 0.0, execution_time, deadline, weight)
    }

    #[test]
    fn test_sjf_scores() {
        let short = make_job("short", 1.0, 10.0, 1.0);
        let long = make_job("long", 5.0, 10.0, 1.0);
        assert!(Sjf.evaluate(&short) < Sjf.evaluate(&long));
    }

    #[test]
    fn test_sjf_order() {
        let jobs = vec![
            make_job("long", 5.0, 10.0, 1.0),
            make_job("short", 1.0, 10.0, 1.0),
            make_job("medium", 3.0, 10.0, 1.0),
        ];
        let ordered = Sjf.order(&jobs);
        assert_eq!(ordered[0].id, "short");
        assert_eq!(ordered[1].id, "medium");
        assert_eq!(ordered[2].id, "long");
        // Input untouched
        assert_eq!(jobs[0].id, "long");
    }

    #[test]
    fn test_edf_order() {
        let jobs = vec![
            make_job("late", 1.0, 50.0, 1.0),
            make_job("early", 1.0, 10.0, 1.0),
        ];
        let ordered = Edf.order(&jobs);
        assert_eq!(ordered[0].id, "early");
        assert_eq!(ordered[1].id, "late");
    }

    #[test]
    fn test_weighted_order() {
        let jobs = vec![
            make_job("light", 1.0, 10.0, 1.0),
            make_job("heavy", 1.0, 10.0, 9.0),
            make_job("mid", 1.0, 10.0, 5.0),
        ];
        let ordered = Weighted.order(&jobs);
        assert_eq!(ordered[0].id, "heavy");
        assert_eq!(ordered[1].id, "mid");
        assert_eq!(ordered[2].id, "light");
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let jobs = vec![
            make_job("first", 2.0, 10.0, 3.0),
            make_job("second", 2.0, 10.0, 3.0),
            make_job("third", 2.0, 10.0, 3.0),
        ];
        for policy in [&Sjf as &dyn DispatchingPolicy, &Edf, &Weighted] {
            let ordered = policy.order(&jobs);
            assert_eq!(ordered[0].id, "first", "{}", policy.name());
            assert_eq!(ordered[1].id, "second", "{}", policy.name());
            assert_eq!(ordered[2].id, "third", "{}", policy.name());
        }
    }

    #[test]
    fn test_policies_ignore_arrival_time() {
        // A later arrival must not change the order.
        let jobs = vec![
            Job::new("a", 9.0, 1.0, 10.0, 1.0),
            Job::new("b", 0.0, 2.0, 20.0, 2.0),
        ];
        assert_eq!(Sjf.order(&jobs)[0].id, "a");
        assert_eq!(Edf.order(&jobs)[0].id, "a");
        assert_eq!(Weighted.order(&jobs)[0].id, "b");
    }

    #[test]
    fn test_names() {
        assert_eq!(Sjf.name(), "Shortest Job First (SJF)");
        assert_eq!(Edf.name(), "Earliest Deadline First (EDF)");
        assert_eq!(Weighted.name(), "Weighted Job Scheduling");
    }
}
