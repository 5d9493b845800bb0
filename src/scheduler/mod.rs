//! Timeline simulation, KPIs, scoring, and the comparison driver.
//!
//! One simulator serves every policy: a policy orders the jobs, then
//! [`replay`] runs the order on a single non-preemptive CPU. The KPI
//! and scoring layers turn the resulting timeline into comparable
//! numbers, and [`compare_policies`] drives the whole pipeline for all
//! built-in policies.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

mod compare;
mod kpi;
mod score;
mod simulate;

pub use compare::{best_policy, compare_policies, run_policy, PolicyResult, ScheduleError};
pub use kpi::TimelineMetrics;
pub use score::{
    exec_time_score, overall_score, turnaround_score, ScoreWeights, EXEC_TIME_DIVISOR,
    TURNAROUND_DIVISOR,
};
pub use simulate::replay;
