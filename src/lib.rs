//! Greedy CPU scheduling policy comparison.
//!
//! Simulates a job set under three greedy single-CPU dispatching
//! policies, computes per-policy performance metrics, and derives a
//! composite score so the policies can be ranked for that workload.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `ScheduledSlot`, `Timeline`
//! - **`dispatching`**: The `DispatchingPolicy` trait and the built-in
//!   SJF, EDF, and weighted policies
//! - **`scheduler`**: Timeline replay, KPIs, scoring, and the
//!   comparison driver
//! - **`validation`**: Structural job-set checks (duplicate IDs,
//!   negative or non-finite fields)
//! - **`ingest`**: CSV/JSON parsing with per-field defaulting
//! - **`generator`**: Random job fixtures for demos and tests
//!
//! # Example
//!
//! ```
//! use sched_compare::models::Job;
//! use sched_compare::scheduler::{best_policy, compare_policies};
//!
//! let jobs = vec![
//!     Job::new("J1", 0.0, 5.0, 10.0, 3.0),
//!     Job::new("J2", 2.0, 3.0, 6.0, 5.0),
//! ];
//! let results = compare_policies(&jobs).unwrap();
//! let best = best_policy(&results).unwrap();
//! println!("{} scored {:.1}", best.name, best.overall_score);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness and
//!   Discrimination for Resource Allocation in Shared Computer Systems"

pub mod dispatching;
pub mod generator;
pub mod ingest;
pub mod models;
pub mod scheduler;
pub mod validation;
