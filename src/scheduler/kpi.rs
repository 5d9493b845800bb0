//! Timeline quality metrics (KPIs).
//!
//! Computes the performance indicators of one policy run from its
//! completed timeline and the original job set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Execution Time (C_max) | Latest slot end time |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | CPU Utilization | Sum of execution times / makespan |
//! | Fairness Index | Jain's index over allocated/requested ratios |
//!
//! # References
//! - Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Job, Timeline};

/// Performance indicators of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetrics {
    /// Makespan: end time of the last-finishing job.
    pub total_execution_time: f64,
    /// Mean of (completion time - arrival time) across jobs.
    pub average_turnaround_time: f64,
    /// Busy fraction of the CPU: requested time over makespan.
    /// 0.0 when the makespan is zero (never a non-finite value).
    pub cpu_utilization: f64,
    /// Jain's fairness index over allocated/requested time ratios,
    /// in (0, 1] when at least one job has positive requested time.
    pub fairness_index: f64,
}

impl TimelineMetrics {
    /// Computes metrics from a timeline and its input jobs.
    ///
    /// # Arguments
    /// * `timeline` - The completed timeline, one slot per job.
    /// * `jobs` - The input jobs (for arrival and requested times), in
    ///   any order.
    pub fn calculate(timeline: &Timeline, jobs: &[Job]) -> Self {
        let total_execution_time = timeline.makespan();

        let arrival_times: HashMap<&str, f64> = jobs
            .iter()
            .map(|j| (j.id.as_str(), j.arrival_time))
            .collect();

        let average_turnaround_time = if timeline.is_empty() {
            0.0
        } else {
            let total: f64 = timeline
                .slots
                .iter()
                .map(|slot| {
                    let arrival = arrival_times.get(slot.job_id.as_str()).copied().unwrap_or(0.0);
                    slot.end_time - arrival
                })
                .sum();
            total / timeline.len() as f64
        };

        // Guarded: all-zero execution times give a zero makespan.
        let total_requested: f64 = jobs.iter().map(|j| j.execution_time).sum();
        let cpu_utilization = if total_execution_time > 0.0 {
            total_requested / total_execution_time
        } else {
            0.0
        };

        let fairness_index = jain_fairness_index(timeline, jobs);

        Self {
            total_execution_time,
            average_turnaround_time,
            cpu_utilization,
            fairness_index,
        }
    }
}

/// Jain's fairness index over per-job allocated/requested time ratios.
///
/// `(Σx)² / (n · Σx²)` where `x_i = allocated_i / requested_i`. Under
/// non-preemptive run-to-completion execution every ratio is exactly 1,
/// so the index is 1; the general form is kept so the metric stays
/// meaningful if allocation ever diverges from request.
///
/// Slots whose job has non-positive requested time are skipped. Returns
/// 0.0 when no valid ratios exist or all ratios are zero.
fn jain_fairness_index(timeline: &Timeline, jobs: &[Job]) -> f64 {
    let requested: HashMap<&str, f64> = jobs
        .iter()
        .map(|j| (j.id.as_str(), j.execution_time))
        .collect();

    let mut ratios = Vec::with_capacity(timeline.len());
    for slot in &timeline.slots {
        let requested_time = requested.get(slot.job_id.as_str()).copied().unwrap_or(0.0);
        if requested_time > 0.0 {
            ratios.push(slot.duration() / requested_time);
        }
    }

    if ratios.is_empty() {
        return 0.0;
    }

    let sum: f64 = ratios.iter().sum();
    let sum_squared: f64 = ratios.iter().map(|r| r * r).sum();
    if sum_squared == 0.0 {
        return 0.0;
    }

    (sum * sum) / (ratios.len() as f64 * sum_squared)
}
