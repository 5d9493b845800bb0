//! Composite scoring of timeline metrics.
//!
//! Maps the four KPIs onto a common 0-100 scale and combines them into
//! one comparable score per policy. Time-based metrics (where lower is
//! better) go through a hyperbolic shaping curve; ratio metrics (where
//! higher is better) are scaled linearly.

use crate::scheduler::TimelineMetrics;

/// Shaping divisor for the total execution time score.
///
/// `100 / (1 + makespan / 10)`: a makespan of 10 scores 50.
pub const EXEC_TIME_DIVISOR: f64 = 10.0;

/// Shaping divisor for the average turnaround score.
///
/// `100 / (1 + turnaround / 5)`: an average turnaround of 5 scores 50.
pub const TURNAROUND_DIVISOR: f64 = 5.0;

/// Execution-time component score in (0, 100]. Lower makespan scores higher.
pub fn exec_time_score(total_execution_time: f64) -> f64 {
    100.0 / (1.0 + total_execution_time / EXEC_TIME_DIVISOR)
}

/// Turnaround component score in (0, 100]. Lower turnaround scores higher.
pub fn turnaround_score(average_turnaround_time: f64) -> f64 {
    100.0 / (1.0 + average_turnaround_time / TURNAROUND_DIVISOR)
}

/// Relative weights of the four component scores.
///
/// The default is the equal-weighted reference configuration. The weights
/// are a fixed configuration value, not derived from data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the execution-time component.
    pub exec_time: f64,
    /// Weight of the turnaround component.
    pub turnaround: f64,
    /// Weight of the CPU utilization component.
    pub cpu: f64,
    /// Weight of the fairness component.
    pub fairness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            exec_time: 0.25,
            turnaround: 0.25,
            cpu: 0.25,
            fairness: 0.25,
        }
    }
}

impl ScoreWeights {
    /// Combines the metrics into a composite score.
    ///
    /// With the default weights the result lies in [0, 100] for any
    /// metrics with utilization and fairness in [0, 1].
    pub fn overall(&self, metrics: &TimelineMetrics) -> f64 {
        self.exec_time * exec_time_score(metrics.total_execution_time)
            + self.turnaround * turnaround_score(metrics.average_turnaround_time)
            + self.cpu * metrics.cpu_utilization * 100.0
            + self.fairness * metrics.fairness_index * 100.0
    }
}

/// Composite score under the default equal weights.
pub fn overall_score(metrics: &TimelineMetrics) -> f64 {
    ScoreWeights::default().overall(metrics)
}
