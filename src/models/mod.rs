//! Scheduling domain models.
//!
//! Core data types for single-CPU policy comparison: the immutable
//! [`Job`] input record and the [`Timeline`] of [`ScheduledSlot`]s that
//! one policy run produces.

mod job;
mod timeline;

pub use job::Job;
pub use timeline::{ScheduledSlot, Timeline};
