//! Random job-set generation for demos and test fixtures.
//!
//! The scheduling engine itself is fully deterministic; this module is a
//! fixture utility for producing plausible inputs and is never called
//! from the scoring path. Callers supply the RNG, so tests can seed a
//! `SmallRng` for reproducibility.

use rand::Rng;

use crate::models::Job;

/// Generates between 5 and 14 random jobs.
pub fn random_jobs<R: Rng>(rng: &mut R) -> Vec<Job> {
    let count = rng.random_range(5..15);
    random_jobs_with_count(rng, count)
}

/// Generates exactly `count` random jobs.
///
/// Field ranges: arrival 0-9, execution 1-10, weight 1-10, and a
/// deadline of arrival + execution + 0-19, so every generated job can
/// meet its deadline.
pub fn random_jobs_with_count<R: Rng>(rng: &mut R, count: usize) -> Vec<Job> {
    (0..count)
        .map(|i| {
            let arrival_time = rng.random_range(0..10) as f64;
            let execution_time = rng.random_range(1..=10) as f64;
            let deadline = arrival_time + execution_time + rng.random_range(0..20) as f64;
            let weight = rng.random_range(1..=10) as f64;
            Job::new(format!("Job-{}", i + 1), arrival_time, execution_time, deadline, weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let jobs = random_jobs(&mut rng);
            assert!((5..15).contains(&jobs.len()));
        }
    }

    #[test]
    fn test_field_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let jobs = random_jobs_with_count(&mut rng, 200);
        for job in &jobs {
            assert!((0.0..10.0).contains(&job.arrival_time));
            assert!((1.0..=10.0).contains(&job.execution_time));
            assert!((1.0..=10.0).contains(&job.weight));
            assert!(job.deadline_is_feasible());
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = SmallRng::seed_from_u64(1);
        let jobs = random_jobs_with_count(&mut rng, 3);
        assert_eq!(jobs[0].id, "Job-1");
        assert_eq!(jobs[1].id, "Job-2");
        assert_eq!(jobs[2].id, "Job-3");
    }

    #[test]
    fn test_generated_jobs_pass_validation() {
        let mut rng = SmallRng::seed_from_u64(9);
        let jobs = random_jobs_with_count(&mut rng, 50);
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = random_jobs_with_count(&mut SmallRng::seed_from_u64(3), 10);
        let b = random_jobs_with_count(&mut SmallRng::seed_from_u64(3), 10);
        assert_eq!(a, b);
    }
}
