use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::job::Job;
use super::template::JobTemplate;

/// Payload token replaced by a fresh random integer in every generated job.
pub const RANDOM_TOKEN: &str = "RANDINT";
/// Exclusive upper bound for `RANDINT` draws.
pub const RANDOM_UPPER_BOUND: u32 = 1_000_000;

/// Where generated jobs come from.
#[derive(Debug, Clone)]
pub enum JobSource {
    /// The same read job, repeated.
    Default(Job),
    /// Uniform samples (with replacement) from template candidates.
    Template(JobTemplate),
}

pub struct JobGenerator {
    source: JobSource,
    rng: StdRng,
}

impl JobGenerator {
    /// Seeds from OS entropy unless `seed` is given.
    #[must_use]
    pub fn new(source: JobSource, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { source, rng }
    }

    /// Produces exactly `count` jobs. Consecutive calls draw fresh randomness.
    pub fn generate(&mut self, count: usize) -> Vec<Job> {
        let mut jobs = Vec::with_capacity(count);
        match &self.source {
            JobSource::Default(job) => {
                jobs.resize(count, job.clone());
            }
            JobSource::Template(template) => {
                let candidates = template.candidates();
                for _ in 0..count {
                    // Templates are never empty; see `JobTemplate::parse`.
                    let Some(candidate) = candidates.choose(&mut self.rng) else {
                        break;
                    };
                    jobs.push(randomize(candidate, &mut self.rng));
                }
            }
        }
        debug!("Generated {} jobs", jobs.len());
        jobs
    }
}

fn randomize<R: Rng>(job: &Job, rng: &mut R) -> Job {
    match job.payload() {
        Some(payload) if payload.contains(RANDOM_TOKEN) => {
            job.with_payload(substitute_random(payload, rng))
        }
        Some(_) | None => job.clone(),
    }
}

/// Replaces every `RANDINT` with its own draw from `[0, RANDOM_UPPER_BOUND)`.
pub(super) fn substitute_random<R: Rng>(payload: &str, rng: &mut R) -> String {
    let mut pieces = payload.split(RANDOM_TOKEN);
    let mut output = String::with_capacity(payload.len());
    if let Some(first) = pieces.next() {
        output.push_str(first);
    }
    for piece in pieces {
        let value = rng.gen_range(0..RANDOM_UPPER_BOUND);
        output.push_str(&value.to_string());
        output.push_str(piece);
    }
    output
}
