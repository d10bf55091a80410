use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, DispatchError, ValidationError};
use crate::harness::HarnessSignal;
use crate::jobs::Job;
use crate::metrics::{Outcome, Phase};

use super::invoke::{StatusPolicy, invoke};
use super::transport::{Transport, TransportPool};

/// Progress is logged every `total / PROGRESS_STEPS` results.
const PROGRESS_STEPS: usize = 10;

/// Runs job sequences on a fixed number of concurrent workers.
pub struct Dispatcher<T> {
    transports: TransportPool<T>,
    workers: PositiveUsize,
    delay: Option<Duration>,
    status_policy: StatusPolicy,
    harness: Arc<dyn HarnessSignal>,
    harness_interval: usize,
}

impl<T> Dispatcher<T>
where
    T: Transport + 'static,
{
    #[must_use]
    pub fn new(
        transports: TransportPool<T>,
        workers: PositiveUsize,
        harness: Arc<dyn HarnessSignal>,
    ) -> Self {
        Self {
            transports,
            workers,
            delay: None,
            status_policy: StatusPolicy::default(),
            harness,
            harness_interval: 0,
        }
    }

    /// Pause each worker takes after every request. Zero disables it.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = (!delay.is_zero()).then_some(delay);
        self
    }

    #[must_use]
    pub const fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Signal measurement progress every `interval` results. Zero disables it.
    #[must_use]
    pub const fn with_harness_interval(mut self, interval: usize) -> Self {
        self.harness_interval = interval;
        self
    }

    /// Executes every job exactly once and returns all outcomes, in arrival order.
    ///
    /// # Errors
    ///
    /// Fails before issuing any request when the job count is not a multiple
    /// of the worker count or a worker has no transport, and afterwards when a
    /// worker stops before delivering all of its results.
    pub async fn dispatch(&self, jobs: Vec<Job>, phase: Phase) -> AppResult<Vec<Outcome>> {
        let total = jobs.len();
        let slices = partition(total, self.workers.get())?;
        if total == 0 {
            return Ok(Vec::new());
        }

        let transports = slices
            .iter()
            .enumerate()
            .map(|(worker, _)| {
                self.transports.for_worker(worker).ok_or_else(|| {
                    AppError::dispatch(DispatchError::MissingTransport { worker })
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let jobs: Arc<[Job]> = jobs.into();
        let (results_tx, mut results_rx) = mpsc::channel::<Outcome>(total);
        let mut handles = Vec::with_capacity(slices.len());

        for (range, transport) in slices.into_iter().zip(transports) {
            let jobs = Arc::clone(&jobs);
            let results_tx = results_tx.clone();
            let policy = self.status_policy;
            let delay = self.delay;
            handles.push(tokio::spawn(async move {
                let slice = jobs.get(range).unwrap_or_default();
                run_worker(transport.as_ref(), slice, policy, delay, &results_tx).await;
            }));
        }
        drop(results_tx);

        let progress_step = total
            .checked_div(PROGRESS_STEPS)
            .filter(|_| total > PROGRESS_STEPS);
        let harness_step = match phase {
            Phase::Measurement if self.harness_interval > 0 => Some(self.harness_interval),
            Phase::Measurement | Phase::Warmup => None,
        };

        let mut outcomes = Vec::with_capacity(total);
        while outcomes.len() < total {
            let Some(outcome) = results_rx.recv().await else {
                break;
            };
            outcomes.push(outcome);
            let received = outcomes.len();
            if is_multiple(received, progress_step) {
                info!("Progress: {}/{}", received, total);
            }
            if is_multiple(received, harness_step) {
                self.harness.progress(received);
            }
        }

        for handle in handles {
            handle
                .await
                .map_err(|err| AppError::dispatch(DispatchError::WorkerJoin { source: err }))?;
        }

        if outcomes.len() < total {
            return Err(AppError::dispatch(DispatchError::ResultsMissing {
                received: outcomes.len(),
                expected: total,
            }));
        }
        debug!("Collected {} results for {:?}", total, phase);
        Ok(outcomes)
    }
}

async fn run_worker<T>(
    transport: &T,
    jobs: &[Job],
    policy: StatusPolicy,
    delay: Option<Duration>,
    results_tx: &mpsc::Sender<Outcome>,
) where
    T: Transport + ?Sized,
{
    let mut remaining = jobs.iter().peekable();
    while let Some(job) = remaining.next() {
        let outcome = invoke(transport, job, policy).await;
        if results_tx.send(outcome).await.is_err() {
            break;
        }
        // Skip the pause after the last job.
        if let Some(delay) = delay
            && remaining.peek().is_some()
        {
            sleep(delay).await;
        }
    }
}

/// Splits `total` jobs into `workers` contiguous slices of equal length.
///
/// # Errors
///
/// Returns an error when `total` is not a multiple of `workers`.
pub fn partition(total: usize, workers: usize) -> Result<Vec<Range<usize>>, ValidationError> {
    let not_divisible = || ValidationError::JobsNotDivisible {
        jobs: total,
        workers,
    };
    if total.checked_rem(workers).ok_or_else(not_divisible)? != 0 {
        return Err(not_divisible());
    }
    let step = total.checked_div(workers).ok_or_else(not_divisible)?;

    Ok((0..workers)
        .map(|worker| {
            let start = worker.saturating_mul(step);
            start..start.saturating_add(step)
        })
        .collect())
}

fn is_multiple(count: usize, step: Option<usize>) -> bool {
    step.and_then(|step| count.checked_rem(step))
        .is_some_and(|rem| rem == 0)
}
