use std::path::PathBuf;
use std::time::Duration;

use crate::args::{BenchArgs, HarnessKind, OutputFormat, PositiveUsize};
use crate::error::ValidationError;
use crate::http::{StatusPolicy, TransportConfig};
use crate::jobs::Endpoint;

/// Resolved run configuration, built once from CLI and config file values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Endpoint,
    pub template: Option<PathBuf>,
    pub workers: PositiveUsize,
    pub warmup: usize,
    pub invocations: usize,
    pub delay: Duration,
    pub harness: HarnessKind,
    pub harness_interval: usize,
    pub transport: TransportConfig,
    pub multi_client: bool,
    pub seed: Option<u64>,
    pub status_policy: StatusPolicy,
    pub output_format: OutputFormat,
}

impl Settings {
    #[must_use]
    pub fn from_args(args: &BenchArgs) -> Self {
        let harness = if args.m5ops {
            HarnessKind::Log
        } else {
            args.harness
        };
        let status_policy = if args.strict_status {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Lenient
        };

        Self {
            endpoint: Endpoint {
                protocol: args.protocol,
                host: args.host.clone(),
                port: args.port,
            },
            template: args.template.as_ref().map(PathBuf::from),
            workers: args.concurrency,
            warmup: args.warmup,
            invocations: args.invocations,
            delay: Duration::from_micros(args.delay_us),
            harness,
            harness_interval: args.harness_interval,
            transport: TransportConfig {
                timeout: args.request_timeout,
                pool_size: args.pool_size,
            },
            multi_client: args.multi_client,
            seed: args.seed,
            status_policy,
            output_format: args.output_format,
        }
    }

    /// Checks that both phase sizes split evenly across the workers.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first count that is not a multiple of the
    /// worker count.
    pub fn validate_counts(&self) -> Result<(), ValidationError> {
        let workers = self.workers.get();
        for jobs in [self.warmup, self.invocations] {
            if jobs.checked_rem(workers) != Some(0) {
                return Err(ValidationError::JobsNotDivisible { jobs, workers });
            }
        }
        Ok(())
    }
}
