use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_HOST, DEFAULT_INVOCATIONS, DEFAULT_POOL_SIZE, DEFAULT_PORT};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{HarnessKind, OutputFormat, PositiveUsize, Protocol};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Phased HTTP load generator - templated request jobs, fixed worker pools, warmup and measurement throughput reports."
)]
pub struct BenchArgs {
    /// Target host
    #[arg(long = "url", short = 'u', default_value = DEFAULT_HOST)]
    pub host: String,

    /// Target port
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Scheme of the target endpoint (template variable PROT)
    #[arg(long, default_value = "http", ignore_case = true)]
    pub protocol: Protocol,

    /// Template file listing request lines (URL or URL|>PAYLOAD)
    #[arg(long = "file", short = 'f')]
    pub template: Option<String>,

    /// Number of concurrent workers
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Number of measured invocations
    #[arg(long = "invocations", short = 'n', default_value_t = DEFAULT_INVOCATIONS)]
    pub invocations: usize,

    /// Number of warmup invocations
    #[arg(long = "warmup", short = 'w', default_value_t = 0)]
    pub warmup: usize,

    /// Delay between requests of one worker (microseconds)
    #[arg(long = "delay", default_value_t = 0)]
    pub delay_us: u64,

    /// Append logs to this file instead of stderr
    #[arg(long = "logging")]
    pub log_file: Option<String>,

    /// Print verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Build a separate HTTP client for every worker
    #[arg(long = "multi-client")]
    pub multi_client: bool,

    /// Harness signal backend for run and phase boundaries
    #[arg(long = "harness", default_value = "none", ignore_case = true)]
    pub harness: HarnessKind,

    /// Shortcut for --harness log
    #[arg(long = "m5ops")]
    pub m5ops: bool,

    /// Emit a harness progress signal every N measured results (0 disables)
    #[arg(long = "harness-interval", alias = "m5iv", default_value_t = 0)]
    pub harness_interval: usize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Idle and in-flight connections per HTTP client
    #[arg(
        long = "pool-size",
        default_value_t = DEFAULT_POOL_SIZE,
        value_parser = parse_pool_size
    )]
    pub pool_size: usize,

    /// Seed for job generation (random when unset)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Count non-200 responses as failures
    #[arg(long = "strict-status")]
    pub strict_status: bool,

    /// Report format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,
}

fn parse_pool_size(s: &str) -> crate::error::AppResult<usize> {
    parse_positive_usize(s).map(PositiveUsize::get)
}
