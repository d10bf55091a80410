use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Flags given on the command
/// line keep their value.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(args: &mut BenchArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_cli(matches, "host")
        && let Some(host) = config.host.clone()
    {
        args.host = host;
    }

    if !is_cli(matches, "port")
        && let Some(port) = config.port
    {
        args.port = port;
    }

    if !is_cli(matches, "protocol")
        && let Some(protocol) = config.protocol
    {
        args.protocol = protocol;
    }

    if !is_cli(matches, "template")
        && let Some(template) = config.template.clone()
    {
        args.template = Some(template);
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(concurrency, "concurrency")?;
    }

    if !is_cli(matches, "invocations")
        && let Some(invocations) = config.invocations
    {
        args.invocations = invocations;
    }

    if !is_cli(matches, "warmup")
        && let Some(warmup) = config.warmup
    {
        args.warmup = warmup;
    }

    if !is_cli(matches, "delay_us")
        && let Some(delay_us) = config.delay_us
    {
        args.delay_us = delay_us;
    }

    if !is_cli(matches, "log_file")
        && let Some(path) = config.log_file.clone()
    {
        args.log_file = Some(path);
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "multi_client")
        && let Some(multi_client) = config.multi_client
    {
        args.multi_client = multi_client;
    }

    if !is_cli(matches, "harness")
        && !is_cli(matches, "m5ops")
        && let Some(harness) = config.harness
    {
        args.harness = harness;
    }

    if !is_cli(matches, "harness_interval")
        && let Some(interval) = config.harness_interval
    {
        args.harness_interval = interval;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "timeout",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "pool_size")
        && let Some(pool_size) = config.pool_size
    {
        args.pool_size = ensure_positive_usize(pool_size, "pool_size")?.get();
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "strict_status")
        && let Some(strict) = config.strict_status
    {
        args.strict_status = strict;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field,
            source: err,
        })
    })
}
