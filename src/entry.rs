use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::app::{Settings, run_benchmark};
use crate::args::BenchArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::logger::init_logging;

/// Parses the command line, layers the config file underneath it, and runs
/// the benchmark on a multi-threaded runtime.
///
/// # Errors
///
/// Returns an error for invalid arguments or config, startup failures, and
/// failed phases.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    init_logging(args.verbose, args.log_file.as_deref());
    let settings = Settings::from_args(&args);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(run_benchmark(&settings)) {
        Ok(report) => {
            info!(
                "Run complete: {}/{} measured requests succeeded",
                report.measurement.successful, report.measurement.requested
            );
            Ok(())
        }
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}

fn parse_args() -> AppResult<(BenchArgs, ArgMatches)> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
