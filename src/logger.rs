use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Logs go to stderr, or are appended to
/// `log_file` when given.
pub fn init_logging(verbose: bool, log_file: Option<&str>) {
    let file = log_file.and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Failed to open log file '{}': {}", path, err);
            None
        }
    });

    let result = file.map_or_else(
        || {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter(verbose))
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        },
        |file| {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter(verbose))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        },
    );

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// `PHASELOAD_LOG`, then `RUST_LOG`, then `debug`/`info` depending on `verbose`.
fn env_filter(verbose: bool) -> EnvFilter {
    std::env::var("PHASELOAD_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}

fn open_log_file(path: &str) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
