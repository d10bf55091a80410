use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::info;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::harness::{HarnessSignal, RUN_STARTED_CODE, WARMUP_COMPLETE_CODE, build_harness};
use crate::http::{Dispatcher, Transport, TransportPool};
use crate::jobs::{Job, JobGenerator, JobSource, JobTemplate};
use crate::metrics::{Phase, PhaseStats, report_json, report_lines};

use super::settings::Settings;

/// Pause between the warmup report and the start of measurement.
pub const PHASE_PAUSE: Duration = Duration::from_secs(1);

/// Statistics of both phases of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub warmup: PhaseStats,
    pub measurement: PhaseStats,
}

/// Runs warmup and measurement against real HTTP transports.
///
/// # Errors
///
/// Returns an error when the HTTP clients cannot be built, the template is
/// invalid, a phase size does not divide across the workers, or dispatch fails.
pub async fn run_benchmark(settings: &Settings) -> AppResult<RunReport> {
    settings.validate_counts()?;
    let transports = TransportPool::build_http(
        settings.transport,
        settings.multi_client,
        settings.workers.get(),
    )?;
    let harness = build_harness(settings.harness);
    run_phases(settings, transports, harness, PHASE_PAUSE).await
}

/// Drives both phases over the given transports and harness backend.
///
/// Both job sequences are generated and validated before the first request.
///
/// # Errors
///
/// Returns an error when the template is invalid, a phase size does not divide
/// across the workers, or dispatch fails.
pub async fn run_phases<T>(
    settings: &Settings,
    transports: TransportPool<T>,
    harness: Arc<dyn HarnessSignal>,
    pause: Duration,
) -> AppResult<RunReport>
where
    T: Transport + 'static,
{
    settings.validate_counts()?;
    let mut generator = JobGenerator::new(job_source(settings)?, settings.seed);
    let warmup_jobs = generator.generate(settings.warmup);
    let measurement_jobs = generator.generate(settings.invocations);

    info!(
        "Target {} - warmup {} / measure {} requests on {} workers",
        target_label(settings),
        settings.warmup,
        settings.invocations,
        settings.workers.get()
    );

    let dispatcher = Dispatcher::new(transports, settings.workers, Arc::clone(&harness))
        .with_delay(settings.delay)
        .with_status_policy(settings.status_policy)
        .with_harness_interval(settings.harness_interval);

    harness.run_started(RUN_STARTED_CODE);
    let warmup = run_phase(&dispatcher, warmup_jobs, Phase::Warmup, settings.output_format).await?;

    sleep(pause).await;
    harness.warmup_complete(WARMUP_COMPLETE_CODE);

    let measurement = run_phase(
        &dispatcher,
        measurement_jobs,
        Phase::Measurement,
        settings.output_format,
    )
    .await?;

    Ok(RunReport {
        warmup,
        measurement,
    })
}

async fn run_phase<T>(
    dispatcher: &Dispatcher<T>,
    jobs: Vec<Job>,
    phase: Phase,
    format: OutputFormat,
) -> AppResult<PhaseStats>
where
    T: Transport + 'static,
{
    let requested = jobs.len();
    info!("{} phase: {} requests", phase.label(), requested);

    let started = Instant::now();
    let outcomes = dispatcher.dispatch(jobs, phase).await?;
    let stats = PhaseStats::aggregate(requested, &outcomes, started.elapsed());

    print_report(phase, &stats, format)?;
    Ok(stats)
}

fn job_source(settings: &Settings) -> AppResult<JobSource> {
    match settings.template.as_deref() {
        Some(path) => {
            let template = JobTemplate::load(path, &settings.endpoint.template_vars())?;
            info!(
                "Loaded {} request lines from {}",
                template.candidates().len(),
                path.display()
            );
            Ok(JobSource::Template(template))
        }
        None => Ok(JobSource::Default(Job::read(settings.endpoint.url()?))),
    }
}

fn target_label(settings: &Settings) -> String {
    settings.template.as_deref().map_or_else(
        || settings.endpoint.base(),
        |path| format!("{} ({})", settings.endpoint.base(), path.display()),
    )
}

fn print_report(phase: Phase, stats: &PhaseStats, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in report_lines(phase, stats) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&report_json(phase, stats))?);
        }
    }
    Ok(())
}
