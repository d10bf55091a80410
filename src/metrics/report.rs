use serde_json::{Number, Value, json};

use super::stats::{PhaseStats, SCALE};
use super::types::Phase;

/// Text block printed after a phase.
#[must_use]
pub fn report_lines(phase: Phase, stats: &PhaseStats) -> Vec<String> {
    vec![
        format!(
            "{} requests:\t {}/{}",
            phase.label(),
            stats.successful,
            stats.requested
        ),
        format!(
            "Data transferred:\t {} MB",
            format_scaled(stats.transferred_mb_scaled())
        ),
        format!(
            "Time elapsed:\t\t {} sec.",
            format_scaled(stats.elapsed.as_micros())
        ),
        format!(
            "Transaction rate:\t {} trans/s",
            format_optional(stats.transaction_rate_scaled())
        ),
        format!(
            "Throughput:\t\t {} MB/s",
            format_optional(stats.throughput_mb_scaled())
        ),
    ]
}

/// Machine-readable form of the same report. Undefined rates become `null`.
#[must_use]
pub fn report_json(phase: Phase, stats: &PhaseStats) -> Value {
    json!({
        "phase": phase,
        "requested": stats.requested,
        "successful": stats.successful,
        "total_bytes": stats.total_bytes,
        "elapsed_us": u64::try_from(stats.elapsed.as_micros()).unwrap_or(u64::MAX),
        "transferred_mb": scaled_number(Some(stats.transferred_mb_scaled())),
        "transaction_rate": scaled_number(stats.transaction_rate_scaled()),
        "throughput_bytes_per_sec": stats
            .throughput_bytes_per_sec()
            .and_then(|value| u64::try_from(value).ok()),
        "throughput_mb_per_sec": scaled_number(stats.throughput_mb_scaled()),
    })
}

pub(super) fn format_scaled(value: u128) -> String {
    format!("{}.{:06}", value / SCALE, value % SCALE)
}

fn format_optional(value: Option<u128>) -> String {
    value.map_or_else(|| "n/a".to_owned(), format_scaled)
}

fn scaled_number(value: Option<u128>) -> Value {
    value
        .and_then(|scaled| format_scaled(scaled).parse::<Number>().ok())
        .map_or(Value::Null, Value::Number)
}
