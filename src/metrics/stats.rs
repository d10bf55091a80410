use std::time::Duration;

use super::types::Outcome;

/// Microseconds per second.
const US_PER_SEC: u128 = 1_000_000;
/// Fixed-point scale of derived values (six decimal places).
pub(crate) const SCALE: u128 = 1_000_000;
/// Bytes per reported megabyte.
const BYTES_PER_MB: u128 = 1024 * 1024;

/// Aggregate of one phase. Rates are derived on demand and stay integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStats {
    pub requested: usize,
    pub successful: u64,
    pub total_bytes: u64,
    pub elapsed: Duration,
}

impl PhaseStats {
    /// Counts successes and sums their body bytes. Order of `outcomes` is irrelevant.
    #[must_use]
    pub fn aggregate(requested: usize, outcomes: &[Outcome], elapsed: Duration) -> Self {
        let (successful, total_bytes) = outcomes
            .iter()
            .filter_map(|outcome| outcome.bytes())
            .fold((0_u64, 0_u64), |(count, sum), bytes| {
                (count.saturating_add(1), sum.saturating_add(bytes))
            });

        Self {
            requested,
            successful,
            total_bytes,
            elapsed,
        }
    }

    /// Successful requests per second, scaled by [`SCALE`].
    #[must_use]
    pub fn transaction_rate_scaled(&self) -> Option<u128> {
        per_second_scaled(u128::from(self.successful), self.elapsed)
    }

    /// Body bytes per second; `None` when the phase took no measurable time.
    #[must_use]
    pub fn throughput_bytes_per_sec(&self) -> Option<u128> {
        u128::from(self.total_bytes)
            .saturating_mul(US_PER_SEC)
            .checked_div(self.elapsed.as_micros())
    }

    /// Megabytes per second, scaled by [`SCALE`].
    #[must_use]
    pub fn throughput_mb_scaled(&self) -> Option<u128> {
        per_second_scaled(u128::from(self.total_bytes), self.elapsed)
            .map(|scaled| scaled / BYTES_PER_MB)
    }

    /// Megabytes transferred, scaled by [`SCALE`].
    #[must_use]
    pub fn transferred_mb_scaled(&self) -> u128 {
        u128::from(self.total_bytes).saturating_mul(SCALE) / BYTES_PER_MB
    }
}

// Zero elapsed microseconds yields `None` rather than an infinite rate.
fn per_second_scaled(value: u128, elapsed: Duration) -> Option<u128> {
    value
        .saturating_mul(US_PER_SEC)
        .saturating_mul(SCALE)
        .checked_div(elapsed.as_micros())
}
