use crate::prelude::*;

use std::time::Duration;
use tokio::time::Instant;

/// Submissions observed during one throughput run.
#[derive(Debug, Clone, Getters)]
pub struct RunMetrics {
    /// Distinct hashes of accepted transactions.
    #[getset(get = "pub")]
    successful: IndexSet<TxHash>,

    #[getset(get = "pub")]
    failed: u64,

    #[getset(get = "pub")]
    started_at: Instant,

    #[getset(get = "pub")]
    stopped_at: Option<Instant>,
}

impl RunMetrics {
    pub fn start_at(started_at: Instant) -> Self {
        Self {
            successful: IndexSet::new(),
            failed: 0,
            started_at,
            stopped_at: None,
        }
    }

    pub fn start_now() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn is_frozen(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Returns whether the hash was new. Ignored once frozen.
    pub fn record_success(&mut self, hash: TxHash) -> bool {
        if self.is_frozen() {
            return false;
        }
        self.successful.insert(hash)
    }

    pub fn record_failure(&mut self) {
        if !self.is_frozen() {
            self.failed += 1;
        }
    }

    /// Stops accepting new observations. Freezing twice keeps the first stop time.
    pub fn freeze_at(&mut self, now: Instant) -> FinalMetrics {
        let stopped_at = *self.stopped_at.get_or_insert(now);
        self.summary_at(stopped_at)
    }

    /// Summary as if the run ended at `now`.
    pub fn summary_at(&self, now: Instant) -> FinalMetrics {
        let end = self.stopped_at.unwrap_or(now);
        FinalMetrics::new(
            self.successful.len(),
            self.failed,
            end.saturating_duration_since(self.started_at),
        )
    }
}

/// Throughput summary of a run.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct FinalMetrics {
    #[getset(get = "pub")]
    tps: f64,

    #[getset(get = "pub")]
    total_tx: usize,

    #[getset(get = "pub")]
    failed_tx: u64,

    #[getset(get = "pub")]
    duration: Duration,
}

impl FinalMetrics {
    /// `tps` is zero rather than NaN or infinite when nothing succeeded or no
    /// time elapsed.
    pub fn new(total_tx: usize, failed_tx: u64, duration: Duration) -> Self {
        let tps = if total_tx == 0 || duration.is_zero() {
            0.0
        } else {
            total_tx as f64 / duration.as_secs_f64()
        };
        Self {
            tps,
            total_tx,
            failed_tx,
            duration,
        }
    }
}

impl std::fmt::Display for FinalMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Duration: {:.2}s | Total TX: {} | TPS: {:.2}",
            self.duration.as_secs_f64(),
            self.total_tx,
            self.tps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throughput_is_successes_over_duration() {
        let metrics = FinalMetrics::new(500, 3, Duration::from_secs(4));
        assert_eq!(*metrics.tps(), 125.0);
        assert_eq!(
            metrics.to_string(),
            "Duration: 4.00s | Total TX: 500 | TPS: 125.00"
        );
    }

    #[test]
    fn nothing_sent_is_zero_not_nan() {
        let metrics = FinalMetrics::new(0, 0, Duration::from_millis(10));
        assert_eq!(*metrics.tps(), 0.0);
        let metrics = FinalMetrics::new(5, 0, Duration::ZERO);
        assert_eq!(*metrics.tps(), 0.0);
    }

    #[test]
    fn duplicate_hashes_count_once() {
        let mut run = RunMetrics::start_now();
        assert!(run.record_success(EthHash([1; 32])));
        assert!(!run.record_success(EthHash([1; 32])));
        assert!(run.record_success(EthHash([2; 32])));
        assert_eq!(run.successful().len(), 2);
    }

    #[test]
    fn frozen_run_ignores_late_results() {
        let start = Instant::now();
        let mut run = RunMetrics::start_at(start);
        run.record_success(EthHash([1; 32]));
        let stop = start + Duration::from_secs(2);
        let summary = run.freeze_at(stop);
        assert!(!run.record_success(EthHash([2; 32])));
        run.record_failure();
        assert_eq!(*summary.total_tx(), 1);
        assert_eq!(*summary.tps(), 0.5);
        assert_eq!(*run.failed(), 0);
        assert_eq!(run.freeze_at(stop + Duration::from_secs(9)), summary);
    }
}
