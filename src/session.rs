//! Monitoring session: one owner for the whole polling state.

use std::time::Instant;

use crate::data::{
    ByteCounters, MetricsSnapshot, RateSampler, SampleHistory, ThroughputSample,
};
use crate::probe::{CounterReader, MetricsProbe};

/// Everything one polling tick produces, handed to the display layer as an
/// immutable value.
///
/// `sample` is `None` on ticks that emitted nothing (first tick, duplicate
/// timestamp); `history` still reflects the current buffer either way. On a
/// responsiveness-sensitive host the owner would run the session tick on a
/// worker and publish these values through something like
/// `tokio::sync::watch`; the update itself carries no shared state.
#[derive(Debug, Clone)]
pub struct TickUpdate {
    /// Fresh system metrics, recomputed wholesale.
    pub metrics: MetricsSnapshot,
    /// The throughput sample this tick emitted, if any.
    pub sample: Option<ThroughputSample>,
    /// Cumulative byte totals from the current counter reading.
    pub totals: ByteCounters,
    /// Chronological copy of the sample history after this tick.
    pub history: Vec<ThroughputSample>,
}

/// Owns the probes, the rate-sampler state, and the sample history for one
/// monitoring session.
///
/// The session is single-owner by design: observers only ever see the
/// immutable [`TickUpdate`] values it returns, never the live buffers.
/// The tick path is infallible; probe failures surface as safe-default
/// readings, not errors.
///
/// # Example
///
/// ```
/// use devicewatch::data::ByteCounters;
/// use devicewatch::probe::{ScriptedCounters, ScriptedMetrics};
/// use devicewatch::session::MonitoringSession;
///
/// let counters = ScriptedCounters::new([
///     ByteCounters::new(1000, 2000),
///     ByteCounters::new(2024, 4096),
/// ]);
/// let mut session = MonitoringSession::new(
///     Box::new(counters),
///     Box::new(ScriptedMetrics::default()),
///     40,
/// );
///
/// let first = session.tick();
/// assert!(first.sample.is_none()); // no baseline yet
/// ```
#[derive(Debug)]
pub struct MonitoringSession {
    counters: Box<dyn CounterReader>,
    metrics: Box<dyn MetricsProbe>,
    sampler: RateSampler,
    history: SampleHistory,
}

impl MonitoringSession {
    /// Create a session over the given probes with a history bounded to
    /// `capacity` samples.
    pub fn new(
        counters: Box<dyn CounterReader>,
        metrics: Box<dyn MetricsProbe>,
        capacity: usize,
    ) -> Self {
        Self {
            counters,
            metrics,
            sampler: RateSampler::new(),
            history: SampleHistory::new(capacity),
        }
    }

    /// Run one polling tick against the real clock.
    pub fn tick(&mut self) -> TickUpdate {
        self.tick_at(Instant::now())
    }

    /// Run one polling tick as if it fired at `now`.
    ///
    /// This is the deterministic driver: tests hand in explicit instants
    /// instead of sleeping.
    pub fn tick_at(&mut self, now: Instant) -> TickUpdate {
        let totals = self.counters.read();
        let metrics = self.metrics.snapshot();

        let sample = self.sampler.tick(totals, now);
        if let Some(sample) = sample {
            self.history.append(sample);
        }

        TickUpdate {
            metrics,
            sample,
            totals,
            history: self.history.snapshot().copied().collect(),
        }
    }

    /// The live history buffer, for owners that want to render without
    /// waiting for the next tick.
    pub fn history(&self) -> &SampleHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::data::BatteryState;
    use crate::probe::{ScriptedCounters, ScriptedMetrics};

    fn session_with(
        readings: Vec<ByteCounters>,
        capacity: usize,
    ) -> MonitoringSession {
        MonitoringSession::new(
            Box::new(ScriptedCounters::new(readings)),
            Box::new(ScriptedMetrics::default()),
            capacity,
        )
    }

    #[test]
    fn test_first_tick_has_no_sample_but_reports_totals() {
        let mut session = session_with(vec![ByteCounters::new(1000, 2000)], 40);

        let update = session.tick_at(Instant::now());
        assert!(update.sample.is_none());
        assert_eq!(update.totals, ByteCounters::new(1000, 2000));
        assert!(update.history.is_empty());
    }

    #[test]
    fn test_end_to_end_rates() {
        let mut session = session_with(
            vec![ByteCounters::new(1000, 2000), ByteCounters::new(2024, 4048)],
            40,
        );
        let t0 = Instant::now();

        session.tick_at(t0);
        let update = session.tick_at(t0 + Duration::from_secs(1));

        let sample = update.sample.unwrap();
        assert_eq!(sample.upload_kbps, 1.0);
        assert_eq!(sample.download_kbps, 2.0);
        assert_eq!(update.history.len(), 1);
        assert_eq!(update.history[0], sample);
    }

    #[test]
    fn test_end_to_end_counter_reset() {
        let mut session = session_with(
            vec![ByteCounters::new(5000, 5000), ByteCounters::new(100, 5000)],
            40,
        );
        let t0 = Instant::now();

        session.tick_at(t0);
        let update = session.tick_at(t0 + Duration::from_secs(1));

        let sample = update.sample.unwrap();
        assert_eq!(sample.upload_kbps, 0.0);
        assert_eq!(sample.download_kbps, 0.0);
    }

    #[test]
    fn test_duplicate_tick_leaves_history_unchanged() {
        let mut session = session_with(
            vec![
                ByteCounters::new(0, 0),
                ByteCounters::new(1024, 1024),
                ByteCounters::new(4096, 4096),
            ],
            40,
        );
        let t0 = Instant::now();

        session.tick_at(t0);
        session.tick_at(t0 + Duration::from_secs(1));
        assert_eq!(session.history().len(), 1);

        // Same instant again: no sample, history length unchanged.
        let update = session.tick_at(t0 + Duration::from_secs(1));
        assert!(update.sample.is_none());
        assert_eq!(update.history.len(), 1);
    }

    #[test]
    fn test_history_stays_bounded_across_session() {
        let capacity = 4;
        let readings: Vec<ByteCounters> =
            (0..20u64).map(|i| ByteCounters::new(i * 1024, i * 2048)).collect();
        let mut session = session_with(readings, capacity);

        let t0 = Instant::now();
        for i in 0..20u64 {
            let update = session.tick_at(t0 + Duration::from_secs(i));
            assert!(update.history.len() <= capacity);
        }

        // Steady 1 KB/s up, 2 KB/s down once the baseline exists.
        let last = session.history().latest().unwrap();
        assert_eq!(last.upload_kbps, 1.0);
        assert_eq!(last.download_kbps, 2.0);
    }

    #[test]
    fn test_metrics_snapshot_passed_through_each_tick() {
        let scripted = MetricsSnapshot::from_raw(0.08, 0.67, 0.41, 0.85, BatteryState::Charging);
        let mut session = MonitoringSession::new(
            Box::new(ScriptedCounters::default()),
            Box::new(ScriptedMetrics::new([scripted])),
            40,
        );

        let update = session.tick_at(Instant::now());
        assert_eq!(update.metrics, scripted);
    }
}
