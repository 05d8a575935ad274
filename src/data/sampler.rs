//! Stateful rate sampling over cumulative counter readings.

use std::time::Instant;

use super::counters::{ByteCounters, ThroughputSample};

/// Turns a stream of cumulative counter readings into throughput samples.
///
/// The sampler carries the previous reading and its timestamp between ticks.
/// That state is updated unconditionally on every tick, whether or not a
/// sample was emitted, so a skipped tick never causes the next one to span
/// two intervals.
///
/// Ticks that emit nothing:
/// - the first tick (no baseline yet; computing against zero would report an
///   artificial startup spike)
/// - ticks with non-positive elapsed time (duplicate tick or clock anomaly)
#[derive(Debug, Default)]
pub struct RateSampler {
    last: Option<(ByteCounters, Instant)>,
}

impl RateSampler {
    /// Create a sampler with no baseline reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a fresh reading taken at `at`, returning a sample when one can
    /// be computed.
    pub fn tick(&mut self, now: ByteCounters, at: Instant) -> Option<ThroughputSample> {
        let previous = self.last.replace((now, at));
        let (prev_counters, prev_at) = previous?;

        let elapsed = at.saturating_duration_since(prev_at).as_secs_f64();
        if elapsed <= 0.0 {
            return None;
        }

        Some(ThroughputSample::between(prev_counters, now, elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_emits_nothing() {
        let mut sampler = RateSampler::new();
        let sample = sampler.tick(ByteCounters::new(1000, 2000), Instant::now());
        assert!(sample.is_none());
    }

    #[test]
    fn test_second_tick_emits_sample() {
        let mut sampler = RateSampler::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);

        assert!(sampler.tick(ByteCounters::new(1000, 2000), t0).is_none());
        let sample = sampler.tick(ByteCounters::new(2024, 4048), t1).unwrap();
        assert_eq!(sample.upload_kbps, 1.0);
        assert_eq!(sample.download_kbps, 2.0);
    }

    #[test]
    fn test_duplicate_timestamp_skips_tick() {
        let mut sampler = RateSampler::new();
        let t0 = Instant::now();

        sampler.tick(ByteCounters::new(1000, 1000), t0);
        assert!(sampler.tick(ByteCounters::new(9000, 9000), t0).is_none());
    }

    #[test]
    fn test_state_advances_even_when_skipped() {
        let mut sampler = RateSampler::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);

        sampler.tick(ByteCounters::new(0, 0), t0);
        // Duplicate tick with a newer reading: emits nothing but becomes
        // the new baseline.
        assert!(sampler.tick(ByteCounters::new(1024, 1024), t0).is_none());

        let sample = sampler.tick(ByteCounters::new(2048, 3072), t1).unwrap();
        assert_eq!(sample.upload_kbps, 1.0);
        assert_eq!(sample.download_kbps, 2.0);
    }

    #[test]
    fn test_counter_reset_yields_zero_rates() {
        let mut sampler = RateSampler::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);

        sampler.tick(ByteCounters::new(5000, 5000), t0);
        let sample = sampler.tick(ByteCounters::new(100, 5000), t1).unwrap();
        assert_eq!(sample.upload_kbps, 0.0);
        assert_eq!(sample.download_kbps, 0.0);
    }
}
