//! Scripted probes for deterministic tests.

use std::collections::VecDeque;

use super::{CounterReader, MetricsProbe};
use crate::data::{ByteCounters, MetricsSnapshot};

/// A counter reader that replays a scripted sequence of readings.
///
/// Once the script is exhausted the last reading repeats, matching a quiet
/// interface whose counters stop moving.
#[derive(Debug, Default)]
pub struct ScriptedCounters {
    script: VecDeque<ByteCounters>,
    last: ByteCounters,
}

impl ScriptedCounters {
    pub fn new(readings: impl IntoIterator<Item = ByteCounters>) -> Self {
        Self {
            script: readings.into_iter().collect(),
            last: ByteCounters::default(),
        }
    }
}

impl CounterReader for ScriptedCounters {
    fn read(&mut self) -> ByteCounters {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// A metrics probe that replays a scripted sequence of snapshots.
///
/// Scripts are built by the caller, typically via
/// [`MetricsSnapshot::from_raw`] so out-of-range readings arrive clamped the
/// same way the real probe's do.
#[derive(Debug, Default)]
pub struct ScriptedMetrics {
    script: VecDeque<MetricsSnapshot>,
    last: MetricsSnapshot,
}

impl ScriptedMetrics {
    pub fn new(snapshots: impl IntoIterator<Item = MetricsSnapshot>) -> Self {
        Self {
            script: snapshots.into_iter().collect(),
            last: MetricsSnapshot::default(),
        }
    }
}

impl MetricsProbe for ScriptedMetrics {
    fn snapshot(&mut self) -> MetricsSnapshot {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BatteryState;

    #[test]
    fn test_scripted_counters_replay_then_repeat() {
        let mut reader = ScriptedCounters::new([
            ByteCounters::new(100, 200),
            ByteCounters::new(300, 400),
        ]);

        assert_eq!(reader.read(), ByteCounters::new(100, 200));
        assert_eq!(reader.read(), ByteCounters::new(300, 400));
        assert_eq!(reader.read(), ByteCounters::new(300, 400));
    }

    #[test]
    fn test_scripted_metrics_replay() {
        let scripted =
            MetricsSnapshot::from_raw(0.5, 0.6, 0.7, 0.8, BatteryState::Charging);
        let mut probe = ScriptedMetrics::new([scripted]);

        assert_eq!(probe.snapshot(), scripted);
        assert_eq!(probe.snapshot(), scripted);
    }

    #[test]
    fn test_empty_script_yields_defaults() {
        let mut reader = ScriptedCounters::default();
        assert_eq!(reader.read(), ByteCounters::default());

        let mut probe = ScriptedMetrics::default();
        assert_eq!(probe.snapshot(), MetricsSnapshot::default());
    }
}
