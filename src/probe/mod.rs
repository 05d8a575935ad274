//! Capability interface over OS introspection.
//!
//! The sampling core never talks to the operating system directly; it goes
//! through these traits so the real sysinfo-backed probes can be swapped for
//! scripted ones in tests.

mod scripted;
mod system;

pub use scripted::{ScriptedCounters, ScriptedMetrics};
pub use system::{SystemCounters, SystemMetrics, DEFAULT_INTERFACE_PREFIXES};

use std::fmt::Debug;

use crate::data::{ByteCounters, MetricsSnapshot};

/// Reads cumulative sent/received byte counters from the host.
///
/// Implementations fail closed: on any OS query failure they return
/// `ByteCounters::default()` (all zeros) rather than an error. The polling
/// loop must never crash because one read went wrong, and a zero reading is
/// absorbed by the rate sampler's regression clamp.
pub trait CounterReader: Send + Debug {
    /// Take a fresh counter reading. No side effects beyond the read.
    fn read(&mut self) -> ByteCounters;
}

/// Samples CPU/RAM/storage/battery state from the host.
///
/// Implementations fail closed per accessor: a storage query that cannot
/// read filesystem attributes reports 0 usage, a missing battery reports
/// [`BatteryState::Unknown`](crate::data::BatteryState::Unknown), and so on.
/// The snapshot as a whole is always produced.
pub trait MetricsProbe: Send + Debug {
    /// Recompute the full snapshot. All fractions arrive clamped to [0, 1].
    fn snapshot(&mut self) -> MetricsSnapshot;
}
