//! Data model for the sampling core.
//!
//! Counter readings come in from the probe layer, get turned into
//! throughput samples by the rate sampler, and accumulate in a bounded
//! history consumed by the display layer.

mod counters;
mod history;
mod sampler;
mod snapshot;

pub use counters::{ByteCounters, ThroughputSample};
pub use history::{SampleHistory, DEFAULT_HISTORY_CAPACITY};
pub use sampler::RateSampler;
pub use snapshot::{clamp_fraction, BatteryState, MetricsSnapshot};
