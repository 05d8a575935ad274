//! Cumulative byte counters and derived throughput samples.

use serde::{Deserialize, Serialize};

/// Cumulative sent/received byte counters summed over the monitored
/// network interfaces.
///
/// Counters are monotonically non-decreasing while an interface is alive,
/// but may reset to zero when an interface is reinitialized. Consumers of
/// deltas must tolerate apparent regression (see [`ThroughputSample::between`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteCounters {
    /// Total bytes transmitted.
    pub bytes_sent: u64,
    /// Total bytes received.
    pub bytes_received: u64,
}

impl ByteCounters {
    /// Create a counter pair.
    pub fn new(bytes_sent: u64, bytes_received: u64) -> Self {
        Self {
            bytes_sent,
            bytes_received,
        }
    }
}

/// One measured upload/download rate at a point in time, in KB/s.
///
/// Samples are derived once per polling tick and immutable thereafter.
/// Both fields are always >= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThroughputSample {
    /// Upload rate in kilobytes per second.
    pub upload_kbps: f64,
    /// Download rate in kilobytes per second.
    pub download_kbps: f64,
}

impl ThroughputSample {
    /// Compute the throughput between two counter readings taken
    /// `elapsed_secs` apart.
    ///
    /// Deltas use saturating subtraction: a counter that regressed
    /// (interface reset) yields a 0 delta rather than wrapping to a huge
    /// unsigned value. Callers must guard `elapsed_secs > 0` themselves;
    /// see [`RateSampler`](crate::data::RateSampler) for the stateful
    /// wrapper that does.
    pub fn between(previous: ByteCounters, now: ByteCounters, elapsed_secs: f64) -> Self {
        let sent_delta = now.bytes_sent.saturating_sub(previous.bytes_sent);
        let received_delta = now.bytes_received.saturating_sub(previous.bytes_received);

        Self {
            upload_kbps: (sent_delta as f64 / elapsed_secs / 1024.0).max(0.0),
            download_kbps: (received_delta as f64 / elapsed_secs / 1024.0).max(0.0),
        }
    }
}
