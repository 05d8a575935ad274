// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # devicewatch
//!
//! A device-monitoring sampler and CLI. It polls local system metrics
//! (CPU, RAM, storage, battery) and network byte counters, converts counter
//! deltas into throughput rates, and keeps a bounded rolling history of
//! samples for chart-style consumers.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MonitoringSession                    │
//! │  ┌─────────┐   ┌─────────────┐   ┌───────────────┐       │
//! │  │  probe  │──▶│ RateSampler │──▶│ SampleHistory │       │
//! │  │  (OS)   │   │  (deltas)   │   │ (ring buffer) │       │
//! │  └─────────┘   └─────────────┘   └───────┬───────┘       │
//! │                                          ▼               │
//! │                                    TickUpdate ──▶ display│
//! └──────────────────────────────────────────────────────────┘
//!                                           │
//!                                           ▼
//!                                     SummaryStore ──▶ widget
//! ```
//!
//! - **[`probe`]**: capability traits over OS introspection
//!   ([`CounterReader`], [`MetricsProbe`]) with sysinfo-backed and scripted
//!   implementations
//! - **[`data`]**: counter/sample/snapshot types, the rate sampler, and the
//!   bounded sample history
//! - **[`session`]**: the [`MonitoringSession`] owner driving one tick at a
//!   time and handing immutable [`TickUpdate`]s to observers
//! - **[`summary`]**: the persisted summary record shared with
//!   out-of-process consumers, with placeholder fallback
//!
//! ## Usage
//!
//! ```
//! use devicewatch::data::ByteCounters;
//! use devicewatch::probe::{ScriptedCounters, ScriptedMetrics};
//! use devicewatch::session::MonitoringSession;
//!
//! let counters = ScriptedCounters::new([
//!     ByteCounters::new(0, 0),
//!     ByteCounters::new(1024, 2048),
//! ]);
//! let mut session = MonitoringSession::new(
//!     Box::new(counters),
//!     Box::new(ScriptedMetrics::default()),
//!     40,
//! );
//!
//! let update = session.tick();
//! println!("total sent: {} bytes", update.totals.bytes_sent);
//! ```
//!
//! Against the real host, build the session over
//! [`SystemCounters`](probe::SystemCounters) and
//! [`SystemMetrics`](probe::SystemMetrics) instead.

pub mod config;
pub mod data;
pub mod probe;
pub mod session;
pub mod summary;

// Re-export main types for convenience
pub use config::MonitorConfig;
pub use data::{
    BatteryState, ByteCounters, MetricsSnapshot, RateSampler, SampleHistory, ThroughputSample,
};
pub use probe::{CounterReader, MetricsProbe};
pub use session::{MonitoringSession, TickUpdate};
pub use summary::{SummaryRecord, SummaryStore, SUMMARY_KEY};
