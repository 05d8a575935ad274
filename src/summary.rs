//! Persisted summary record for out-of-process consumers.
//!
//! The monitoring session periodically writes its latest metrics and rates
//! to a shared JSON file under a fixed key, where a widget-style consumer in
//! another process picks it up. Readers never fail: a missing or corrupt
//! record falls back to a fixed placeholder set.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::data::BatteryState;
use crate::session::TickUpdate;

/// Key the summary record is stored under inside the shared file.
pub const SUMMARY_KEY: &str = "widget_summary";

/// Derived summary: latest metrics, latest rates, and a wall-clock stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub cpu_fraction: f64,
    pub ram_fraction: f64,
    pub storage_fraction: f64,
    pub battery_level: f64,
    pub battery_state: BatteryState,
    /// Latest download rate in KB/s.
    pub download_kbps: f64,
    /// Latest upload rate in KB/s.
    pub upload_kbps: f64,
    /// Seconds since the unix epoch at write time.
    pub timestamp_secs: u64,
}

impl SummaryRecord {
    /// The record consumers display when nothing valid has been persisted.
    pub fn placeholder() -> Self {
        Self {
            cpu_fraction: 0.35,
            ram_fraction: 0.62,
            storage_fraction: 0.48,
            battery_level: 0.85,
            battery_state: BatteryState::Unplugged,
            download_kbps: 1250.0,
            upload_kbps: 450.0,
            timestamp_secs: 0,
        }
    }

    /// Build a record from the latest tick, stamped with the current time.
    ///
    /// Ticks without a fresh sample fall back to the newest history entry,
    /// or zero rates when the session has not sampled yet.
    pub fn from_tick(update: &TickUpdate) -> Self {
        let rates = update
            .sample
            .or_else(|| update.history.last().copied())
            .unwrap_or_default();

        Self {
            cpu_fraction: update.metrics.cpu_fraction,
            ram_fraction: update.metrics.ram_fraction,
            storage_fraction: update.metrics.storage_fraction,
            battery_level: update.metrics.battery_level,
            battery_state: update.metrics.battery_state,
            download_kbps: rates.download_kbps,
            upload_kbps: rates.upload_kbps,
            timestamp_secs: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }
}

/// File-backed key-value store shared with out-of-process consumers.
///
/// The file holds a JSON object; this store only ever touches the
/// [`SUMMARY_KEY`] entry, so unrelated keys written by other tools survive
/// a save.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    path: PathBuf,
}

impl SummaryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the shared file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `record` under [`SUMMARY_KEY`], preserving other entries.
    pub fn save(&self, record: &SummaryRecord) -> Result<()> {
        let root = match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str::<Value>(&content).unwrap_or_else(|e| {
                warn!("discarding corrupt summary file: {}", e);
                Value::Null
            }),
            Err(_) => Value::Null,
        };

        let mut map = match root {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        map.insert(SUMMARY_KEY.to_string(), serde_json::to_value(record)?);

        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing summary to {}", self.path.display()))?;
        Ok(())
    }

    /// Load the persisted record, falling back to
    /// [`SummaryRecord::placeholder`] when the file is missing, unreadable,
    /// or does not hold a valid record under the key.
    pub fn load(&self) -> SummaryRecord {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .and_then(|mut root| root.get_mut(SUMMARY_KEY).map(Value::take))
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_else(SummaryRecord::placeholder)
    }
}
