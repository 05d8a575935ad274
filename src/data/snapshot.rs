//! Wholesale per-tick system metrics snapshot.

use serde::{Deserialize, Serialize};

/// Charging state as reported by the host's power source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryState {
    /// Plugged in and charging.
    Charging,
    /// Plugged in, battery at capacity.
    Full,
    /// Running on battery.
    Unplugged,
    /// No battery present or the power API was unavailable.
    #[default]
    Unknown,
}

/// Point-in-time usage fractions for the monitored device.
///
/// Recomputed wholesale every polling tick; there is no partial update.
/// All fields are clamped into their documented ranges at construction, so
/// out-of-range or NaN readings from the OS never escape this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// CPU usage in [0, 1].
    pub cpu_fraction: f64,
    /// Physical memory usage in [0, 1].
    pub ram_fraction: f64,
    /// Filesystem usage in [0, 1].
    pub storage_fraction: f64,
    /// Battery charge in [0, 1].
    pub battery_level: f64,
    /// Charging state.
    pub battery_state: BatteryState,
}

impl MetricsSnapshot {
    /// Build a snapshot from raw readings, clamping every fraction.
    pub fn from_raw(
        cpu_fraction: f64,
        ram_fraction: f64,
        storage_fraction: f64,
        battery_level: f64,
        battery_state: BatteryState,
    ) -> Self {
        Self {
            cpu_fraction: clamp_fraction(cpu_fraction),
            ram_fraction: clamp_fraction(ram_fraction),
            storage_fraction: clamp_fraction(storage_fraction),
            battery_level: clamp_fraction(battery_level),
            battery_state,
        }
    }
}

/// Clamp a raw reading into [0, 1]. NaN maps to 0.
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
