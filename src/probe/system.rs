//! sysinfo-backed probes for the real host.

use sysinfo::{Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tracing::debug;

use super::{CounterReader, MetricsProbe};
use crate::data::{BatteryState, ByteCounters, MetricsSnapshot};

/// Interface name prefixes counted by default: Wi-Fi/Ethernet (`en`, `wl`),
/// cellular (`pdp_ip`), and peer-to-peer (`awdl`). Loopback, tunnels, and
/// container bridges are ignored.
pub const DEFAULT_INTERFACE_PREFIXES: &[&str] = &["en", "wl", "pdp_ip", "awdl"];

/// Reads cumulative byte counters from the OS network-interface list.
///
/// Each read enumerates the interface list fresh and sums the counters of
/// every interface whose name starts with one of the configured prefixes.
#[derive(Debug)]
pub struct SystemCounters {
    prefixes: Vec<String>,
}

impl SystemCounters {
    /// Create a reader summing interfaces matching the given name prefixes.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    fn matches(&self, name: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

impl Default for SystemCounters {
    fn default() -> Self {
        Self::new(
            DEFAULT_INTERFACE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }
}

impl CounterReader for SystemCounters {
    fn read(&mut self) -> ByteCounters {
        let networks = Networks::new_with_refreshed_list();

        let mut total = ByteCounters::default();
        for (name, data) in networks.list() {
            if !self.matches(name) {
                continue;
            }
            total.bytes_sent = total.bytes_sent.saturating_add(data.total_transmitted());
            total.bytes_received = total.bytes_received.saturating_add(data.total_received());
        }
        total
    }
}

/// Samples CPU, memory, storage, and battery state from the host.
///
/// Holds a [`System`] across ticks: sysinfo derives CPU usage from the delta
/// between two refreshes, so the first snapshot reports 0 CPU and later ones
/// report usage over the polling interval.
#[derive(Debug)]
pub struct SystemMetrics {
    system: System,
}

impl SystemMetrics {
    pub fn new() -> Self {
        Self {
            system: System::new_with_specifics(
                RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
            ),
        }
    }

    fn cpu_fraction(&mut self) -> f64 {
        self.system.refresh_cpu_usage();
        f64::from(self.system.global_cpu_usage()) / 100.0
    }

    fn ram_fraction(&mut self) -> f64 {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return 0.0;
        }
        self.system.used_memory() as f64 / total as f64
    }

    fn storage_fraction(&self) -> f64 {
        let disks = Disks::new_with_refreshed_list();
        let Some(disk) = disks.list().first() else {
            debug!("no disks reported, treating storage as unused");
            return 0.0;
        };
        let total = disk.total_space();
        if total == 0 {
            return 0.0;
        }
        let used = total.saturating_sub(disk.available_space());
        used as f64 / total as f64
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProbe for SystemMetrics {
    fn snapshot(&mut self) -> MetricsSnapshot {
        let (battery_level, battery_state) = read_battery();
        MetricsSnapshot::from_raw(
            self.cpu_fraction(),
            self.ram_fraction(),
            self.storage_fraction(),
            battery_level,
            battery_state,
        )
    }
}

/// Read battery charge and state from `/sys/class/power_supply`.
///
/// Returns `(0.0, Unknown)` on hosts without a battery or when the sysfs
/// entries are unreadable.
#[cfg(target_os = "linux")]
fn read_battery() -> (f64, BatteryState) {
    use std::fs;
    use std::path::Path;

    let root = Path::new("/sys/class/power_supply");
    let Ok(entries) = fs::read_dir(root) else {
        return (0.0, BatteryState::Unknown);
    };

    for entry in entries.flatten() {
        let dir = entry.path();
        let is_battery = fs::read_to_string(dir.join("type"))
            .map(|t| t.trim() == "Battery")
            .unwrap_or(false);
        if !is_battery {
            continue;
        }

        let level = fs::read_to_string(dir.join("capacity"))
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .map(|pct| pct / 100.0)
            .unwrap_or(0.0);

        let state = match fs::read_to_string(dir.join("status")).as_deref().map(str::trim) {
            Ok("Charging") => BatteryState::Charging,
            Ok("Full") => BatteryState::Full,
            Ok("Discharging") | Ok("Not charging") => BatteryState::Unplugged,
            _ => BatteryState::Unknown,
        };

        return (level, state);
    }

    (0.0, BatteryState::Unknown)
}

#[cfg(not(target_os = "linux"))]
fn read_battery() -> (f64, BatteryState) {
    (0.0, BatteryState::Unknown)
}
