//! Monitor settings: defaults, optional config file, CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ::config::{Config, File};
use serde::Deserialize;

use crate::data::DEFAULT_HISTORY_CAPACITY;
use crate::probe::DEFAULT_INTERFACE_PREFIXES;

/// Settings for a monitoring run.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Polling period in seconds.
    pub interval_secs: u64,
    /// Sample history capacity.
    pub capacity: usize,
    /// Interface name prefixes counted toward the byte totals.
    pub interface_prefixes: Vec<String>,
    /// Shared file the summary record is written to, when set.
    pub summary_path: Option<PathBuf>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1,
            capacity: DEFAULT_HISTORY_CAPACITY,
            interface_prefixes: DEFAULT_INTERFACE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            summary_path: None,
        }
    }
}

impl MonitorConfig {
    /// Load settings, layering an optional config file over the defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("interval_secs", defaults.interval_secs)?
            .set_default("capacity", defaults.capacity as u64)?
            .set_default("interface_prefixes", defaults.interface_prefixes.clone())?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        let config: Self = builder
            .build()
            .context("reading monitor configuration")?
            .try_deserialize()
            .context("invalid monitor configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the sampler cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            bail!("interval_secs must be at least 1");
        }
        if self.capacity == 0 {
            bail!("capacity must be at least 1");
        }
        if self.interface_prefixes.is_empty() {
            bail!("interface_prefixes must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = MonitorConfig::load(None).unwrap();
        assert_eq!(config.interval_secs, 1);
        assert_eq!(config.capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.interface_prefixes, vec!["en", "wl", "pdp_ip", "awdl"]);
        assert!(config.summary_path.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
interval_secs = 2
capacity = 32
interface_prefixes = ["eth", "wl"]
summary_path = "/tmp/shared.json"
"#
        )
        .unwrap();

        let config = MonitorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.interval_secs, 2);
        assert_eq!(config.capacity, 32);
        assert_eq!(config.interface_prefixes, vec!["eth", "wl"]);
        assert_eq!(config.summary_path, Some(PathBuf::from("/tmp/shared.json")));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = MonitorConfig {
            interval_secs: 0,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_prefixes_rejected() {
        let config = MonitorConfig {
            interface_prefixes: Vec::new(),
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
