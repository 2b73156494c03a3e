//! TOML configuration shared by the binaries.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::supplier::PreloadSupplier;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    /// Regions to preload; empty means every region file in `data_dir`
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    pub data_dir: PathBuf,
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub code: String,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Config for a data directory given on the command line
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        Self {
            global: GlobalConfig {
                data_dir,
                listen: default_listen(),
            },
            regions: Vec::new(),
        }
    }

    pub fn region_codes(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.code.clone()).collect()
    }

    /// Build a supplier with the configured regions loaded.
    pub fn load_supplier(&self) -> Result<PreloadSupplier> {
        let mut supplier = PreloadSupplier::new();
        supplier
            .load_from_dir(&self.global.data_dir, &self.region_codes())
            .with_context(|| {
                format!(
                    "Failed to load region data from {}",
                    self.global.data_dir.display()
                )
            })?;
        Ok(supplier)
    }
}
