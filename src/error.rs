//! Errors raised while loading region data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionDataError {
    #[error("failed to read region data {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk region data directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("malformed region data for {region}: {source}")]
    Json {
        region: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid region code {0:?}")]
    InvalidRegionCode(String),

    #[error("region data file name must be <REGION>.json or <REGION>.json.gz: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("region data for {region} has no root rule {key}")]
    MissingRoot { region: String, key: String },

    #[error("rule {key} does not belong to region {region}")]
    ForeignRule { region: String, key: String },

    #[error("rule {parent} lists sub key {sub_key} with no rule of its own")]
    DanglingSubKey { parent: String, sub_key: String },
}

pub type Result<T> = std::result::Result<T, RegionDataError>;
