//! In-memory supplier filled from region data files.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::RuleSupplier;
use crate::error::{RegionDataError, Result};
use crate::models::{region_key_string, LookupKey, RawRule, Rule};

/// Marks language-specific copies of a rule, e.g. "data/CA--fr".
const LANGUAGE_KEY_MARKER: &str = "--";

/// Supplier holding every rule of the loaded regions in memory.
#[derive(Debug, Default)]
pub struct PreloadSupplier {
    /// Lookup key string -> rule
    rules: HashMap<String, Rule>,
    loaded: BTreeSet<String>,
}

impl PreloadSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the rules of one region from a region data JSON document.
    ///
    /// The document maps lookup key strings to rules. Loading is all or
    /// nothing: the region is only marked loaded when every rule belongs to it
    /// and every listed sub key has a rule. Loading a region again replaces
    /// all of its rules. Returns the number of rules added.
    pub fn load_region_json(&mut self, region_code: &str, json: &str) -> Result<usize> {
        validate_region_code(region_code)?;

        let raw: BTreeMap<String, RawRule> =
            serde_json::from_str(json).map_err(|source| RegionDataError::Json {
                region: region_code.to_string(),
                source,
            })?;

        let root_key = region_key_string(region_code);
        let mut rules = HashMap::with_capacity(raw.len());

        for (id, raw_rule) in raw {
            if id.contains(LANGUAGE_KEY_MARKER) {
                debug!("Skipping language variant {}", id);
                continue;
            }
            if !belongs_to_region(&id, &root_key) {
                return Err(RegionDataError::ForeignRule {
                    region: region_code.to_string(),
                    key: id,
                });
            }
            let rule = Rule::from_raw(&id, raw_rule);
            rules.insert(id, rule);
        }

        if !rules.contains_key(&root_key) {
            return Err(RegionDataError::MissingRoot {
                region: region_code.to_string(),
                key: root_key,
            });
        }

        for rule in rules.values() {
            for sub_key in &rule.sub_keys {
                let child_id = format!("{}/{}", rule.id, sub_key);
                if !rules.contains_key(&child_id) {
                    return Err(RegionDataError::DanglingSubKey {
                        parent: rule.id.clone(),
                        sub_key: sub_key.clone(),
                    });
                }
            }
        }

        let count = rules.len();
        // A reload replaces the region, dropping rules the new data no longer has
        self.rules.retain(|id, _| !belongs_to_region(id, &root_key));
        self.rules.extend(rules);
        self.loaded.insert(region_code.to_string());

        debug!("Loaded {} rules for region {}", count, region_code);
        Ok(count)
    }

    /// Load a `<REGION>.json` or gzipped `<REGION>.json.gz` file.
    pub fn load_region_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let region_code = region_code_from_path(path)
            .ok_or_else(|| RegionDataError::InvalidFileName(path.to_path_buf()))?;

        let io_err = |source| RegionDataError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let mut reader: Box<dyn Read> = if is_gzip(path) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(io_err)?;

        self.load_region_json(&region_code, &content)
    }

    /// Load region data files from a directory, recursively.
    ///
    /// When `regions` is non-empty only those region codes are loaded.
    /// Returns the number of regions loaded.
    pub fn load_from_dir<P: AsRef<Path>>(&mut self, dir: P, regions: &[String]) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.exists() {
            warn!("Region data directory not found: {}", dir.display());
            return Ok(0);
        }

        info!("Loading region data from {}", dir.display());

        let mut loaded = 0;
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(region_code) = region_code_from_path(path) else {
                continue;
            };

            if !regions.is_empty() && !regions.iter().any(|r| *r == region_code) {
                continue;
            }

            let count = self.load_region_file(path)?;
            debug!("{}: {} rules", path.display(), count);
            loaded += 1;
        }

        for region in regions {
            if !self.is_loaded(region) {
                warn!("No region data found for {}", region);
            }
        }

        info!(
            "Loaded {} regions ({} rules)",
            self.loaded.len(),
            self.rules.len()
        );
        Ok(loaded)
    }

    /// Region codes loaded so far, sorted
    pub fn loaded_regions(&self) -> impl Iterator<Item = &str> {
        self.loaded.iter().map(String::as_str)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl RuleSupplier for PreloadSupplier {
    fn is_loaded(&self, region_code: &str) -> bool {
        self.loaded.contains(region_code)
    }

    fn get_rule(&self, key: &LookupKey) -> Option<&Rule> {
        self.rules.get(&key.to_key_string(key.depth()))
    }
}

fn validate_region_code(region_code: &str) -> Result<()> {
    let valid = !region_code.is_empty()
        && region_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(RegionDataError::InvalidRegionCode(region_code.to_string()))
    }
}

/// "data/US" and "data/US/..." belong to the region keyed "data/US";
/// "data/USA" does not.
fn belongs_to_region(id: &str, root_key: &str) -> bool {
    id.strip_prefix(root_key)
        .map_or(false, |rest| rest.is_empty() || rest.starts_with('/'))
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "gz")
}

/// "US.json" / "US.json.gz" -> "US"
fn region_code_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let region_code = file_name
        .strip_suffix(".json.gz")
        .or_else(|| file_name.strip_suffix(".json"))?;
    validate_region_code(region_code).ok()?;
    Some(region_code.to_string())
}
