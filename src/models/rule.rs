//! Region metadata rules.

use serde::Deserialize;

/// Separator used by region data for list-valued fields ("AL~AK~AZ").
const LIST_SEPARATOR: char = '~';

/// Metadata for one geographic unit in a region hierarchy.
///
/// Rules are read-only once loaded. `sub_keys` lists the keys of the child
/// units in the order the region data gives them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    /// Full lookup key string, e.g. "data/CN/北京市"
    pub id: String,
    /// Key of this unit within its parent, e.g. "北京市"
    pub key: String,
    /// Local-script name
    pub name: String,
    /// Latin-script name (empty when the local name is already Latin)
    pub latin_name: String,
    /// Latin-script address format (only set on some country rules)
    pub latin_format: String,
    pub sub_keys: Vec<String>,
    /// BCP-47 tags of the languages used in this region, most common first
    pub languages: Vec<String>,
}

/// Rule as it appears in the region data JSON.
///
/// Unknown fields (formats, postal code patterns, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRule {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub lfmt: Option<String>,
    #[serde(default)]
    pub sub_keys: Option<String>,
    #[serde(default)]
    pub languages: Option<String>,
}

impl Rule {
    /// Build a rule from its lookup key string and raw JSON fields.
    ///
    /// A missing `key` falls back to the last segment of `id`.
    pub fn from_raw(id: &str, raw: RawRule) -> Self {
        let key = raw
            .key
            .unwrap_or_else(|| id.rsplit('/').next().unwrap_or_default().to_string());

        Self {
            id: id.to_string(),
            key,
            name: raw.name.unwrap_or_default(),
            latin_name: raw.lname.unwrap_or_default(),
            latin_format: raw.lfmt.unwrap_or_default(),
            sub_keys: split_list(raw.sub_keys.as_deref()),
            languages: split_list(raw.languages.as_deref()),
        }
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
