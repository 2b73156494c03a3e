//! Rule suppliers: resolve lookup keys to region rules.
//!
//! Region data is loaded ahead of time; lookups never touch the disk.

mod preload;

#[cfg(test)]
pub(crate) mod fixtures;

pub use preload::PreloadSupplier;

use crate::models::{LookupKey, Rule};

/// Read-only source of region rules.
pub trait RuleSupplier {
    /// Whether the rules for `region_code` have been loaded.
    fn is_loaded(&self, region_code: &str) -> bool;

    /// Rule for `key`, or `None` when no such unit exists.
    fn get_rule(&self, key: &LookupKey) -> Option<&Rule>;
}
