//! Core data models: addresses, region rules and the keys that join them.

pub mod address;
pub mod lookup_key;
pub mod rule;

pub use address::{AddressData, AddressField};
pub use lookup_key::{region_key_string, LookupKey};
pub use rule::{RawRule, Rule};
