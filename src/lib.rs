//! Regionnorm - normalizes the administrative-area fields of postal addresses
//! against region hierarchy data.
//!
//! This library provides shared types and modules for the normalize and serve binaries.

pub mod compare;
pub mod config;
pub mod error;
pub mod language;
pub mod models;
pub mod supplier;
pub mod synonyms;

pub use error::RegionDataError;
pub use models::{AddressData, AddressField, LookupKey, Rule};
pub use supplier::{PreloadSupplier, RuleSupplier};
pub use synonyms::Synonyms;
