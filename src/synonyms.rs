//! Normalization of administrative-area spellings for display.
//!
//! User input such as "california", "Beijing Shi" or "ZURICH" is replaced by
//! the canonical form the region data uses for that unit: the Latin name when
//! the input matched it, otherwise the unit's key.

use tracing::debug;

use crate::compare::StringCompare;
use crate::language::{choose_best_address_language, Language};
use crate::models::{AddressData, LookupKey, Rule};
use crate::supplier::RuleSupplier;

/// Rewrites administrative-area fields to their canonical display forms.
pub struct Synonyms<'a, S: RuleSupplier + ?Sized> {
    supplier: &'a S,
    compare: StringCompare,
}

impl<'a, S: RuleSupplier + ?Sized> Synonyms<'a, S> {
    pub fn new(supplier: &'a S) -> Self {
        Self {
            supplier,
            compare: StringCompare::new(),
        }
    }

    /// Normalize the hierarchy fields of `address` in place.
    ///
    /// Walks from the region rule downwards. At each level the field value is
    /// compared with every child of the current rule (key, local name, Latin
    /// name); the first child that matches wins, the field is rewritten and
    /// the walk descends into it. The walk stops at the first empty or
    /// unmatched field, leaving it and every deeper field as they were.
    ///
    /// # Panics
    ///
    /// Panics if the region of `address` is not loaded in the supplier, or if
    /// the supplier has no rule for a sub key its parent lists.
    pub fn normalize_for_display(&self, address: &mut AddressData) {
        assert!(
            self.supplier.is_loaded(&address.region_code),
            "region data for {:?} is not loaded",
            address.region_code
        );

        let region_address = AddressData::for_region(&address.region_code);
        let mut parent_key = LookupKey::from_address(&region_address);
        let mut parent_rule = self.rule(&parent_key);

        let best_language =
            choose_best_address_language(parent_rule, &Language::new(&address.language_code));
        debug!(
            region = %address.region_code,
            language = %best_language.tag,
            "Normalizing address for display"
        );

        for field in &LookupKey::HIERARCHY[1..] {
            if address.is_field_empty(*field) {
                return;
            }
            let field_value = address.get_field_value(*field);

            let matched = parent_rule.sub_keys.iter().find_map(|sub_key| {
                let key = LookupKey::from_lookup_key(&parent_key, sub_key);
                let rule = self.rule(&key);

                let matches_latin_name = self.matches(&field_value, &rule.latin_name);
                let matches_local_name_id = self.compare.natural_equals(&field_value, sub_key)
                    || self.matches(&field_value, &rule.name);

                if matches_latin_name {
                    Some((key, rule, rule.latin_name.clone()))
                } else if matches_local_name_id {
                    Some((key, rule, sub_key.clone()))
                } else {
                    None
                }
            });

            let Some((key, rule, canonical)) = matched else {
                debug!("No match for {} {:?} under {}", field, field_value, parent_key);
                return;
            };

            debug!("{} {:?} -> {:?} ({})", field, field_value, canonical, key);
            address.set_field_value(*field, canonical);
            parent_key = key;
            parent_rule = rule;
        }
    }

    /// Names absent from the region data never match.
    fn matches(&self, value: &str, name: &str) -> bool {
        !name.is_empty() && self.compare.natural_equals(value, name)
    }

    fn rule(&self, key: &LookupKey) -> &'a Rule {
        match self.supplier.get_rule(key) {
            Some(rule) => rule,
            None => panic!("no rule for lookup key {}", key),
        }
    }
}
