//! Lookup keys addressing rules within a region hierarchy.

use super::{AddressData, AddressField};

const KEY_PREFIX: &str = "data";
const KEY_SEPARATOR: char = '/';

/// Path to a rule: the region code followed by zero or more sub keys.
///
/// Rendered as `data/US`, `data/CN/北京市/东城区`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LookupKey {
    nodes: Vec<String>,
}

impl LookupKey {
    /// Address fields that make up the hierarchy, coarsest first.
    pub const HIERARCHY: [AddressField; 4] = [
        AddressField::Country,
        AddressField::AdminArea,
        AddressField::Locality,
        AddressField::DependentLocality,
    ];

    /// Build a key from the hierarchy fields of an address, stopping at the
    /// first empty field.
    pub fn from_address(address: &AddressData) -> Self {
        let nodes = Self::HIERARCHY
            .iter()
            .take_while(|field| !address.is_field_empty(**field))
            .map(|field| address.get_field_value(*field))
            .collect();
        Self { nodes }
    }

    /// Build the key of the child `sub_key` under `parent`.
    ///
    /// Panics if `parent` is empty or already at the deepest level.
    pub fn from_lookup_key(parent: &LookupKey, sub_key: &str) -> Self {
        assert!(!parent.nodes.is_empty(), "parent lookup key is empty");
        assert!(
            parent.nodes.len() < Self::HIERARCHY.len(),
            "lookup key {} has no deeper level",
            parent
        );

        let mut nodes = parent.nodes.clone();
        nodes.push(sub_key.to_string());
        Self { nodes }
    }

    /// Depth of the key: 0 for a region, 1 for an admin area, ...
    pub fn depth(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn region_code(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// Render the key truncated at `max_depth`.
    pub fn to_key_string(&self, max_depth: usize) -> String {
        let mut key = String::from(KEY_PREFIX);
        for node in self.nodes.iter().take(max_depth + 1) {
            key.push(KEY_SEPARATOR);
            key.push_str(node);
        }
        key
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_key_string(self.depth()))
    }
}

/// Lookup key string of a whole region, e.g. `data/US`.
pub fn region_key_string(region_code: &str) -> String {
    format!("{}{}{}", KEY_PREFIX, KEY_SEPARATOR, region_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_address_stops_at_empty_field() {
        let mut address = AddressData::for_region("CN");
        address.administrative_area = "北京市".to_string();
        address.dependent_locality = "东城区".to_string();

        let key = LookupKey::from_address(&address);
        assert_eq!(key.depth(), 1);
        assert_eq!(key.to_string(), "data/CN/北京市");
    }

    #[test]
    fn test_from_lookup_key_extends_parent() {
        let region = LookupKey::from_address(&AddressData::for_region("US"));
        let state = LookupKey::from_lookup_key(&region, "CA");

        assert_eq!(region.to_string(), "data/US");
        assert_eq!(state.to_string(), "data/US/CA");
        assert_eq!(state.to_key_string(0), "data/US");
        assert_eq!(state.region_code(), Some("US"));
    }

    #[test]
    #[should_panic(expected = "no deeper level")]
    fn test_from_lookup_key_past_hierarchy() {
        let mut key = LookupKey::from_address(&AddressData::for_region("CN"));
        for sub_key in ["a", "b", "c", "d"] {
            key = LookupKey::from_lookup_key(&key, sub_key);
        }
    }

    #[test]
    fn test_empty_key() {
        let key = LookupKey::from_address(&AddressData::default());
        assert!(key.is_empty());
        assert_eq!(key.to_string(), "data");
        assert_eq!(region_key_string("CH"), "data/CH");
    }
}
