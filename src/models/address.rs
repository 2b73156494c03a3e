//! Postal address record and its fields.

use serde::{Deserialize, Serialize};

/// A single field of a postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    /// Region code (CLDR / ISO 3166-1 alpha-2)
    Country,
    /// State / province / prefecture
    AdminArea,
    /// City / town
    Locality,
    /// District / suburb / neighbourhood within a city
    DependentLocality,
    SortingCode,
    PostalCode,
    StreetAddress,
    Organization,
    Recipient,
}

impl AddressField {
    /// Get all fields in display order
    pub fn all() -> &'static [AddressField] {
        &[
            AddressField::Country,
            AddressField::AdminArea,
            AddressField::Locality,
            AddressField::DependentLocality,
            AddressField::SortingCode,
            AddressField::PostalCode,
            AddressField::StreetAddress,
            AddressField::Organization,
            AddressField::Recipient,
        ]
    }

    /// Get the field name for this field
    pub fn field_name(&self) -> &'static str {
        match self {
            AddressField::Country => "region_code",
            AddressField::AdminArea => "administrative_area",
            AddressField::Locality => "locality",
            AddressField::DependentLocality => "dependent_locality",
            AddressField::SortingCode => "sorting_code",
            AddressField::PostalCode => "postal_code",
            AddressField::StreetAddress => "address_line",
            AddressField::Organization => "organization",
            AddressField::Recipient => "recipient",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// A postal address as entered by a user.
///
/// Every field is free text; `language_code` is the BCP-47 tag of the
/// language the address was written in (may be empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressData {
    pub region_code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_line: Vec<String>,
    pub administrative_area: String,
    pub locality: String,
    pub dependent_locality: String,
    pub postal_code: String,
    pub sorting_code: String,
    pub organization: String,
    pub recipient: String,
    pub language_code: String,
}

impl AddressData {
    /// Create an address for a region with no other fields set
    pub fn for_region(region_code: &str) -> Self {
        Self {
            region_code: region_code.to_string(),
            ..Self::default()
        }
    }

    /// Get the value of a single-line field.
    ///
    /// The street address is multi-line; its lines are joined with `\n`.
    pub fn get_field_value(&self, field: AddressField) -> String {
        match field {
            AddressField::StreetAddress => self.address_line.join("\n"),
            other => self.single_line(other).unwrap_or_default().to_string(),
        }
    }

    /// Set the value of a field. Setting the street address replaces all
    /// lines with the `\n`-separated lines of `value`.
    pub fn set_field_value(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Country => self.region_code = value,
            AddressField::AdminArea => self.administrative_area = value,
            AddressField::Locality => self.locality = value,
            AddressField::DependentLocality => self.dependent_locality = value,
            AddressField::SortingCode => self.sorting_code = value,
            AddressField::PostalCode => self.postal_code = value,
            AddressField::Organization => self.organization = value,
            AddressField::Recipient => self.recipient = value,
            AddressField::StreetAddress => {
                self.address_line = value.lines().map(str::to_string).collect();
            }
        }
    }

    /// A field is empty when it holds nothing but whitespace.
    pub fn is_field_empty(&self, field: AddressField) -> bool {
        match field {
            AddressField::StreetAddress => {
                self.address_line.iter().all(|line| line.trim().is_empty())
            }
            other => self.single_line(other).map_or(true, |v| v.trim().is_empty()),
        }
    }

    fn single_line(&self, field: AddressField) -> Option<&str> {
        let value = match field {
            AddressField::Country => &self.region_code,
            AddressField::AdminArea => &self.administrative_area,
            AddressField::Locality => &self.locality,
            AddressField::DependentLocality => &self.dependent_locality,
            AddressField::SortingCode => &self.sorting_code,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Organization => &self.organization,
            AddressField::Recipient => &self.recipient,
            AddressField::StreetAddress => return None,
        };
        Some(value.as_str())
    }
}
