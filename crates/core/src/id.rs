//! Strongly-typed catalog identifiers and tags.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Stock keeping unit: the identity of a product within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

/// Category tag. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Build a new value, rejecting blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::validation(concat!($name, " cannot be empty")));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(Sku, "SKU");
impl_string_newtype!(Category, "category");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_rejects_blank_values() {
        assert!(matches!(Sku::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(Sku::new("   "), Err(DomainError::Validation(_))));
        assert_eq!(Sku::new("000003").unwrap().as_str(), "000003");
    }

    #[test]
    fn category_is_case_sensitive() {
        let lower: Category = "boots".parse().unwrap();
        let upper: Category = "Boots".parse().unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn deserialization_validates() {
        let ok: Category = serde_json::from_str("\"sandals\"").unwrap();
        assert_eq!(ok.as_str(), "sandals");

        let err = serde_json::from_str::<Sku>("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let sku = Sku::new("000001").unwrap();
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"000001\"");
    }
}
