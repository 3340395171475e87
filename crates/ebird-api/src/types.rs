//! Argument types shared by the endpoint wrappers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a region or location code, derived from its shape alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Country,
    Subnational1,
    Subnational2,
    /// A hotspot or private site, e.g. L123456
    Location,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Subnational1 => "subnational1",
            Self::Subnational2 => "subnational2",
            Self::Location => "location",
        }
    }

    /// Countries, subnational1 and subnational2 areas are regions
    pub fn is_region(&self) -> bool {
        !matches!(self, Self::Location)
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case conversion applied when cleaning a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    None,
    Lower,
    Upper,
}

/// One or more codes passed to an endpoint.
///
/// A single string is split on commas, so `"US-NV"`, `"US-NV,US-AZ"`,
/// `["US-NV"]` and `vec!["US-NV", "US-AZ"]` are all accepted wherever an
/// endpoint takes a list of areas, locations or species.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Codes(Vec<String>);

impl Codes {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Codes {
    fn from(value: &str) -> Self {
        Self(value.split(',').map(str::to_string).collect())
    }
}

impl From<String> for Codes {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for Codes {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for Codes {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for Codes {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Codes {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for Codes {
    fn from(values: &[String]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Codes {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}
