//! Optional query values and the defaults they are filtered against.
//!
//! The API assumes a default for most parameters, so a request only needs
//! to carry the values that differ from it. [`filter_parameters`] drops
//! everything equal to its entry in [`ParameterDefaults`], then
//! [`map_parameters`] renames the logical keys to the names on the wire.

use crate::constants::*;
use crate::types::Codes;

/// A query parameter: logical key and cleaned value
pub type QueryParam = (&'static str, String);

/// Default value the API assumes for each parameter.
///
/// `None` means the API applies no default, so the parameter is always sent
/// when present. Endpoints with a different set of defaults override
/// individual fields with struct update syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefaults {
    pub back: Option<u32>,
    pub dist: Option<u32>,
    pub detail: Option<String>,
    pub hotspot: Option<bool>,
    pub provisional: Option<bool>,
    pub locale: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
    pub max_observations: Option<u32>,
    pub max_observers: Option<u32>,
    pub max_visits: Option<u32>,
    pub rank: Option<String>,
    pub format: Option<String>,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            back: Some(DEFAULT_BACK),
            dist: Some(DEFAULT_DISTANCE),
            detail: Some(DEFAULT_DETAIL.to_string()),
            hotspot: Some(DEFAULT_HOTSPOTS_ONLY),
            provisional: Some(DEFAULT_PROVISIONAL),
            locale: Some(DEFAULT_LOCALE.to_string()),
            sort: Some(DEFAULT_OBSERVATION_ORDER.to_string()),
            category: None,
            max_observations: None,
            max_observers: Some(DEFAULT_MAX_OBSERVERS),
            max_visits: Some(DEFAULT_MAX_CHECKLISTS),
            rank: Some(DEFAULT_TOP_100_RANK.to_string()),
            format: None,
        }
    }
}

impl ParameterDefaults {
    /// Defaults assumed by the CSV endpoints of the 1.1 API
    pub fn legacy() -> Self {
        Self {
            locale: Some("en_US".to_string()),
            category: Some("species".to_string()),
            format: Some("xml".to_string()),
            ..Self::default()
        }
    }

    /// The default for a logical parameter key, rendered as it is sent
    pub fn value_for(&self, key: &str) -> Option<String> {
        match key {
            "back" => self.back.map(|v| v.to_string()),
            "dist" => self.dist.map(|v| v.to_string()),
            "detail" => self.detail.clone(),
            "hotspot" => self.hotspot.map(|v| v.to_string()),
            "includeProvisional" => self.provisional.map(|v| v.to_string()),
            "locale" | "sppLocale" | "groupNameLocale" => self.locale.clone(),
            "sort" => self.sort.clone(),
            "cat" => self.category.clone(),
            "maxObservations" => self.max_observations.map(|v| v.to_string()),
            "maxObservers" => self.max_observers.map(|v| v.to_string()),
            "maxVisits" => self.max_visits.map(|v| v.to_string()),
            "rankedBy" => self.rank.clone(),
            "fmt" => self.format.clone(),
            _ => None,
        }
    }
}

/// Drop every parameter whose value matches the API default
pub fn filter_parameters(params: Vec<QueryParam>, defaults: &ParameterDefaults) -> Vec<QueryParam> {
    params
        .into_iter()
        .filter(|(key, value)| defaults.value_for(key).as_deref() != Some(value.as_str()))
        .collect()
}

/// Translate logical keys into the names used by the API
pub fn map_parameters(params: Vec<QueryParam>) -> Vec<QueryParam> {
    params
        .into_iter()
        .map(|(key, value)| (wire_name(key), value))
        .collect()
}

fn wire_name(key: &'static str) -> &'static str {
    match key {
        "maxObservations" | "maxObservers" | "maxVisits" => "maxResults",
        other => other,
    }
}

/// Optional arguments accepted by the endpoint wrappers.
///
/// Each endpoint reads only the fields it supports; the rest are ignored.
/// Values are validated when the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub back: Option<u32>,
    pub dist: Option<u32>,
    pub max_results: Option<u32>,
    pub locale: Option<String>,
    pub provisional: Option<bool>,
    pub hotspot: Option<bool>,
    pub detail: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub rank: Option<String>,
    /// `mrec` or `create`, for historic observations
    pub observation_rank: Option<String>,
    pub version: Option<String>,
    pub species: Option<Codes>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back(mut self, back: u32) -> Self {
        self.back = Some(back);
        self
    }

    pub fn dist(mut self, dist: u32) -> Self {
        self.dist = Some(dist);
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn provisional(mut self, provisional: bool) -> Self {
        self.provisional = Some(provisional);
        self
    }

    pub fn hotspot(mut self, hotspot: bool) -> Self {
        self.hotspot = Some(hotspot);
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn observation_rank(mut self, rank: impl Into<String>) -> Self {
        self.observation_rank = Some(rank.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn species(mut self, species: impl Into<Codes>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Fill every unset field from `fallback`; fields set here win
    pub fn or(self, fallback: &Params) -> Self {
        Self {
            back: self.back.or(fallback.back),
            dist: self.dist.or(fallback.dist),
            max_results: self.max_results.or(fallback.max_results),
            locale: self.locale.or_else(|| fallback.locale.clone()),
            provisional: self.provisional.or(fallback.provisional),
            hotspot: self.hotspot.or(fallback.hotspot),
            detail: self.detail.or_else(|| fallback.detail.clone()),
            category: self.category.or_else(|| fallback.category.clone()),
            sort: self.sort.or_else(|| fallback.sort.clone()),
            rank: self.rank.or_else(|| fallback.rank.clone()),
            observation_rank: self
                .observation_rank
                .or_else(|| fallback.observation_rank.clone()),
            version: self.version.or_else(|| fallback.version.clone()),
            species: self.species.or_else(|| fallback.species.clone()),
        }
    }
}
