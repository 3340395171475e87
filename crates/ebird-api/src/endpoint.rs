//! Endpoint descriptors and the request builder shared by every API call.
//!
//! An [`Endpoint`] describes one API call: the URL template, the query
//! fields it accepts and how the body is encoded. [`RequestBuilder`] fills
//! in the path arguments, validates each declared field from [`Params`] and
//! filters the result against the API defaults.

use crate::constants::DEFAULT_OBSERVATION_RANK;
use crate::error::{EbirdError, Result};
use crate::params::{filter_parameters, map_parameters, ParameterDefaults, Params, QueryParam};
use crate::validation;

/// Which eBird web service an endpoint lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// The current 2.0 API
    V2,
    /// The 1.1 API, which answers in CSV
    Legacy,
}

/// Encoding of the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

/// An optional query parameter and the validator that cleans it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Back,
    Dist,
    /// `maxResults`, filtered against the default for `key` and capped at `limit`
    MaxResults { key: &'static str, limit: u32 },
    /// Locale sent as `sppLocale`
    SpeciesLocale,
    /// Locale sent as `locale`
    Locale,
    /// Locale sent as `groupNameLocale`
    GroupLocale,
    Provisional,
    Hotspot,
    Detail,
    Category,
    Sort,
    RankedBy,
    /// Historic observations: `mrec` unless the caller picks `create`
    ObservationRank,
    Version,
    /// Species codes or scientific names, sent as a comma separated list
    Species,
}

impl Field {
    /// Logical key, used to look up the default
    pub fn key(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Dist => "dist",
            Self::MaxResults { key, .. } => *key,
            Self::SpeciesLocale => "sppLocale",
            Self::Locale => "locale",
            Self::GroupLocale => "groupNameLocale",
            Self::Provisional => "includeProvisional",
            Self::Hotspot => "hotspot",
            Self::Detail => "detail",
            Self::Category => "cat",
            Self::Sort => "sort",
            Self::RankedBy => "rankedBy",
            Self::ObservationRank => "rank",
            Self::Version => "version",
            Self::Species => "species",
        }
    }

    /// Validate the value for this field, if the caller supplied one
    pub fn clean(&self, params: &Params) -> Result<Option<String>> {
        let cleaned = match self {
            Self::Back => params
                .back
                .map(validation::clean_back)
                .transpose()?
                .map(|v| v.to_string()),
            Self::Dist => params
                .dist
                .map(validation::clean_dist)
                .transpose()?
                .map(|v| v.to_string()),
            Self::MaxResults { limit, .. } => {
                validation::clean_max_results(params.max_results, *limit)?.map(|v| v.to_string())
            }
            Self::SpeciesLocale | Self::Locale | Self::GroupLocale => params
                .locale
                .as_deref()
                .map(validation::clean_locale)
                .transpose()?,
            Self::Provisional => params
                .provisional
                .map(|v| validation::clean_provisional(v).to_string()),
            Self::Hotspot => params
                .hotspot
                .map(|v| validation::clean_hotspot(v).to_string()),
            Self::Detail => params
                .detail
                .as_deref()
                .map(validation::clean_detail)
                .transpose()?,
            Self::Category => params
                .category
                .as_deref()
                .map(validation::clean_category)
                .transpose()?,
            Self::Sort => params
                .sort
                .as_deref()
                .map(validation::clean_sort)
                .transpose()?,
            Self::RankedBy => params
                .rank
                .as_deref()
                .map(validation::clean_rank)
                .transpose()?,
            Self::ObservationRank => Some(validation::clean_observation_rank(
                params
                    .observation_rank
                    .as_deref()
                    .unwrap_or(DEFAULT_OBSERVATION_RANK),
            )?),
            Self::Version => params
                .version
                .as_deref()
                .map(|v| validation::clean_code(v, Default::default()))
                .transpose()?,
            Self::Species => params
                .species
                .as_ref()
                .map(|v| validation::clean_codes(v, Default::default()))
                .transpose()?
                .map(|codes| codes.join(",")),
        };
        Ok(cleaned)
    }
}

/// Description of a single API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub service: Service,
    /// Path relative to the service base URL, with `{name}` placeholders
    pub path: &'static str,
    pub format: Format,
    /// Optional query fields read from [`Params`], in the order sent
    pub fields: &'static [Field],
    /// Parameters sent on every call
    pub fixed: &'static [(&'static str, &'static str)],
}

impl Endpoint {
    /// A JSON endpoint of the 2.0 API
    pub const fn new(path: &'static str, fields: &'static [Field]) -> Self {
        Self {
            service: Service::V2,
            path,
            format: Format::Json,
            fields,
            fixed: &[],
        }
    }

    /// A CSV endpoint of the 1.1 API
    pub const fn legacy(path: &'static str, fields: &'static [Field]) -> Self {
        Self {
            service: Service::Legacy,
            path,
            format: Format::Csv,
            fields,
            fixed: &[],
        }
    }

    pub const fn with_fixed(mut self, fixed: &'static [(&'static str, &'static str)]) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder {
            endpoint: self,
            path: self.path.to_string(),
            query: self
                .fixed
                .iter()
                .map(|(key, value)| (*key, value.to_string()))
                .collect(),
            defaults: ParameterDefaults::default(),
        }
    }
}

/// Builds a [`Request`] for an [`Endpoint`]
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    endpoint: &'a Endpoint,
    path: String,
    query: Vec<QueryParam>,
    defaults: ParameterDefaults,
}

impl<'a> RequestBuilder<'a> {
    /// Substitute a cleaned value for the `{name}` placeholder in the path
    pub fn path_arg(mut self, name: &str, value: &str) -> Self {
        self.path = self.path.replace(&format!("{{{}}}", name), value);
        self
    }

    /// Add a parameter that is not read from [`Params`]
    pub fn arg(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Add each field declared by the endpoint, validating as it goes
    pub fn params(mut self, params: &Params) -> Result<Self> {
        for field in self.endpoint.fields {
            if let Some(value) = field.clean(params)? {
                self.query.push((field.key(), value));
            }
        }
        Ok(self)
    }

    /// Replace the defaults the query is filtered against
    pub fn defaults(mut self, defaults: ParameterDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(self) -> Result<Request> {
        if self.path.contains('{') {
            return Err(EbirdError::Validation(format!(
                "Missing path argument for {}",
                self.endpoint.path
            )));
        }
        let query = map_parameters(filter_parameters(self.query, &self.defaults));
        Ok(Request {
            service: self.endpoint.service,
            path: self.path,
            query,
            format: self.endpoint.format,
        })
    }
}

/// A validated request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub service: Service,
    pub path: String,
    pub query: Vec<QueryParam>,
    pub format: Format,
}

impl Request {
    /// Value sent for a query parameter, by wire name
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ENDPOINT: Endpoint = Endpoint::new(
        "/data/obs/{area}/recent",
        &[
            Field::Back,
            Field::MaxResults {
                key: "maxObservations",
                limit: 10_000,
            },
            Field::SpeciesLocale,
            Field::Hotspot,
        ],
    );

    #[test]
    fn test_path_arguments_are_substituted() {
        let request = TEST_ENDPOINT
            .builder()
            .path_arg("area", "US-NV")
            .build()
            .unwrap();
        assert_eq!(request.path, "/data/obs/US-NV/recent");
        assert_eq!(request.service, Service::V2);
        assert_eq!(request.format, Format::Json);
    }

    #[test]
    fn test_missing_path_argument_is_an_error() {
        assert!(TEST_ENDPOINT.builder().build().is_err());
    }

    #[test]
    fn test_only_declared_fields_are_read() {
        let params = Params::new().back(10).sort("species").hotspot(true);
        let request = TEST_ENDPOINT
            .builder()
            .path_arg("area", "US-NV")
            .params(&params)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.query_value("back"), Some("10"));
        assert_eq!(request.query_value("hotspot"), Some("true"));
        assert_eq!(request.query_value("sort"), None);
    }

    #[test]
    fn test_defaults_are_filtered() {
        let params = Params::new().back(14).locale("en").hotspot(false);
        let request = TEST_ENDPOINT
            .builder()
            .path_arg("area", "US-NV")
            .params(&params)
            .unwrap()
            .build()
            .unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_max_results_is_renamed() {
        let params = Params::new().max_results(5);
        let request = TEST_ENDPOINT
            .builder()
            .path_arg("area", "US-NV")
            .params(&params)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.query_value("maxResults"), Some("5"));
    }

    #[test]
    fn test_invalid_field_fails_validation() {
        let params = Params::new().back(31);
        let err = TEST_ENDPOINT
            .builder()
            .path_arg("area", "US-NV")
            .params(&params)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_fixed_parameters_are_sent() {
        const FIXED: Endpoint = Endpoint::new("/ref/taxonomy/ebird", &[]).with_fixed(&[("fmt", "json")]);
        let request = FIXED.builder().build().unwrap();
        assert_eq!(request.query, vec![("fmt", "json".to_string())]);
    }

    #[test]
    fn test_historic_rank_defaults_to_most_recent() {
        assert_eq!(
            Field::ObservationRank.clean(&Params::new()).unwrap(),
            Some("mrec".to_string())
        );
        assert_eq!(
            Field::ObservationRank
                .clean(&Params::new().observation_rank("create"))
                .unwrap(),
            Some("create".to_string())
        );
    }

    #[test]
    fn test_top_100_rank_does_not_affect_historic_rank() {
        let params = Params::new().rank("cl");
        assert_eq!(
            Field::ObservationRank.clean(&params).unwrap(),
            Some("mrec".to_string())
        );
        assert_eq!(Field::RankedBy.clean(&params).unwrap(), Some("cl".to_string()));
    }
}
