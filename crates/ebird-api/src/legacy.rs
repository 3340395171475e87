//! Reference data from the eBird 1.1 API, returned as CSV.
//!
//! Each row is decoded into an object keyed by the CSV header, with every
//! value left as a string.

use crate::endpoint::{Endpoint, Field, Request};
use crate::error::{EbirdError, Result};
use crate::params::{ParameterDefaults, Params};
use crate::transport::Transport;
use crate::types::LocationType;
use crate::validation::{clean_lat, clean_legacy_region_type, clean_lng, clean_region, get_location_type};
use serde_json::Value;

static LIST_HOTSPOTS: Endpoint = Endpoint::legacy("/ref/hotspot/region", &[Field::Back]);

static NEAREST_HOTSPOTS: Endpoint = Endpoint::legacy("/ref/hotspot/geo", &[Field::Dist, Field::Back]);

static LIST_REGIONS: Endpoint = Endpoint::legacy("/ref/location/list", &[]);

static FIND_REGIONS: Endpoint = Endpoint::legacy("/ref/location/find", &[]);

static LIST_SPECIES: Endpoint = Endpoint::legacy("/ref/taxa/ebird", &[Field::Category, Field::Locale]);

/// All hotspots are listed unless `back` is given
fn hotspot_defaults() -> ParameterDefaults {
    ParameterDefaults {
        back: None,
        ..ParameterDefaults::legacy()
    }
}

/// Hotspots in a region, optionally only those visited in the last
/// `params.back` days
pub fn list_hotspots(
    transport: &Transport,
    token: &str,
    region: &str,
    params: &Params,
) -> Result<Value> {
    let request = LIST_HOTSPOTS
        .builder()
        .arg("r", clean_region(region)?)
        .params(params)?
        .defaults(hotspot_defaults())
        .build()?;
    transport.fetch(token, &request)
}

/// Hotspots within `params.dist` km of a point
pub fn nearest_hotspots(
    transport: &Transport,
    token: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    let request = NEAREST_HOTSPOTS
        .builder()
        .arg("lat", clean_lat(lat)?)
        .arg("lng", clean_lng(lng)?)
        .params(params)?
        .defaults(hotspot_defaults())
        .build()?;
    transport.fetch(token, &request)
}

fn list_regions_request(rtype: &str, code: Option<&str>) -> Result<Request> {
    let rtype = clean_legacy_region_type(rtype)?;
    let builder = LIST_REGIONS.builder().arg("rtype", &rtype);

    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return builder.defaults(ParameterDefaults::legacy()).build();
    };

    let parent = match get_location_type(code) {
        Some(kind) if kind.is_region() => kind,
        _ => {
            return Err(EbirdError::Validation(format!(
                "Value for 'code', {}, must be a country, e.g. 'US', subnational1, \
                 e.g. 'US-NV' or subnational2, e.g. 'US-NV-011'",
                code
            )))
        }
    };

    let allowed = match rtype.as_str() {
        "subnational1" => parent == LocationType::Country,
        "subnational2" => parent != LocationType::Subnational2,
        _ => false,
    };
    if !allowed {
        return Err(EbirdError::Validation(format!(
            "A {} code cannot be used with the region type '{}'",
            parent, rtype
        )));
    }

    let key = match parent {
        LocationType::Country => "countryCode",
        _ => "subnational1Code",
    };
    builder
        .arg(key, code.to_uppercase())
        .defaults(ParameterDefaults::legacy())
        .build()
}

/// Regions of a type, optionally limited to those inside `code`.
///
/// # Arguments
/// * `rtype` - `bcr`, `country`, `subnational1` or `subnational2`
/// * `code` - A country for subnational1 regions, a country or
///   subnational1 code for subnational2 regions
pub fn list_regions(
    transport: &Transport,
    token: &str,
    rtype: &str,
    code: Option<&str>,
) -> Result<Value> {
    transport.fetch(token, &list_regions_request(rtype, code)?)
}

/// Regions of a type whose name contains `name` (case insensitive)
pub fn find_regions(transport: &Transport, token: &str, rtype: &str, name: &str) -> Result<Value> {
    if name.trim().is_empty() {
        return Err(EbirdError::Validation(
            "A word to search for is required".to_string(),
        ));
    }
    let request = FIND_REGIONS
        .builder()
        .arg("rtype", clean_legacy_region_type(rtype)?)
        .arg("match", name.trim())
        .defaults(ParameterDefaults::legacy())
        .build()?;
    transport.fetch(token, &request)
}

/// The taxonomy, filtered by category (default `species`), with common
/// names for `params.locale` (default `en_US`)
pub fn list_species(transport: &Transport, token: &str, params: &Params) -> Result<Value> {
    let request = LIST_SPECIES
        .builder()
        .params(params)?
        .defaults(ParameterDefaults::legacy())
        .build()?;
    transport.fetch(token, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_list_regions_without_code() {
        let request = list_regions_request("bcr", None).unwrap();
        assert_eq!(request.query, vec![("rtype", "bcr".to_string())]);
    }

    #[test]
    fn test_list_subnational1_in_country() {
        let request = list_regions_request("subnational1", Some("us")).unwrap();
        assert_eq!(request.query_value("countryCode"), Some("US"));
    }

    #[test]
    fn test_list_subnational2_in_subnational1() {
        let request = list_regions_request("subnational2", Some("US-NV")).unwrap();
        assert_eq!(request.query_value("subnational1Code"), Some("US-NV"));

        let request = list_regions_request("subnational2", Some("US")).unwrap();
        assert_eq!(request.query_value("countryCode"), Some("US"));
    }

    #[test]
    fn test_list_regions_rejects_mismatched_code() {
        assert!(list_regions_request("bcr", Some("US")).is_err());
        assert!(list_regions_request("country", Some("US")).is_err());
        assert!(list_regions_request("subnational1", Some("US-NV")).is_err());
        assert!(list_regions_request("subnational1", Some("US-NV-011")).is_err());
        assert!(list_regions_request("subnational2", Some("US-NV-011")).is_err());
        assert!(list_regions_request("subnational2", Some("L123")).is_err());
    }

    #[test]
    fn test_blank_code_is_ignored() {
        let request = list_regions_request("country", Some("")).unwrap();
        assert_eq!(request.query_value("countryCode"), None);
    }

    #[test]
    fn test_find_regions_requires_match() {
        let transport = Transport::new();
        let err = find_regions(&transport, "key", "country", " ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_regions() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/location/find")
                .query_param("rtype", "subnational1")
                .query_param("match", "nev");
            then.status(200)
                .body("SUBNATIONAL1_CODE,SUBNATIONAL1_NAME\nUS-NV,Nevada\n");
        });

        let transport = Transport::new().with_legacy_url(server.base_url());
        let result = find_regions(&transport, "key", "subnational1", "nev").unwrap();

        mock.assert();
        assert_eq!(
            result,
            json!([{"SUBNATIONAL1_CODE": "US-NV", "SUBNATIONAL1_NAME": "Nevada"}])
        );
    }

    #[test]
    fn test_list_hotspots_sends_back() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/region")
                .query_param("r", "US-NV")
                .query_param("back", "14");
            then.status(200).body("LOC_ID,LOC_NAME\n");
        });

        let transport = Transport::new().with_legacy_url(server.base_url());
        let result = list_hotspots(&transport, "key", "US-NV", &Params::new().back(14)).unwrap();

        mock.assert();
        assert_eq!(result, json!([]));
    }

    #[test]
    fn test_nearest_hotspots() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/geo")
                .query_param("lat", "45.12")
                .query_param("lng", "-1.00");
            then.status(200).body("LOC_ID\nL1\n");
        });

        let transport = Transport::new().with_legacy_url(server.base_url());
        let result = nearest_hotspots(&transport, "key", 45.123, -1.0, &Params::new()).unwrap();

        mock.assert();
        assert_eq!(result, json!([{"LOC_ID": "L1"}]));
    }

    #[test]
    fn test_list_species_filters_legacy_defaults() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/taxa/ebird")
                .query_param("cat", "spuh");
            then.status(200).body("SCI_NAME,COMMON_NAME\nAves sp.,bird sp.\n");
        });

        let transport = Transport::new().with_legacy_url(server.base_url());
        let params = Params::new().category("spuh").locale("en_US");
        let result = list_species(&transport, "key", &params).unwrap();

        mock.assert();
        assert_eq!(result[0]["COMMON_NAME"], "bird sp.");
    }
}
