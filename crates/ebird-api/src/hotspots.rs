//! Hotspots and other locations

use crate::endpoint::{Endpoint, Field};
use crate::error::Result;
use crate::params::{ParameterDefaults, Params};
use crate::transport::Transport;
use crate::validation::{clean_lat, clean_lng, clean_location, clean_region};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

static REGION_HOTSPOTS: Endpoint =
    Endpoint::new("/ref/hotspot/{region}", &[Field::Back]).with_fixed(&[("fmt", "json")]);

static NEARBY_HOTSPOTS: Endpoint =
    Endpoint::new("/ref/hotspot/geo", &[Field::Dist, Field::Back]).with_fixed(&[("fmt", "json")]);

static HOTSPOT_INFO: Endpoint = Endpoint::new("/ref/hotspot/info/{loc}", &[]);

static LOCATION_INFO: Endpoint = Endpoint::new("/ref/region/info/{loc}", &[]);

/// Hotspot lists return every hotspot unless `back` is given, so a `back`
/// of 14 must still be sent.
fn hotspot_defaults() -> ParameterDefaults {
    ParameterDefaults {
        back: None,
        ..ParameterDefaults::default()
    }
}

/// All hotspots in a country, subnational1 or subnational2 region.
///
/// With `params.back` set, only hotspots visited in that many days are
/// returned.
pub fn get_hotspots(
    transport: &Transport,
    token: &str,
    region: &str,
    params: &Params,
) -> Result<Value> {
    let request = REGION_HOTSPOTS
        .builder()
        .path_arg("region", &clean_region(region)?)
        .params(params)?
        .defaults(hotspot_defaults())
        .build()?;
    transport.fetch(token, &request)
}

/// Hotspots within `params.dist` km (default 25) of a point
pub fn get_nearby_hotspots(
    transport: &Transport,
    token: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    let request = NEARBY_HOTSPOTS
        .builder()
        .arg("lat", clean_lat(lat)?)
        .arg("lng", clean_lng(lng)?)
        .params(params)?
        .defaults(hotspot_defaults())
        .build()?;
    transport.fetch(token, &request)
}

/// Details of a hotspot. Private locations fail with 410 Gone.
pub fn get_hotspot(transport: &Transport, token: &str, loc_id: &str) -> Result<Value> {
    let request = HOTSPOT_INFO
        .builder()
        .path_arg("loc", &clean_location(loc_id)?)
        .build()?;
    transport.fetch(token, &request)
}

/// Details of any location, hotspot or private.
///
/// Private locations are looked up with the region info endpoint and
/// reshaped to match [`get_hotspot`]. The `hierarchicalName` of a private
/// location ends with the country name rather than the country code.
pub fn get_location(transport: &Transport, token: &str, loc_id: &str) -> Result<Value> {
    let loc = clean_location(loc_id)?;
    match get_hotspot(transport, token, &loc) {
        Err(e) if e.status() == Some(StatusCode::GONE) => {
            debug!(loc = %loc, "Not a hotspot, fetching region info");
            let request = LOCATION_INFO.builder().path_arg("loc", &loc).build()?;
            flatten_location(transport.fetch(token, &request)?)
        }
        other => other,
    }
}

#[derive(Debug, Deserialize)]
struct RegionInfo {
    code: String,
    result: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    parent: Option<Box<RegionInfo>>,
}

/// Reshape a region info record for a location into a hotspot record
fn flatten_location(data: Value) -> Result<Value> {
    let info: RegionInfo = serde_json::from_value(data)?;

    let mut result = Map::new();
    result.insert("locId".into(), json!(info.code));
    result.insert("name".into(), json!(info.result));
    result.insert("latitude".into(), info.latitude.clone());
    result.insert("longitude".into(), info.longitude.clone());
    result.insert("isHotspot".into(), json!(false));
    result.insert("locName".into(), json!(info.result));
    result.insert("lat".into(), info.latitude);
    result.insert("lng".into(), info.longitude);
    result.insert("locID".into(), json!(info.code));

    // Country first
    let mut parents = Vec::new();
    let mut next = info.parent;
    while let Some(mut parent) = next {
        next = parent.parent.take();
        parents.push(*parent);
    }
    parents.reverse();

    let mut full_name = String::new();
    for parent in parents.iter_mut() {
        if !full_name.is_empty() {
            if let Some(stripped) = parent.result.strip_suffix(&full_name) {
                parent.result = stripped.to_string();
            }
        }
        full_name = format!(", {}{}", parent.result, full_name);
    }

    for parent in &parents {
        if let Some(kind) = &parent.kind {
            result.insert(format!("{}Name", kind), json!(parent.result));
            result.insert(format!("{}Code", kind), json!(parent.code));
        }
    }

    result.insert(
        "hierarchicalName".into(),
        json!(format!("{}{}", info.result, full_name)),
    );

    Ok(Value::Object(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn private_location() -> Value {
        json!({
            "code": "L8978128",
            "type": "location",
            "result": "Back garden",
            "latitude": 51.5,
            "longitude": -0.12,
            "parent": {
                "code": "GB-ENG-LND",
                "type": "subnational2",
                "result": "Greater London, England, United Kingdom",
                "parent": {
                    "code": "GB-ENG",
                    "type": "subnational1",
                    "result": "England, United Kingdom",
                    "parent": {
                        "code": "GB",
                        "type": "country",
                        "result": "United Kingdom"
                    }
                }
            }
        })
    }

    #[test]
    fn test_flatten_location() {
        let record = flatten_location(private_location()).unwrap();
        assert_eq!(record["locId"], "L8978128");
        assert_eq!(record["locID"], "L8978128");
        assert_eq!(record["name"], "Back garden");
        assert_eq!(record["isHotspot"], false);
        assert_eq!(record["lat"], 51.5);
        assert_eq!(record["countryName"], "United Kingdom");
        assert_eq!(record["countryCode"], "GB");
        assert_eq!(record["subnational1Name"], "England");
        assert_eq!(record["subnational1Code"], "GB-ENG");
        assert_eq!(record["subnational2Name"], "Greater London");
        assert_eq!(record["subnational2Code"], "GB-ENG-LND");
        assert_eq!(
            record["hierarchicalName"],
            "Back garden, Greater London, England, United Kingdom"
        );
    }

    #[test]
    fn test_flatten_location_without_parent() {
        let record = flatten_location(json!({"code": "L1", "result": "Somewhere"})).unwrap();
        assert_eq!(record["hierarchicalName"], "Somewhere");
    }

    #[test]
    fn test_flatten_location_requires_code() {
        assert!(flatten_location(json!({"result": "Somewhere"})).is_err());
    }

    #[test]
    fn test_get_hotspots_sends_back_even_when_fourteen() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/US-NV")
                .query_param("fmt", "json")
                .query_param("back", "14");
            then.status(200).json_body(json!([]));
        });

        let transport = Transport::new().with_base_url(server.base_url());
        get_hotspots(&transport, "key", "us-nv", &Params::new().back(14)).unwrap();

        mock.assert();
    }

    #[test]
    fn test_get_nearby_hotspots() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/geo")
                .query_param("lat", "45.00")
                .query_param("lng", "-1.50")
                .query_param("dist", "10");
            then.status(200).json_body(json!([{"locId": "L1"}]));
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let result =
            get_nearby_hotspots(&transport, "key", 45.0, -1.5, &Params::new().dist(10)).unwrap();

        mock.assert();
        assert_eq!(result[0]["locId"], "L1");
    }

    #[test]
    fn test_get_hotspot_rejects_region_code() {
        let transport = Transport::new();
        let err = get_hotspot(&transport, "key", "US-NV").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_get_location_returns_hotspot() {
        let server = MockServer::start();
        let hotspot = server.mock(|when, then| {
            when.method(GET).path("/ref/hotspot/info/L901738");
            then.status(200)
                .json_body(json!({"locId": "L901738", "isHotspot": true}));
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let result = get_location(&transport, "key", "L901738").unwrap();

        hotspot.assert();
        assert_eq!(result["isHotspot"], true);
    }

    #[test]
    fn test_get_location_falls_back_for_private_location() {
        let server = MockServer::start();
        let hotspot = server.mock(|when, then| {
            when.method(GET).path("/ref/hotspot/info/L8978128");
            then.status(410);
        });
        let region = server.mock(|when, then| {
            when.method(GET).path("/ref/region/info/L8978128");
            then.status(200).json_body(private_location());
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let result = get_location(&transport, "key", "L8978128").unwrap();

        hotspot.assert();
        region.assert();
        assert_eq!(result["locId"], "L8978128");
        assert_eq!(result["isHotspot"], false);
    }

    #[test]
    fn test_get_location_propagates_other_errors() {
        let server = MockServer::start();
        let hotspot = server.mock(|when, then| {
            when.method(GET).path("/ref/hotspot/info/L1");
            then.status(500);
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let err = get_location(&transport, "key", "L1").unwrap_err();

        hotspot.assert();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
