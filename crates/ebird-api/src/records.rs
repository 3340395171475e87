//! Helpers for working with the observation records returned by the API

use serde_json::{json, Value};

/// First value present under any of `keys`. The 1.1 and 2.0 APIs differ
/// in the case of some names, e.g. `locID` and `locId`.
fn field(record: &Value, keys: &[&str]) -> Value {
    keys.iter()
        .find_map(|key| record.get(*key))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Group the flat fields of each observation into `species` and `location`
/// objects, ready for loading into a database.
///
/// Missing fields become `null`, except a missing `howMany` which becomes 0
/// (the species was only noted as present).
pub fn nest(records: &[Value]) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            let count = match field(record, &["howMany"]) {
                Value::Null => json!(0),
                count => count,
            };
            json!({
                "identifier": field(record, &["obsID", "obsId"]),
                "date": field(record, &["obsDt"]),
                "species": {
                    "code": field(record, &["speciesCode"]),
                    "common": field(record, &["comName"]),
                    "scientific": field(record, &["sciName"]),
                },
                "count": count,
                "present": field(record, &["presenceNoted"]),
                "location": {
                    "identifier": field(record, &["locID", "locId"]),
                    "private": field(record, &["locationPrivate"]),
                    "name": field(record, &["locName"]),
                    "lat": field(record, &["lat"]),
                    "lng": field(record, &["lng"]),
                    "county": field(record, &["subnational2Name"]),
                    "county_code": field(record, &["subnational2Code"]),
                    "state": field(record, &["subnational1Name"]),
                    "state_code": field(record, &["subnational1Code"]),
                    "country": field(record, &["countryName"]),
                    "country_code": field(record, &["countryCode"]),
                },
                "observer": field(record, &["userDisplayName"]),
                "reviewed": field(record, &["obsReviewed"]),
                "valid": field(record, &["obsValid"]),
                "submission": field(record, &["subID", "subId"]),
                "checklist": field(record, &["checklistID", "checklistId"]),
            })
        })
        .collect()
}

/// Distinct location codes in a list of observations, in the order first seen
pub fn find_locations(records: &[Value]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for record in records {
        let code = ["locID", "locId"]
            .iter()
            .find_map(|key| record.get(*key).and_then(Value::as_str))
            .filter(|code| !code.is_empty());
        if let Some(code) = code {
            if !locations.iter().any(|seen| seen == code) {
                locations.push(code.to_string());
            }
        }
    }
    locations
}
