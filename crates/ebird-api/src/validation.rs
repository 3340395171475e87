//! Cleaning and validation of the arguments passed to the eBird API.
//!
//! Every function returns the value in the form the API expects, e.g.
//! coordinates become fixed two-decimal strings and boolean flags become
//! `"true"` or `"false"`. Anything the API would reject is reported as
//! [`EbirdError::Validation`] so the call fails without touching the network.

use crate::constants::*;
use crate::error::{EbirdError, Result};
use crate::types::{Codes, LocationType, Transform};
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static COUNTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

static SUBNATIONAL1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}-[A-Z0-9]{1,3}$").unwrap());

static SUBNATIONAL2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}-[A-Z0-9]{1,3}-[A-Z0-9]+$").unwrap());

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^L\d+$").unwrap());

static SPECIES_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());

static CHECKLIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^S\d+$").unwrap());

/// Earliest date the API holds records for
const FIRST_DATE: (i32, u32, u32) = (1800, 1, 1);

fn invalid(msg: impl Into<String>) -> EbirdError {
    EbirdError::Validation(msg.into())
}

/// Lower-case a value and check it against a fixed set of choices
fn clean_choice(value: &str, choices: &[&str], name: &str) -> Result<String> {
    let cleaned = value.trim().to_lowercase();
    if choices.contains(&cleaned.as_str()) {
        Ok(cleaned)
    } else {
        Err(invalid(format!(
            "Value for '{}', {}, must be one of: {}",
            name,
            value,
            choices.join(", ")
        )))
    }
}

fn clean_range(value: u32, min: u32, max: u32, name: &str) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(format!(
            "Value for '{}', {}, is not an integer in the range {}..{}",
            name, value, min, max
        )))
    }
}

/// Latitude in -90..90, rounded to 2 decimal places
pub fn clean_lat(value: f64) -> Result<String> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(invalid(format!(
            "Value for 'lat', {}, must be a decimal number in the range -90.00 to 90.00",
            value
        )));
    }
    Ok(format!("{:.2}", value))
}

/// Longitude in -180..180, rounded to 2 decimal places
pub fn clean_lng(value: f64) -> Result<String> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(invalid(format!(
            "Value for 'lng', {}, must be a decimal number in the range -180.00 to 180.00",
            value
        )));
    }
    Ok(format!("{:.2}", value))
}

/// Radius around a point, in km
pub fn clean_dist(value: u32) -> Result<u32> {
    clean_range(value, 0, MAX_DISTANCE, "dist")
}

/// Number of days in the past to include
pub fn clean_back(value: u32) -> Result<u32> {
    clean_range(value, 1, MAX_BACK, "back")
}

/// `None` (no limit) or a count in 1..limit
pub fn clean_max_results(value: Option<u32>, limit: u32) -> Result<Option<u32>> {
    value
        .map(|v| clean_range(v, 1, limit, "max_results"))
        .transpose()
}

pub fn clean_max_observers(value: u32) -> Result<u32> {
    clean_range(value, 1, MAX_OBSERVERS, "max_results")
}

pub fn clean_max_checklists(value: u32) -> Result<u32> {
    clean_range(value, 1, MAX_CHECKLISTS, "max_results")
}

/// Locale for species common names.
///
/// The language code is lower-cased and the country code upper-cased, so
/// `EN_us` becomes `en_US`. The result must be one of [`LOCALES`].
pub fn clean_locale(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let cleaned = match trimmed.split_once('_') {
        Some((language, country)) => {
            format!("{}_{}", language.to_lowercase(), country.to_uppercase())
        }
        None => trimmed.to_lowercase(),
    };
    if LOCALES.iter().any(|(_, code)| *code == cleaned) {
        Ok(cleaned)
    } else {
        Err(invalid(format!("Invalid code for 'locale': {}", value)))
    }
}

pub fn clean_detail(value: &str) -> Result<String> {
    clean_choice(value, DETAIL_LEVELS, "detail")
}

pub fn clean_provisional(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn clean_hotspot(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// One or more species categories, separated by commas
pub fn clean_categories(value: &str) -> Result<Vec<String>> {
    value
        .split(',')
        .map(|category| clean_choice(category, SPECIES_CATEGORIES, "category"))
        .collect()
}

/// Species categories joined into the comma-separated form sent as `cat`
pub fn clean_category(value: &str) -> Result<String> {
    Ok(clean_categories(value)?.join(","))
}

pub fn clean_sort(value: &str) -> Result<String> {
    clean_choice(value, SPECIES_SORT, "sort")
}

pub fn clean_ordering(value: &str) -> Result<String> {
    clean_choice(value, SPECIES_ORDERING, "ordering")
}

/// Ranking for the top 100: species seen (`spp`) or checklists (`cl`)
pub fn clean_rank(value: &str) -> Result<String> {
    clean_choice(value, TOP_100_RANK, "rank")
}

/// Which observation of a species a historic query returns
pub fn clean_observation_rank(value: &str) -> Result<String> {
    clean_choice(value, OBSERVATION_RANK, "rank")
}

pub fn clean_region_type(value: &str) -> Result<String> {
    clean_choice(value, REGION_TYPES, "region type")
}

pub fn clean_legacy_region_type(value: &str) -> Result<String> {
    clean_choice(value, LEGACY_REGION_TYPES, "region type")
}

/// Strip whitespace and apply the case transform. Blank codes are rejected.
pub fn clean_code(value: &str, transform: Transform) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("Codes cannot be blank"));
    }
    Ok(match transform {
        Transform::None => trimmed.to_string(),
        Transform::Lower => trimmed.to_lowercase(),
        Transform::Upper => trimmed.to_uppercase(),
    })
}

pub fn clean_codes(values: &Codes, transform: Transform) -> Result<Vec<String>> {
    values
        .as_slice()
        .iter()
        .map(|value| clean_code(value, transform))
        .collect()
}

/// An eBird species code, e.g. `horlar`, `emu1` or `x00004`
pub fn clean_species_code(value: &str) -> Result<String> {
    let cleaned = clean_code(value, Transform::Lower)?;
    if SPECIES_CODE_RE.is_match(&cleaned) {
        Ok(cleaned)
    } else {
        Err(invalid(format!(
            "Value for species code, {}, is not an eBird species code, e.g. 'horlar'",
            value
        )))
    }
}

/// Classify a code by shape: country, subnational1, subnational2 or location
pub fn get_location_type(value: &str) -> Option<LocationType> {
    let cleaned = value.trim().to_uppercase();
    if COUNTRY_RE.is_match(&cleaned) {
        Some(LocationType::Country)
    } else if SUBNATIONAL1_RE.is_match(&cleaned) {
        Some(LocationType::Subnational1)
    } else if SUBNATIONAL2_RE.is_match(&cleaned) {
        Some(LocationType::Subnational2)
    } else if LOCATION_RE.is_match(&cleaned) {
        Some(LocationType::Location)
    } else {
        None
    }
}

/// The distinct classifications found in a list of codes, in first-seen order
pub fn get_location_types<S: AsRef<str>>(values: &[S]) -> Vec<Option<LocationType>> {
    let mut types = Vec::new();
    for value in values {
        let location_type = get_location_type(value.as_ref());
        if !types.contains(&location_type) {
            types.push(location_type);
        }
    }
    types
}

pub fn is_country(value: &str) -> bool {
    get_location_type(value) == Some(LocationType::Country)
}

pub fn is_subnational1(value: &str) -> bool {
    get_location_type(value) == Some(LocationType::Subnational1)
}

pub fn is_subnational2(value: &str) -> bool {
    get_location_type(value) == Some(LocationType::Subnational2)
}

pub fn is_region(value: &str) -> bool {
    get_location_type(value).is_some_and(|t| t.is_region())
}

pub fn is_location(value: &str) -> bool {
    get_location_type(value) == Some(LocationType::Location)
}

/// A country, subnational1 or subnational2 code, or `world`
pub fn clean_region(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("world") {
        return Ok("world".to_string());
    }
    if is_region(trimmed) {
        Ok(trimmed.to_uppercase())
    } else {
        Err(invalid(format!(
            "Value for 'region', {}, must be 'world', a country, e.g. 'US', \
             subnational1, e.g. 'US-NV' or subnational2, e.g. 'US-NV-011'",
            value
        )))
    }
}

/// A region or location code
pub fn clean_area(value: &str) -> Result<String> {
    if get_location_type(value).is_some() {
        Ok(value.trim().to_uppercase())
    } else {
        Err(invalid(format!(
            "Value for 'area', {}, must be a country, e.g. 'US', subnational1, \
             e.g. 'US-NV', subnational2, e.g. 'US-NV-011' or location, e.g. 'L123456'",
            value
        )))
    }
}

/// A hotspot or private location code, `L` followed by digits
pub fn clean_location(value: &str) -> Result<String> {
    if is_location(value) {
        Ok(value.trim().to_uppercase())
    } else {
        Err(invalid(format!(
            "Value for the location code, {}, must be the letter 'L' followed by 1 or more digits",
            value
        )))
    }
}

/// A checklist identifier, e.g. `S22893621`
pub fn clean_checklist(value: &str) -> Result<String> {
    let cleaned = value.trim().to_uppercase();
    if CHECKLIST_RE.is_match(&cleaned) {
        Ok(cleaned)
    } else {
        Err(invalid(format!(
            "Value for the checklist, {}, must be the letter 'S' followed by 1 or more digits",
            value
        )))
    }
}

/// Up to ten areas, all of the same type
pub fn clean_areas(values: &Codes) -> Result<Vec<String>> {
    let cleaned = clean_codes(values, Transform::Upper)?;
    if cleaned.is_empty() {
        return Err(invalid("At least one area code is required"));
    }
    if cleaned.len() > MAX_AREAS {
        return Err(invalid(format!(
            "List of area codes cannot be longer than {}",
            MAX_AREAS
        )));
    }
    for code in &cleaned {
        clean_area(code)?;
    }
    if get_location_types(&cleaned).len() > 1 {
        return Err(invalid(format!(
            "Area codes, {}, must all be the same type: countries, subnational1, \
             subnational2 or locations",
            cleaned.join(",")
        )));
    }
    Ok(cleaned)
}

/// Up to ten location codes
pub fn clean_locations(values: &Codes) -> Result<Vec<String>> {
    let cleaned = clean_codes(values, Transform::Upper)?;
    if cleaned.len() > MAX_AREAS {
        return Err(invalid(format!(
            "List of location codes cannot be longer than {}",
            MAX_AREAS
        )));
    }
    cleaned.iter().map(|code| clean_location(code)).collect()
}

/// A date from 1800-01-01 up to today, formatted for use in a URL path
pub fn clean_date(value: NaiveDate) -> Result<String> {
    let (year, month, day) = FIRST_DATE;
    let first = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("Invalid first date"))?;
    let today = Local::now().date_naive();
    if value < first || value > today {
        return Err(invalid(format!(
            "Value for 'date', {}, must be between {} and today",
            value, first
        )));
    }
    Ok(value.format("%Y/%m/%d").to_string())
}

/// Parse a date given as `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        invalid(format!(
            "Value for 'date', {}, must be in the form YYYY-MM-DD",
            value
        ))
    })
}
