//! Recent, notable and historic observations
//!
//! Area arguments accept a single code, a comma separated string or a list
//! of up to ten codes of the same type. The first code goes in the path;
//! when several are given they are all sent in `r`.

use crate::constants::{MAX_NEAREST_OBSERVATIONS, MAX_OBSERVATIONS};
use crate::endpoint::{Endpoint, Field, Request, RequestBuilder};
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::Codes;
use crate::validation::{clean_areas, clean_date, clean_lat, clean_lng, clean_species_code};
use chrono::NaiveDate;
use serde_json::Value;

const MAX_RESULTS: Field = Field::MaxResults {
    key: "maxObservations",
    limit: MAX_OBSERVATIONS,
};

static RECENT: Endpoint = Endpoint::new(
    "/data/obs/{area}/recent",
    &[
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
        Field::Detail,
        Field::Category,
    ],
);

static NOTABLE: Endpoint = Endpoint::new(
    "/data/obs/{area}/recent/notable",
    &[
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Hotspot,
        Field::Detail,
    ],
);

static SPECIES: Endpoint = Endpoint::new(
    "/data/obs/{area}/recent/{species}",
    &[
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
        Field::Detail,
        Field::Category,
    ],
);

static NEARBY: Endpoint = Endpoint::new(
    "/data/obs/geo/recent",
    &[
        Field::Dist,
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
        Field::Category,
        Field::Sort,
    ],
);

static NEARBY_NOTABLE: Endpoint = Endpoint::new(
    "/data/obs/geo/recent/notable",
    &[
        Field::Dist,
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Hotspot,
        Field::Detail,
    ],
);

static NEARBY_SPECIES: Endpoint = Endpoint::new(
    "/data/obs/geo/recent/{species}",
    &[
        Field::Dist,
        Field::Back,
        MAX_RESULTS,
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
        Field::Category,
    ],
);

static NEAREST_SPECIES: Endpoint = Endpoint::new(
    "/data/nearest/geo/recent/{species}",
    &[
        Field::Dist,
        Field::Back,
        Field::MaxResults {
            key: "maxObservations",
            limit: MAX_NEAREST_OBSERVATIONS,
        },
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
    ],
);

static HISTORIC: Endpoint = Endpoint::new(
    "/data/obs/{area}/historic/{date}",
    &[
        Field::ObservationRank,
        Field::Detail,
        Field::SpeciesLocale,
        Field::Provisional,
        Field::Hotspot,
        MAX_RESULTS,
        Field::Category,
    ],
);

/// Put the first area in the path and, for several areas, all of them in `r`
fn for_areas<'a>(builder: RequestBuilder<'a>, areas: &[String]) -> RequestBuilder<'a> {
    let builder = builder.path_arg("area", &areas[0]);
    if areas.len() > 1 {
        builder.arg("r", areas.join(","))
    } else {
        builder
    }
}

fn at_point(builder: RequestBuilder<'_>, lat: f64, lng: f64) -> Result<RequestBuilder<'_>> {
    Ok(builder.arg("lat", clean_lat(lat)?).arg("lng", clean_lng(lng)?))
}

fn area_request(endpoint: &Endpoint, area: &Codes, params: &Params) -> Result<Request> {
    let areas = clean_areas(area)?;
    for_areas(endpoint.builder(), &areas).params(params)?.build()
}

fn species_request(species: &str, area: &Codes, params: &Params) -> Result<Request> {
    let areas = clean_areas(area)?;
    let species = clean_species_code(species)?;
    for_areas(SPECIES.builder().path_arg("species", &species), &areas)
        .params(params)?
        .build()
}

fn point_request(
    endpoint: &Endpoint,
    species: Option<&str>,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Request> {
    let mut builder = at_point(endpoint.builder(), lat, lng)?;
    if let Some(species) = species {
        builder = builder.path_arg("species", &clean_species_code(species)?);
    }
    builder.params(params)?.build()
}

fn historic_request(area: &Codes, date: NaiveDate, params: &Params) -> Result<Request> {
    let areas = clean_areas(area)?;
    let date = clean_date(date)?;
    for_areas(HISTORIC.builder().path_arg("date", &date), &areas)
        .params(params)?
        .build()
}

/// Recent observations (latest per species) for up to ten areas
///
/// # Arguments
/// * `area` - Country, subnational1, subnational2 or location codes
/// * `params` - back, max_results, locale, provisional, hotspot, detail, category
pub fn get_observations(
    transport: &Transport,
    token: &str,
    area: impl Into<Codes>,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &area_request(&RECENT, &area.into(), params)?)
}

/// Recent observations of rare species for up to ten areas
pub fn get_notable_observations(
    transport: &Transport,
    token: &str,
    area: impl Into<Codes>,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &area_request(&NOTABLE, &area.into(), params)?)
}

/// Recent observations of one species for up to ten areas
pub fn get_species_observations(
    transport: &Transport,
    token: &str,
    species: &str,
    area: impl Into<Codes>,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &species_request(species, &area.into(), params)?)
}

/// Recent observations within `params.dist` km of a point
pub fn get_nearby_observations(
    transport: &Transport,
    token: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &point_request(&NEARBY, None, lat, lng, params)?)
}

/// Recent notable observations within `params.dist` km of a point
pub fn get_nearby_notable(
    transport: &Transport,
    token: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &point_request(&NEARBY_NOTABLE, None, lat, lng, params)?)
}

/// Recent observations of one species within `params.dist` km of a point
pub fn get_nearby_species(
    transport: &Transport,
    token: &str,
    species: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    transport.fetch(
        token,
        &point_request(&NEARBY_SPECIES, Some(species), lat, lng, params)?,
    )
}

/// Most recent observations of one species at the locations closest to a point
pub fn get_nearest_species(
    transport: &Transport,
    token: &str,
    species: &str,
    lat: f64,
    lng: f64,
    params: &Params,
) -> Result<Value> {
    transport.fetch(
        token,
        &point_request(&NEAREST_SPECIES, Some(species), lat, lng, params)?,
    )
}

/// Observations on a given date for up to ten areas.
///
/// The first (`params.observation_rank = "create"`) or last (`"mrec"`, the default)
/// observation of each species that day is returned.
pub fn get_historic_observations(
    transport: &Transport,
    token: &str,
    area: impl Into<Codes>,
    date: NaiveDate,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &historic_request(&area.into(), date, params)?)
}
