//! Checklist feeds and checklist contents

use crate::constants::MAX_CHECKLISTS;
use crate::endpoint::{Endpoint, Field, Request};
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;
use crate::validation::{clean_area, clean_checklist, clean_date};
use chrono::NaiveDate;
use serde_json::Value;

const MAX_VISITS: Field = Field::MaxResults {
    key: "maxVisits",
    limit: MAX_CHECKLISTS,
};

// Sorted by observation date; checklists are often submitted days later.
static RECENT_VISITS: Endpoint =
    Endpoint::new("/product/lists/{area}", &[MAX_VISITS]).with_fixed(&[("sortKey", "obs_dt")]);

static DATE_VISITS: Endpoint = Endpoint::new("/product/lists/{area}/{date}", &[MAX_VISITS])
    .with_fixed(&[("sortKey", "obs_dt")]);

static CHECKLIST: Endpoint = Endpoint::new("/product/checklist/view/{sub}", &[]);

fn visits_request(area: &str, date: Option<NaiveDate>, params: &Params) -> Result<Request> {
    let area = clean_area(area)?;
    let builder = match date {
        Some(date) => DATE_VISITS
            .builder()
            .path_arg("date", &clean_date(date)?),
        None => RECENT_VISITS.builder(),
    };
    builder.path_arg("area", &area).params(params)?.build()
}

/// Checklists submitted for an area, the most recent first unless a date
/// is given.
///
/// # Arguments
/// * `area` - A country, subnational1, subnational2 or location code
/// * `date` - Only checklists for this date
/// * `params` - max_results, 1 to 200 (API default 10)
pub fn get_visits(
    transport: &Transport,
    token: &str,
    area: &str,
    date: Option<NaiveDate>,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &visits_request(area, date, params)?)
}

/// Attributes and observations of a checklist, e.g. `S22893621`
pub fn get_checklist(transport: &Transport, token: &str, sub_id: &str) -> Result<Value> {
    let request = CHECKLIST
        .builder()
        .path_arg("sub", &clean_checklist(sub_id)?)
        .build()?;
    transport.fetch(token, &request)
}
