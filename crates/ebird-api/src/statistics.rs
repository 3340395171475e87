//! Daily statistics: top observers and totals

use crate::constants::MAX_OBSERVERS;
use crate::endpoint::{Endpoint, Field, Request};
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;
use crate::validation::{clean_area, clean_date, clean_region};
use chrono::NaiveDate;
use serde_json::Value;

static TOP_100: Endpoint = Endpoint::new(
    "/product/top100/{region}/{date}",
    &[
        Field::RankedBy,
        Field::MaxResults {
            key: "maxObservers",
            limit: MAX_OBSERVERS,
        },
    ],
);

static TOTALS: Endpoint = Endpoint::new("/product/stats/{area}/{date}", &[]);

fn top_100_request(region: &str, date: NaiveDate, params: &Params) -> Result<Request> {
    TOP_100
        .builder()
        .path_arg("region", &clean_region(region)?)
        .path_arg("date", &clean_date(date)?)
        .params(params)?
        .build()
}

/// Observers with the most species (`params.rank = "spp"`, the default) or
/// the most checklists (`"cl"`) on a date
pub fn get_top_100(
    transport: &Transport,
    token: &str,
    region: &str,
    date: NaiveDate,
    params: &Params,
) -> Result<Value> {
    transport.fetch(token, &top_100_request(region, date, params)?)
}

/// Number of contributors, checklists and species for an area on a date
pub fn get_totals(
    transport: &Transport,
    token: &str,
    area: &str,
    date: NaiveDate,
) -> Result<Value> {
    let request = TOTALS
        .builder()
        .path_arg("area", &clean_area(area)?)
        .path_arg("date", &clean_date(date)?)
        .build()?;
    transport.fetch(token, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 5, 11).unwrap()
    }

    #[test]
    fn test_top_100_defaults_not_sent() {
        let params = Params::new().rank("spp").max_results(100);
        let request = top_100_request("US-NV", date(), &params).unwrap();
        assert_eq!(request.path, "/product/top100/US-NV/2019/05/11");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_top_100_rank_and_max_results() {
        let params = Params::new().rank("cl").max_results(50);
        let request = top_100_request("US-NV", date(), &params).unwrap();
        assert_eq!(request.query_value("rankedBy"), Some("cl"));
        assert_eq!(request.query_value("maxResults"), Some("50"));
    }

    #[test]
    fn test_top_100_rejects_invalid_values() {
        assert!(top_100_request("US-NV", date(), &Params::new().rank("species")).is_err());
        assert!(top_100_request("US-NV", date(), &Params::new().max_results(101)).is_err());
        assert!(top_100_request("L123", date(), &Params::new()).is_err());
    }

    #[test]
    fn test_get_totals() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/product/stats/US-NV/2019/05/11");
            then.status(200)
                .json_body(json!({"numChecklists": 120, "numSpecies": 180}));
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let result = get_totals(&transport, "key", "US-NV", date()).unwrap();

        mock.assert();
        assert_eq!(result["numSpecies"], 180);
    }
}
