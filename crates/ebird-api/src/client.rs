//! eBird API client holding the key and the defaults for every call

use crate::config::ClientConfig;
use crate::constants::{
    DEFAULT_BACK, DEFAULT_DISTANCE, DEFAULT_MAX_OBSERVERS, DEFAULT_OBSERVATION_ORDER,
    MAX_CHECKLISTS,
};
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::Codes;
use crate::validation::clean_locale;
use crate::{checklists, hotspots, observations, regions, species, statistics, taxonomy};
use chrono::NaiveDate;
use serde_json::Value;

/// Client for the eBird 2.0 API.
///
/// The public fields are the values an application usually keeps fixed,
/// e.g. whether to include records that have not been reviewed yet. They
/// are validated on each call, so an invalid value fails the call before
/// any request is sent.
#[derive(Debug, Clone)]
pub struct Client {
    pub api_key: String,
    pub locale: String,
    pub back: u32,
    pub max_observations: Option<u32>,
    pub max_visits: u32,
    pub max_observers: u32,
    pub category: Option<String>,
    pub detail: String,
    pub dist: u32,
    pub hotspot: bool,
    pub provisional: bool,
    pub sort: String,
    transport: Transport,
}

impl Client {
    /// Create a client; fails if the locale is not supported
    pub fn new(api_key: impl Into<String>, locale: &str) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            locale: clean_locale(locale)?,
            back: DEFAULT_BACK,
            max_observations: None,
            max_visits: MAX_CHECKLISTS,
            max_observers: DEFAULT_MAX_OBSERVERS,
            category: None,
            detail: "full".to_string(),
            dist: DEFAULT_DISTANCE,
            hotspot: false,
            provisional: true,
            sort: DEFAULT_OBSERVATION_ORDER.to_string(),
            transport: Transport::new(),
        })
    }

    /// Create a client from [`ClientConfig::from_env`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(&config.api_key, &config.locale)?.with_transport(config.transport()))
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Defaults shared by the observation endpoints
    fn observation_params(&self) -> Params {
        Params {
            back: Some(self.back),
            dist: Some(self.dist),
            max_results: self.max_observations,
            locale: Some(self.locale.clone()),
            provisional: Some(self.provisional),
            hotspot: Some(self.hotspot),
            detail: Some(self.detail.clone()),
            category: self.category.clone(),
            sort: Some(self.sort.clone()),
            ..Params::default()
        }
    }

    fn observation_params_within(&self, dist: Option<u32>) -> Params {
        Params {
            dist,
            ..Params::default()
        }
        .or(&self.observation_params())
    }

    /// Recent observations for up to ten regions or locations of the same type
    pub fn get_observations(&self, area: impl Into<Codes>) -> Result<Value> {
        observations::get_observations(
            &self.transport,
            &self.api_key,
            area,
            &self.observation_params(),
        )
    }

    /// Recent observations of rare species
    pub fn get_notable_observations(&self, area: impl Into<Codes>) -> Result<Value> {
        observations::get_notable_observations(
            &self.transport,
            &self.api_key,
            area,
            &self.observation_params(),
        )
    }

    /// Recent observations of a species
    pub fn get_species_observations(&self, species: &str, area: impl Into<Codes>) -> Result<Value> {
        observations::get_species_observations(
            &self.transport,
            &self.api_key,
            species,
            area,
            &self.observation_params(),
        )
    }

    /// Observations on a date
    pub fn get_historic_observations(
        &self,
        area: impl Into<Codes>,
        date: NaiveDate,
    ) -> Result<Value> {
        observations::get_historic_observations(
            &self.transport,
            &self.api_key,
            area,
            date,
            &self.observation_params(),
        )
    }

    /// Recent observations within `dist` km (default [`Client::dist`]) of a point
    pub fn get_nearby_observations(&self, lat: f64, lng: f64, dist: Option<u32>) -> Result<Value> {
        observations::get_nearby_observations(
            &self.transport,
            &self.api_key,
            lat,
            lng,
            &self.observation_params_within(dist),
        )
    }

    pub fn get_nearby_notable(&self, lat: f64, lng: f64, dist: Option<u32>) -> Result<Value> {
        observations::get_nearby_notable(
            &self.transport,
            &self.api_key,
            lat,
            lng,
            &self.observation_params_within(dist),
        )
    }

    pub fn get_nearby_species(
        &self,
        species: &str,
        lat: f64,
        lng: f64,
        dist: Option<u32>,
    ) -> Result<Value> {
        observations::get_nearby_species(
            &self.transport,
            &self.api_key,
            species,
            lat,
            lng,
            &self.observation_params_within(dist),
        )
    }

    pub fn get_nearest_species(
        &self,
        species: &str,
        lat: f64,
        lng: f64,
        dist: Option<u32>,
    ) -> Result<Value> {
        observations::get_nearest_species(
            &self.transport,
            &self.api_key,
            species,
            lat,
            lng,
            &self.observation_params_within(dist),
        )
    }

    /// Hotspots in a region visited in the last `back` days (default
    /// [`Client::back`])
    pub fn get_hotspots(&self, region: &str, back: Option<u32>) -> Result<Value> {
        let params = Params {
            back,
            ..Params::default()
        }
        .or(&Params::new().back(self.back));
        hotspots::get_hotspots(&self.transport, &self.api_key, region, &params)
    }

    /// Hotspots visited in the last [`Client::back`] days near a point
    pub fn get_nearby_hotspots(&self, lat: f64, lng: f64, dist: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .dist(dist.unwrap_or(self.dist))
            .back(self.back);
        hotspots::get_nearby_hotspots(&self.transport, &self.api_key, lat, lng, &params)
    }

    pub fn get_hotspot(&self, loc_id: &str) -> Result<Value> {
        hotspots::get_hotspot(&self.transport, &self.api_key, loc_id)
    }

    /// Details of a hotspot or private location
    pub fn get_location(&self, loc_id: &str) -> Result<Value> {
        hotspots::get_location(&self.transport, &self.api_key, loc_id)
    }

    pub fn get_regions(&self, rtype: &str, region: &str) -> Result<Value> {
        regions::get_regions(&self.transport, &self.api_key, rtype, region)
    }

    pub fn get_adjacent_regions(&self, region: &str) -> Result<Value> {
        regions::get_adjacent_regions(&self.transport, &self.api_key, region)
    }

    pub fn get_region(&self, region: &str) -> Result<Value> {
        regions::get_region(&self.transport, &self.api_key, region)
    }

    /// Up to [`Client::max_visits`] checklists for an area
    pub fn get_visits(&self, area: &str, date: Option<NaiveDate>) -> Result<Value> {
        let params = Params::new().max_results(self.max_visits);
        checklists::get_visits(&self.transport, &self.api_key, area, date, &params)
    }

    pub fn get_checklist(&self, sub_id: &str) -> Result<Value> {
        checklists::get_checklist(&self.transport, &self.api_key, sub_id)
    }

    /// Top [`Client::max_observers`] observers, ranked by `spp` or `cl`
    pub fn get_top_100(&self, region: &str, date: NaiveDate, rank: &str) -> Result<Value> {
        let params = Params::new().rank(rank).max_results(self.max_observers);
        statistics::get_top_100(&self.transport, &self.api_key, region, date, &params)
    }

    pub fn get_totals(&self, area: &str, date: NaiveDate) -> Result<Value> {
        statistics::get_totals(&self.transport, &self.api_key, area, date)
    }

    /// The taxonomy for [`Client::category`], or all of it
    pub fn get_taxonomy(&self) -> Result<Value> {
        let params = Params {
            category: self.category.clone(),
            locale: Some(self.locale.clone()),
            ..Params::default()
        };
        taxonomy::get_taxonomy(&self.transport, &self.api_key, &params)
    }

    pub fn get_taxonomy_forms(&self, species: &str) -> Result<Value> {
        taxonomy::get_taxonomy_forms(&self.transport, &self.api_key, species)
    }

    pub fn get_taxonomy_groups(&self, ordering: &str) -> Result<Value> {
        let params = Params::new().locale(&self.locale);
        taxonomy::get_taxonomy_groups(&self.transport, &self.api_key, ordering, &params)
    }

    pub fn get_taxonomy_locales(&self) -> Result<Value> {
        taxonomy::get_taxonomy_locales(&self.transport, &self.api_key)
    }

    pub fn get_taxonomy_versions(&self) -> Result<Value> {
        taxonomy::get_taxonomy_versions(&self.transport, &self.api_key)
    }

    pub fn get_species_list(&self, area: &str) -> Result<Value> {
        species::get_species_list(&self.transport, &self.api_key, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> Client {
        Client::new("key", "en")
            .unwrap()
            .with_transport(Transport::new().with_base_url(server.base_url()))
    }

    #[test]
    fn test_new_validates_locale() {
        assert_eq!(Client::new("key", "EN_us").unwrap().locale, "en_US");
        assert!(Client::new("key", "xx").is_err());
    }

    #[test]
    fn test_defaults() {
        let client = Client::new("key", "en").unwrap();
        assert_eq!(client.back, 14);
        assert_eq!(client.max_observations, None);
        assert_eq!(client.max_visits, 200);
        assert_eq!(client.max_observers, 100);
        assert_eq!(client.category, None);
        assert_eq!(client.detail, "full");
        assert_eq!(client.dist, 25);
        assert!(!client.hotspot);
        assert!(client.provisional);
        assert_eq!(client.sort, "date");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_key: "key".to_string(),
            locale: "fr".to_string(),
            base_url: "http://localhost:9000".to_string(),
            legacy_url: Transport::LEGACY_URL.to_string(),
            timeout: std::time::Duration::from_secs(5),
        };
        let client = Client::from_config(&config).unwrap();
        assert_eq!(client.locale, "fr");
        assert_eq!(client.transport().base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_get_observations_injects_defaults() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/obs/US-NV/recent")
                .header("X-eBirdApiToken", "key")
                .query_param("detail", "full")
                .query_param("includeProvisional", "true");
            then.status(200).json_body(json!([]));
        });

        client(&server).get_observations("US-NV").unwrap();

        mock.assert();
    }

    #[test]
    fn test_changed_default_is_sent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/obs/geo/recent")
                .query_param("back", "7")
                .query_param("dist", "5")
                .query_param("sort", "species");
            then.status(200).json_body(json!([]));
        });

        let mut client = client(&server);
        client.back = 7;
        client.sort = "species".to_string();
        client.get_nearby_observations(45.0, -1.0, Some(5)).unwrap();

        mock.assert();
    }

    #[test]
    fn test_invalid_default_fails_before_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/data/obs/US-NV/recent");
            then.status(200).json_body(json!([]));
        });

        let mut client = client(&server);
        client.back = 31;
        assert!(client.get_observations("US-NV").unwrap_err().is_validation());

        mock.assert_hits(0);
    }

    #[test]
    fn test_get_visits_sends_max_visits() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/product/lists/US-NV")
                .query_param("maxResults", "200")
                .query_param("sortKey", "obs_dt");
            then.status(200).json_body(json!([]));
        });

        client(&server).get_visits("US-NV", None).unwrap();

        mock.assert();
    }

    #[test]
    fn test_get_top_100_uses_max_observers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/product/top100/US-NV/2020/01/01")
                .query_param("rankedBy", "cl");
            then.status(200).json_body(json!([]));
        });

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        client(&server).get_top_100("US-NV", date, "cl").unwrap();

        mock.assert();
    }

    #[test]
    fn test_get_hotspots_defaults_to_client_back() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/US-NV")
                .query_param("back", "14")
                .query_param("fmt", "json");
            then.status(200).json_body(json!([]));
        });
        let recent = server.mock(|when, then| {
            when.method(GET)
                .path("/ref/hotspot/US-NV")
                .query_param("back", "3");
            then.status(200).json_body(json!([]));
        });

        let client = client(&server);
        client.get_hotspots("US-NV", None).unwrap();
        client.get_hotspots("US-NV", Some(3)).unwrap();

        mock.assert();
        recent.assert();
    }

    #[test]
    fn test_nearby_dist_overrides_client_dist() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/obs/geo/recent")
                .query_param("dist", "10")
                .query_param("detail", "full");
            then.status(200).json_body(json!([]));
        });

        client(&server).get_nearby_observations(45.0, -1.0, Some(10)).unwrap();

        mock.assert();
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
