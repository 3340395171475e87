//! Species recorded in an area

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::transport::Transport;
use crate::validation::clean_area;
use serde_json::Value;

static SPECIES_LIST: Endpoint = Endpoint::new("/product/spplist/{area}", &[]);

/// Codes of every species ever recorded in a region or location
pub fn get_species_list(transport: &Transport, token: &str, area: &str) -> Result<Value> {
    let request = SPECIES_LIST
        .builder()
        .path_arg("area", &clean_area(area)?)
        .build()?;
    transport.fetch(token, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_get_species_list() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/product/spplist/US-NV-011");
            then.status(200).json_body(json!(["horlar", "cangoo"]));
        });

        let transport = Transport::new().with_base_url(server.base_url());
        let result = get_species_list(&transport, "key", "us-nv-011").unwrap();

        mock.assert();
        assert_eq!(result, json!(["horlar", "cangoo"]));
    }

    #[test]
    fn test_get_species_list_rejects_bad_area() {
        let transport = Transport::new();
        assert!(get_species_list(&transport, "key", "US-").is_err());
    }
}
