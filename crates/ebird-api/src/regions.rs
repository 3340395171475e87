//! Region lists and region details

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::transport::Transport;
use crate::validation::{clean_region, clean_region_type};
use serde_json::Value;

static REGION_LIST: Endpoint = Endpoint::new("/ref/region/list/{rtype}/{region}", &[]);
static ADJACENT_REGIONS: Endpoint = Endpoint::new("/ref/adjacent/{region}", &[]);
static REGION_INFO: Endpoint = Endpoint::new("/ref/region/info/{region}", &[]);

/// Sub-regions of a region.
///
/// Not every combination is supported by the API, e.g. the subnational2
/// regions of the whole world.
///
/// # Arguments
/// * `rtype` - `country`, `subnational1` or `subnational2`
/// * `region` - `world`, a country or a subnational1 code
pub fn get_regions(transport: &Transport, token: &str, rtype: &str, region: &str) -> Result<Value> {
    let request = REGION_LIST
        .builder()
        .path_arg("rtype", &clean_region_type(rtype)?)
        .path_arg("region", &clean_region(region)?)
        .build()?;
    transport.fetch(token, &request)
}

/// Regions bordering a region. Only some countries are supported.
pub fn get_adjacent_regions(transport: &Transport, token: &str, region: &str) -> Result<Value> {
    let request = ADJACENT_REGIONS
        .builder()
        .path_arg("region", &clean_region(region)?)
        .build()?;
    transport.fetch(token, &request)
}

/// Name, bounds and parent of a region
pub fn get_region(transport: &Transport, token: &str, region: &str) -> Result<Value> {
    let request = REGION_INFO
        .builder()
        .path_arg("region", &clean_region(region)?)
        .build()?;
    transport.fetch(token, &request)
}
