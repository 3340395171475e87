//! Rust client for the eBird API
//!
//! This crate wraps the eBird web services from the Cornell Lab of
//! Ornithology: recent and historic bird observations, hotspots, regions,
//! checklists and the eBird taxonomy. Arguments are validated before any
//! request is sent, and values equal to the API defaults are left out of
//! the query string.
//!
//! Every endpoint is available as a function taking a [`Transport`], the API
//! key and a [`Params`] with the optional arguments. [`Client`] keeps the key
//! and a set of defaults so they do not have to be repeated on each call.
//!
//! # Example
//!
//! ```no_run
//! use ebird_api::{observations, Client, Params, Transport};
//!
//! # fn example() -> Result<(), ebird_api::EbirdError> {
//! let client = Client::new("your-api-key", "en")?;
//!
//! // Recent observations in Nevada
//! let records = client.get_observations("US-NV")?;
//! for record in ebird_api::records::nest(records.as_array().unwrap_or(&vec![])) {
//!     println!("{}", record["species"]["common"]);
//! }
//!
//! // The same call without the client, looking back 7 days
//! let transport = Transport::new();
//! let params = Params::new().back(7).max_results(50);
//! observations::get_observations(&transport, "your-api-key", "US-NV,US-AZ", &params)?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! ## eBird API 2.0
//! - `GET /data/obs/{area}/recent` - Recent observations
//! - `GET /data/obs/{area}/recent/notable` - Recent notable observations
//! - `GET /data/obs/{area}/recent/{species}` - Recent observations of a species
//! - `GET /data/obs/geo/recent` - Recent nearby observations
//! - `GET /data/obs/geo/recent/notable` - Recent nearby notable observations
//! - `GET /data/obs/geo/recent/{species}` - Recent nearby observations of a species
//! - `GET /data/nearest/geo/recent/{species}` - Nearest observations of a species
//! - `GET /data/obs/{area}/historic/{date}` - Observations on a date
//! - `GET /ref/hotspot/{region}` - Hotspots in a region
//! - `GET /ref/hotspot/geo` - Nearby hotspots
//! - `GET /ref/hotspot/info/{loc}` - Hotspot details
//! - `GET /ref/region/list/{rtype}/{region}` - Sub-regions
//! - `GET /ref/adjacent/{region}` - Adjacent regions
//! - `GET /ref/region/info/{region}` - Region details
//! - `GET /product/lists/{area}[/{date}]` - Checklist feed
//! - `GET /product/checklist/view/{sub}` - Checklist contents
//! - `GET /product/top100/{region}/{date}` - Top 100 observers
//! - `GET /product/stats/{area}/{date}` - Daily totals
//! - `GET /product/spplist/{area}` - Species recorded in an area
//! - `GET /ref/taxonomy/ebird` - Taxonomy
//! - `GET /ref/taxon/forms/{species}` - Subspecies and forms
//! - `GET /ref/sppgroup/{ordering}` - Species groups
//! - `GET /ref/taxa-locales/ebird` - Common name locales
//! - `GET /ref/taxonomy/versions` - Taxonomy versions
//!
//! ## eBird API 1.1 (CSV)
//! - `GET /ref/hotspot/region`, `GET /ref/hotspot/geo` - Hotspot lists
//! - `GET /ref/location/list`, `GET /ref/location/find` - Region lists
//! - `GET /ref/taxa/ebird` - Taxonomy

mod client;
mod config;
mod error;

pub mod checklists;
pub mod constants;
pub mod endpoint;
pub mod hotspots;
pub mod legacy;
pub mod observations;
pub mod params;
pub mod records;
pub mod regions;
pub mod species;
pub mod statistics;
pub mod taxonomy;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{EbirdError, Result};
pub use params::{ParameterDefaults, Params};
pub use transport::Transport;
pub use types::{Codes, LocationType, Transform};
