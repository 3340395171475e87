//! The eBird taxonomy: species, forms, groups, locales and versions

use crate::endpoint::{Endpoint, Field, Request};
use crate::error::{EbirdError, Result};
use crate::params::Params;
use crate::transport::Transport;
use crate::validation::{clean_ordering, clean_species_code};
use serde_json::Value;

static TAXONOMY: Endpoint = Endpoint::new(
    "/ref/taxonomy/ebird",
    &[
        Field::Category,
        Field::SpeciesLocale,
        Field::Version,
        Field::Species,
    ],
)
.with_fixed(&[("fmt", "json")]);

static TAXONOMY_FORMS: Endpoint = Endpoint::new("/ref/taxon/forms/{species}", &[]);

static TAXONOMY_GROUPS: Endpoint = Endpoint::new("/ref/sppgroup/{ordering}", &[Field::GroupLocale]);

static TAXONOMY_LOCALES: Endpoint = Endpoint::new("/ref/taxa-locales/ebird", &[]);

static TAXONOMY_VERSIONS: Endpoint = Endpoint::new("/ref/taxonomy/versions", &[]);

fn taxonomy_request(params: &Params) -> Result<Request> {
    // The API ignores `species` when a category is given
    if params.category.is_some() && params.species.is_some() {
        return Err(EbirdError::Validation(
            "Use either a category or a list of species, not both".to_string(),
        ));
    }
    TAXONOMY.builder().params(params)?.build()
}

/// Entries in the taxonomy.
///
/// # Arguments
/// * `params` - category, locale for common names, taxonomy version and
///   species (codes or scientific names)
pub fn get_taxonomy(transport: &Transport, token: &str, params: &Params) -> Result<Value> {
    transport.fetch(token, &taxonomy_request(params)?)
}

/// Codes of the subspecies and forms recognised for a species
pub fn get_taxonomy_forms(transport: &Transport, token: &str, species: &str) -> Result<Value> {
    let request = TAXONOMY_FORMS
        .builder()
        .path_arg("species", &clean_species_code(species)?)
        .build()?;
    transport.fetch(token, &request)
}

/// Species groups, in taxonomic (`ebird`) or likeness (`merlin`) order.
///
/// Group names are not translated for every locale.
pub fn get_taxonomy_groups(
    transport: &Transport,
    token: &str,
    ordering: &str,
    params: &Params,
) -> Result<Value> {
    let request = TAXONOMY_GROUPS
        .builder()
        .path_arg("ordering", &clean_ordering(ordering)?)
        .params(params)?
        .build()?;
    transport.fetch(token, &request)
}

/// Locales with translated common names
pub fn get_taxonomy_locales(transport: &Transport, token: &str) -> Result<Value> {
    transport.fetch(token, &TAXONOMY_LOCALES.builder().build()?)
}

/// Every version of the taxonomy, flagging the latest
pub fn get_taxonomy_versions(transport: &Transport, token: &str) -> Result<Value> {
    transport.fetch(token, &TAXONOMY_VERSIONS.builder().build()?)
}
