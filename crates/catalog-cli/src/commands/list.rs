//! `catalog list`

use catalog_adapters::Catalog;

use crate::{commands::respond, error::CliResult, output::OutputManager};

pub fn execute(catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    respond(output, catalog.controller().list().into_json())
}
