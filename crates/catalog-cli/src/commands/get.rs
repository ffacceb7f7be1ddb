//! `catalog get <ID>`

use catalog_adapters::Catalog;

use crate::{cli::GetArgs, commands::respond, error::CliResult, output::OutputManager};

pub fn execute(args: GetArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    respond(output, catalog.controller().get_by_id(&args.id).into_json())
}
