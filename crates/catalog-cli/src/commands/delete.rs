//! `catalog delete <ID>`

use catalog_adapters::Catalog;

use crate::{cli::DeleteArgs, commands::respond, error::CliResult, output::OutputManager};

pub fn execute(args: DeleteArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    respond(output, catalog.controller().remove(&args.id).into_json())
}
