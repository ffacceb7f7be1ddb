//! `catalog request <METHOD> <PATH> [--body JSON]`

use tracing::instrument;

use catalog_adapters::Catalog;

use crate::{
    cli::RequestArgs,
    commands::{parse_method, respond},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(method = %args.method, path = %args.path))]
pub fn execute(args: RequestArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    let method = parse_method(&args.method).map_err(|message| CliError::InvalidInput {
        message,
        source: None,
    })?;

    let response = catalog
        .router()
        .handle(&method, &args.path, args.body.as_deref());
    respond(output, response)
}
