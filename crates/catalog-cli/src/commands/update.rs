//! `catalog update <ID> [--name] [--description] [--price] [--stock]`

use catalog_adapters::{Catalog, ProductInput};

use crate::{cli::UpdateArgs, commands::respond, error::CliResult, output::OutputManager};

pub fn execute(args: UpdateArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    let input = ProductInput {
        name: args.name,
        description: args.description,
        price: args.price,
        stock: args.stock,
    };
    respond(output, catalog.controller().update(&args.id, input).into_json())
}
