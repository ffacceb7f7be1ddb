//! `catalog create --name N --price P --stock S [--description D]`

use catalog_adapters::{Catalog, ProductInput};

use crate::{cli::CreateArgs, commands::respond, error::CliResult, output::OutputManager};

pub fn execute(args: CreateArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    let response = catalog.controller().create(args.into());
    respond(output, response.into_json())
}

impl From<CreateArgs> for ProductInput {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: Some(args.name),
            description: args.description,
            price: Some(args.price),
            stock: Some(args.stock),
        }
    }
}
