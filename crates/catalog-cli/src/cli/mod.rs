//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "catalog",
    bin_name = "catalog",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Product catalog over an in-memory store",
    long_about = "Catalog lists, creates, updates and deletes products held in \
                  an in-memory store. Every invocation starts from a fresh \
                  store; use `batch` to run several requests against one.",
    after_help = "EXAMPLES:\n\
        \x20 catalog list\n\
        \x20 catalog get 1\n\
        \x20 catalog create --name Mouse --price 29.99 --stock 50\n\
        \x20 catalog request PUT /products/1 --body '{\"stock\": 5}'\n\
        \x20 catalog batch requests.txt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every product.
    #[command(visible_alias = "ls", about = "List all products")]
    List,

    /// Show one product.
    #[command(
        about = "Show a product by id",
        after_help = "EXAMPLES:\n\
            \x20 catalog get 1\n\
            \x20 catalog get 1 --output-format json"
    )]
    Get(GetArgs),

    /// Create a product.
    #[command(
        about = "Create a product",
        after_help = "EXAMPLES:\n\
            \x20 catalog create --name Mouse --price 29.99 --stock 50\n\
            \x20 catalog create -n Cable -d \"USB-C, 1m\" -p 5 -s 100"
    )]
    Create(CreateArgs),

    /// Change some fields of a product.
    #[command(
        about = "Update a product",
        after_help = "EXAMPLES:\n\
            \x20 catalog update 1 --stock 5\n\
            \x20 catalog update 2 --name \"Mouse Logitech M185\" --price 24.99"
    )]
    Update(UpdateArgs),

    /// Delete a product.
    #[command(visible_alias = "rm", about = "Delete a product")]
    Delete(DeleteArgs),

    /// Route one raw request through the catalog router.
    #[command(
        about = "Send a raw METHOD /path request",
        after_help = "EXAMPLES:\n\
            \x20 catalog request GET /products\n\
            \x20 catalog request POST /api/products --body '{\"name\":\"Mouse\",\"price\":29.99,\"stock\":50}'"
    )]
    Request(RequestArgs),

    /// Run a sequence of raw requests against one catalog.
    #[command(
        about = "Run requests from a file or stdin",
        after_help = "Each line is `METHOD PATH [JSON BODY]`. Blank lines and \
            lines starting with '#' are skipped.\n\n\
            EXAMPLES:\n\
            \x20 catalog batch requests.txt\n\
            \x20 printf 'DELETE /products/1\\nGET /products\\n' | catalog batch"
    )]
    Batch(BatchArgs),

    /// Inspect the CLI configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 catalog config get store.seed\n\
            \x20 catalog config list\n\
            \x20 catalog config path"
    )]
    Config(ConfigCommands),
}

// ── product commands ──────────────────────────────────────────────────────────

/// Arguments for `catalog get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for `catalog create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short = 'n', long = "name", help = "Product name")]
    pub name: String,

    #[arg(
        short = 'd',
        long = "description",
        help = "Product description (default: empty)"
    )]
    pub description: Option<String>,

    #[arg(
        short = 'p',
        long = "price",
        allow_negative_numbers = true,
        help = "Unit price"
    )]
    pub price: f64,

    #[arg(
        short = 's',
        long = "stock",
        allow_negative_numbers = true,
        help = "Units in stock"
    )]
    pub stock: i64,
}

/// Arguments for `catalog update`.  Omitted fields keep their value.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(short = 'n', long = "name", help = "New name")]
    pub name: Option<String>,

    #[arg(short = 'd', long = "description", help = "New description")]
    pub description: Option<String>,

    #[arg(
        short = 'p',
        long = "price",
        allow_negative_numbers = true,
        help = "New unit price"
    )]
    pub price: Option<f64>,

    #[arg(
        short = 's',
        long = "stock",
        allow_negative_numbers = true,
        help = "New stock level"
    )]
    pub stock: Option<i64>,
}

/// Arguments for `catalog delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Product id.
    #[arg(value_name = "ID")]
    pub id: String,
}

// ── raw requests ──────────────────────────────────────────────────────────────

/// Arguments for `catalog request`.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// HTTP method (GET, POST, PUT, DELETE).
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// Request path, e.g. `/products/1` or `/api/products`.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// JSON request body.
    #[arg(short = 'b', long = "body", value_name = "JSON")]
    pub body: Option<String>,
}

/// Arguments for `catalog batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Request file; reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `catalog config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `store.seed`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
