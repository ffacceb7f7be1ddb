//! # Catalog CLI
//!
//! Drives an in-memory product catalog from the command line.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`] and the catalog.
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success (2xx response)                   |
//! |  1   | Internal error (5xx response)            |
//! |  2   | User / input error (400, 405, bad args)  |
//! |  3   | Product or route not found (404)         |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use catalog_adapters::Catalog;

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        empty = cli.global.empty,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                &cli.global,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let global = cli.global.clone();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            debug!("Catalog command completed");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &global),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = cli.global;
    let catalog = || build_catalog(&global, &config);

    match cli.command {
        Commands::List => commands::list::execute(&catalog()?, &output),
        Commands::Get(args) => commands::get::execute(args, &catalog()?, &output),
        Commands::Create(args) => commands::create::execute(args, &catalog()?, &output),
        Commands::Update(args) => commands::update::execute(args, &catalog()?, &output),
        Commands::Delete(args) => commands::delete::execute(args, &catalog()?, &output),
        Commands::Request(args) => commands::request::execute(args, &catalog()?, &output),
        Commands::Batch(args) => commands::batch::execute(args, &catalog()?, &output),
        Commands::Config(cmd) => commands::config::execute(cmd, &config, &output),
    }
}

/// `--empty` wins over `store.seed`.
fn build_catalog(global: &GlobalArgs, config: &AppConfig) -> CliResult<Catalog> {
    let seed = config.store.seed && !global.empty;
    Ok(Catalog::builder().seed(seed).build()?)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    // Errors print even with --quiet.
    let verbose = global.verbose > 0;
    let colored = !global.no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    let msg = if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn empty_flag_overrides_seed_config() {
        let cli = Cli::parse_from(["catalog", "--empty", "list"]);
        let catalog = build_catalog(&cli.global, &AppConfig::default()).unwrap();
        assert!(catalog.store().is_empty().unwrap());
    }

    #[test]
    fn seed_config_respected() {
        let cli = Cli::parse_from(["catalog", "list"]);
        let mut config = AppConfig::default();
        assert_eq!(build_catalog(&cli.global, &config).unwrap().store().len().unwrap(), 3);

        config.store.seed = false;
        assert!(build_catalog(&cli.global, &config).unwrap().store().is_empty().unwrap());
    }
}
