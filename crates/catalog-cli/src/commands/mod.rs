//! Command handlers.
//!
//! Each handler turns its arguments into one controller or router call and
//! hands the response to [`respond`].

pub mod batch;
pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod request;
pub mod update;

use serde_json::Value;

use catalog_adapters::{ControllerResponse, controller::Method};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print `response`, then turn a failed one into an error carrying its status.
pub(crate) fn respond(output: &OutputManager, response: ControllerResponse<Value>) -> CliResult<()> {
    output.response(&response)?;

    if response.is_success() {
        return Ok(());
    }
    Err(CliError::Rejected {
        status: response.status,
        message: response
            .body
            .error
            .unwrap_or_else(|| "Request failed".into()),
    })
}

/// Accepts any case: `get`, `Get`, `GET`.
pub(crate) fn parse_method(raw: &str) -> Result<Method, String> {
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes())
        .map_err(|_| format!("'{raw}' is not a valid HTTP method"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_are_case_insensitive() {
        assert_eq!(parse_method("get"), Ok(Method::GET));
        assert_eq!(parse_method("Delete"), Ok(Method::DELETE));
        assert!(parse_method("NOT A METHOD").is_err());
    }
}
