//! `catalog batch [FILE]` runs many requests against one catalog.
//!
//! Each non-blank line is `METHOD PATH [JSON BODY]`; lines starting with `#`
//! are comments. Every request gets one output line, whatever its status.
//! A line that cannot be parsed stops the batch.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info, instrument};

use catalog_adapters::{Catalog, controller::Method};

use crate::{
    cli::BatchArgs,
    commands::parse_method,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// One parsed batch line.
#[derive(Debug, PartialEq)]
struct BatchRequest<'a> {
    method: Method,
    path: &'a str,
    body: Option<&'a str>,
}

#[instrument(skip_all)]
pub fn execute(args: BatchArgs, catalog: &Catalog, output: &OutputManager) -> CliResult<()> {
    let reader: Box<dyn BufRead> = match args.file.as_deref() {
        None => Box::new(io::stdin().lock()),
        Some(path) if path == Path::new("-") => Box::new(io::stdin().lock()),
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_cli_context(|| format!("opening {}", path.display()))?,
        )),
    };

    let executed = run(reader, catalog, output)?;
    info!(executed, "Batch finished");
    Ok(())
}

/// Execute every line in order; returns how many requests ran.
fn run(reader: impl BufRead, catalog: &Catalog, output: &OutputManager) -> CliResult<usize> {
    let mut executed = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_cli_context(|| "reading batch input")?;
        let number = index + 1;

        let Some(request) = parse_line(&line).map_err(|reason| CliError::InvalidBatchLine {
            line: number,
            reason,
        })?
        else {
            continue;
        };

        debug!(line = number, method = %request.method, path = request.path, "Batch request");
        let response = catalog
            .router()
            .handle(&request.method, request.path, request.body);
        output.batch_line(request.method.as_str(), request.path, &response)?;
        executed += 1;
    }

    Ok(executed)
}

/// `Ok(None)` for blank and comment lines.
fn parse_line(line: &str) -> Result<Option<BatchRequest<'_>>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (method, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| "expected METHOD PATH [BODY]".to_owned())?;
    let rest = rest.trim_start();

    let (path, body) = match rest.split_once(char::is_whitespace) {
        Some((path, body)) => (path, Some(body.trim())),
        None => (rest, None),
    };

    if !path.starts_with('/') {
        return Err(format!("path must start with '/', got '{path}'"));
    }

    Ok(Some(BatchRequest {
        method: parse_method(method)?,
        path,
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# seed check"), Ok(None));
    }

    #[test]
    fn parses_method_path_and_body() {
        assert_eq!(
            parse_line("put /products/1   {\"stock\": 5}"),
            Ok(Some(BatchRequest {
                method: Method::PUT,
                path: "/products/1",
                body: Some("{\"stock\": 5}"),
            }))
        );
        assert_eq!(
            parse_line("GET /products"),
            Ok(Some(BatchRequest {
                method: Method::GET,
                path: "/products",
                body: None,
            }))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("GET").is_err());
        assert!(parse_line("GET products").is_err());
        assert!(parse_line("G(T /products").is_err());
    }
}
