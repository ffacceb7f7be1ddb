//! Output management and formatting.
//!
//! Responses arrive as `{status, body}` pairs with a JSON body. JSON mode
//! prints the body as-is; human and plain modes print a status line followed
//! by a product table, a product card, or the confirmation message.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::{Value, json};

use catalog_adapters::ControllerResponse;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    pretty_json: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins; when it is `auto` the configured format is
    /// used, and `auto` there means Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output_format().unwrap_or_default(),
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            pretty_json: config.output.pretty_json,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command result; written even in quiet mode.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Render one controller response.
    ///
    /// Failed responses are only written in JSON mode; in the other modes
    /// the caller reports them on stderr.
    pub fn response(&self, response: &ControllerResponse<Value>) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.data(&self.encode(&body_json(response)));
        }
        if !response.is_success() {
            return Ok(());
        }

        self.success(&response.status.to_string())?;

        if let Some(message) = &response.body.message {
            self.print(message)?;
        }
        match &response.body.data {
            Some(Value::Array(products)) => self.data(&render_table(products)),
            Some(product @ Value::Object(_)) => self.data(&render_card(product)),
            Some(other) => self.data(&other.to_string()),
            None => Ok(()),
        }
    }

    /// One line per batch request: status, request, compact body.
    pub fn batch_line(
        &self,
        method: &str,
        path: &str,
        response: &ControllerResponse<Value>,
    ) -> io::Result<()> {
        let body = body_json(response);
        let line = if self.resolved_format == OutputFormat::Json {
            json!({
                "method": method,
                "path": path,
                "status": response.status.as_u16(),
                "body": body,
            })
            .to_string()
        } else {
            let status = if self.no_color {
                response.status.to_string()
            } else if response.is_success() {
                response.status.green().to_string()
            } else {
                response.status.red().to_string()
            };
            format!("{status}  {method} {path}  {body}")
        };
        self.data(&line)
    }

    fn encode(&self, value: &Value) -> String {
        let encoded = if self.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| value.to_string())
    }

}

// ── rendering ─────────────────────────────────────────────────────────────────

fn body_json(response: &ControllerResponse<Value>) -> Value {
    serde_json::to_value(&response.body).unwrap_or(Value::Null)
}

fn field(product: &Value, key: &str) -> String {
    match product.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn price(product: &Value) -> String {
    product
        .get("price")
        .and_then(Value::as_f64)
        .map(|p| format!("{p:.2}"))
        .unwrap_or_default()
}

/// Fixed-width table: id, name, price, stock, updated.
fn render_table(products: &[Value]) -> String {
    if products.is_empty() {
        return "No products.".into();
    }

    let headers = ["ID", "NAME", "PRICE", "STOCK", "UPDATED"];
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                field(p, "id"),
                field(p, "name"),
                price(p),
                field(p, "stock"),
                field(p, "updatedAt"),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = vec![line(headers)];
    for row in &rows {
        out.push(line([&row[0], &row[1], &row[2], &row[3], &row[4]]));
    }
    out.join("\n")
}

/// `key: value` lines for a single product.
fn render_card(product: &Value) -> String {
    [
        ("id", field(product, "id")),
        ("name", field(product, "name")),
        ("description", field(product, "description")),
        ("price", price(product)),
        ("stock", field(product, "stock")),
        ("created", field(product, "createdAt")),
        ("updated", field(product, "updatedAt")),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<12} {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

// ── tests ─────────────────────────────────────────────────────────────────────
