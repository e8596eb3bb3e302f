//! Renderer module
//!
//! Renders a ValidationReport to different output formats: text, jsonl, json

use colored::Colorize;
use serde::Serialize;
use serde_json::json;

use crate::core::model::{Finding, ValidationReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Full JSON view of a run
#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    report: &'a str,
    valid: bool,
    citations: usize,
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

/// Renderer for validation reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string. `report_name` is the report path as given.
    pub fn render(&self, report_name: &str, report: &ValidationReport) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report_name, report),
            OutputFormat::Jsonl => self.render_jsonl(report_name, report),
            OutputFormat::Json => self.render_json(report_name, report),
        }
    }

    /// Render as human-readable text
    fn render_text(&self, report_name: &str, report: &ValidationReport) -> String {
        let mut output = String::new();

        if !report.warnings.is_empty() {
            output.push_str(&format!("{}\n", "Warnings:".yellow().bold()));
            for warning in &report.warnings {
                output.push_str(&format!("  - {}\n", warning.message));
            }
            output.push('\n');
        }

        if !report.errors.is_empty() {
            output.push_str(&format!("{}\n", "Validation errors:".red().bold()));
            for error in &report.errors {
                output.push_str(&format!("  - {}\n", error.message));
            }
        } else {
            let ok = format!("All file references in {} are valid", report_name);
            output.push_str(&format!("{}\n", ok.green()));
        }

        output
    }

    /// Render as JSON Lines: warnings, errors, then a summary line
    fn render_jsonl(&self, report_name: &str, report: &ValidationReport) -> String {
        let summary = json!({
            "kind": "summary",
            "report": report_name,
            "citations": report.citations,
            "errors": report.errors.len(),
            "warnings": report.warnings.len(),
            "valid": report.is_valid(),
        });

        let mut lines: Vec<String> = report
            .warnings
            .iter()
            .chain(report.errors.iter())
            .filter_map(|finding| self.to_json(finding))
            .collect();
        lines.extend(self.to_json(&summary));

        let mut output = lines.join(if self.config.pretty { "\n\n" } else { "\n" });
        output.push('\n');
        output
    }

    /// Render as a single JSON object
    fn render_json(&self, report_name: &str, report: &ValidationReport) -> String {
        let summary = JsonSummary {
            report: report_name,
            valid: report.is_valid(),
            citations: report.citations,
            errors: &report.errors,
            warnings: &report.warnings,
        };
        let mut output = self.to_json(&summary).unwrap_or_else(|| "{}".to_string());
        output.push('\n');
        output
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Option<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(value).ok()
        } else {
            serde_json::to_string(value).ok()
        }
    }
}
