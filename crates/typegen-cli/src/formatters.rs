//! Output formatters for CLI commands.
//!
//! Every command builds a serializable report and hands it to
//! [`format_output`], so all three formats carry the same information.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use typegen_core::cli::OutputFormat;

/// Formats a report according to the requested output format.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use typegen_cli::formatters::format_output;
/// use typegen_core::cli::OutputFormat;
///
/// #[derive(Serialize)]
/// struct Summary {
///     version: String,
///     routes: usize,
/// }
///
/// let summary = Summary { version: "0.3.0".to_string(), routes: 12 };
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"routes\": 12"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Formats data as one line of JSON, for scripts and pipes.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as colored `key: value` lines.
    ///
    /// Nested objects are indented under their key and arrays are listed
    /// with `-` bullets.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        match &value {
            Value::Object(_) | Value::Array(_) => write_block(&mut out, &value, 0),
            scalar => out.push_str(&format_scalar(scalar)),
        }
        Ok(out.trim_end().to_string())
    }

    fn write_block(out: &mut String, value: &Value, indent: usize) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    let key = key.blue().bold();
                    if is_nested(val) {
                        out.push_str(&format!("{pad}{key}:\n"));
                        write_block(out, val, indent + 1);
                    } else {
                        out.push_str(&format!("{pad}{key}: {}\n", format_scalar(val)));
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if is_nested(item) {
                        out.push_str(&format!("{pad}-\n"));
                        write_block(out, item, indent + 1);
                    } else {
                        out.push_str(&format!("{pad}- {}\n", format_scalar(item)));
                    }
                }
            }
            scalar => out.push_str(&format!("{pad}{}\n", format_scalar(scalar))),
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }

    fn format_scalar(value: &Value) -> String {
        match value {
            Value::Null => "none".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".dimmed().to_string(),
            Value::Object(_) => "{}".dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Counts {
        structs: usize,
        enums: usize,
    }

    #[derive(Serialize)]
    struct Report {
        version: String,
        hidden: bool,
        counts: Counts,
        items: Vec<String>,
        note: Option<String>,
    }

    fn report() -> Report {
        Report {
            version: "0.3.0".to_string(),
            hidden: false,
            counts: Counts {
                structs: 4,
                enums: 2,
            },
            items: vec!["User".to_string(), "get_user".to_string()],
            note: None,
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&report()).unwrap();
        assert!(output.contains("\"version\": \"0.3.0\""));
        assert!(output.contains("\"structs\": 4"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&report()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"items\":[\"User\",\"get_user\"]"));
    }

    #[test]
    fn test_pretty_format_layout() {
        colored::control::set_override(false);
        let output = pretty::format(&report()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        for expected in [
            "version: 0.3.0",
            "hidden: false",
            "counts:",
            "  structs: 4",
            "  enums: 2",
            "items:",
            "  - User",
            "  - get_user",
            "note: none",
        ] {
            assert!(lines.contains(&expected), "missing line {expected:?} in {output}");
        }
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_pretty_format_nested_array_items() {
        colored::control::set_override(false);
        let data = serde_json::json!({"items": [{"name": "User", "kind": "struct"}], "empty": []});
        let output = pretty::format(&data).unwrap();
        assert!(output.contains("empty: []"));
        assert!(output.contains("items:\n  -\n    "));
        assert!(output.contains("    kind: struct"));
        assert!(output.contains("    name: User"));
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = report();
        assert!(format_output(&data, OutputFormat::Json).unwrap().contains('\n'));
        assert!(!format_output(&data, OutputFormat::Text).unwrap().contains('\n'));
        assert!(format_output(&data, OutputFormat::Pretty).unwrap().contains("version"));
    }
}
