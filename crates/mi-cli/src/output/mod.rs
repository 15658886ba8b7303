use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response as JSON.
///
/// `Table` output is resource specific, so this only distinguishes pretty
/// (`Json`, `Table`) from single-line (`Raw`) JSON.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render labeled fields as `Label - value` lines, one per field.
#[must_use]
pub fn render_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{label} - {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
