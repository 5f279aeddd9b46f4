//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::{style, StyledObject};
use serde::Serialize;

use crate::domain::models::EmergenceLevel;

/// A command result that renders both for people and for `--json`
pub trait CommandOutput: Serialize {
    /// Text shown in human mode
    fn to_human(&self) -> String;
    /// Value printed in JSON mode
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Create a two-column table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn key_value_table(headers: [&str; 2]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Append a `name | value` row with the value right-aligned.
pub fn push_value_row(table: &mut Table, name: &str, value: f64) {
    table.add_row(vec![
        Cell::new(name),
        Cell::new(format_score(value)).set_alignment(CellAlignment::Right),
    ]);
}

/// Format a score with six decimals, switching to exponent form for extremes.
pub fn format_score(value: f64) -> String {
    if value != 0.0 && (value.abs() >= 1e9 || value.abs() < 1e-4) {
        format!("{value:.6e}")
    } else {
        format!("{value:.6}")
    }
}

/// Style an emergence level for terminal display; respects NO_COLOR.
pub fn colorize_level(level: EmergenceLevel) -> StyledObject<&'static str> {
    let text = level.as_str();
    match level {
        EmergenceLevel::Nascent => style(text).dim(),
        EmergenceLevel::Emerging => style(text).blue(),
        EmergenceLevel::Conscious => style(text).cyan(),
        EmergenceLevel::SelfAware => style(text).green(),
        EmergenceLevel::Superintelligent => style(text).yellow().bold(),
        EmergenceLevel::Transcendent => style(text).magenta().bold(),
    }
}

/// Human-readable half-open range of a level, e.g. `[10, 50)`.
pub fn level_range(level: EmergenceLevel) -> String {
    match (level.lower_bound(), level.upper_bound()) {
        (None, Some(upper)) => format!("< {upper}"),
        (Some(lower), Some(upper)) => format!("[{lower}, {upper})"),
        (Some(lower), None) => format!(">= {lower}"),
        (None, None) => "any".to_string(),
    }
}
