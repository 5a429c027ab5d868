//! Output formatting and display utilities.

mod error;
mod format;
mod table;

pub use error::{print_error, CliError, ErrorKind};
pub use format::OutputFormat;
pub use table::TableDisplay;

use colored::Colorize;
use renderbase_sdk::ListResponse;
use serde::Serialize;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Prints a warning message.
pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Serializes data for the machine-readable formats.
fn serialize<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)
            .map_err(|e| CliError::output(format!("Failed to serialize JSON: {e}"))),
        OutputFormat::JsonCompact => serde_json::to_string(data)
            .map_err(|e| CliError::output(format!("Failed to serialize JSON: {e}"))),
        OutputFormat::Yaml => serde_yaml::to_string(data)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| CliError::output(format!("Failed to serialize YAML: {e}"))),
        OutputFormat::Table | OutputFormat::Plain => Err(CliError::output(format!(
            "{format} is not a serialization format"
        ))),
    }
}

/// Prints a single item in the selected format.
pub fn print_output<T: TableDisplay>(data: &T, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => data.print_details(),
        OutputFormat::Plain => println!("{}", data.plain_id()),
        _ => println!("{}", serialize(data, format)?),
    }
    Ok(())
}

/// Prints one page of a list in the selected format.
///
/// Machine-readable formats get the whole page including pagination fields.
pub fn print_page<T: TableDisplay>(
    page: &ListResponse<T>,
    noun: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            if page.is_empty() {
                info(&format!("No {noun} found"));
                return Ok(());
            }
            println!("{}", table::render_table(&page.data));
            if page.has_more() {
                info(&format!(
                    "Page {} of {} ({} {noun} total). Use --page to see more.",
                    page.page,
                    page.total_pages(),
                    page.total
                ));
            }
        }
        OutputFormat::Plain => {
            for item in &page.data {
                println!("{}", item.plain_id());
            }
        }
        _ => println!("{}", serialize(page, format)?),
    }
    Ok(())
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
