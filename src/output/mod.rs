//! Output formatting for calculator results.
//!
//! - [`csv`] - CSV output
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

use crate::calculator::Calculation;
use clap::ValueEnum;
use std::error::Error;
use std::io::Write;

pub use csv::{quote_field, subnet_csv};
pub use json::subnet_json;
pub use terminal::subnet_text;

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled listing, one block per input
    #[default]
    Text,
    /// One row per input with a header
    Csv,
    /// Array of objects
    Json,
}

/// Write every calculation in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    calculations: &[Calculation],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    log::debug!(
        "render {} calculation(s) as {:?}",
        calculations.len(),
        format
    );
    match format {
        OutputFormat::Text => subnet_text(out, calculations)?,
        OutputFormat::Csv => subnet_csv(out, calculations)?,
        OutputFormat::Json => subnet_json(out, calculations)?,
    }
    Ok(())
}
