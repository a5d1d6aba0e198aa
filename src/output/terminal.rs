//! Terminal output utilities.

use crate::calculator::Calculation;
use crate::models::SubnetInfo;
use colored::Colorize;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 16;

fn write_line<W: Write, T: ToString>(out: &mut W, label: &str, value: T) -> io::Result<()> {
    writeln!(
        out,
        "  {label:<width$} {}",
        value.to_string().green(),
        width = LABEL_WIDTH
    )
}

fn write_info<W: Write>(out: &mut W, info: &SubnetInfo) -> io::Result<()> {
    write_line(out, "Address:", info.address())?;
    write_line(out, "Network:", info.cidr())?;
    write_line(out, "Broadcast:", info.broadcast())?;
    write_line(out, "First usable:", info.first_usable())?;
    write_line(out, "Last usable:", info.last_usable())?;
    write_line(out, "Subnet mask:", info.subnet_mask())?;
    write_line(out, "Wildcard mask:", info.wildcard_mask())?;
    write_line(out, "Prefix length:", format!("/{}", info.prefix_len()))?;
    write_line(out, "Usable hosts:", info.usable_hosts())?;
    write_line(out, "Total addresses:", info.total_addresses())
}

/// Print each calculation as a heading followed by labelled values.
///
/// Colors follow the global `colored` override, so `--no-color` and a
/// non-terminal stdout give plain text.
pub fn subnet_text<W: Write>(out: &mut W, calculations: &[Calculation]) -> io::Result<()> {
    for (i, calc) in calculations.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", calc.input.bold())?;
        match &calc.result {
            Ok(info) => write_info(out, info)?,
            Err(e) => writeln!(
                out,
                "  {}: {}",
                format!("error[{}]", e.kind()).red().bold(),
                e
            )?,
        }
    }
    Ok(())
}
