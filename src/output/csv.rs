//! CSV output formatting for calculator results.

use crate::calculator::Calculation;
use std::io::{self, Write};

const HEADER: [&str; 13] = [
    "input",
    "cidr",
    "address",
    "network",
    "broadcast",
    "first_usable",
    "last_usable",
    "subnet_mask",
    "wildcard_mask",
    "prefix",
    "usable_hosts",
    "total_addresses",
    "error",
];

/// Quote a value as a CSV field, doubling any embedded quotes.
pub fn quote_field<T: ToString>(value: T) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    format!("\"{escaped}\"")
}

/// Write a header and one row per calculation.
///
/// Rejected inputs leave the subnet columns empty and fill `error`.
pub fn subnet_csv<W: Write>(out: &mut W, calculations: &[Calculation]) -> io::Result<()> {
    let header: Vec<String> = HEADER.iter().map(quote_field).collect();
    writeln!(out, "{}", header.join(","))?;

    for calc in calculations {
        let row: Vec<String> = match &calc.result {
            Ok(info) => vec![
                quote_field(&calc.input),
                quote_field(info.cidr()),
                quote_field(info.address()),
                quote_field(info.network()),
                quote_field(info.broadcast()),
                quote_field(info.first_usable()),
                quote_field(info.last_usable()),
                quote_field(info.subnet_mask()),
                quote_field(info.wildcard_mask()),
                quote_field(info.prefix_len()),
                quote_field(info.usable_hosts()),
                quote_field(info.total_addresses()),
                quote_field(""),
            ],
            Err(e) => {
                let mut row = vec![quote_field(&calc.input)];
                row.extend((0..HEADER.len() - 2).map(|_| quote_field("")));
                row.push(quote_field(e));
                row
            }
        };
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}
