//! IPv4 CIDR calculator.
//!
//! [`compute_subnet`] turns an `A.B.C.D/P` string into a [`SubnetInfo`] or a
//! [`CidrError`] naming the rule the input broke.
//!
//! # Modules
//! - [`models`] - CIDR block and derived subnet data
//! - [`calculator`] - the calculator entry points
//! - [`error`] - validation errors
//! - [`output`] - text, csv and json rendering
//! - [`config`] - command line options and logging setup

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

use std::io::{self, BufRead};

pub use calculator::{calculate_all, compute_subnet, Calculation};
pub use error::CidrError;
pub use models::{Ipv4, SubnetInfo};

/// Collect CIDR inputs from a reader, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        inputs.push(trimmed.to_string());
    }
    log::debug!("read {} input line(s)", inputs.len());
    Ok(inputs)
}
