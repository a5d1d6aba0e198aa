//! JSON output formatting for calculator results.

use crate::calculator::Calculation;
use crate::models::SubnetInfo;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct JsonRow<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet: Option<&'a SubnetInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
}

impl<'a> From<&'a Calculation> for JsonRow<'a> {
    fn from(calc: &'a Calculation) -> Self {
        match &calc.result {
            Ok(info) => JsonRow {
                input: &calc.input,
                subnet: Some(info),
                error: None,
                error_kind: None,
            },
            Err(e) => JsonRow {
                input: &calc.input,
                subnet: None,
                error: Some(e.to_string()),
                error_kind: Some(e.kind()),
            },
        }
    }
}

/// Write all calculations as a pretty-printed JSON array.
pub fn subnet_json<W: Write>(
    out: &mut W,
    calculations: &[Calculation],
) -> Result<(), serde_json::Error> {
    let rows: Vec<JsonRow> = calculations.iter().map(JsonRow::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out).map_err(serde_json::Error::io)
}
