//! The CIDR calculator entry points.
//!
//! Pure functions: no logging, no I/O. Callers decide how to report results.

use crate::error::CidrError;
use crate::models::{Ipv4, SubnetInfo};

/// Parse an `A.B.C.D/P` string and derive its subnet properties.
///
/// # Examples
/// ```
/// use cidr_calc::compute_subnet;
/// let info = compute_subnet("192.168.1.10/24").unwrap();
/// assert_eq!(info.network().to_string(), "192.168.1.0");
/// assert_eq!(info.usable_hosts(), 254);
/// ```
pub fn compute_subnet(input: &str) -> Result<SubnetInfo, CidrError> {
    Ipv4::new(input).map(|block| block.subnet_info())
}

/// One input paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    /// The text that was handed to [`compute_subnet`].
    pub input: String,
    /// The derived subnet, or the rule the input broke.
    pub result: Result<SubnetInfo, CidrError>,
}

impl Calculation {
    /// True when the input was a valid CIDR block.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run [`compute_subnet`] over every input, keeping the input order.
pub fn calculate_all<I, S>(inputs: I) -> Vec<Calculation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    inputs
        .into_iter()
        .map(|input| {
            let input = input.into();
            let result = compute_subnet(&input);
            Calculation { input, result }
        })
        .collect()
}
