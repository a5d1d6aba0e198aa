//! Validation errors for CIDR input.

use thiserror::Error;

/// Reason a CIDR string was rejected.
///
/// Every variant carries the offending piece of input so the message can be
/// shown to a user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CidrError {
    /// Missing or extra `/`, or an empty address or prefix part.
    #[error("expected ADDRESS/PREFIX, got {input:?}")]
    MalformedInput { input: String },
    /// The address does not have exactly four dot-separated parts.
    #[error("address {address:?} has {found} octets, expected 4")]
    WrongOctetCount { address: String, found: usize },
    /// An octet is not a plain decimal number.
    #[error("octet {octet:?} is not a decimal number")]
    NonNumericOctet { octet: String },
    /// A prefix is not a plain decimal number.
    #[error("prefix {prefix:?} is not a decimal number")]
    NonNumericPrefix { prefix: String },
    /// An octet is larger than 255.
    #[error("octet {octet} is out of range 0-255")]
    OctetRange { octet: String },
    /// A prefix is larger than 32.
    #[error("prefix /{prefix} is out of range 0-32")]
    PrefixRange { prefix: String },
}

impl CidrError {
    /// Stable identifier of the variant, used in csv and json output.
    pub fn kind(&self) -> &'static str {
        match self {
            CidrError::MalformedInput { .. } => "malformed_input",
            CidrError::WrongOctetCount { .. } => "wrong_octet_count",
            CidrError::NonNumericOctet { .. } => "non_numeric_octet",
            CidrError::NonNumericPrefix { .. } => "non_numeric_prefix",
            CidrError::OctetRange { .. } => "octet_range",
            CidrError::PrefixRange { .. } => "prefix_range",
        }
    }
}
