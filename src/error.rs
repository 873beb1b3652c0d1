//! Error types for input masks.
//!
//! The formatters and the resolver are total and never fail. Errors only
//! come from the strict parsing paths.

use std::fmt;

/// Result type alias for input mask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for input mask operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Mask identifier outside the known set (e.g., `"IBAN"`).
    UnknownMask(String),
    /// Malformed argument value (e.g., a non-numeric max length).
    InvalidArgument { name: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMask(id) => write!(
                f,
                "unknown mask: {id} (valid: CPF, PHONE, CEP, NASCIMENTO, CURRENCY)"
            ),
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
