//! Symbolic mask identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mask::format::{BIRTH_DATE_DIGITS, CEP_DIGITS, CPF_DIGITS, PHONE_DIGITS};

/// Which mask an input field uses.
///
/// `Plain` is the default and formats nothing. The other variants
/// correspond to the identifiers `CPF`, `PHONE`, `CEP`, `NASCIMENTO` and
/// `CURRENCY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// No mask: input passes through unchanged and is never truncated.
    #[default]
    Plain,
    /// Individual taxpayer number, `ddd.ddd.ddd-dd`.
    Cpf,
    /// Mobile phone number, `(dd) ddddd-dddd`.
    Phone,
    /// Postal code, `ddddd-ddd`.
    Cep,
    /// Birth date, `dd/mm/yyyy`.
    Nascimento,
    /// BRL amount, `R$ 1.234`.
    Currency,
}

impl MaskKind {
    /// Every mask with a symbolic identifier, in registry order.
    pub const ALL: [MaskKind; 5] = [
        MaskKind::Cpf,
        MaskKind::Phone,
        MaskKind::Cep,
        MaskKind::Nascimento,
        MaskKind::Currency,
    ];

    /// Look up a mask by its identifier.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything
    /// outside the known set.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "CPF" => Some(Self::Cpf),
            "PHONE" => Some(Self::Phone),
            "CEP" => Some(Self::Cep),
            "NASCIMENTO" => Some(Self::Nascimento),
            "CURRENCY" => Some(Self::Currency),
            _ => None,
        }
    }

    /// Resolve an optional identifier, falling back to [`MaskKind::Plain`]
    /// when it is absent or unknown.
    #[must_use]
    pub fn from_optional_id(id: Option<&str>) -> Self {
        id.and_then(Self::from_id).unwrap_or_default()
    }

    /// The symbolic identifier, or `None` for [`MaskKind::Plain`].
    #[must_use]
    pub const fn id(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Cpf => Some("CPF"),
            Self::Phone => Some("PHONE"),
            Self::Cep => Some("CEP"),
            Self::Nascimento => Some("NASCIMENTO"),
            Self::Currency => Some("CURRENCY"),
        }
    }

    /// Number of digits the formatter keeps, if it caps them.
    #[must_use]
    pub const fn digit_cap(self) -> Option<usize> {
        match self {
            Self::Cpf => Some(CPF_DIGITS),
            Self::Phone => Some(PHONE_DIGITS),
            Self::Cep => Some(CEP_DIGITS),
            Self::Nascimento => Some(BIRTH_DATE_DIGITS),
            Self::Currency | Self::Plain => None,
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id().unwrap_or("PLAIN"))
    }
}

impl FromStr for MaskKind {
    type Err = Error;

    /// Strict parse: unknown identifiers are an error instead of silently
    /// selecting the identity mask.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "PLAIN" => Ok(Self::Plain),
            other => Self::from_id(other).ok_or_else(|| Error::UnknownMask(other.to_string())),
        }
    }
}
