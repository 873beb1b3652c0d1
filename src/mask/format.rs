//! Formatter functions.
//!
//! Every formatter accepts raw user input, extracts its digits, caps them
//! at the mask's digit count and inserts the mask's punctuation at fixed
//! digit boundaries. Nothing is padded: a partially typed value produces a
//! partially punctuated string, which is what an input field shows while
//! the user is still typing.
//!
//! | Mask       | Digits | Pattern           |
//! |------------|--------|-------------------|
//! | CPF        | 11     | `ddd.ddd.ddd-dd`  |
//! | CEP        | 8      | `ddddd-ddd`       |
//! | Phone      | 11     | `(dd) ddddd-dddd` |
//! | Birth date | 8      | `dd/dd/dddd`      |
//! | Currency   | -      | `R$ d.ddd.ddd`    |

use crate::mask::digits::digits_only;

/// Digit cap for CPF numbers.
pub const CPF_DIGITS: usize = 11;
/// Digit cap for CEP postal codes.
pub const CEP_DIGITS: usize = 8;
/// Digit cap for mobile phone numbers (area code + 9 digits).
pub const PHONE_DIGITS: usize = 11;
/// Digit cap for `dd/mm/yyyy` dates.
pub const BIRTH_DATE_DIGITS: usize = 8;

/// Prefix of every currency display string.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Separator inserted after a digit position, counted from 1.
#[derive(Clone, Copy, Debug)]
struct Boundary {
    after: usize,
    separator: &'static str,
}

const fn after(after: usize, separator: &'static str) -> Boundary {
    Boundary { after, separator }
}

const CPF_LAYOUT: &[Boundary] = &[after(3, "."), after(6, "."), after(9, "-")];
const CEP_LAYOUT: &[Boundary] = &[after(5, "-")];
const PHONE_LAYOUT: &[Boundary] = &[after(2, ") "), after(7, "-")];
const BIRTH_DATE_LAYOUT: &[Boundary] = &[after(2, "/"), after(4, "/")];

/// Lay out at most `cap` digits of `raw`, inserting each boundary's
/// separator only when a digit follows it.
fn punctuate(raw: &str, cap: usize, layout: &[Boundary]) -> String {
    let digits = digits_only(raw);
    let digits = &digits[..digits.len().min(cap)];

    let separators: usize = layout.iter().map(|b| b.separator.len()).sum();
    let mut out = String::with_capacity(digits.len() + separators);
    let mut start = 0;

    for boundary in layout {
        if digits.len() <= boundary.after {
            break;
        }
        out.push_str(&digits[start..boundary.after]);
        out.push_str(boundary.separator);
        start = boundary.after;
    }
    out.push_str(&digits[start..]);
    out
}

/// Format a CPF (individual taxpayer number) as `ddd.ddd.ddd-dd`.
///
/// ```
/// use input_masks::format_cpf;
///
/// assert_eq!(format_cpf("12345678901"), "123.456.789-01");
/// assert_eq!(format_cpf("123456789"), "123.456.789");
/// ```
#[must_use]
pub fn format_cpf(raw: &str) -> String {
    punctuate(raw, CPF_DIGITS, CPF_LAYOUT)
}

/// Format a CEP (postal code) as `ddddd-ddd`.
#[must_use]
pub fn format_cep(raw: &str) -> String {
    punctuate(raw, CEP_DIGITS, CEP_LAYOUT)
}

/// Format a phone number as `(dd) ddddd-dddd`.
///
/// The opening parenthesis comes with the first digit; `") "` and `"-"`
/// appear once the area code and the subscriber prefix are complete and the
/// next digit has been typed.
///
/// ```
/// use input_masks::format_phone;
///
/// assert_eq!(format_phone("11"), "(11");
/// assert_eq!(format_phone("119"), "(11) 9");
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// ```
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let body = punctuate(raw, PHONE_DIGITS, PHONE_LAYOUT);
    if body.is_empty() {
        return body;
    }
    let mut out = String::with_capacity(body.len() + 1);
    out.push('(');
    out.push_str(&body);
    out
}

/// Format a birth date as `dd/mm/yyyy`.
///
/// Only the layout is applied; the date is not validated.
#[must_use]
pub fn format_birth_date(raw: &str) -> String {
    punctuate(raw, BIRTH_DATE_DIGITS, BIRTH_DATE_LAYOUT)
}

/// Format a BRL amount as `R$ ` followed by the integer digits grouped in
/// thousands with `.`.
///
/// Leading zeros are discarded. Input with no significant digit (empty,
/// only zeros, or no digits at all) renders as `R$ 0`.
///
/// ```
/// use input_masks::format_currency;
///
/// assert_eq!(format_currency("1234567"), "R$ 1.234.567");
/// assert_eq!(format_currency("001234"), "R$ 1.234");
/// assert_eq!(format_currency("000"), "R$ 0");
/// ```
#[must_use]
pub fn format_currency(raw: &str) -> String {
    let digits = digits_only(raw);
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() {
        "0"
    } else {
        significant
    };

    let groups = (significant.len() - 1) / 3;
    let mut out = String::with_capacity(CURRENCY_PREFIX.len() + significant.len() + groups);
    out.push_str(CURRENCY_PREFIX);

    // Width of the leftmost group, then full groups of three.
    let head = significant.len() - groups * 3;
    out.push_str(&significant[..head]);
    let mut pos = head;
    while pos < significant.len() {
        out.push('.');
        out.push_str(&significant[pos..pos + 3]);
        pos += 3;
    }
    out
}

/// Identity formatter used when no mask applies.
#[must_use]
pub fn identity(raw: &str) -> String {
    raw.to_owned()
}
