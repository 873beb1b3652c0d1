//! Input masks: digit extraction, formatters, and the mask registry.

mod digits;
mod format;
mod kind;
mod registry;

pub use digits::{digit_count, digits_only};
pub use format::{
    BIRTH_DATE_DIGITS, CEP_DIGITS, CPF_DIGITS, CURRENCY_PREFIX, PHONE_DIGITS, format_birth_date,
    format_cep, format_cpf, format_currency, format_phone, identity,
};
pub use kind::MaskKind;
pub use registry::{MaskConfig, registry, resolve, resolve_mask, truncate_display};
