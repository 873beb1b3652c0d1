//! `input_masks` - Incremental input masks for form fields
//!
//! Pure text transformations that turn whatever a user typed into the
//! canonical masked display string for Brazilian document and contact
//! fields (CPF, CEP, phone, birth date) and BRL currency amounts.
//!
//! Input widgets re-run a mask on the full raw string after every
//! keystroke, then truncate the formatted result to the mask's maximum
//! display length:
//!
//! ```
//! use input_masks::resolve_mask;
//!
//! let mask = resolve_mask(Some("CPF"));
//! assert_eq!(mask.max_length, 14);
//! assert_eq!(mask.apply("123456789012345"), "123.456.789-01");
//!
//! // Unknown or absent ids degrade to the identity mask.
//! let plain = resolve_mask(Some("IBAN"));
//! assert_eq!(plain.max_length, 0);
//! assert_eq!(plain.apply("DE89 3704"), "DE89 3704");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow mask::MaskKind etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod error;
pub mod event;
pub mod input;
pub mod mask;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use input::{InputChange, MaskedInput, MaskedInputOptions};
pub use mask::{
    MaskConfig, MaskKind, digit_count, digits_only, format_birth_date, format_cep, format_cpf,
    format_currency, format_phone, identity, resolve, resolve_mask, truncate_display,
};
