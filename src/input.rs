//! Masked input value.
//!
//! [`MaskedInput`] does what an input widget does with a mask on every
//! change: format the full raw text, truncate the formatted string to the
//! mask's maximum length, and keep the result as the field value.
//!
//! # Examples
//!
//! ```
//! use input_masks::{MaskKind, MaskedInput};
//!
//! let mut field = MaskedInput::new(MaskKind::Cep);
//!
//! // Simulate typing: each keystroke re-submits the whole current text.
//! for key in "12345678".chars() {
//!     let mut text = field.value().to_string();
//!     text.push(key);
//!     field.set_text(&text);
//! }
//! assert_eq!(field.value(), "12345-678");
//! assert!(field.is_complete());
//! ```

use crate::event::{LogLevel, emit_event, emit_log};
use crate::mask::{MaskConfig, MaskKind, digit_count, digits_only, truncate_display};

/// Name of the event emitted when the stored value changes.
pub const CHANGE_EVENT: &str = "mask.change";

/// Options for a [`MaskedInput`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskedInputOptions {
    /// Override the registered max display length. `Some(0)` disables
    /// truncation.
    pub max_length: Option<usize>,
    /// Emit a [`CHANGE_EVENT`] through the event callback on every change.
    pub emit_events: bool,
}

/// Outcome of [`MaskedInput::set_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputChange {
    /// The stored value differs from the previous one.
    pub changed: bool,
    /// The formatted text was longer than the max length and got cut.
    pub truncated: bool,
}

/// Current value of a masked input field.
#[derive(Clone, Debug)]
pub struct MaskedInput {
    kind: MaskKind,
    config: MaskConfig,
    options: MaskedInputOptions,
    value: String,
}

impl MaskedInput {
    /// Create an empty field for `kind` with default options.
    #[must_use]
    pub fn new(kind: MaskKind) -> Self {
        Self::with_options(kind, MaskedInputOptions::default())
    }

    /// Create an empty field from an optional mask identifier.
    ///
    /// Unknown identifiers select the plain mask, same as
    /// [`resolve_mask`](crate::resolve_mask).
    #[must_use]
    pub fn from_mask_id(id: Option<&str>) -> Self {
        Self::new(MaskKind::from_optional_id(id))
    }

    /// Create an empty field with explicit options.
    #[must_use]
    pub fn with_options(kind: MaskKind, options: MaskedInputOptions) -> Self {
        Self {
            kind,
            config: kind.config(),
            options,
            value: String::new(),
        }
    }

    /// Replace the value with the masked form of `raw`.
    ///
    /// `raw` is the full text of the field after the edit, not a delta.
    pub fn set_text(&mut self, raw: &str) -> InputChange {
        let mut display = self.config.format(raw);
        let keep = truncate_display(&display, self.max_length()).len();
        let truncated = keep < display.len();
        display.truncate(keep);

        if truncated {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "{} input truncated to {} chars",
                    self.kind,
                    self.max_length()
                ),
            );
        }

        let changed = display != self.value;
        if changed {
            self.value = display;
            if self.options.emit_events {
                emit_event(CHANGE_EVENT, &self.value);
            }
        }

        InputChange { changed, truncated }
    }

    /// Empty the field without running the formatter.
    ///
    /// Currency would otherwise format empty text as `R$ 0`.
    pub fn clear(&mut self) {
        if self.value.is_empty() {
            return;
        }
        self.value.clear();
        if self.options.emit_events {
            emit_event(CHANGE_EVENT, "");
        }
    }

    /// The masked value as displayed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Digits of the displayed value.
    #[must_use]
    pub fn digits(&self) -> String {
        digits_only(&self.value)
    }

    /// The field's mask.
    #[must_use]
    pub fn kind(&self) -> MaskKind {
        self.kind
    }

    /// Effective max display length (`0` when unbounded).
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.options.max_length.unwrap_or(self.config.max_length)
    }

    /// Whether every digit slot of the mask is filled.
    ///
    /// Always `false` for masks without a digit cap (currency, plain).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.kind
            .digit_cap()
            .is_some_and(|cap| digit_count(&self.value) >= cap)
    }
}

impl Default for MaskedInput {
    fn default() -> Self {
        Self::new(MaskKind::Plain)
    }
}
