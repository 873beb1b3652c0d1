//! Mask registry and resolver.
//!
//! The registry is a static table from [`MaskKind`] to [`MaskConfig`].
//! Callers resolve a config once per field and then, on every keystroke,
//! run [`MaskConfig::apply`] on the full raw text.

use unicode_segmentation::UnicodeSegmentation;

use crate::mask::format::{
    format_birth_date, format_cep, format_cpf, format_currency, format_phone, identity,
};
use crate::mask::kind::MaskKind;

/// Formatter plus the maximum length of its display string.
///
/// `max_length` counts characters of the *formatted* string. `0` means the
/// output is never truncated.
#[derive(Clone, Copy, Debug)]
pub struct MaskConfig {
    pub format_fn: fn(&str) -> String,
    pub max_length: usize,
}

impl MaskConfig {
    /// Config of the default mask: identity formatter, no length cap.
    pub const PLAIN: Self = Self {
        format_fn: identity,
        max_length: 0,
    };

    /// Run the formatter on raw input.
    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        (self.format_fn)(raw)
    }

    /// Cut a display string down to `max_length`.
    #[must_use]
    pub fn truncate<'a>(&self, display: &'a str) -> &'a str {
        truncate_display(display, self.max_length)
    }

    /// Format `raw`, then truncate the formatted string.
    ///
    /// The order matters: on over-long input the cut is applied to the
    /// punctuated text and may land right after a separator.
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        let mut display = self.format(raw);
        let keep = self.truncate(&display).len();
        display.truncate(keep);
        display
    }

    /// Whether this config caps the display length.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_length > 0
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::PLAIN
    }
}

static REGISTRY: [(MaskKind, MaskConfig); 5] = [
    (
        MaskKind::Cpf,
        MaskConfig {
            format_fn: format_cpf,
            max_length: 14,
        },
    ),
    (
        MaskKind::Phone,
        MaskConfig {
            format_fn: format_phone,
            max_length: 16,
        },
    ),
    (
        MaskKind::Cep,
        MaskConfig {
            format_fn: format_cep,
            max_length: 9,
        },
    ),
    (
        MaskKind::Nascimento,
        MaskConfig {
            format_fn: format_birth_date,
            max_length: 10,
        },
    ),
    (
        MaskKind::Currency,
        MaskConfig {
            format_fn: format_currency,
            max_length: 20,
        },
    ),
];

/// All registered masks with their configs, in [`MaskKind::ALL`] order.
#[must_use]
pub fn registry() -> &'static [(MaskKind, MaskConfig)] {
    &REGISTRY
}

impl MaskKind {
    /// The registered config for this mask.
    #[must_use]
    pub fn config(self) -> MaskConfig {
        REGISTRY
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(MaskConfig::PLAIN, |(_, config)| *config)
    }
}

/// Resolve a mask identifier to its config.
///
/// Absent or unrecognized identifiers resolve to [`MaskConfig::PLAIN`].
///
/// ```
/// use input_masks::resolve_mask;
///
/// assert_eq!(resolve_mask(Some("CEP")).apply("12345678"), "12345-678");
/// assert_eq!(resolve_mask(None).max_length, 0);
/// ```
#[must_use]
pub fn resolve_mask(id: Option<&str>) -> MaskConfig {
    MaskKind::from_optional_id(id).config()
}

/// Typed variant of [`resolve_mask`].
#[must_use]
pub fn resolve(kind: Option<MaskKind>) -> MaskConfig {
    kind.unwrap_or_default().config()
}

/// Keep at most `max_length` grapheme clusters of `display`.
///
/// `max_length == 0` returns the string unchanged. Masked output is ASCII,
/// so clusters and characters coincide there; for other text the cut never
/// lands inside a character.
#[must_use]
pub fn truncate_display(display: &str, max_length: usize) -> &str {
    if max_length == 0 {
        return display;
    }
    match display.grapheme_indices(true).nth(max_length) {
        Some((end, _)) => &display[..end],
        None => display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_max_lengths() {
        assert_eq!(resolve_mask(Some("CPF")).max_length, 14);
        assert_eq!(resolve_mask(Some("PHONE")).max_length, 16);
        assert_eq!(resolve_mask(Some("CEP")).max_length, 9);
        assert_eq!(resolve_mask(Some("NASCIMENTO")).max_length, 10);
        assert_eq!(resolve_mask(Some("CURRENCY")).max_length, 20);
    }

    #[test]
    fn test_unknown_and_absent_resolve_to_plain() {
        for id in [None, Some(""), Some("cpf"), Some("IBAN")] {
            let config = resolve_mask(id);
            assert_eq!(config.max_length, 0, "id {id:?}");
            assert!(!config.is_bounded());
            assert_eq!(config.apply("abc 123-!"), "abc 123-!");
        }
        assert_eq!(resolve(None).max_length, 0);
        assert_eq!(MaskConfig::default().max_length, 0);
    }

    #[test]
    fn test_registry_dispatches_to_formatters() {
        assert_eq!(resolve_mask(Some("CPF")).format("12345678901"), "123.456.789-01");
        assert_eq!(resolve_mask(Some("CEP")).format("12345678"), "12345-678");
        assert_eq!(
            resolve_mask(Some("PHONE")).format("11987654321"),
            "(11) 98765-4321"
        );
        assert_eq!(
            resolve_mask(Some("NASCIMENTO")).format("01012000"),
            "01/01/2000"
        );
        assert_eq!(
            resolve(Some(MaskKind::Currency)).format("1234567"),
            "R$ 1.234.567"
        );
    }

    #[test]
    fn test_registry_order_matches_all() {
        let kinds: Vec<MaskKind> = registry().iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, MaskKind::ALL.to_vec());
    }

    #[test]
    fn test_apply_over_long_cpf() {
        let cpf = resolve_mask(Some("CPF"));
        assert_eq!(cpf.apply("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn test_apply_truncates_formatted_currency() {
        // 20 digits format to 29 chars; the cut lands mid-group
        let currency = resolve_mask(Some("CURRENCY"));
        let out = currency.apply("12345678901234567890");
        assert_eq!(out, "R$ 12.345.678.901.23");
        assert_eq!(out.len(), 20);
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("abcdef", 0), "abcdef");
        assert_eq!(truncate_display("abcdef", 3), "abc");
        assert_eq!(truncate_display("abc", 3), "abc");
        assert_eq!(truncate_display("abc", 10), "abc");
        assert_eq!(truncate_display("", 5), "");
    }

    #[test]
    fn test_truncate_display_keeps_clusters_whole() {
        assert_eq!(truncate_display("é😀x", 2), "é😀");
        assert_eq!(truncate_display("e\u{0301}x", 1), "e\u{0301}");
    }
}
