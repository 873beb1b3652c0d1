//! Fuzz target for the mask formatters.
//!
//! Every mask must accept arbitrary text without panicking and stay within
//! its max display length.

#![no_main]

use input_masks::{MaskKind, MaskedInput, resolve_mask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for kind in MaskKind::ALL {
        let config = kind.config();
        let out = config.apply(data);
        assert!(out.chars().count() <= config.max_length);

        let mut field = MaskedInput::new(kind);
        field.set_text(data);
        assert_eq!(field.value(), out);
    }

    // Arbitrary identifiers must resolve, never fail
    let resolved = resolve_mask(Some(data));
    let _ = resolved.apply(data);
});
