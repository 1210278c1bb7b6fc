//! Property-based tests for prismatic.
//!
//! Uses proptest to verify invariants with 1000+ generated test cases.
//! These tests verify fundamental properties that should always hold.

use proptest::prelude::*;

use prismatic::annotate::visible_len;
use prismatic::color::{LEGACY_PALETTE, Rgb, rgb_to_legacy};
use prismatic::effects::{apply_gradient, gradient, rainbow};
use prismatic::marker::{MarkerKind, translate_shorthand};
use prismatic::marker::{find_markers, is_marker_designator, strip_colors, strip_formats};
use prismatic::pattern::Colorizer;
use prismatic::token::ColorToken;

// ============================================================================
// Custom Strategies
// ============================================================================

/// Generate an arbitrary color.
fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Generate plain text with no marker leads at all.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,60}"
}

/// Generate chat-shaped text: words, well-formed single markers, and
/// complete extended sequences. Never produces two adjacent leads, which
/// is the shape real messages take.
fn chat_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ]{1,8}",
            "[&§][0-9a-fk-or]",
            "§x(?:§[0-9a-f]){6}",
        ],
        0..8,
    )
    .prop_map(|fragments| fragments.concat())
}

/// Sum of squared channel differences, mirroring the quantizer metric.
fn distance(a: Rgb, b: Rgb) -> u32 {
    let dr = u32::from(a.red.abs_diff(b.red));
    let dg = u32::from(a.green.abs_diff(b.green));
    let db = u32::from(a.blue.abs_diff(b.blue));
    dr * dr + dg * dg + db * db
}

/// The palette entry a code addresses.
fn palette_entry(code: char) -> Rgb {
    LEGACY_PALETTE
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(entry, _)| entry)
        .expect("quantizer returns a palette code")
}

// ============================================================================
// Quantizer Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// The quantizer is deterministic and always lands on a real minimum.
    #[test]
    fn prop_quantizer_deterministic_and_minimal(color in rgb()) {
        let code = rgb_to_legacy(color);
        prop_assert_eq!(rgb_to_legacy(color), code);

        let best = distance(color, palette_entry(code));
        for &(entry, entry_code) in &LEGACY_PALETTE {
            prop_assert!(
                best <= distance(color, entry),
                "{} was chosen over the closer {}",
                code,
                entry_code
            );
        }
    }

    /// Ties resolve to the earliest palette entry: everything before the
    /// chosen code is strictly farther away.
    #[test]
    fn prop_quantizer_first_minimum_wins(color in rgb()) {
        let code = rgb_to_legacy(color);
        let best = distance(color, palette_entry(code));
        for &(entry, entry_code) in &LEGACY_PALETTE {
            if entry_code == code {
                break;
            }
            prop_assert!(distance(color, entry) > best);
        }
    }
}

// ============================================================================
// Sequence Generator Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// A gradient always has exactly the requested number of steps.
    #[test]
    fn prop_gradient_length_matches_steps(
        start in rgb(),
        end in rgb(),
        steps in 0usize..48,
        legacy in any::<bool>(),
    ) {
        prop_assert_eq!(gradient(start, end, steps, legacy).len(), steps);
    }

    /// Step zero reproduces the start color exactly.
    #[test]
    fn prop_gradient_starts_at_start(
        start in rgb(),
        end in rgb(),
        steps in 1usize..48,
        legacy in any::<bool>(),
    ) {
        let tokens = gradient(start, end, steps, legacy);
        prop_assert_eq!(&tokens[0], &ColorToken::resolve(start, legacy));
    }

    /// Identical endpoints produce a constant sequence.
    #[test]
    fn prop_gradient_identical_endpoints(
        color in rgb(),
        steps in 1usize..32,
        legacy in any::<bool>(),
    ) {
        let expected = ColorToken::resolve(color, legacy);
        for token in gradient(color, color, steps, legacy) {
            prop_assert_eq!(&token, &expected);
        }
    }

    /// Every generated color stays inside the per-channel span; floor
    /// division can undershoot the end but never overshoot it.
    #[test]
    fn prop_gradient_channels_stay_in_span(
        start in rgb(),
        end in rgb(),
        steps in 2usize..48,
    ) {
        for token in gradient(start, end, steps, false) {
            let c = token.color();
            prop_assert!(c.red >= start.red.min(end.red) && c.red <= start.red.max(end.red));
            prop_assert!(c.green >= start.green.min(end.green) && c.green <= start.green.max(end.green));
            prop_assert!(c.blue >= start.blue.min(end.blue) && c.blue <= start.blue.max(end.blue));
        }
    }

    /// A rainbow always has exactly the requested number of steps.
    #[test]
    fn prop_rainbow_length_matches_steps(
        steps in 0usize..48,
        saturation in 0.0f32..=1.0,
        legacy in any::<bool>(),
    ) {
        prop_assert_eq!(rainbow(steps, saturation, legacy).len(), steps);
    }
}

// ============================================================================
// Annotator Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Annotation rewrites markers but never changes what is visible.
    #[test]
    fn prop_apply_preserves_visible_len(
        text in chat_text(),
        start in rgb(),
        end in rgb(),
        legacy in any::<bool>(),
    ) {
        let applied = apply_gradient(&text, start, end, legacy);
        prop_assert_eq!(visible_len(&applied), visible_len(&text));
    }

    /// Stripping an annotated string recovers the same plain text as
    /// stripping the input.
    #[test]
    fn prop_apply_then_strip_recovers_plain(
        text in chat_text(),
        start in rgb(),
        end in rgb(),
        legacy in any::<bool>(),
    ) {
        let colorizer = Colorizer::new();
        let applied = apply_gradient(&text, start, end, legacy);
        prop_assert_eq!(colorizer.strip_all(&applied), colorizer.strip_all(&text));
    }
}

// ============================================================================
// Marker Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Stripping well-formed chat text is idempotent.
    #[test]
    fn prop_strip_all_idempotent(text in chat_text()) {
        let colorizer = Colorizer::new();
        let once = colorizer.strip_all(&text);
        prop_assert_eq!(colorizer.strip_all(&once), once.clone());
    }

    /// Colorize then strip is the identity on marker-free text.
    #[test]
    fn prop_colorize_strip_round_trip(text in plain_text(), legacy in any::<bool>()) {
        let colorizer = Colorizer::new();
        let colorized = colorizer.colorize(&text, legacy);
        prop_assert_eq!(colorizer.strip_all(&colorized), text);
    }

    /// After translation no shorthand pair remains anywhere.
    #[test]
    fn prop_translate_leaves_no_shorthand_pairs(text in any::<String>()) {
        let translated = translate_shorthand(&text);
        let chars: Vec<char> = translated.chars().collect();
        for window in chars.windows(2) {
            prop_assert!(!(window[0] == '&' && is_marker_designator(window[1])));
        }
    }

    /// Scanner spans are ordered, disjoint, and faithful to the input.
    #[test]
    fn prop_scanner_spans_disjoint_and_faithful(text in chat_text()) {
        let spans = find_markers(&text);
        let mut previous_end = 0;
        for span in &spans {
            prop_assert!(span.start >= previous_end);
            prop_assert_eq!(span.text, &text[span.start..span.end()]);
            match span.kind {
                MarkerKind::Single => prop_assert_eq!(span.text.chars().count(), 2),
                MarkerKind::Extended => prop_assert_eq!(span.text.chars().count(), 14),
            }
            previous_end = span.end();
        }
    }

    /// Every scanning and stripping operation accepts arbitrary strings.
    #[test]
    fn prop_scans_total_over_arbitrary_strings(text in any::<String>()) {
        let _ = find_markers(&text);
        let _ = visible_len(&text);
        prop_assert!(strip_colors(&text).len() <= text.len());
        prop_assert!(strip_formats(&text).len() <= text.len());
    }

    /// Parsing never panics, and legacy codes come back normalized.
    #[test]
    fn prop_parse_total(input in any::<String>(), legacy in any::<bool>()) {
        if let Ok(token) = ColorToken::parse(&input, legacy)
            && let Some(code) = token.code()
        {
            prop_assert!(code.is_ascii_hexdigit());
            prop_assert!(!code.is_ascii_uppercase());
        }
    }
}
