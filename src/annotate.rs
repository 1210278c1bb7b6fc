//! Per-visible-character token application.
//!
//! The annotator walks a string once, consuming marker pairs into a
//! format-memory buffer and emitting one token ahead of every visible
//! character, so formatting spans survive being re-colored character by
//! character.

use crate::marker::is_marker_lead;
use crate::token::ColorToken;

/// Apply one token per visible character of `text`.
///
/// A marker lead (`&` or `§`) that is not the last character consumes the
/// character after it: the reset designator `r` clears the accumulated
/// format memory, any other pair is appended to it verbatim. Every other
/// character is visible and is emitted as `token + format memory + char`,
/// advancing through `tokens`. A lead at the very last position cannot
/// start a pair and is emitted as a visible character. Blank input is
/// returned unchanged with no tokens consumed.
///
/// # Panics
///
/// Panics if `tokens` runs out before the last visible character; sizing
/// the sequence is the caller's contract, checked with [`visible_len`].
#[must_use]
pub fn annotate(text: &str, tokens: &[ColorToken]) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut output = String::new();
    let mut formats = String::new();
    let mut index = 0;
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if is_marker_lead(current) && chars.peek().is_some() {
            let designator = chars.next().expect("peeked designator");
            if designator == 'r' {
                formats.clear();
            } else {
                formats.push(current);
                formats.push(designator);
            }
            continue;
        }

        let token = tokens
            .get(index)
            .unwrap_or_else(|| panic!("token sequence exhausted at visible character {index}"));
        output.push_str(&token.to_string());
        output.push_str(&formats);
        output.push(current);
        index += 1;
    }

    output
}

/// Count the visible characters of `text` under the annotator's own scan
/// rule: every `lead + successor` pair is consumed, a trailing lead is
/// visible. Sequences sized with this count are consumed exactly by
/// [`annotate`].
#[must_use]
pub fn visible_len(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if is_marker_lead(current) && chars.peek().is_some() {
            chars.next();
        } else {
            count += 1;
        }
    }

    count
}
