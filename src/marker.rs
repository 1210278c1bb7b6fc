//! Marker scanning, stripping, and shorthand translation.
//!
//! A marker is a two-character pair: a lead (`§` natively, `&` in user
//! input) followed by a designator. Color designators are the hex digits
//! `0-9a-f`, format designators are `k l m n o r`, and the extended lead
//! `x` introduces a 24-bit color written as six more `lead + hex digit`
//! pairs. All matching is ASCII case-insensitive.
//!
//! # Examples
//!
//! ```
//! use prismatic::marker::{find_markers, strip_colors, translate_shorthand};
//!
//! let native = translate_shorthand("&aHello");
//! assert_eq!(native, "§aHello");
//!
//! let spans = find_markers(&native);
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].text, "§a");
//!
//! assert_eq!(strip_colors(&native), "Hello");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Native marker lead character.
pub const COLOR_CHAR: char = '§';

/// Shorthand marker lead accepted in user input.
pub const ALT_COLOR_CHAR: char = '&';

// Designators are ASCII-only. The classes spell both cases explicitly
// because `(?i)` folds Unicode-wide and would also accept look-alikes
// such as U+212A KELVIN SIGN for `k`.

/// Color-letter markers: either lead followed by a hex digit or the
/// extended lead.
static COLOR_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&§][0-9A-Fa-fXx]").expect("valid regex"));

/// Format markers: either lead followed by a format designator or the
/// extended lead.
static FORMAT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&§][K-ORk-orXx]").expect("valid regex"));

/// A complete extended sequence: the native lead pair `§x` plus exactly
/// six `§<hex digit>` pairs.
static EXTENDED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"§[Xx](?:§[0-9A-Fa-f]){6}").expect("valid regex"));

/// A single native marker. The extended lead `x` is deliberately absent
/// from the designator set.
static SINGLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"§[0-9A-Fa-fK-ORk-or]").expect("valid regex"));

/// Returns true for either marker lead character.
#[must_use]
pub const fn is_marker_lead(c: char) -> bool {
    c == COLOR_CHAR || c == ALT_COLOR_CHAR
}

/// Returns true for any designator a lead can introduce: a hex digit, a
/// format designator `k-o`/`r`, or the extended lead `x`, in either case.
#[must_use]
pub fn is_marker_designator(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c.to_ascii_lowercase(), 'k'..='o' | 'r' | 'x')
}

/// Classification of a combined-scan match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A two-character `lead + designator` pair.
    Single,
    /// A full `§x` sequence carrying six hex-digit pairs.
    Extended,
}

/// One match reported by [`find_markers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan<'a> {
    /// Byte offset of the marker lead in the scanned string.
    pub start: usize,
    /// The matched marker text.
    pub text: &'a str,
    /// Whether the match is a single pair or an extended sequence.
    pub kind: MarkerKind,
}

impl MarkerSpan<'_> {
    /// Byte offset just past the marker.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Translate shorthand markers to native form.
///
/// A `&` immediately followed by a valid designator becomes `§` with the
/// designator lowercased; every other character passes through untouched,
/// including a trailing `&` and a `&` before an unrecognized character.
#[must_use]
pub fn translate_shorthand(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if current == ALT_COLOR_CHAR
            && let Some(&next) = chars.peek()
            && is_marker_designator(next)
        {
            output.push(COLOR_CHAR);
            output.push(next.to_ascii_lowercase());
            chars.next();
            continue;
        }
        output.push(current);
    }

    output
}

/// Remove every color-letter marker (either lead + `0-9a-fx`).
#[must_use]
pub fn strip_colors(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    COLOR_MARKER.replace_all(text, "").into_owned()
}

/// Remove every format marker (either lead + `k-orx`).
#[must_use]
pub fn strip_formats(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    FORMAT_MARKER.replace_all(text, "").into_owned()
}

/// Find every native marker in `text`, left to right.
///
/// At each position an extended sequence is attempted before a single
/// marker, and a successful extended match consumes its full span, so no
/// pair inside it is ever reported as a standalone single. Returns an
/// empty vector when nothing matches.
#[must_use]
pub fn find_markers(text: &str) -> Vec<MarkerSpan<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut next_extended = EXTENDED_MARKER.find(text);
    let mut next_single = SINGLE_MARKER.find(text);

    loop {
        // Re-seek any candidate the cursor has passed. A consumed extended
        // match invalidates singles that started inside it.
        if let Some(found) = next_extended
            && found.start() < cursor
        {
            next_extended = EXTENDED_MARKER.find_at(text, cursor);
        }
        if let Some(found) = next_single
            && found.start() < cursor
        {
            next_single = SINGLE_MARKER.find_at(text, cursor);
        }

        // The two patterns never match at the same offset: a single never
        // begins `§x` because `x` is not a single designator.
        let (found, kind) = match (next_extended, next_single) {
            (Some(extended), Some(single)) if single.start() < extended.start() => {
                (single, MarkerKind::Single)
            }
            (Some(extended), _) => (extended, MarkerKind::Extended),
            (None, Some(single)) => (single, MarkerKind::Single),
            (None, None) => break,
        };

        spans.push(MarkerSpan {
            start: found.start(),
            text: found.as_str(),
            kind,
        });
        cursor = found.end();
    }

    spans
}
