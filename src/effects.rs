//! Gradient and rainbow sequence generation, and the operations that
//! apply them over text.
//!
//! Sequences are sized with [`visible_len`] so the annotator consumes
//! exactly one token per visible character.
//!
//! # Examples
//!
//! ```
//! use prismatic::color::Rgb;
//! use prismatic::effects::apply_gradient;
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(
//!     apply_gradient("Hello", black, white, true),
//!     "§0H§8e§8l§7l§fo"
//! );
//! ```

use crate::annotate::{annotate, visible_len};
use crate::color::Rgb;
use crate::token::ColorToken;

/// Generate a `steps`-long gradient between two colors.
///
/// Each channel moves by `abs(start - end) / (steps - 1)` per step, floor
/// divided, towards its end value. The floor means the final step does not
/// necessarily land exactly on `end`; that truncation is accepted output,
/// not corrected. `steps == 1` resolves `start` alone and `steps == 0`
/// yields an empty sequence.
#[must_use]
pub fn gradient(start: Rgb, end: Rgb, steps: usize, legacy: bool) -> Vec<ColorToken> {
    if steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![ColorToken::resolve(start, legacy)];
    }

    (0..steps)
        .map(|index| {
            let color = Rgb::new(
                channel_ramp(start.red, end.red, steps, index),
                channel_ramp(start.green, end.green, steps, index),
                channel_ramp(start.blue, end.blue, steps, index),
            );
            ColorToken::resolve(color, legacy)
        })
        .collect()
}

/// One channel of a gradient: the value at `index` of a `steps`-long ramp
/// from `from` towards `to`.
fn channel_ramp(from: u8, to: u8, steps: usize, index: usize) -> u8 {
    let step = usize::from(from.abs_diff(to)) / (steps - 1);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "step * index never exceeds the channel span, which fits in u8"
    )]
    let offset = (step * index) as u8;
    if from <= to { from + offset } else { from - offset }
}

/// Generate a `steps`-long walk around the hue wheel.
///
/// Step `i` uses hue `i / steps`; `saturation` doubles as the brightness
/// value, matching the established output of this effect.
#[must_use]
pub fn rainbow(steps: usize, saturation: f32, legacy: bool) -> Vec<ColorToken> {
    (0..steps)
        .map(|index| {
            #[expect(
                clippy::cast_precision_loss,
                reason = "visible-character counts sit far below f32 precision limits"
            )]
            let hue = index as f32 / steps as f32;
            ColorToken::resolve(Rgb::from_hsb(hue, saturation, saturation), legacy)
        })
        .collect()
}

/// Prefix `text` with a single resolved color.
///
/// The token is prepended unconditionally, so blank text still gains
/// its prefix. Only the per-character effects below skip blank input.
#[must_use]
pub fn apply_color(color: Rgb, text: &str, legacy: bool) -> String {
    format!("{}{text}", ColorToken::resolve(color, legacy))
}

/// Annotate `text` with a gradient, one color per visible character.
///
/// Blank text and text with fewer than two visible characters pass
/// through verbatim, with no sequence generated.
#[must_use]
pub fn apply_gradient(text: &str, start: Rgb, end: Rgb, legacy: bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let count = visible_len(text);
    if count <= 1 {
        return text.to_string();
    }
    annotate(text, &gradient(start, end, count, legacy))
}

/// Annotate `text` with a rainbow, one hue per visible character.
///
/// Blank text and text with no visible characters pass through verbatim;
/// a single visible character still proceeds (a one-step rainbow is
/// well-defined).
#[must_use]
pub fn apply_rainbow(text: &str, saturation: f32, legacy: bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let count = visible_len(text);
    if count == 0 {
        return text.to_string();
    }
    annotate(text, &rainbow(count, saturation, legacy))
}
