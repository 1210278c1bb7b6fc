//! Color primitives for the legacy chat palette.
//!
//! This module provides the RGB triplet type, the fixed 16-entry legacy
//! palette with its identifying characters `0-9a-f`, nearest-palette
//! quantization, and HSB conversion for hue-wheel effects.
//!
//! # Examples
//!
//! ## Creating Colors
//!
//! ```
//! use prismatic::color::Rgb;
//!
//! // From channel values
//! let orange = Rgb::new(255, 170, 0);
//!
//! // From a packed 24-bit value
//! let same = Rgb::from_packed(0xFFAA00);
//! assert_eq!(orange, same);
//!
//! // From a hex numeral, with or without a leading '#'
//! let parsed = Rgb::from_hex("#ffaa00").unwrap();
//! assert_eq!(parsed, orange);
//! ```
//!
//! ## Quantizing to the Legacy Palette
//!
//! ```
//! use prismatic::color::{Rgb, rgb_to_legacy};
//!
//! // Pure red sits closest to the palette's '4' entry (170, 0, 0)
//! assert_eq!(rgb_to_legacy(Rgb::new(255, 0, 0)), '4');
//! ```

use std::fmt;

/// RGB color with channel values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from a packed integer, taking the low 24 bits as
    /// `0xRRGGBB`.
    #[must_use]
    pub const fn from_packed(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }

    /// Parse a hex numeral such as `ffaa00` or `#ffaa00`.
    ///
    /// The input is a plain base-16 numeral, not CSS notation: shorter
    /// strings fill the low-order digits (`"f"` is `0x00000F`), and any
    /// bits above the low 24 are discarded.
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError::Empty` if nothing remains after trimming
    /// the optional `#`, or `ColorParseError::InvalidHex` if the numeral
    /// contains a non-hex digit or overflows 32 bits.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|_| ColorParseError::InvalidHex(input.to_string()))
    }

    /// Convert HSB (hue, saturation, brightness) components to RGB.
    ///
    /// `hue` is a position on the color wheel where `0.0` and `1.0` are
    /// both red; only its fractional part matters, taken so that negative
    /// hues wrap forward onto the wheel. Saturation and brightness are
    /// fractions in `0.0..=1.0`. Channels are quantized with round-half-up.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        if saturation <= 0.0 {
            let level = scale_channel(brightness);
            return Self::new(level, level, level);
        }

        let wheel = (hue - hue.floor()) * 6.0;
        let offset = wheel - wheel.floor();
        let low = brightness * (1.0 - saturation);
        let falling = brightness * (1.0 - saturation * offset);
        let rising = brightness * (1.0 - saturation * (1.0 - offset));

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "wheel is in 0.0..6.0 after the wrap-and-scale above"
        )]
        let sector = wheel as u8;
        let (red, green, blue) = match sector {
            0 => (brightness, rising, low),
            1 => (falling, brightness, low),
            2 => (low, brightness, rising),
            3 => (low, falling, brightness),
            4 => (rising, low, brightness),
            _ => (brightness, low, falling),
        };
        Self::new(
            scale_channel(red),
            scale_channel(green),
            scale_channel(blue),
        )
    }

    /// Returns hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns the packed 24-bit value `0xRRGGBB`.
    #[must_use]
    pub const fn packed(&self) -> u32 {
        u32::from_be_bytes([0, self.red, self.green, self.blue])
    }
}

/// Scale a unit fraction to a channel byte with round-half-up.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int casts saturate; unit inputs land in 0..=255"
)]
fn scale_channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
    UnknownCode(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
            Self::UnknownCode(s) => write!(f, "Unknown color code: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

// ============================================================================
// Legacy Palette
// ============================================================================

/// The 16-color legacy palette, paired with the identifying character each
/// entry is addressed by in marker sequences.
///
/// Enumeration order is the character order `0-9a-f` and is part of the
/// quantizer contract: ties resolve to the earliest entry.
pub static LEGACY_PALETTE: [(Rgb, char); 16] = [
    (Rgb::new(0, 0, 0), '0'),       // Black
    (Rgb::new(0, 0, 170), '1'),     // Dark Blue
    (Rgb::new(0, 170, 0), '2'),     // Dark Green
    (Rgb::new(0, 170, 170), '3'),   // Dark Aqua
    (Rgb::new(170, 0, 0), '4'),     // Dark Red
    (Rgb::new(170, 0, 170), '5'),   // Dark Purple
    (Rgb::new(255, 170, 0), '6'),   // Gold
    (Rgb::new(170, 170, 170), '7'), // Gray
    (Rgb::new(85, 85, 85), '8'),    // Dark Gray
    (Rgb::new(85, 85, 255), '9'),   // Blue
    (Rgb::new(85, 255, 85), 'a'),   // Green
    (Rgb::new(85, 255, 255), 'b'),  // Aqua
    (Rgb::new(255, 85, 85), 'c'),   // Red
    (Rgb::new(255, 85, 255), 'd'),  // Light Purple
    (Rgb::new(255, 255, 85), 'e'),  // Yellow
    (Rgb::new(255, 255, 255), 'f'), // White
];

/// Look up the palette color for an identifying character, accepting
/// either case.
#[must_use]
pub fn legacy_color(code: char) -> Option<Rgb> {
    let code = code.to_ascii_lowercase();
    LEGACY_PALETTE
        .iter()
        .find(|&&(_, entry)| entry == code)
        .map(|&(color, _)| color)
}

// ============================================================================
// Quantization
// ============================================================================

/// Quantize a color to the identifying character of the nearest legacy
/// palette entry.
///
/// Distance is the sum of squared channel differences. The palette is
/// scanned in enumeration order and only a strictly smaller distance
/// replaces the running best, so equidistant entries resolve to the
/// earliest one. Total over all inputs.
#[must_use]
pub fn rgb_to_legacy(color: Rgb) -> char {
    let mut best_code = '0';
    let mut best_distance = u32::MAX;

    for &(palette_color, code) in &LEGACY_PALETTE {
        let distance = color_distance(color, palette_color);
        if distance < best_distance {
            best_distance = distance;
            best_code = code;
        }
    }

    best_code
}

/// Sum of squared channel differences.
fn color_distance(c1: Rgb, c2: Rgb) -> u32 {
    let red_diff = u32::from(c1.red.abs_diff(c2.red));
    let green_diff = u32::from(c1.green.abs_diff(c2.green));
    let blue_diff = u32::from(c1.blue.abs_diff(c2.blue));

    red_diff * red_diff + green_diff * green_diff + blue_diff * blue_diff
}
