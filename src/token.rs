//! Color tokens: the resolved form a color takes before it is written
//! into text.
//!
//! Resolution is governed by the `legacy` flag every entry point carries.
//! Legacy mode quantizes to the nearest of the 16 palette entries and
//! addresses it by its identifying character; modern mode keeps the exact
//! 24-bit color and encodes it as an extended marker sequence.
//!
//! # Examples
//!
//! ```
//! use prismatic::color::Rgb;
//! use prismatic::token::ColorToken;
//!
//! // Legacy mode quantizes to the palette
//! let legacy = ColorToken::resolve(Rgb::new(90, 250, 90), true);
//! assert_eq!(legacy.to_string(), "§a");
//!
//! // Modern mode keeps the exact color as an extended sequence
//! let modern = ColorToken::resolve(Rgb::new(90, 250, 90), false);
//! assert_eq!(modern.to_string(), "§x§5§a§f§a§5§a");
//! ```

use crate::color::{ColorParseError, Rgb, legacy_color, rgb_to_legacy};
use crate::marker::{COLOR_CHAR, is_marker_lead};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::sync::Mutex;

/// A resolved color, ready to be emitted into annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// One of the 16 palette entries, addressed by its identifying
    /// character `0-9a-f`.
    Legacy { code: char },
    /// An exact 24-bit color together with its encoded extended form.
    Modern { color: Rgb, encoded: String },
}

impl ColorToken {
    /// Resolve a color under the given mode.
    #[must_use]
    pub fn resolve(color: Rgb, legacy: bool) -> Self {
        if legacy {
            Self::Legacy {
                code: rgb_to_legacy(color),
            }
        } else {
            Self::Modern {
                color,
                encoded: encode_extended(color),
            }
        }
    }

    /// Parse a hex numeral and resolve it.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Rgb::from_hex`] for malformed input.
    pub fn from_hex(input: &str, legacy: bool) -> Result<Self, ColorParseError> {
        Ok(Self::resolve(Rgb::from_hex(input)?, legacy))
    }

    /// Parse a color code string (cached).
    ///
    /// Accepted forms, case-insensitively and ignoring marker leads:
    /// - a single palette character, with or without a lead: `a`, `&a`, `§A`
    /// - a six-digit hex numeral, optionally `#`-prefixed: `ffaa00`, `#ffaa00`
    /// - an extended sequence or its bare spelling: `§x§f§f§a§a§0§0`, `xffaa00`
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError` if the input matches none of the forms:
    /// - `Empty` if the string is empty after trimming
    /// - `InvalidHex` if a six-digit form contains a non-hex digit
    /// - `UnknownCode` for everything else
    pub fn parse(input: &str, legacy: bool) -> Result<Self, ColorParseError> {
        // Check cache first
        static CACHE: LazyLock<Mutex<LruCache<(String, bool), ColorToken>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

        let key = (input.trim().to_lowercase(), legacy);

        if let Ok(mut cache) = CACHE.lock()
            && let Some(cached) = cache.get(&key)
        {
            return Ok(cached.clone());
        }

        let result = Self::parse_uncached(&key.0, legacy)?;

        if let Ok(mut cache) = CACHE.lock() {
            cache.put(key, result.clone());
        }

        Ok(result)
    }

    fn parse_uncached(normalized: &str, legacy: bool) -> Result<Self, ColorParseError> {
        if normalized.is_empty() {
            return Err(ColorParseError::Empty);
        }

        // Peel marker leads so "§a", "&a", and "a" parse alike; an extended
        // sequence reduces to "x" plus its six digits.
        let cleaned: String = normalized.chars().filter(|&c| !is_marker_lead(c)).collect();
        let digits = cleaned.strip_prefix('x').unwrap_or(&cleaned);

        let mut chars = digits.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return if code.is_ascii_hexdigit() {
                Ok(Self::Legacy { code })
            } else {
                Err(ColorParseError::UnknownCode(normalized.to_string()))
            };
        }

        if digits.len() == 6 || (digits.len() == 7 && digits.starts_with('#')) {
            return Ok(Self::resolve(Rgb::from_hex(digits)?, legacy));
        }

        Err(ColorParseError::UnknownCode(normalized.to_string()))
    }

    /// The color this token denotes: the palette entry for `Legacy`, the
    /// exact color for `Modern`.
    #[must_use]
    pub fn color(&self) -> Rgb {
        match self {
            Self::Legacy { code } => legacy_color(*code).unwrap_or_default(),
            Self::Modern { color, .. } => *color,
        }
    }

    /// The identifying character, for `Legacy` tokens.
    #[must_use]
    pub const fn code(&self) -> Option<char> {
        match self {
            Self::Legacy { code } => Some(*code),
            Self::Modern { .. } => None,
        }
    }

    /// Returns true if this token addresses the legacy palette.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy { code } => write!(f, "{COLOR_CHAR}{code}"),
            Self::Modern { encoded, .. } => f.write_str(encoded),
        }
    }
}

/// Encode a color as the extended native sequence `§x§r§r§g§g§b§b`.
fn encode_extended(color: Rgb) -> String {
    // Seven leads at two bytes each plus seven designators
    let mut encoded = String::with_capacity(21);
    encoded.push(COLOR_CHAR);
    encoded.push('x');
    for digit in format!("{:06x}", color.packed()).chars() {
        encoded.push(COLOR_CHAR);
        encoded.push(digit);
    }
    encoded
}
