//! # prismatic
//!
//! A chat color-code engine: quantizes 24-bit colors onto the 16-color
//! legacy palette, generates gradient and rainbow token sequences, applies
//! them one color per visible character, and scans, translates, and strips
//! the marker syntax those colors are written in.
//!
//! ## Quick Start
//!
//! ```rust
//! use prismatic::prelude::*;
//!
//! // A gradient, one color per visible character
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(apply_gradient("Hello", black, white, true), "§0H§8e§8l§7l§fo");
//!
//! // Shorthand translation and marker queries
//! let colorizer = Colorizer::new();
//! assert_eq!(colorizer.colorize("&aHello", true), "§aHello");
//! assert!(colorizer.starts_with_color("&aHello", true));
//! assert_eq!(colorizer.strip_all("&aHello"), "Hello");
//! ```
//!
//! ## Core Concepts
//!
//! - **Rgb**: a 24-bit color, and the fixed 16-entry legacy palette it can
//!   be quantized onto
//! - **ColorToken**: a resolved color, either a legacy palette character or
//!   an exact color with its extended marker encoding, chosen by the
//!   `legacy` flag every entry point carries
//! - **Annotator**: applies one token per visible character while format
//!   markers ride along in an accumulating buffer
//! - **Effects**: gradient and rainbow sequence generation sized to the
//!   visible length of the target text
//! - **Colorizer**: an ordered registry of custom [`ColorPattern`] syntaxes
//!   plus the built-in translation, stripping, and marker queries

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod token;
pub mod marker;
pub mod annotate;
pub mod effects;
pub mod pattern;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::annotate::{annotate, visible_len};
    pub use crate::color::{ColorParseError, LEGACY_PALETTE, Rgb, legacy_color, rgb_to_legacy};
    pub use crate::effects::{
        apply_color, apply_gradient, apply_rainbow, gradient, rainbow,
    };
    pub use crate::marker::{
        ALT_COLOR_CHAR, COLOR_CHAR, MarkerKind, MarkerSpan, find_markers, strip_colors,
        strip_formats, translate_shorthand,
    };
    pub use crate::pattern::{ColorPattern, Colorizer};
    pub use crate::token::ColorToken;
}

// Re-export key types at crate root
pub use color::{ColorParseError, Rgb};
pub use pattern::{ColorPattern, Colorizer};
pub use token::ColorToken;
