//! The pluggable pattern pipeline.
//!
//! Custom color-marker syntaxes live outside the core: each one implements
//! [`ColorPattern`] and is registered on a [`Colorizer`], which runs every
//! pattern in registration order before the built-in shorthand translation.
//! The colorizer also answers marker queries over the fully colorized text.
//!
//! # Examples
//!
//! ```
//! use prismatic::pattern::{ColorPattern, Colorizer};
//!
//! struct PlusTag;
//!
//! impl ColorPattern for PlusTag {
//!     fn apply(&self, text: &str, _legacy: bool) -> String {
//!         text.replace("+red+", "§c")
//!     }
//!     fn strip(&self, text: &str) -> String {
//!         text.replace("+red+", "")
//!     }
//! }
//!
//! let mut colorizer = Colorizer::new();
//! colorizer.register(PlusTag);
//! assert_eq!(colorizer.colorize("+red+Hi &athere", true), "§cHi §athere");
//! assert_eq!(colorizer.strip_all("+red+Hi &athere"), "Hi there");
//! ```

use crate::marker::{find_markers, strip_colors, strip_formats, translate_shorthand};
use std::fmt;

/// A custom color-marker syntax.
///
/// Implementations are responsible for their own syntax only: `apply`
/// expands it into native marker sequences and `strip` removes it,
/// idempotently, leaving everything else untouched. `Send + Sync` so a
/// populated [`Colorizer`] can be shared across threads.
pub trait ColorPattern: Send + Sync {
    /// Expand this pattern's syntax into native marker sequences,
    /// respecting the legacy/modern mode.
    fn apply(&self, text: &str, legacy: bool) -> String;

    /// Remove this pattern's syntax without expanding it.
    fn strip(&self, text: &str) -> String;
}

/// An ordered registry of [`ColorPattern`]s and the operations that drive
/// them.
#[derive(Default)]
pub struct Colorizer {
    patterns: Vec<Box<dyn ColorPattern>>,
}

impl Colorizer {
    /// Create a colorizer with no registered patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Register a pattern. Patterns run in registration order.
    pub fn register<P: ColorPattern + 'static>(&mut self, pattern: P) {
        self.patterns.push(Box::new(pattern));
        log::debug!("registered color pattern #{}", self.patterns.len());
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Run every pattern's `apply` in registration order, then translate
    /// shorthand markers to native form.
    #[must_use]
    pub fn colorize(&self, text: &str, legacy: bool) -> String {
        log::trace!(
            "colorizing {} bytes through {} patterns",
            text.len(),
            self.patterns.len()
        );
        let mut output = text.to_string();
        for pattern in &self.patterns {
            output = pattern.apply(&output, legacy);
        }
        translate_shorthand(&output)
    }

    /// Run every pattern's `strip` in registration order, with no
    /// translation pass.
    #[must_use]
    pub fn strip_rgb(&self, text: &str) -> String {
        let mut output = text.to_string();
        for pattern in &self.patterns {
            output = pattern.strip(&output);
        }
        output
    }

    /// Strip format markers, then color-letter markers, then every
    /// registered pattern's syntax, in that fixed order.
    #[must_use]
    pub fn strip_all(&self, text: &str) -> String {
        self.strip_rgb(&strip_colors(&strip_formats(text)))
    }

    /// The marker the colorized text begins with, if it begins with one.
    ///
    /// The text is colorized first, so shorthand and custom syntaxes
    /// count; the first combined-scan match is returned only when it
    /// starts at offset 0.
    #[must_use]
    pub fn start_color(&self, text: &str, legacy: bool) -> Option<String> {
        let colorized = self.colorize(text, legacy);
        find_markers(&colorized)
            .first()
            .filter(|span| span.start == 0)
            .map(|span| span.text.to_string())
    }

    /// The last marker anywhere in the colorized text.
    #[must_use]
    pub fn end_color(&self, text: &str, legacy: bool) -> Option<String> {
        let colorized = self.colorize(text, legacy);
        find_markers(&colorized)
            .last()
            .map(|span| span.text.to_string())
    }

    /// Whether the colorized text begins with a marker.
    #[must_use]
    pub fn starts_with_color(&self, text: &str, legacy: bool) -> bool {
        self.start_color(text, legacy).is_some()
    }
}

impl fmt::Debug for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colorizer")
            .field("patterns", &self.patterns.len())
            .finish()
    }
}
