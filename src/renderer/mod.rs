//! ASCII-art rendering boundary.
//!
//! Everything figlet-related sits behind the [`AsciiRenderer`] trait so the
//! generation pipeline can be tested without real fonts. The production
//! implementation is [`FigletRenderer`], backed by the figlet-rs crate.

mod figlet;

pub use figlet::FigletRenderer;

use crate::error::{BannerGenError, Result};

/// Description used when a font carries no comment block.
pub const NO_DESCRIPTION: &str = "-no description-";

/// A font name with its short description, as reported by font listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    pub name: String,
    pub description: String,
}

/// Renders text as multi-line ASCII art and exposes font introspection.
pub trait AsciiRenderer {
    /// Render one banner segment with the given font, constrained to at most
    /// `width` columns. The returned block ends with a newline.
    fn render(&self, text: &str, font: &str, width: usize) -> Result<String>;

    /// All available fonts, sorted ascending by name, each with a short
    /// description ([`NO_DESCRIPTION`] when the font has none).
    fn list_fonts(&self) -> Result<Vec<FontEntry>>;

    /// The comment block of the named font; first line only when `short`.
    fn font_info(&self, name: &str, short: bool) -> Result<String>;
}

/// Deterministic renderer for tests: echoes each segment as `[text]`.
pub struct MockRenderer {
    fail: bool,
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRenderer {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// A renderer whose `render` always fails, to observe whether banner
    /// rendering was attempted at all.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl AsciiRenderer for MockRenderer {
    fn render(&self, text: &str, font: &str, _width: usize) -> Result<String> {
        if self.fail {
            return Err(BannerGenError::FontNotFound(font.to_string()));
        }
        Ok(format!("[{text}]\n"))
    }

    fn list_fonts(&self) -> Result<Vec<FontEntry>> {
        Ok(vec![
            FontEntry {
                name: "mock".to_string(),
                description: "mock font".to_string(),
            },
            FontEntry {
                name: "standard".to_string(),
                description: NO_DESCRIPTION.to_string(),
            },
        ])
    }

    fn font_info(&self, name: &str, _short: bool) -> Result<String> {
        Ok(format!("mock info for {name}"))
    }
}
