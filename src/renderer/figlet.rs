//! Figlet renderer backed by the figlet-rs crate.
//!
//! Fonts are resolved against figlet's conventional font directories (plus
//! `FIGLET_FONTDIR` when set), with the crate's built-in standard font as a
//! fallback for the name "standard". Font descriptions come from the comment
//! block of the `.flf` header, which figlet-rs itself does not expose.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;
use log::debug;

use super::{AsciiRenderer, FontEntry, NO_DESCRIPTION};
use crate::error::{BannerGenError, Result};

/// Name of the font bundled with figlet-rs, usable without any font files.
pub const BUILTIN_FONT: &str = "standard";

const FONT_EXTENSION: &str = "flf";

/// Renders banners with figlet-rs fonts found in the configured directories.
pub struct FigletRenderer {
    font_dirs: Vec<PathBuf>,
}

impl Default for FigletRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FigletRenderer {
    /// Create a renderer using the conventional figlet font directories.
    pub fn new() -> Self {
        Self {
            font_dirs: default_font_dirs(),
        }
    }

    /// Create a renderer that only looks in the given directories.
    pub fn with_font_dirs(font_dirs: Vec<PathBuf>) -> Self {
        Self { font_dirs }
    }

    /// Locate the `.flf` file for a font name, first directory wins.
    fn font_file(&self, name: &str) -> Option<PathBuf> {
        self.font_dirs
            .iter()
            .map(|dir| dir.join(format!("{name}.{FONT_EXTENSION}")))
            .find(|path| path.is_file())
    }

    fn load_font(&self, name: &str) -> Result<FIGfont> {
        if let Some(path) = self.font_file(name) {
            debug!("Loading font '{}' from {}", name, path.display());
            return FIGfont::from_file(&path.to_string_lossy()).map_err(BannerGenError::FontFormat);
        }
        if name == BUILTIN_FONT {
            return FIGfont::standard().map_err(BannerGenError::FontFormat);
        }
        Err(BannerGenError::FontNotFound(name.to_string()))
    }
}

impl AsciiRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str, width: usize) -> Result<String> {
        let figfont = self.load_font(font)?;
        if text.is_empty() {
            return Ok(String::new());
        }
        let mut out = String::new();
        for line in wrap_to_width(&figfont, text, width)? {
            out.push_str(&convert(&figfont, &line)?);
        }
        Ok(out)
    }

    fn list_fonts(&self) -> Result<Vec<FontEntry>> {
        // Font name -> .flf path; None marks the built-in standard font.
        let mut files: BTreeMap<String, Option<PathBuf>> = BTreeMap::new();
        files.insert(BUILTIN_FONT.to_string(), self.font_file(BUILTIN_FONT));
        for dir in &self.font_dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(FONT_EXTENSION) {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if let Entry::Vacant(vacant) = files.entry(stem.to_string()) {
                    vacant.insert(Some(path));
                }
            }
        }
        let fonts = files
            .into_iter()
            .map(|(name, path)| {
                let description = path
                    .and_then(|path| read_comments(&path).ok())
                    .and_then(|comments| comments.first().map(|line| line.trim().to_string()))
                    .filter(|line| !line.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string());
                FontEntry { name, description }
            })
            .collect();
        Ok(fonts)
    }

    fn font_info(&self, name: &str, short: bool) -> Result<String> {
        match self.font_file(name) {
            Some(path) => {
                let comments = read_comments(&path)?;
                let info = if short {
                    comments
                        .first()
                        .map(|line| line.trim().to_string())
                        .unwrap_or_default()
                } else {
                    comments.join("\n")
                };
                if info.trim().is_empty() {
                    Ok(NO_DESCRIPTION.to_string())
                } else {
                    Ok(info)
                }
            }
            None if name == BUILTIN_FONT => Ok(NO_DESCRIPTION.to_string()),
            None => Err(BannerGenError::FontNotFound(name.to_string())),
        }
    }
}

/// The conventional figlet font locations, `FIGLET_FONTDIR` first.
fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(dir) = env::var("FIGLET_FONTDIR") {
        if !dir.is_empty() {
            dirs.push(PathBuf::from(dir));
        }
    }
    dirs.push(PathBuf::from("/usr/share/figlet"));
    dirs.push(PathBuf::from("/usr/local/share/figlet"));
    dirs
}

/// Render one line of text, normalized to end with a newline.
fn convert(font: &FIGfont, text: &str) -> Result<String> {
    let figure = font
        .convert(text)
        .ok_or_else(|| BannerGenError::Render(format!("cannot render {text:?}")))?;
    let mut block = figure.to_string();
    if !block.ends_with('\n') {
        block.push('\n');
    }
    Ok(block)
}

/// Break text into lines whose rendered form fits within `width` columns.
///
/// Words are packed greedily; a single word wider than the limit is kept
/// whole rather than broken mid-word.
fn wrap_to_width(font: &FIGfont, text: &str, width: usize) -> Result<Vec<String>> {
    if !text.contains(' ') || rendered_width(font, text)? <= width {
        return Ok(vec![text.to_string()]);
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        if word.is_empty() {
            continue;
        }
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        let candidate = format!("{current} {word}");
        if rendered_width(font, &candidate)? > width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// Widest rendered line, in characters.
fn rendered_width(font: &FIGfont, text: &str) -> Result<usize> {
    if text.is_empty() {
        return Ok(0);
    }
    let block = convert(font, text)?;
    Ok(block.lines().map(|line| line.chars().count()).max().unwrap_or(0))
}

/// Comment lines from an `.flf` font header (everything between the header
/// line and the first glyph).
fn read_comments(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| BannerGenError::FontFormat(format!("{}: empty font file", path.display())))?;
    if !header.starts_with("flf2") {
        return Err(BannerGenError::FontFormat(format!(
            "{}: missing flf2 signature",
            path.display()
        )));
    }
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(BannerGenError::FontFormat(format!(
            "{}: truncated header",
            path.display()
        )));
    }
    let count: usize = fields[5].parse().map_err(|_| {
        BannerGenError::FontFormat(format!("{}: bad comment line count", path.display()))
    })?;
    Ok(lines.take(count).map(str::to_string).collect())
}
