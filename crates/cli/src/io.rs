//! Shared file I/O utilities.

use std::{fs::read, path::Path};

use anyhow::{Context, Result};
use log::warn;
use varposter_font::VariableFont;
use varposter_layout::PosterPlan;

/// Read font data from a file.
pub fn read_font(path: &Path) -> Result<Vec<u8>> {
    read(path)
        .with_context(|| format!("Failed to read font: {}", path.display()))
}

/// Parse font data read from `path`.
pub fn parse_font<'a>(data: &'a [u8], path: &Path) -> Result<VariableFont<'a>> {
    VariableFont::new(data)
        .with_context(|| format!("Failed to parse font: {}", path.display()))
}

/// Warn about characters that will fall back to `.notdef`.
pub fn warn_missing_glyphs(font: &VariableFont, text: &str) {
    let missing = font.missing_chars(text);
    if !missing.is_empty() {
        warn!("Font has no glyph for {missing:?}; drawing .notdef instead");
    }
}

/// Render and write `plan`, returning once the file is on disk.
pub fn write_poster(plan: &PosterPlan, font: &VariableFont, output: &Path) -> Result<()> {
    varposter_render::save(plan, font, output)
        .with_context(|| format!("Failed to write poster: {}", output.display()))
}
