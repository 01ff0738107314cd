//! Variable font access.

use std::fmt::{self, Formatter};

use kurbo::BezPath;
use log::debug;
use skrifa::{
    FontRef, GlyphId, MetadataProvider, Tag,
    instance::{Location, Size},
    outline::DrawSettings,
    raw::TableProvider,
    string::StringId,
};
use varposter_layout::{AxisSetting, TextMeasure, VerticalMetrics};

use crate::{
    error::{Error, Result},
    outline::BezPathPen,
};

/// Variation axis as declared in the font's `fvar` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInfo {
    pub tag: Tag,
    pub min: f32,
    pub default: f32,
    pub max: f32,
}

/// A parsed variable (or static) font.
pub struct VariableFont<'a> {
    data: &'a [u8],
    inner: FontRef<'a>,
}

impl fmt::Debug for VariableFont<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableFont")
            .field("data_len", &self.data.len())
            .field("axes", &self.axes())
            .finish_non_exhaustive()
    }
}

impl<'a> TryFrom<&'a [u8]> for VariableFont<'a> {
    type Error = Error;

    fn try_from(data: &'a [u8]) -> Result<Self> {
        Self::new(data)
    }
}

impl<'a> VariableFont<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Ok(Self {
            data,
            inner: FontRef::new(data)?,
        })
    }

    pub fn axes(&self) -> Vec<AxisInfo> {
        self.inner
            .axes()
            .iter()
            .map(|axis| AxisInfo {
                tag: axis.tag(),
                min: axis.min_value(),
                default: axis.default_value(),
                max: axis.max_value(),
            })
            .collect()
    }

    pub fn has_axis(&self, tag: Tag) -> bool {
        self.inner.axes().iter().any(|axis| axis.tag() == tag)
    }

    /// English (or first) family name from the `name` table.
    pub fn family_name(&self) -> Option<String> {
        self.inner
            .localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.chars().collect())
    }

    /// Characters covered by the font's cmap.
    pub fn mapped_chars(&self) -> Vec<char> {
        self.inner
            .charmap()
            .mappings()
            .filter_map(|(codepoint, _)| char::from_u32(codepoint))
            .collect()
    }

    /// Characters of `text` the cmap does not cover, in order of first appearance.
    pub fn missing_chars(&self, text: &str) -> Vec<char> {
        let charmap = self.inner.charmap();
        let mut missing: Vec<char> = Vec::new();
        for ch in text.chars() {
            if charmap.map(ch).is_none() && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        missing
    }

    /// OS/2 cap height and typographic descender scaled to a 1000-unit em.
    ///
    /// Returns `None` when the font has no OS/2 table or the table predates
    /// `sCapHeight` (version < 2).
    pub fn vertical_metrics(&self) -> Option<VerticalMetrics> {
        let os2 = self.inner.os2().ok()?;
        let units_per_em = self.inner.head().ok()?.units_per_em();
        let scale = 1000.0 / f64::from(units_per_em);

        let cap_height = f64::from(os2.s_cap_height()?) * scale;
        let descender = -f64::from(os2.s_typo_descender()).abs() * scale;
        Some(VerticalMetrics {
            cap_height,
            descender,
        })
    }

    /// Glyph for `ch`, `.notdef` when unmapped.
    fn glyph_id(&self, ch: char) -> GlyphId {
        self.inner.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }

    fn location(&self, axes: &[AxisSetting]) -> Location {
        let settings = axes.iter().filter_map(|axis| {
            let tag = Tag::new(&axis.tag.to_be_bytes());
            if self.has_axis(tag) {
                Some((tag, axis.value))
            } else {
                debug!("font has no {tag} axis, ignoring {axis}");
                None
            }
        });
        self.inner.axes().location(settings)
    }

    /// Unhinted outline of `ch` at `size` points with its origin at `(x, y)`.
    pub fn glyph_outline(
        &self,
        ch: char,
        size: f64,
        axes: &[AxisSetting],
        (x, y): (f64, f64),
    ) -> Result<BezPath> {
        let mut pen = BezPathPen::new(x, y);
        let glyph_id = self.glyph_id(ch);
        let Some(glyph) = self.inner.outline_glyphs().get(glyph_id) else {
            return Ok(pen.into_path());
        };

        let location = self.location(axes);
        let settings = DrawSettings::unhinted(Size::new(size as f32), &location);
        glyph
            .draw(settings, &mut pen)
            .map_err(|reason| Error::Draw { ch, reason })?;
        Ok(pen.into_path())
    }
}

impl TextMeasure for VariableFont<'_> {
    fn advance(&self, ch: char, size: f64, axes: &[AxisSetting]) -> f64 {
        let location = self.location(axes);
        let metrics = self.inner.glyph_metrics(Size::new(size as f32), &location);
        metrics
            .advance_width(self.glyph_id(ch))
            .map_or(0.0, f64::from)
    }
}
