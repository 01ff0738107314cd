//! Text measurement seam.

use crate::AxisSetting;

/// Horizontal metrics of a font at a given size and variation location.
///
/// Layout only ever sums per-character advances, so measuring a string
/// yields the same value as placing its characters one by one.
pub trait TextMeasure {
    /// Advance width of `ch` in points at `size` points.
    fn advance(&self, ch: char, size: f64, axes: &[AxisSetting]) -> f64;

    /// Width of `text` in points at `size` points.
    fn text_width(&self, text: &str, size: f64, axes: &[AxisSetting]) -> f64 {
        text.chars().map(|ch| self.advance(ch, size, axes)).sum()
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn advance(&self, ch: char, size: f64, axes: &[AxisSetting]) -> f64 {
        (**self).advance(ch, size, axes)
    }
}
