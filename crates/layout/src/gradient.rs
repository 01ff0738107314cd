//! Weight-gradient poster.
//!
//! Every line repeats the same text. Along a line the weight ramps linearly
//! from a start to an end weight; the ramp runs heavy-to-light on the first
//! line and reverses step by step until the last line runs light-to-heavy.
//! Interior lines add a parabolic boost that peaks at the middle character
//! and is strongest on the middle line.
//!
//! Layout happens in two passes over the same [`weight_at`] function: a
//! calibration pass at a large size to find one global scale, and a final
//! pass that centres each line at the scaled size.

use kurbo::Point;
use log::debug;

use crate::{
    AxisSetting, PageSize, PosterPlan, Rgb, TextMeasure, TextRun, WDTH, WGHT,
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// Text repeated on every line.
    pub text: String,
    /// Number of lines (N).
    pub lines: usize,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Fixed `wdth` value for every character.
    pub width_value: f64,
    pub canvas: PageSize,
    pub margin: f64,
    pub background: Rgb,
    pub text_color: Rgb,
    /// Baseline-to-baseline distance as a fraction of the font size.
    pub line_spacing_factor: f64,
    /// Optical correction added to every baseline, in points (positive is up).
    pub vertical_offset: f64,
    /// Font size of the measurement pass.
    pub calibration_size: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            text: "UNIWIDTH/DUPLEX".to_string(),
            lines: 7,
            min_weight: 10.0,
            max_weight: 100.0,
            width_value: 76.0,
            canvas: PageSize::new(1000.0, 1000.0),
            margin: 50.0,
            background: Rgb::BLACK,
            text_color: Rgb::WHITE,
            line_spacing_factor: 0.92,
            vertical_offset: 17.0,
            calibration_size: 1000.0,
        }
    }
}

impl GradientConfig {
    /// Number of characters per line (L).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn usable_width(&self) -> f64 {
        self.canvas.width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.canvas.height - 2.0 * self.margin
    }

    /// Reject configurations the weight formula cannot handle.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));

        if self.lines < 2 {
            return invalid(format!("need at least 2 lines, got {}", self.lines));
        }
        if self.char_count() < 2 {
            return invalid(format!(
                "text needs at least 2 characters, got {:?}",
                self.text
            ));
        }
        if self.min_weight > self.max_weight {
            return invalid(format!(
                "min weight {} exceeds max weight {}",
                self.min_weight, self.max_weight
            ));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return invalid(format!(
                "margin {} leaves no room on a {}x{} canvas",
                self.margin, self.canvas.width, self.canvas.height
            ));
        }
        if self.line_spacing_factor <= 0.0 || self.calibration_size <= 0.0 {
            return invalid(
                "line spacing factor and calibration size must be positive".into(),
            );
        }
        Ok(())
    }
}

/// Boost multiplier of a line: 1 on the middle line, 0 on the first and last.
pub fn boost_factor(config: &GradientConfig, line: usize) -> f64 {
    let half = (config.lines - 1) as f64 / 2.0;
    1.0 - (line as f64 - half).abs() / half
}

/// Weight of character `index` on `line`, clamped to the configured range.
///
/// `config` must pass [`GradientConfig::validate`].
pub fn weight_at(config: &GradientConfig, line: usize, index: usize) -> f64 {
    let span = config.max_weight - config.min_weight;
    let last_line = (config.lines - 1) as f64;
    let last_char = (config.char_count() - 1) as f64;
    let line_pos = line as f64;

    let start = config.max_weight - span / last_line * line_pos;
    let end = config.min_weight + span / last_line * line_pos;
    let base = start + (end - start) / last_char * index as f64;

    let weight = if line == 0 || line == config.lines - 1 {
        base
    } else {
        let mid = last_char / 2.0;
        let dist = (index as f64 - mid).abs();
        let boost = span / 2.0 * (1.0 - (dist / mid).powi(2));
        base + boost * boost_factor(config, line)
    };

    weight.min(config.max_weight).max(config.min_weight)
}

/// All weights of one line, in character order.
pub fn line_weights(config: &GradientConfig, line: usize) -> Vec<f64> {
    (0..config.char_count())
        .map(|index| weight_at(config, line, index))
        .collect()
}

/// Variation settings of one character.
pub fn axes_at(config: &GradientConfig, line: usize, index: usize) -> [AxisSetting; 2] {
    [
        AxisSetting::with_tag(WGHT, weight_at(config, line, index) as f32),
        AxisSetting::with_tag(WDTH, config.width_value as f32),
    ]
}

/// Width of `line` at `size`, summing per-character advances.
pub fn line_width<M: TextMeasure + ?Sized>(
    measure: &M,
    config: &GradientConfig,
    line: usize,
    size: f64,
) -> f64 {
    config
        .text
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let axes = axes_at(config, line, index);
            measure.advance(ch, size, &axes)
        })
        .sum()
}

/// Result of the calibration pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientMetrics {
    /// Widest line at the calibration size.
    pub max_line_width: f64,
    pub scale_factor: f64,
    pub font_size: f64,
    pub line_spacing: f64,
}

/// Measure every line at the calibration size and derive one global scale.
pub fn measure_scale<M: TextMeasure + ?Sized>(
    measure: &M,
    config: &GradientConfig,
) -> Result<GradientMetrics> {
    config.validate()?;

    let size = config.calibration_size;
    let max_line_width = (0..config.lines)
        .map(|line| line_width(measure, config, line, size))
        .fold(0.0, f64::max);
    if max_line_width <= 0.0 {
        return Err(Error::EmptyMeasurement);
    }

    let max_text_height =
        config.lines as f64 * config.calibration_size * config.line_spacing_factor;
    let width_scale = config.usable_width() / max_line_width;
    let height_scale = config.usable_height() / max_text_height;
    let scale_factor = width_scale.min(height_scale);
    let font_size = config.calibration_size * scale_factor;

    Ok(GradientMetrics {
        max_line_width,
        scale_factor,
        font_size,
        line_spacing: font_size * config.line_spacing_factor,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayout {
    pub metrics: GradientMetrics,
    pub plan: PosterPlan,
}

/// Lay out the full poster: one run per character, each line centred on its own width.
pub fn layout_gradient<M: TextMeasure + ?Sized>(
    measure: &M,
    config: &GradientConfig,
) -> Result<GradientLayout> {
    let metrics = measure_scale(measure, config)?;
    debug!(
        "calibration: widest line {:.1}pt, scale {:.4}, size {:.2}pt",
        metrics.max_line_width, metrics.scale_factor, metrics.font_size
    );

    let block_height = config.lines as f64 * metrics.line_spacing;
    let start_y = (config.canvas.height + block_height) / 2.0 - metrics.line_spacing
        + config.vertical_offset;

    let mut runs = Vec::with_capacity(config.lines * config.char_count());
    for line in 0..config.lines {
        let y = start_y - line as f64 * metrics.line_spacing;
        let width = line_width(measure, config, line, metrics.font_size);
        let mut x = (config.canvas.width - width) / 2.0;
        debug!("line {line}: width {width:.1}pt at ({x:.1}, {y:.1})");

        for (index, ch) in config.text.chars().enumerate() {
            let axes = axes_at(config, line, index);
            let advance = measure.advance(ch, metrics.font_size, &axes);
            runs.push(TextRun {
                text: ch.to_string(),
                origin: Point::new(x, y),
                font_size: metrics.font_size,
                axes: axes.to_vec(),
                color: config.text_color,
            });
            x += advance;
        }
    }

    Ok(GradientLayout {
        metrics,
        plan: PosterPlan {
            page: config.canvas,
            background: Some(config.background),
            runs,
        },
    })
}
