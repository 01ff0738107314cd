//! Fit-to-format poster.
//!
//! The font size comes from the paper height and the font's cap height and
//! descender. The `wdth` value is then interpolated from a handful of sampled
//! widths so the line fills the available paper width.

use kurbo::Point;
use log::{debug, warn};

use crate::{
    AxisSetting, OPSZ, Orientation, PageSize, PaperFormat, PosterPlan, Rgb, TextMeasure, TextRun,
    WDTH, WGHT,
    axis::with_axis,
    error::{Error, Result},
};

/// Cap height and descender in units of a 1000-unit em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    pub cap_height: f64,
    /// Negative below the baseline.
    pub descender: f64,
}

impl VerticalMetrics {
    pub const DEFAULT: Self = Self {
        cap_height: 700.0,
        descender: -98.0,
    };

    /// Distance from descender to cap height.
    pub fn typo_height(&self) -> f64 {
        self.cap_height - self.descender
    }
}

impl Default for VerticalMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub text: String,
    pub format: PaperFormat,
    pub orientation: Orientation,
    pub margin: f64,
    /// Multiplier applied to the size that would exactly fill the height.
    pub size_reduction: f64,
    /// Extra vertical shift in points (negative is down).
    pub y_shift: f64,
    pub metrics: VerticalMetrics,
    /// `wdth` values to sample. Sorted ascending before use.
    pub width_candidates: Vec<f64>,
    /// Axes held constant while `wdth` varies.
    pub fixed_axes: Vec<AxisSetting>,
    pub text_color: Rgb,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            text: "Kario Variable".to_string(),
            format: PaperFormat::A4,
            orientation: Orientation::Landscape,
            margin: 40.0,
            size_reduction: 0.9,
            y_shift: -30.0,
            metrics: VerticalMetrics::DEFAULT,
            width_candidates: vec![30.0, 50.0, 100.0, 120.0, 160.0],
            fixed_axes: vec![
                AxisSetting::with_tag(WGHT, 900.0),
                AxisSetting::with_tag(OPSZ, 140.0),
            ],
            text_color: Rgb::BLACK,
        }
    }
}

impl FitConfig {
    pub fn page(&self) -> PageSize {
        self.format.size(self.orientation)
    }

    /// Width and height inside the margins.
    pub fn available(&self) -> (f64, f64) {
        let page = self.page();
        (page.width - 2.0 * self.margin, page.height - 2.0 * self.margin)
    }

    /// File name used when no output path is given.
    pub fn default_output_name(&self) -> String {
        format!("output_{}_margin{}.pdf", self.format, self.margin)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));
        let (width, height) = self.available();

        if self.text.is_empty() {
            return invalid("text is empty".into());
        }
        if width <= 0.0 || height <= 0.0 {
            return invalid(format!(
                "margin {} leaves no room on {}",
                self.margin, self.format
            ));
        }
        if self.metrics.typo_height() <= 0.0 {
            return invalid(format!(
                "cap height {} must be above descender {}",
                self.metrics.cap_height, self.metrics.descender
            ));
        }
        if self.size_reduction <= 0.0 {
            return invalid(format!(
                "size reduction must be positive, got {}",
                self.size_reduction
            ));
        }
        if self.width_candidates.is_empty() {
            return Err(Error::NoCandidates);
        }
        Ok(())
    }
}

/// Largest size whose descender-to-cap-height span fits `available_height`, times `reduction`.
pub fn optimal_font_size(available_height: f64, metrics: &VerticalMetrics, reduction: f64) -> f64 {
    available_height * 1000.0 / metrics.typo_height() * reduction
}

/// Text width measured at one `wdth` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthSample {
    pub axis_value: f64,
    pub width: f64,
}

/// Measure `text` at every candidate `wdth` value, keeping candidate order.
pub fn sample_widths<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    size: f64,
    fixed_axes: &[AxisSetting],
    candidates: &[f64],
) -> Vec<WidthSample> {
    candidates
        .iter()
        .map(|&axis_value| {
            let axes = with_axis(fixed_axes, AxisSetting::with_tag(WDTH, axis_value as f32));
            let width = measure.text_width(text, size, &axes);
            debug!("wdth {axis_value}: text width = {width:.1}pt");
            WidthSample { axis_value, width }
        })
        .collect()
}

/// True when widths never shrink as the axis value grows.
pub fn is_monotonic(samples: &[WidthSample]) -> bool {
    samples.windows(2).all(|pair| {
        let (lo, hi) = (pair[0], pair[1]);
        lo.axis_value <= hi.axis_value && lo.width <= hi.width
    })
}

/// Axis value whose width hits `target`, by linear interpolation between samples.
///
/// The first consecutive pair bracketing `target` wins. Targets outside the
/// sampled range clamp to the first or last axis value.
pub fn interpolate_width(samples: &[WidthSample], target: f64) -> Result<f64> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err(Error::NoCandidates);
    };

    for pair in samples.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.width <= target && target <= hi.width {
            if hi.width == lo.width {
                return Ok(lo.axis_value);
            }
            return Ok(lo.axis_value
                + (target - lo.width) * (hi.axis_value - lo.axis_value) / (hi.width - lo.width));
        }
    }

    Ok(if target < first.width {
        first.axis_value
    } else {
        last.axis_value
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitLayout {
    pub font_size: f64,
    pub samples: Vec<WidthSample>,
    /// Chosen `wdth` value.
    pub width_value: f64,
    /// Text width at the chosen `wdth` value.
    pub text_width: f64,
    pub plan: PosterPlan,
}

/// Size the text to the paper height, fit `wdth` to the paper width, centre the line.
pub fn layout_fit<M: TextMeasure + ?Sized>(measure: &M, config: &FitConfig) -> Result<FitLayout> {
    config.validate()?;

    let (available_width, available_height) = config.available();
    debug!(
        "available area: {available_width:.1}pt x {available_height:.1}pt"
    );

    let font_size = optimal_font_size(available_height, &config.metrics, config.size_reduction);
    debug!("font size: {font_size:.1}pt");

    let mut candidates = config.width_candidates.clone();
    candidates.sort_by(f64::total_cmp);
    let samples = sample_widths(
        measure,
        &config.text,
        font_size,
        &config.fixed_axes,
        &candidates,
    );
    if !is_monotonic(&samples) {
        warn!(
            "Text width is not monotonic in wdth; interpolation may pick the wrong range"
        );
    }

    let width_value = interpolate_width(&samples, available_width)?;
    debug!("optimal wdth: {width_value:.1}");

    let wdth = AxisSetting::with_tag(WDTH, width_value as f32);
    let axes = with_axis(&config.fixed_axes, wdth);
    let text_width = measure.text_width(&config.text, font_size, &axes);
    let typo_height = font_size * config.metrics.typo_height() / 1000.0;

    let x = config.margin + (available_width - text_width) / 2.0;
    let y = config.margin
        + (available_height - typo_height) / 2.0
        + config.y_shift
        + font_size * config.metrics.descender.abs() / 1000.0;

    debug!("text width: {text_width:.1}pt");
    debug!("position: x={x:.1}, y={y:.1}");
    debug!("typographic height: {typo_height:.1}pt");

    let run = TextRun {
        text: config.text.clone(),
        origin: Point::new(x, y),
        font_size,
        axes,
        color: config.text_color,
    };

    Ok(FitLayout {
        font_size,
        samples,
        width_value,
        text_width,
        plan: PosterPlan {
            page: config.page(),
            background: None,
            runs: vec![run],
        },
    })
}
