//! `varposter fit`: fit one line of text to a paper format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use varposter_font::VariableFont;
use varposter_layout::{
    AxisSetting, FitConfig, Orientation, PaperFormat, Rgb, VerticalMetrics, fit::layout_fit,
};

use crate::io::{parse_font, read_font, warn_missing_glyphs, write_poster};

#[derive(Debug, Clone, clap::Args)]
pub struct FitArgs {
    /// Variable font file (TTF/OTF)
    pub font: PathBuf,

    #[arg(long, default_value_t = FitConfig::default().text)]
    pub text: String,

    /// Paper format (A5..A0); unknown names fall back to A4
    #[arg(long, default_value = "A4")]
    pub format: String,

    /// Portrait instead of landscape
    #[arg(long)]
    pub portrait: bool,

    /// Margin in points
    #[arg(long, default_value_t = FitConfig::default().margin)]
    pub margin: f64,

    /// Factor applied to the size that exactly fills the height
    #[arg(long, default_value_t = FitConfig::default().size_reduction)]
    pub size_reduction: f64,

    /// Extra vertical shift in points (negative moves down)
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = FitConfig::default().y_shift
    )]
    pub y_shift: f64,

    /// Cap height per 1000 units (default: read from the font)
    #[arg(long)]
    pub cap_height: Option<f64>,

    /// Descender per 1000 units, negative (default: read from the font)
    #[arg(long, allow_negative_numbers = true)]
    pub descender: Option<f64>,

    /// Width axis values to sample (default: 30,50,100,120,160)
    #[arg(long = "width-candidate", value_delimiter = ',')]
    pub width_candidates: Vec<f64>,

    /// Fixed axis settings as TAG=VALUE (default: wght=900 opsz=140)
    #[arg(long = "axis")]
    pub axes: Vec<AxisSetting>,

    /// Text color (#RRGGBB or R,G,B in 0..1)
    #[arg(long, default_value_t = FitConfig::default().text_color)]
    pub text_color: Rgb,

    /// Output file, .pdf or .svg (default: output_FORMAT_marginN.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet output
    #[arg(short, long)]
    pub quiet: bool,
}

impl FitArgs {
    /// Build the layout configuration.
    ///
    /// Vertical metrics the flags leave open come from `font_metrics`.
    pub fn config(&self, font_metrics: Option<VerticalMetrics>) -> FitConfig {
        let defaults = FitConfig::default();
        let base = font_metrics.unwrap_or(VerticalMetrics::DEFAULT);

        FitConfig {
            text: self.text.clone(),
            format: PaperFormat::from_name(&self.format),
            orientation: if self.portrait {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            },
            margin: self.margin,
            size_reduction: self.size_reduction,
            y_shift: self.y_shift,
            metrics: VerticalMetrics {
                cap_height: self.cap_height.unwrap_or(base.cap_height),
                descender: self.descender.unwrap_or(base.descender),
            },
            width_candidates: if self.width_candidates.is_empty() {
                defaults.width_candidates
            } else {
                self.width_candidates.clone()
            },
            fixed_axes: if self.axes.is_empty() {
                defaults.fixed_axes
            } else {
                self.axes.clone()
            },
            text_color: self.text_color,
        }
    }
}

fn font_metrics(font: &VariableFont) -> Option<VerticalMetrics> {
    let metrics = font.vertical_metrics();
    match metrics {
        Some(m) => info!(
            "Font metrics: cap height {:.0}, descender {:.0}",
            m.cap_height, m.descender
        ),
        None => info!("Font has no cap height; using default vertical metrics"),
    }
    metrics
}

pub fn fit(args: &FitArgs) -> Result<()> {
    let data = read_font(&args.font)?;
    let font = parse_font(&data, &args.font)?;

    let needs_font_metrics = args.cap_height.is_none() || args.descender.is_none();
    let config = args.config(if needs_font_metrics {
        font_metrics(&font)
    } else {
        None
    });
    warn_missing_glyphs(&font, &config.text);

    let layout = layout_fit(&font, &config).context("Failed to lay out fit poster")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.default_output_name()));
    write_poster(&layout.plan, &font, &output)?;

    if !args.quiet {
        let (available_width, available_height) = config.available();
        println!("Text: '{}'", config.text);
        println!(
            "Format: {} ({:?}), margin {}pt",
            config.format, config.orientation, config.margin
        );
        println!(
            "Available: {available_width:.1}pt x {available_height:.1}pt"
        );
        println!("Font size: {:.1}pt", layout.font_size);
        println!("Measurements:");
        for sample in &layout.samples {
            println!("  wdth {}: {:.1}pt", sample.axis_value, sample.width);
        }
        println!(
            "Optimal wdth: {:.1} (text width {:.1}pt)",
            layout.width_value, layout.text_width
        );
        println!("Wrote {}", output.display());
    }
    Ok(())
}
