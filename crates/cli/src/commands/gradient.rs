//! `varposter gradient`: weight-gradient poster.

use std::path::PathBuf;

use anyhow::{Context, Result};
use varposter_layout::{GradientConfig, PageSize, Rgb, gradient::layout_gradient};

use crate::io::{parse_font, read_font, warn_missing_glyphs, write_poster};

#[derive(Debug, Clone, clap::Args)]
pub struct GradientArgs {
    /// Variable font file (TTF/OTF)
    pub font: PathBuf,

    /// Text repeated on every line
    #[arg(long, default_value_t = GradientConfig::default().text)]
    pub text: String,

    /// Number of lines
    #[arg(long, default_value_t = GradientConfig::default().lines)]
    pub lines: usize,

    #[arg(long, default_value_t = GradientConfig::default().min_weight)]
    pub min_weight: f64,

    #[arg(long, default_value_t = GradientConfig::default().max_weight)]
    pub max_weight: f64,

    /// Width axis value for every character
    #[arg(long, default_value_t = GradientConfig::default().width_value)]
    pub width: f64,

    #[arg(long, default_value_t = GradientConfig::default().canvas.width)]
    pub canvas_width: f64,

    #[arg(long, default_value_t = GradientConfig::default().canvas.height)]
    pub canvas_height: f64,

    #[arg(long, default_value_t = GradientConfig::default().margin)]
    pub margin: f64,

    /// Background color (#RRGGBB or R,G,B in 0..1)
    #[arg(long, default_value_t = GradientConfig::default().background)]
    pub background: Rgb,

    /// Text color (#RRGGBB or R,G,B in 0..1)
    #[arg(long, default_value_t = GradientConfig::default().text_color)]
    pub text_color: Rgb,

    /// Line spacing as a fraction of the font size
    #[arg(long, default_value_t = GradientConfig::default().line_spacing_factor)]
    pub line_spacing: f64,

    /// Optical vertical offset in points (positive moves up)
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = GradientConfig::default().vertical_offset
    )]
    pub vertical_offset: f64,

    /// Font size of the measurement pass
    #[arg(long, default_value_t = GradientConfig::default().calibration_size)]
    pub calibration_size: f64,

    /// Output file (.pdf or .svg)
    #[arg(short, long, default_value = "Interpolation.pdf")]
    pub output: PathBuf,

    /// Quiet output
    #[arg(short, long)]
    pub quiet: bool,
}

impl GradientArgs {
    pub fn config(&self) -> GradientConfig {
        GradientConfig {
            text: self.text.clone(),
            lines: self.lines,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            width_value: self.width,
            canvas: PageSize::new(self.canvas_width, self.canvas_height),
            margin: self.margin,
            background: self.background,
            text_color: self.text_color,
            line_spacing_factor: self.line_spacing,
            vertical_offset: self.vertical_offset,
            calibration_size: self.calibration_size,
        }
    }
}

pub fn gradient(args: &GradientArgs) -> Result<()> {
    let config = args.config();
    let data = read_font(&args.font)?;
    let font = parse_font(&data, &args.font)?;
    warn_missing_glyphs(&font, &config.text);

    let layout = layout_gradient(&font, &config).context("Failed to lay out gradient poster")?;
    write_poster(&layout.plan, &font, &args.output)?;

    if !args.quiet {
        let metrics = &layout.metrics;
        println!(
            "Font size: {:.1}pt (scale {:.4})",
            metrics.font_size, metrics.scale_factor
        );
        println!("Line spacing: {:.1}pt", metrics.line_spacing);
        println!("Wrote {}", args.output.display());
    }
    Ok(())
}
