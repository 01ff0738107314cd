//! # Poster Render
//!
//! Draw a [`PosterPlan`] with a variable font and write it as PDF or SVG.
//! Glyphs are emitted as filled outlines at each run's variation location.

mod error;
mod paint;
mod pdf;
mod svg_doc;

use std::{
    fs::{create_dir_all, write},
    path::Path,
};

use log::info;
use varposter_font::VariableFont;
use varposter_layout::PosterPlan;

pub use error::{Error, Result};
pub use paint::{Fill, plan_fills, run_outline};
pub use pdf::to_pdf;
pub use svg_doc::to_svg;

/// Output file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("svg") => Ok(Self::Svg),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Render `plan` and write it to `path`, creating the parent directory if needed.
pub fn save(plan: &PosterPlan, font: &VariableFont, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).map_err(write_error)?;
    }

    let bytes = match format {
        OutputFormat::Pdf => to_pdf(plan, font)?,
        OutputFormat::Svg => to_svg(plan, font)?.to_string().into_bytes(),
    };
    write(path, bytes).map_err(write_error)?;

    info!("rendered {} runs to {}", plan.runs.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use varposter_layout::{AxisSetting, PageSize, Rgb, TextRun};

    use super::*;

    fn sample_plan(font: &VariableFont, background: Option<Rgb>) -> PosterPlan {
        let text: String = font
            .mapped_chars()
            .into_iter()
            .take(4)
            .chain(['\u{E000}'])
            .collect();
        PosterPlan {
            page: PageSize::new(842.0, 595.0),
            background,
            runs: vec![TextRun {
                text,
                origin: (40.0, 200.0).into(),
                font_size: 120.0,
                axes: vec![AxisSetting::new("wght", 700.0)],
                color: Rgb::BLACK,
            }],
        }
    }

    #[test]
    fn format_from_extension() {
        let pdf = OutputFormat::from_path(Path::new("poster.pdf")).unwrap();
        let svg = OutputFormat::from_path(Path::new("poster.SVG")).unwrap();
        assert_eq!(pdf, OutputFormat::Pdf);
        assert_eq!(svg, OutputFormat::Svg);
        assert!(matches!(
            OutputFormat::from_path(Path::new("poster.png")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("poster")).is_err());
    }

    #[test]
    fn pdf_has_header_and_page_size() {
        let font = VariableFont::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let pdf = to_pdf(&sample_plan(&font, Some(Rgb::BLACK)), &font).unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("/MediaBox [0 0 842 595]"));
    }

    #[test]
    fn svg_has_view_box_background_and_glyphs() {
        let font = VariableFont::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let plan = sample_plan(&font, Some(Rgb::WHITE));
        let svg = to_svg(&plan, &font).unwrap().to_string();

        assert!(svg.contains("viewBox=\"0 0 842 595\""));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("#ffffff"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn svg_without_background_has_no_rect() {
        let font = VariableFont::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let plan = sample_plan(&font, None);
        let svg = to_svg(&plan, &font).unwrap().to_string();
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn run_outline_advances_between_glyphs() {
        let font = VariableFont::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let plan = sample_plan(&font, None);
        let run = &plan.runs[0];

        let whole = run_outline(&font, run).unwrap();
        let pieces: usize = run
            .text
            .chars()
            .scan(run.origin.x, |x, ch| {
                let glyph = font.glyph_outline(ch, run.font_size, &run.axes, (*x, run.origin.y));
                *x += varposter_layout::TextMeasure::advance(&font, ch, run.font_size, &run.axes);
                Some(glyph.unwrap().elements().len())
            })
            .sum();
        assert_eq!(whole.elements().len(), pieces);
    }

    #[test]
    fn save_writes_file_and_rejects_unknown_format() {
        let font = VariableFont::new(font_test_data::VAZIRMATN_VAR).unwrap();
        let plan = sample_plan(&font, Some(Rgb::BLACK));
        let dir = temp_dir().join(format!("varposter_render_{}", std::process::id()));
        let path = dir.join("nested").join("poster.svg");

        save(&plan, &font, &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));

        let result = save(&plan, &font, &dir.join("poster.bmp"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
