//! Turn text runs into filled glyph outlines.

use kurbo::BezPath;
use log::debug;
use varposter_font::VariableFont;
use varposter_layout::{PosterPlan, Rgb, TextMeasure, TextRun};

use crate::error::Result;

/// One filled shape in page coordinates (Y up).
#[derive(Debug, Clone)]
pub struct Fill {
    pub color: Rgb,
    pub path: BezPath,
}

/// Outline of a whole run, glyph by glyph, advancing the pen by measured advances.
pub fn run_outline(font: &VariableFont, run: &TextRun) -> Result<BezPath> {
    let mut outline = BezPath::new();
    let mut x = run.origin.x;
    for ch in run.text.chars() {
        let glyph = font.glyph_outline(ch, run.font_size, &run.axes, (x, run.origin.y))?;
        outline.extend(glyph);
        x += font.advance(ch, run.font_size, &run.axes);
    }
    Ok(outline)
}

/// All fills of a plan in paint order, background excluded.
pub fn plan_fills(font: &VariableFont, plan: &PosterPlan) -> Result<Vec<Fill>> {
    debug!("painting {} runs", plan.runs.len());
    plan.runs
        .iter()
        .map(|run| {
            run_outline(font, run).map(|path| Fill {
                color: run.color,
                path,
            })
        })
        .collect()
}
