//! SVG output.
//!
//! Plans use Y-up page coordinates; paths are flipped into SVG's Y-down space
//! so the document needs no global transform.

use kurbo::Affine;
use svg::{
    Document,
    node::element::{Path, Rectangle},
};
use varposter_font::VariableFont;
use varposter_layout::PosterPlan;

use crate::{error::Result, paint::plan_fills};

/// Render `plan` as an SVG document sized in points.
pub fn to_svg(plan: &PosterPlan, font: &VariableFont) -> Result<Document> {
    let (width, height) = (plan.page.width, plan.page.height);
    let mut document = Document::new()
        .set("width", format!("{width}pt"))
        .set("height", format!("{height}pt"))
        .set("viewBox", format!("0 0 {width} {height}"));

    if let Some(background) = plan.background {
        document = document.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", background.to_hex()),
        );
    }

    let flip = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, height]);
    for mut fill in plan_fills(font, plan)? {
        if fill.path.elements().is_empty() {
            continue;
        }
        fill.path.apply_affine(flip);
        document = document.add(
            Path::new()
                .set("d", fill.path.to_svg())
                .set("fill", fill.color.to_hex()),
        );
    }

    Ok(document)
}
