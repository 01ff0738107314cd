//! PDF output.
//!
//! Glyphs are written as filled paths, so the file needs no embedded font.

use kurbo::{BezPath, PathEl, Point, QuadBez};
use pdf_writer::{Content, Finish, Pdf, Rect, Ref, TextStr};
use varposter_font::VariableFont;
use varposter_layout::{PosterPlan, Rgb};

use crate::{error::Result, paint::plan_fills};

const CATALOG_ID: Ref = Ref::new(1);
const PAGE_TREE_ID: Ref = Ref::new(2);
const PAGE_ID: Ref = Ref::new(3);
const CONTENT_ID: Ref = Ref::new(4);
const INFO_ID: Ref = Ref::new(5);

/// Render `plan` as a single-page PDF.
pub fn to_pdf(plan: &PosterPlan, font: &VariableFont) -> Result<Vec<u8>> {
    let (width, height) = (plan.page.width as f32, plan.page.height as f32);
    let mut content = Content::new();

    if let Some(background) = plan.background {
        set_fill(&mut content, background);
        content.rect(0.0, 0.0, width, height);
        content.fill_nonzero();
    }

    for fill in plan_fills(font, plan)? {
        if fill.path.elements().is_empty() {
            continue;
        }
        set_fill(&mut content, fill.color);
        append_path(&mut content, &fill.path);
        content.fill_nonzero();
    }

    let mut pdf = Pdf::new();
    pdf.catalog(CATALOG_ID).pages(PAGE_TREE_ID);
    pdf.pages(PAGE_TREE_ID).kids([PAGE_ID]).count(1);

    let mut page = pdf.page(PAGE_ID);
    page.media_box(Rect::new(0.0, 0.0, width, height));
    page.parent(PAGE_TREE_ID);
    page.contents(CONTENT_ID);
    page.finish();

    let mut info = pdf.document_info(INFO_ID);
    if let Some(family) = font.family_name() {
        info.title(TextStr(&family));
    }
    info.producer(TextStr(env!("CARGO_PKG_NAME")));
    info.finish();

    pdf.stream(CONTENT_ID, &content.finish());
    Ok(pdf.finish())
}

fn set_fill(content: &mut Content, color: Rgb) {
    content.set_fill_rgb(color.r, color.g, color.b);
}

/// PDF has no quadratic segments; they are raised to cubics.
fn append_path(content: &mut Content, path: &BezPath) {
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => {
                content.move_to(p.x as f32, p.y as f32);
                current = p;
                start = p;
            }
            PathEl::LineTo(p) => {
                content.line_to(p.x as f32, p.y as f32);
                current = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let cubic = QuadBez::new(current, p1, p2).raise();
                content.cubic_to(
                    cubic.p1.x as f32,
                    cubic.p1.y as f32,
                    cubic.p2.x as f32,
                    cubic.p2.y as f32,
                    cubic.p3.x as f32,
                    cubic.p3.y as f32,
                );
                current = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                content.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p3.x as f32,
                    p3.y as f32,
                );
                current = p3;
            }
            PathEl::ClosePath => {
                content.close_path();
                current = start;
            }
        }
    }
}
