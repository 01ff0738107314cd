//! Glyph outlines as kurbo paths.

use kurbo::BezPath;
use skrifa::outline::OutlinePen;

/// Collects skrifa outline commands into a [`BezPath`], offset by a pen origin.
pub(crate) struct BezPathPen {
    path: BezPath,
    dx: f64,
    dy: f64,
}

impl BezPathPen {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            path: BezPath::new(),
            dx,
            dy,
        }
    }

    pub fn into_path(self) -> BezPath {
        self.path
    }

    fn point(&self, x: f32, y: f32) -> (f64, f64) {
        (f64::from(x) + self.dx, f64::from(y) + self.dy)
    }
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(self.point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(self.point(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(self.point(cx0, cy0), self.point(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(self.point(cx0, cy0), self.point(cx1, cy1), self.point(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point};

    use super::*;

    #[test]
    fn pen_offsets_every_point() {
        let mut pen = BezPathPen::new(10.0, -5.0);
        pen.move_to(0.0, 0.0);
        pen.line_to(1.0, 2.0);
        pen.quad_to(2.0, 2.0, 3.0, 0.0);
        pen.close();

        let path = pen.into_path();
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, -5.0)),
                PathEl::LineTo(Point::new(11.0, -3.0)),
                PathEl::QuadTo(Point::new(12.0, -3.0), Point::new(13.0, -5.0)),
                PathEl::ClosePath,
            ]
        );
    }
}
