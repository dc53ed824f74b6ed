//! Builds shapes from the two points of a drag gesture.

use crate::shapes::{
    Circle, Ellipse, Line, Rectangle, Shape, ShapeColor, ShapeKind, Square, Triangle,
};
use kurbo::{Point, Rect};

/// Creates unstored shapes from drag points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryFactory {
    /// Fill color given to new shapes.
    pub fill_color: ShapeColor,
    /// Stroke width given to new lines.
    pub line_width: f64,
}

impl Default for GeometryFactory {
    fn default() -> Self {
        Self {
            fill_color: ShapeColor::red(),
            line_width: 2.0,
        }
    }
}

impl GeometryFactory {
    /// Smallest side of a triangle built by a drag.
    pub const MIN_TRIANGLE_SIDE: f64 = 5.0;

    pub fn new(fill_color: ShapeColor, line_width: f64) -> Self {
        Self {
            fill_color,
            line_width,
        }
    }

    /// Build a `kind` shape spanning `p1`..`p2`. Degenerate drags collapse
    /// to the kind's minimum size. Storage is not touched.
    pub fn create(&self, kind: ShapeKind, p1: Point, p2: Point) -> Shape {
        let frame = Self::normalize(p1, p2);
        let (width, height) = (frame.width(), frame.height());
        let color = self.fill_color;

        match kind {
            ShapeKind::Circle => {
                let radius = (width.min(height) / 2.0).max(1.0);
                Circle::new(frame.center(), radius, color).into()
            }
            ShapeKind::Square => Square::new(frame.origin(), width.min(height), color).into(),
            ShapeKind::Rectangle => Rectangle::new(frame.origin(), width, height, color).into(),
            ShapeKind::Ellipse => Ellipse::new(frame.origin(), width, height, color).into(),
            ShapeKind::Triangle => {
                let side = width.min(height).max(Self::MIN_TRIANGLE_SIDE);
                Triangle::new(frame.center(), side, color).into()
            }
            // Lines keep drag direction; resize anchors on the start point.
            ShapeKind::Line => Line::new(p1, p2, color, self.line_width).into(),
        }
    }

    /// Top-left anchored frame of the drag, at least 1x1.
    fn normalize(p1: Point, p2: Point) -> Rect {
        let origin = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
        let width = (p2.x - p1.x).abs().max(1.0);
        let height = (p2.y - p1.y).abs().max(1.0);
        Rect::from_origin_size(origin, (width, height))
    }
}
