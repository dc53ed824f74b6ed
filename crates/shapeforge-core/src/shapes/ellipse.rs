//! Ellipse shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse inscribed in its bounding box; resizes from the top-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding box.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Ellipse {
    pub const MIN_SIDE: f64 = 1.0;

    pub fn new(position: Point, width: f64, height: f64, fill_color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: width.max(Self::MIN_SIDE),
            height: height.max(Self::MIN_SIDE),
            fill_color,
            selected: false,
        }
    }

    /// Create an ellipse from a bounding rectangle.
    pub fn from_rect(rect: Rect, fill_color: ShapeColor) -> Self {
        Self::new(rect.origin(), rect.width(), rect.height(), fill_color)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_ellipse(self.bounds(), self.fill_color.into());
        if self.selected {
            draw_selection_ring(self.bounds(), ctx);
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn resize(&mut self, dw: f64, dh: f64) {
        self.width = (self.width + dw).max(Self::MIN_SIDE);
        self.height = (self.height + dh).max(Self::MIN_SIDE);
    }

    fn would_underflow(&self, dw: f64, dh: f64) -> bool {
        self.width + dw < Self::MIN_SIDE || self.height + dh < Self::MIN_SIDE
    }

    fn fill_color(&self) -> ShapeColor {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: ShapeColor) {
        self.fill_color = color;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_creation() {
        let ellipse = Ellipse::new(Point::new(20.0, 30.0), 60.0, 40.0, ShapeColor::red());
        let center = ellipse.center();
        assert!((center.x - 50.0).abs() < f64::EPSILON);
        assert!((center.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_uses_bounding_box() {
        let ellipse = Ellipse::new(Point::new(0.0, 0.0), 60.0, 40.0, ShapeColor::red());
        // Corner of the box lies outside the true ellipse but inside the box.
        assert!(ellipse.contains_point(Point::new(1.0, 1.0)));
        assert!(!ellipse.contains_point(Point::new(61.0, 1.0)));
    }

    #[test]
    fn test_resize_keeps_top_left() {
        let mut ellipse = Ellipse::new(Point::new(20.0, 30.0), 60.0, 40.0, ShapeColor::red());
        ellipse.resize(10.0, -50.0);
        assert_eq!(ellipse.bounds(), Rect::new(20.0, 30.0, 90.0, 31.0));
    }

    #[test]
    fn test_from_rect() {
        let ellipse = Ellipse::from_rect(Rect::new(5.0, 6.0, 25.0, 16.0), ShapeColor::red());
        assert_eq!(ellipse.bounds(), Rect::new(5.0, 6.0, 25.0, 16.0));
    }
}
