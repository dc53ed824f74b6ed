//! Circle shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle stored as the top-left of its bounding square plus diameter.
/// Resizing keeps the center fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding square.
    pub position: Point,
    pub diameter: f64,
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Circle {
    /// Smallest diameter a circle may have.
    pub const MIN_DIAMETER: f64 = 2.0;

    /// Create a circle from its center and radius.
    pub fn new(center: Point, radius: f64, fill_color: ShapeColor) -> Self {
        let radius = radius.max(Self::MIN_DIAMETER / 2.0);
        Self {
            id: Uuid::new_v4(),
            position: Point::new(center.x - radius, center.y - radius),
            diameter: radius * 2.0,
            fill_color,
            selected: false,
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.position.x + self.radius(), self.position.y + self.radius())
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.diameter, self.diameter))
    }

    fn contains_point(&self, point: Point) -> bool {
        // Squared distances, no root needed.
        let offset = point - self.center();
        offset.hypot2() <= self.radius() * self.radius()
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
        let delta = dw.max(dh);
        let new_diameter = (self.diameter + delta).max(Self::MIN_DIAMETER);
        let radius_change = (new_diameter - self.diameter) / 2.0;
        self.position -= Vec2::new(radius_change, radius_change);
        self.diameter = new_diameter;
    }

    fn would_underflow(&self, dw: f64, dh: f64) -> bool {
        self.diameter + dw.max(dh) < Self::MIN_DIAMETER
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
