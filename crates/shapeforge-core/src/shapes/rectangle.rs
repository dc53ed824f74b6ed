//! Rectangle shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle that grows from its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Rectangle {
    /// Smallest width or height a rectangle may have.
    pub const MIN_SIDE: f64 = 1.0;

    /// Create a new rectangle. Sides are clamped to [`Self::MIN_SIDE`].
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

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point, fill_color: ShapeColor) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();

        Self::new(Point::new(min_x, min_y), width, height, fill_color)
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_rect(self.as_rect(), self.fill_color.into());
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
