//! Square shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A square anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub(crate) id: ShapeId,
    pub position: Point,
    pub side: f64,
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Square {
    pub const MIN_SIDE: f64 = 1.0;

    pub fn new(position: Point, side: f64, fill_color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            side: side.max(Self::MIN_SIDE),
            fill_color,
            selected: false,
        }
    }
}

impl ShapeTrait for Square {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.side, self.side))
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_rect(self.bounds(), self.fill_color.into());
        if self.selected {
            draw_selection_ring(self.bounds(), ctx);
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn resize(&mut self, dw: f64, dh: f64) {
        // The larger delta wins so the shape stays square.
        self.side = (self.side + dw.max(dh)).max(Self::MIN_SIDE);
    }

    fn would_underflow(&self, dw: f64, dh: f64) -> bool {
        self.side + dw.max(dh) < Self::MIN_SIDE
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
