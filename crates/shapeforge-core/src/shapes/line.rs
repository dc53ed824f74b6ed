//! Line segment shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight segment from `start` to `end`. Direction matters: resizing
/// keeps `start` fixed and moves `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke width, included in the bounds.
    pub stroke_width: f64,
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Line {
    /// Shortest length a shrink may produce.
    pub const MIN_LENGTH: f64 = 5.0;
    /// Below this length the direction is considered undefined.
    const DEGENERATE_LENGTH: f64 = 0.01;

    /// Create a new line.
    pub fn new(start: Point, end: Point, fill_color: ShapeColor, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            stroke_width,
            fill_color,
            selected: false,
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn bounds(&self) -> Rect {
        let half = self.stroke_width / 2.0;
        Rect::from_points(self.start, self.end).inflate(half, half)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.stroke_line(self.start, self.end, self.fill_color.into(), self.stroke_width);
        if self.selected {
            draw_selection_ring(self.bounds(), ctx);
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn resize(&mut self, dw: f64, _dh: f64) {
        let vector = self.end - self.start;
        let length = vector.hypot();

        if length < Self::DEGENERATE_LENGTH {
            if dw > 0.0 {
                self.end = self.start + Vec2::new(Self::MIN_LENGTH, 0.0);
            }
            return;
        }

        let new_length = (length + dw).max(Self::MIN_LENGTH);
        self.end = self.start + vector * (new_length / length);
    }

    fn would_underflow(&self, dw: f64, _dh: f64) -> bool {
        dw < 0.0 && self.length() + dw < Self::MIN_LENGTH
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
