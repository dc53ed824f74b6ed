//! Equilateral-by-construction triangle shape.

use super::{ShapeColor, ShapeId, ShapeKind, ShapeTrait, draw_selection_ring};
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A triangle defined by three vertices. Its bounds are always derived
/// from the vertices; resizing scales about the centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    pub vertices: [Point; 3],
    pub fill_color: ShapeColor,
    #[serde(default)]
    pub selected: bool,
}

impl Triangle {
    /// Smallest approximate size (bounding width) a shrink may reach.
    pub const MIN_SIZE: f64 = 10.0;

    /// Create an equilateral triangle with side `side` around `center`:
    /// apex on top, flat base below.
    pub fn new(center: Point, side: f64, fill_color: ShapeColor) -> Self {
        let height = side * 3f64.sqrt() / 2.0;
        let half = side / 2.0;
        Self::from_vertices(
            [
                Point::new(center.x, center.y - height * 2.0 / 3.0),
                Point::new(center.x - half, center.y + height / 3.0),
                Point::new(center.x + half, center.y + height / 3.0),
            ],
            fill_color,
        )
    }

    pub fn from_vertices(vertices: [Point; 3], fill_color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices,
            fill_color,
            selected: false,
        }
    }

    /// Center of mass of the three vertices.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Approximate size used for scaling: the bounding width.
    fn approx_size(&self) -> f64 {
        self.bounds().width().max(1.0)
    }
}

impl ShapeTrait for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn bounds(&self) -> Rect {
        let [a, b, c] = self.vertices;
        Rect::from_points(a, b).union_pt(c)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_polygon(&self.vertices, self.fill_color.into());
        if self.selected {
            draw_selection_ring(self.bounds(), ctx);
        }
    }

    fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    fn resize(&mut self, dw: f64, dh: f64) {
        let current = self.approx_size();
        let delta = dw.max(dh);
        let mut target = current + delta;

        // Growth is always allowed; a shrink stops at MIN_SIZE.
        if delta < 0.0 && target < Self::MIN_SIZE {
            if current <= Self::MIN_SIZE {
                return;
            }
            target = Self::MIN_SIZE;
        }

        let scale = target / current;
        if scale <= 0.0 || !scale.is_finite() {
            return;
        }

        let center = self.centroid();
        for vertex in &mut self.vertices {
            *vertex = center + (*vertex - center) * scale;
        }
    }

    fn would_underflow(&self, dw: f64, dh: f64) -> bool {
        let delta = dw.max(dh);
        delta < 0.0 && self.approx_size() + delta < Self::MIN_SIZE
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
