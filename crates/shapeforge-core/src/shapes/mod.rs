//! Shape definitions for the editor.

mod circle;
mod ellipse;
mod line;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

use crate::error::EditorError;
use crate::render::DrawContext;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Serializable fill color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub const fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::red()
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The kinds of shape the editor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::Line,
    ];

    /// Display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Line => "Line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownShapeKind(s.to_string()))
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Whether `inner` lies entirely inside `outer`, edges included.
pub fn rect_contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && inner.x1 <= outer.x1 && outer.y0 <= inner.y0 && inner.y1 <= outer.y1
}

/// Draw the dashed ring shown around a selected shape.
pub(crate) fn draw_selection_ring(bounds: Rect, ctx: &mut dyn DrawContext) {
    let style = ctx.selection_style();
    let ring = bounds.inflate(style.margin, style.margin);
    ctx.dashed_rect(ring, style.color.into(), style.stroke_width);
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Which kind of shape this is.
    fn kind(&self) -> ShapeKind;

    /// Minimal bounding box of the shape's geometry, always computed from
    /// the live geometry.
    fn bounds(&self) -> Rect;

    /// Check if a point hits this shape. Bounding-box test unless overridden.
    fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Emit the shape (and its selection ring when selected).
    fn draw(&self, ctx: &mut dyn DrawContext);

    /// Translate the defining geometry by `delta`.
    fn translate(&mut self, delta: Vec2);

    /// Kind-specific resize. Clamps at the kind's floor and never produces
    /// degenerate geometry; impossible requests leave the shape unchanged.
    fn resize(&mut self, dw: f64, dh: f64);

    /// Whether `resize(dw, dh)` would ask for a size below the kind's floor.
    fn would_underflow(&self, dw: f64, dh: f64) -> bool;

    fn fill_color(&self) -> ShapeColor;

    fn set_fill_color(&mut self, color: ShapeColor);

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);
}

/// Enum wrapper over all shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Line(Line),
}

impl Shape {
    fn as_dyn(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Circle(s) => s,
            Shape::Square(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Triangle(s) => s,
            Shape::Line(s) => s,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Circle(s) => s,
            Shape::Square(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Triangle(s) => s,
            Shape::Line(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.as_dyn().id()
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_dyn().kind()
    }

    pub fn bounds(&self) -> Rect {
        self.as_dyn().bounds()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.as_dyn().contains_point(point)
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        self.as_dyn().draw(ctx);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.as_dyn_mut().translate(delta);
    }

    pub fn resize(&mut self, dw: f64, dh: f64) {
        self.as_dyn_mut().resize(dw, dh);
    }

    pub fn would_underflow(&self, dw: f64, dh: f64) -> bool {
        self.as_dyn().would_underflow(dw, dh)
    }

    pub fn fill_color(&self) -> ShapeColor {
        self.as_dyn().fill_color()
    }

    pub fn set_fill_color(&mut self, color: ShapeColor) {
        self.as_dyn_mut().set_fill_color(color);
    }

    pub fn is_selected(&self) -> bool {
        self.as_dyn().is_selected()
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.as_dyn_mut().set_selected(selected);
    }

    /// Check whether the shape's bounds lie entirely inside `area`.
    pub fn is_within(&self, area: Rect) -> bool {
        rect_contains_rect(area, self.bounds())
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Self {
        Shape::Ellipse(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}
