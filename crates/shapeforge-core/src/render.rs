//! Draw capability consumed by shapes, plus a recording implementation.
//!
//! The pixel backend lives outside this crate. Shapes only talk to a
//! [`DrawContext`]; hosts either implement it directly over their backend
//! or replay a [`DisplayList`].

use crate::shapes::ShapeColor;
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// How selection rings are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionStyle {
    /// Ring color.
    pub color: ShapeColor,
    /// Distance between the shape's bounds and the ring.
    pub margin: f64,
    /// Ring stroke width.
    pub stroke_width: f64,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            color: ShapeColor::blue(),
            margin: 3.0,
            stroke_width: 2.0,
        }
    }
}

/// Primitive drawing operations a rendering backend must provide.
pub trait DrawContext {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Dashed outline, used for selection rings.
    fn dashed_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Style for selection rings.
    fn selection_style(&self) -> SelectionStyle {
        SelectionStyle::default()
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Rect, color: ShapeColor },
    FillEllipse { rect: Rect, color: ShapeColor },
    FillPolygon { points: Vec<Point>, color: ShapeColor },
    StrokeLine { from: Point, to: Point, color: ShapeColor, width: f64 },
    DashedRect { rect: Rect, color: ShapeColor, width: f64 },
}

/// [`DrawContext`] that records every primitive in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    #[serde(skip)]
    selection_style: SelectionStyle,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific selection ring style.
    pub fn with_selection_style(mut self, style: SelectionStyle) -> Self {
        self.selection_style = style;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of selection rings recorded.
    pub fn selection_rings(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DashedRect { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            rect,
            color: color.into(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: color.into(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color: color.into(),
            width,
        });
    }

    fn dashed_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands.push(DrawCommand::DashedRect {
            rect,
            color: color.into(),
            width,
        });
    }

    fn selection_style(&self) -> SelectionStyle {
        self.selection_style
    }
}
