//! Z-ordered shape container.

use crate::error::{EditorError, EditorResult};
use crate::render::DrawContext;
use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Owns every committed shape. Insertion order is z-order: later shapes
/// are drawn on top and hit-tested first. Shapes are never reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeStorage {
    shapes: Vec<Shape>,
}

impl ShapeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape; it becomes the topmost one.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape by identity. Removing a non-member is a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Remove every shape matching `predicate`, returning them in z-order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Shape) -> bool) -> Vec<Shape> {
        let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|shape| predicate(shape));
        self.shapes = kept;
        removed
    }

    /// Remove every selected shape.
    pub fn remove_selected(&mut self) -> Vec<Shape> {
        self.remove_where(Shape::is_selected)
    }

    /// Remove the shape at `index`; out-of-range indices are logged and ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        let index = self.checked_index(index).ok()?;
        Some(self.shapes.remove(index))
    }

    /// Shape at `index` (0 = bottommost); out-of-range indices are logged.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        let index = self.checked_index(index).ok()?;
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        let index = self.checked_index(index).ok()?;
        self.shapes.get_mut(index)
    }

    fn checked_index(&self, index: usize) -> EditorResult<usize> {
        if index < self.shapes.len() {
            Ok(index)
        } else {
            let err = EditorError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            };
            log::warn!("{}", err);
            Err(err)
        }
    }

    pub fn get_by_id(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Topmost shape containing `point`.
    pub fn shape_at(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains_point(point))
    }

    /// Every shape containing `point`, front to back.
    pub fn shapes_at(&self, point: Point) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.contains_point(point))
            .map(Shape::id)
            .collect()
    }

    /// Shapes in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// All shape IDs in z-order.
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(Shape::id).collect()
    }

    /// IDs of the currently selected shapes, in z-order.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.is_selected())
            .map(Shape::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Draw every shape, bottommost first.
    pub fn draw_all(&self, ctx: &mut dyn DrawContext) {
        for shape in &self.shapes {
            shape.draw(ctx);
        }
    }
}

impl<'a> IntoIterator for &'a ShapeStorage {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
