//! Batch move/resize/delete over a set of stored shapes.
//!
//! Every batch is validated in full before any shape is touched, so a
//! rejected batch leaves storage exactly as it was.

use crate::error::{EditorError, EditorResult};
use crate::shapes::{Shape, ShapeId};
use crate::storage::ShapeStorage;
use kurbo::{Rect, Vec2};

/// Applies group transforms to shapes in a [`ShapeStorage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformEngine;

impl TransformEngine {
    pub fn new() -> Self {
        Self
    }

    /// Translate every shape in `ids` by `delta`, or none of them if any
    /// would leave `area`. Unknown IDs are skipped.
    pub fn group_move(
        &self,
        storage: &mut ShapeStorage,
        ids: &[ShapeId],
        delta: Vec2,
        area: Rect,
    ) -> EditorResult<()> {
        for shape in Self::members(storage, ids) {
            let moved = shape.bounds() + delta;
            if !crate::shapes::rect_contains_rect(area, moved) {
                let err = EditorError::OutOfBounds { id: shape.id() };
                log::debug!("Rejected group move by ({}, {}): {}", delta.x, delta.y, err);
                return Err(err);
            }
        }

        for shape in Self::members_mut(storage, ids) {
            shape.translate(delta);
        }
        Ok(())
    }

    /// Resize every shape in `ids` by `(dw, dh)` using each kind's own rule.
    ///
    /// The batch is rejected when any shape would be asked to go below its
    /// minimum size, or when growing would push any shape out of `area`.
    pub fn group_resize(
        &self,
        storage: &mut ShapeStorage,
        ids: &[ShapeId],
        dw: f64,
        dh: f64,
        area: Rect,
    ) -> EditorResult<()> {
        let growing = dw > 0.0 || dh > 0.0;
        for shape in Self::members(storage, ids) {
            if shape.would_underflow(dw, dh) {
                let err = EditorError::BelowMinimumSize {
                    id: shape.id(),
                    kind: shape.kind(),
                };
                log::debug!("Rejected group resize by ({}, {}): {}", dw, dh, err);
                return Err(err);
            }
            if growing && !Self::predict_resize(shape, dw, dh).is_within(area) {
                let err = EditorError::OutOfBounds { id: shape.id() };
                log::debug!("Rejected group resize by ({}, {}): {}", dw, dh, err);
                return Err(err);
            }
        }

        for shape in Self::members_mut(storage, ids) {
            shape.resize(dw, dh);
        }
        Ok(())
    }

    /// Remove every shape in `ids`, returning the removed shapes in z-order.
    pub fn group_delete(&self, storage: &mut ShapeStorage, ids: &[ShapeId]) -> Vec<Shape> {
        let removed = storage.remove_where(|shape| ids.contains(&shape.id()));
        if !removed.is_empty() {
            log::info!("Deleted {} shape(s)", removed.len());
        }
        removed
    }

    // Walk storage rather than `ids` so a repeated id is visited once.
    fn members<'a>(
        storage: &'a ShapeStorage,
        ids: &'a [ShapeId],
    ) -> impl Iterator<Item = &'a Shape> + 'a {
        storage.iter().filter(move |shape| ids.contains(&shape.id()))
    }

    fn members_mut<'a>(
        storage: &'a mut ShapeStorage,
        ids: &'a [ShapeId],
    ) -> impl Iterator<Item = &'a mut Shape> + 'a {
        storage
            .iter_mut()
            .filter(move |shape| ids.contains(&shape.id()))
    }

    /// The shape as it would look after `resize(dw, dh)`.
    fn predict_resize(shape: &Shape, dw: f64, dh: f64) -> Shape {
        let mut predicted = shape.clone();
        predicted.resize(dw, dh);
        predicted
    }
}
