//! Selection state transitions.
//!
//! Selection lives on the shapes themselves (`Shape::is_selected`); the
//! controller only decides how a click changes those flags.

use crate::shapes::ShapeId;
use crate::storage::ShapeStorage;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which shapes a click considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitMode {
    /// Only the topmost shape under the cursor.
    #[default]
    Topmost,
    /// Every shape under the cursor, for picking among overlapping shapes.
    AllUnderCursor,
}

/// Result of a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing under the cursor.
    Miss,
    /// At least one shape under the cursor.
    Hit {
        /// Shapes considered by the click, front to back.
        hits: Vec<ShapeId>,
        /// Whether any of them is selected after the click, i.e. a drag
        /// starting here moves the selection.
        grabbed: bool,
    },
}

impl PickOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, PickOutcome::Hit { .. })
    }

    pub fn grabbed(&self) -> bool {
        matches!(self, PickOutcome::Hit { grabbed: true, .. })
    }
}

/// Applies click semantics to the selection flags of stored shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    pub hit_mode: HitMode,
}

impl SelectionController {
    pub fn new(hit_mode: HitMode) -> Self {
        Self { hit_mode }
    }

    /// Clear the flag on every stored shape.
    pub fn deselect_all(&self, storage: &mut ShapeStorage) {
        for shape in storage.iter_mut() {
            shape.set_selected(false);
        }
    }

    /// Set the flag on the given shapes; unknown IDs are skipped.
    pub fn set_selected(&self, storage: &mut ShapeStorage, ids: &[ShapeId], selected: bool) {
        for &id in ids {
            if let Some(shape) = storage.get_by_id_mut(id) {
                shape.set_selected(selected);
            }
        }
    }

    /// Make `id` the only selected shape.
    pub fn select_only(&self, storage: &mut ShapeStorage, id: ShapeId) {
        self.deselect_all(storage);
        self.set_selected(storage, &[id], true);
    }

    /// Flip the flag on the given shapes.
    pub fn toggle(&self, storage: &mut ShapeStorage, ids: &[ShapeId]) {
        for &id in ids {
            if let Some(shape) = storage.get_by_id_mut(id) {
                let selected = shape.is_selected();
                shape.set_selected(!selected);
            }
        }
    }

    /// Handle a click at `point`.
    ///
    /// - miss: an exclusive click clears the selection, an additive one does nothing;
    /// - additive hit: toggles the hit shape(s);
    /// - exclusive hit on something already selected: the selection is kept
    ///   so the whole group can be dragged;
    /// - exclusive hit on unselected shape(s): they become the only selection.
    pub fn pick(&self, storage: &mut ShapeStorage, point: Point, additive: bool) -> PickOutcome {
        let hits = match self.hit_mode {
            HitMode::Topmost => storage.shape_at(point).map(|s| s.id()).into_iter().collect(),
            HitMode::AllUnderCursor => storage.shapes_at(point),
        };

        if hits.is_empty() {
            if !additive {
                self.deselect_all(storage);
            }
            return PickOutcome::Miss;
        }

        let any_selected = |storage: &ShapeStorage| {
            hits.iter()
                .filter_map(|&id| storage.get_by_id(id))
                .any(|s| s.is_selected())
        };

        if additive {
            self.toggle(storage, &hits);
        } else if !any_selected(storage) {
            self.deselect_all(storage);
            self.set_selected(storage, &hits, true);
        }

        let grabbed = any_selected(storage);
        log::debug!(
            "Pick at ({}, {}) hit {} shape(s), additive={}, grabbed={}",
            point.x,
            point.y,
            hits.len(),
            additive,
            grabbed
        );
        PickOutcome::Hit { hits, grabbed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Shape, ShapeColor};

    fn storage_with(rects: &[(f64, f64, f64, f64)]) -> (ShapeStorage, Vec<ShapeId>) {
        let mut storage = ShapeStorage::new();
        let ids = rects
            .iter()
            .map(|&(x, y, w, h)| {
                let shape: Shape =
                    Rectangle::new(Point::new(x, y), w, h, ShapeColor::red()).into();
                storage.add(shape)
            })
            .collect();
        (storage, ids)
    }

    #[test]
    fn test_deselect_all_is_idempotent() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.set_selected(&mut storage, &ids, true);

        controller.deselect_all(&mut storage);
        controller.deselect_all(&mut storage);
        assert!(storage.selected_ids().is_empty());
    }

    #[test]
    fn test_exclusive_click_on_empty_space_clears() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.select_only(&mut storage, ids[0]);

        let outcome = controller.pick(&mut storage, Point::new(50.0, 50.0), false);
        assert_eq!(outcome, PickOutcome::Miss);
        assert!(storage.selected_ids().is_empty());
    }

    #[test]
    fn test_additive_click_on_empty_space_keeps_selection() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.select_only(&mut storage, ids[0]);

        let outcome = controller.pick(&mut storage, Point::new(50.0, 50.0), true);
        assert_eq!(outcome, PickOutcome::Miss);
        assert_eq!(storage.selected_ids(), vec![ids[0]]);
    }

    #[test]
    fn test_exclusive_click_selects_only_hit_shape() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.select_only(&mut storage, ids[0]);

        let outcome = controller.pick(&mut storage, Point::new(25.0, 5.0), false);
        assert!(outcome.grabbed());
        assert_eq!(storage.selected_ids(), vec![ids[1]]);
    }

    #[test]
    fn test_exclusive_click_on_selected_keeps_group() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.set_selected(&mut storage, &ids, true);

        let outcome = controller.pick(&mut storage, Point::new(5.0, 5.0), false);
        assert!(outcome.grabbed());
        assert_eq!(storage.selected_ids(), ids);
    }

    #[test]
    fn test_exclusive_click_on_unique_selection_is_stable() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.select_only(&mut storage, ids[1]);

        controller.pick(&mut storage, Point::new(25.0, 5.0), false);
        controller.pick(&mut storage, Point::new(25.0, 5.0), false);
        assert_eq!(storage.selected_ids(), vec![ids[1]]);
    }

    #[test]
    fn test_additive_click_toggles() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)]);
        let controller = SelectionController::default();
        controller.select_only(&mut storage, ids[0]);

        let outcome = controller.pick(&mut storage, Point::new(25.0, 5.0), true);
        assert!(outcome.grabbed());
        assert_eq!(storage.selected_ids(), ids);

        let outcome = controller.pick(&mut storage, Point::new(5.0, 5.0), true);
        assert!(outcome.is_hit());
        assert!(!outcome.grabbed());
        assert_eq!(storage.selected_ids(), vec![ids[1]]);
    }

    #[test]
    fn test_topmost_mode_only_touches_front_shape() {
        let (mut storage, ids) = storage_with(&[(0.0, 0.0, 100.0, 100.0), (50.0, 50.0, 100.0, 100.0)]);
        let controller = SelectionController::new(HitMode::Topmost);

        let outcome = controller.pick(&mut storage, Point::new(75.0, 75.0), false);
        assert_eq!(
            outcome,
            PickOutcome::Hit {
                hits: vec![ids[1]],
                grabbed: true
            }
        );
        assert_eq!(storage.selected_ids(), vec![ids[1]]);
    }

    #[test]
    fn test_all_under_cursor_mode_selects_every_overlap() {
        let (mut storage, ids) = storage_with(&[
            (0.0, 0.0, 100.0, 100.0),
            (50.0, 50.0, 100.0, 100.0),
            (200.0, 200.0, 10.0, 10.0),
        ]);
        let controller = SelectionController::new(HitMode::AllUnderCursor);
        controller.select_only(&mut storage, ids[2]);

        controller.pick(&mut storage, Point::new(75.0, 75.0), false);
        assert_eq!(storage.selected_ids(), vec![ids[0], ids[1]]);

        // Additive click toggles each overlapping shape.
        controller.pick(&mut storage, Point::new(75.0, 75.0), true);
        assert!(storage.selected_ids().is_empty());
    }

    #[test]
    fn test_all_under_cursor_exclusive_click_keeps_partial_selection() {
        let (mut storage, ids) = storage_with(&[
            (0.0, 0.0, 100.0, 100.0),
            (50.0, 50.0, 100.0, 100.0),
            (200.0, 200.0, 10.0, 10.0),
        ]);
        let controller = SelectionController::new(HitMode::AllUnderCursor);
        controller.set_selected(&mut storage, &[ids[1], ids[2]], true);

        // One of the two hit shapes is already selected, so nothing changes.
        let outcome = controller.pick(&mut storage, Point::new(75.0, 75.0), false);
        assert_eq!(
            outcome,
            PickOutcome::Hit {
                hits: vec![ids[1], ids[0]],
                grabbed: true
            }
        );
        assert_eq!(storage.selected_ids(), vec![ids[1], ids[2]]);
    }
}
