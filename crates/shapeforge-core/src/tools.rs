//! Shape creation tool.

use crate::factory::GeometryFactory;
use crate::shapes::{Shape, ShapeColor, ShapeKind};
use kurbo::Point;

/// State of a creation drag.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Waiting for a drag to start.
    #[default]
    Idle,
    /// A drag is in progress. Nothing is stored until it ends.
    Active {
        /// Where the drag started.
        start: Point,
        /// Latest pointer position.
        current: Point,
        /// Shape that would be committed if the drag ended here.
        preview: Option<Shape>,
    },
}

/// Manages the kind of shape to create and the in-progress drag.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Kind created by the next drag.
    pub current_kind: ShapeKind,
    /// Builds shapes from drag points.
    pub factory: GeometryFactory,
    /// Minimum travel on either axis for a drag to create a shape.
    pub drag_threshold: f64,
    /// Current state of the tool.
    pub state: ToolState,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_kind: ShapeKind::default(),
            factory: GeometryFactory::default(),
            drag_threshold: 3.0,
            state: ToolState::default(),
        }
    }
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the kind for the next drag. Cancels a drag in progress.
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.current_kind = kind;
        self.state = ToolState::Idle;
    }

    /// Fill color for new shapes.
    pub fn set_fill_color(&mut self, color: ShapeColor) {
        self.factory.fill_color = color;
    }

    pub fn fill_color(&self) -> ShapeColor {
        self.factory.fill_color
    }

    /// Begin a creation drag.
    pub fn begin(&mut self, point: Point) {
        self.state = ToolState::Active {
            start: point,
            current: point,
            preview: None,
        };
    }

    /// Move the drag end and refresh the preview.
    pub fn update(&mut self, point: Point) {
        let kind = self.current_kind;
        let threshold = self.drag_threshold;
        let factory = &self.factory;
        if let ToolState::Active {
            start,
            current,
            preview,
        } = &mut self.state
        {
            *current = point;
            *preview = Self::exceeds_threshold(*start, point, threshold)
                .then(|| factory.create(kind, *start, point));
        }
    }

    /// End the drag. Returns the new shape when the pointer travelled past
    /// the threshold on at least one axis.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        let ToolState::Active { start, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        if !Self::exceeds_threshold(start, point, self.drag_threshold) {
            log::debug!("Creation drag below threshold, discarded");
            return None;
        }
        Some(self.factory.create(self.current_kind, start, point))
    }

    /// Drop the drag without creating anything.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// Shape that would be created if the drag ended now.
    pub fn preview_shape(&self) -> Option<&Shape> {
        match &self.state {
            ToolState::Active { preview, .. } => preview.as_ref(),
            ToolState::Idle => None,
        }
    }

    fn exceeds_threshold(start: Point, end: Point, threshold: f64) -> bool {
        (end.x - start.x).abs() > threshold || (end.y - start.y).abs() > threshold
    }
}
