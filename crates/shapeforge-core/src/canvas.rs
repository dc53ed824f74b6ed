//! Editor state and input handling.

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::input::{InputCommand, Key, Modifiers, MouseButton};
use crate::render::{DisplayList, DrawContext};
use crate::selection::{PickOutcome, SelectionController};
use crate::shapes::{Shape, ShapeColor, ShapeId, ShapeKind};
use crate::storage::ShapeStorage;
use crate::tools::ToolManager;
use crate::transform::TransformEngine;
use kurbo::{Point, Rect, Vec2};

/// External color chooser (e.g. a dialog). Returns `None` when dismissed.
pub trait ColorPicker {
    fn pick(&mut self, current: ShapeColor) -> Option<ShapeColor>;
}

/// Pointer gesture between a primary-button press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Creating a shape through the tool manager.
    Drawing,
    /// Moving the selection; `last` is the last accepted pointer position.
    Dragging { last: Point },
}

/// The editor: committed shapes, selection, creation tool and the
/// drawing area they are confined to.
#[derive(Debug, Clone)]
pub struct Canvas {
    storage: ShapeStorage,
    selection: SelectionController,
    tools: ToolManager,
    engine: TransformEngine,
    config: EditorConfig,
    area: Rect,
    gesture: Gesture,
    advisories: Vec<EditorError>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Canvas {
    /// Default host area size until the host reports its own.
    pub const DEFAULT_SIZE: (f64, f64) = (800.0, 600.0);

    pub fn new(config: EditorConfig) -> Self {
        let mut tools = ToolManager::new();
        tools.current_kind = config.default_kind;
        tools.drag_threshold = config.drag_threshold;
        tools.factory.fill_color = config.default_fill;
        tools.factory.line_width = config.line_width;

        let mut canvas = Self {
            storage: ShapeStorage::new(),
            selection: SelectionController::new(config.hit_mode),
            tools,
            engine: TransformEngine::new(),
            config,
            area: Rect::ZERO,
            gesture: Gesture::Idle,
            advisories: Vec::new(),
        };
        let (width, height) = Self::DEFAULT_SIZE;
        canvas.set_area_size(width, height);
        canvas
    }

    pub fn storage(&self) -> &ShapeStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut ShapeStorage {
        &mut self.storage
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Bounds every committed shape must stay inside.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.storage.selected_ids()
    }

    pub fn current_kind(&self) -> ShapeKind {
        self.tools.current_kind
    }

    pub fn fill_color(&self) -> ShapeColor {
        self.tools.fill_color()
    }

    /// Shape being dragged out, if any.
    pub fn preview(&self) -> Option<&Shape> {
        self.tools.preview_shape()
    }

    /// Host area resized to `width` x `height`.
    pub fn set_area_size(&mut self, width: f64, height: f64) {
        self.set_area_bounds(Rect::new(0.0, 0.0, width, height));
    }

    /// Host area changed. The right and bottom edges are pulled in by
    /// `area_inset`.
    pub fn set_area_bounds(&mut self, bounds: Rect) {
        let inset = self.config.area_inset;
        let bounds = bounds.abs();
        self.area = Rect::new(
            bounds.x0,
            bounds.y0,
            (bounds.x1 - inset).max(bounds.x0),
            (bounds.y1 - inset).max(bounds.y0),
        );
        log::debug!("Drawing area is now {:?}", self.area);
    }

    /// Primary-button press. Picks under the cursor; a press on a selected
    /// shape starts moving the selection, a press on empty space starts
    /// creating a shape.
    pub fn pointer_down(&mut self, point: Point, button: MouseButton, modifiers: Modifiers) {
        if button != MouseButton::Left {
            return;
        }
        self.tools.cancel();

        let outcome = self.selection.pick(&mut self.storage, point, modifiers.ctrl);
        self.gesture = match outcome {
            PickOutcome::Miss => {
                self.tools.begin(point);
                Gesture::Drawing
            }
            PickOutcome::Hit { grabbed: true, .. } => Gesture::Dragging { last: point },
            PickOutcome::Hit { grabbed: false, .. } => Gesture::Idle,
        };
        log::debug!("Pointer down at ({}, {}): {:?}", point.x, point.y, self.gesture);
    }

    /// Pointer moved. Drags the selection or updates the creation preview.
    pub fn pointer_move(
        &mut self,
        point: Point,
        _button: Option<MouseButton>,
        _modifiers: Modifiers,
    ) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing => self.tools.update(point),
            Gesture::Dragging { last } => {
                // A rejected step keeps `last`, so the next accepted step
                // covers the whole distance since the last good position.
                if self.move_selection(point - last).is_ok() {
                    self.gesture = Gesture::Dragging { last: point };
                }
            }
        }
    }

    /// Primary-button release. Ends the current gesture, committing a
    /// newly drawn shape if the drag was long enough.
    pub fn pointer_up(&mut self, point: Point, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        if std::mem::take(&mut self.gesture) != Gesture::Drawing {
            return;
        }
        if let Some(shape) = self.tools.end(point) {
            if let Err(err) = self.commit(shape) {
                log::warn!("{}", err);
                self.advisories.push(err);
            }
        }
    }

    /// Key press acting on the current selection.
    pub fn key_down(&mut self, key: &Key, _modifiers: Modifiers) {
        if let Err(err) = self.apply_key(key) {
            log::debug!("Key {} ignored: {}", key, err);
        }
    }

    fn apply_key(&mut self, key: &Key) -> EditorResult<()> {
        if *key == Key::Escape {
            self.cancel_creation();
            return Ok(());
        }
        if let Key::Other(name) = key {
            return Err(EditorError::UnknownKey(name.clone()));
        }
        if self.storage.selected_ids().is_empty() {
            return Ok(());
        }

        let step = self.config.move_step;
        let resize = self.config.resize_step;
        match key {
            Key::Left => self.move_selection(Vec2::new(-step, 0.0)),
            Key::Right => self.move_selection(Vec2::new(step, 0.0)),
            Key::Up => self.move_selection(Vec2::new(0.0, -step)),
            Key::Down => self.move_selection(Vec2::new(0.0, step)),
            Key::Plus => self.resize_selection(resize, resize),
            Key::Minus => self.resize_selection(-resize, -resize),
            Key::Delete => {
                self.delete_selection();
                Ok(())
            }
            Key::Escape | Key::Other(_) => Ok(()),
        }
    }

    /// Drop an in-progress creation drag.
    pub fn cancel_creation(&mut self) {
        if self.gesture == Gesture::Drawing {
            self.gesture = Gesture::Idle;
        }
        self.tools.cancel();
    }

    /// Move every selected shape by `delta`, or none of them.
    pub fn move_selection(&mut self, delta: Vec2) -> EditorResult<()> {
        let ids = self.storage.selected_ids();
        self.engine
            .group_move(&mut self.storage, &ids, delta, self.area)
    }

    /// Resize every selected shape by `(dw, dh)`, or none of them.
    pub fn resize_selection(&mut self, dw: f64, dh: f64) -> EditorResult<()> {
        let ids = self.storage.selected_ids();
        self.engine
            .group_resize(&mut self.storage, &ids, dw, dh, self.area)
    }

    /// Remove every selected shape.
    pub fn delete_selection(&mut self) -> Vec<Shape> {
        let ids = self.storage.selected_ids();
        self.engine.group_delete(&mut self.storage, &ids)
    }

    /// Kind for the next creation drag.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.cancel_creation();
        self.tools.set_kind(kind);
    }

    /// Fill color for new shapes; also recolors the current selection.
    pub fn set_fill_color(&mut self, color: ShapeColor) {
        self.tools.set_fill_color(color);
        for shape in self.storage.iter_mut().filter(|s| s.is_selected()) {
            shape.set_fill_color(color);
        }
    }

    /// Ask `picker` for a new fill color, seeded with the current one.
    pub fn pick_fill_color(&mut self, picker: &mut dyn ColorPicker) {
        if let Some(color) = picker.pick(self.tools.fill_color()) {
            self.set_fill_color(color);
        }
    }

    /// Store a newly created shape as the only selected one.
    fn commit(&mut self, mut shape: Shape) -> EditorResult<ShapeId> {
        if !shape.is_within(self.area) {
            return Err(EditorError::CreationOutOfBounds { kind: shape.kind() });
        }
        self.selection.deselect_all(&mut self.storage);
        shape.set_selected(true);
        let kind = shape.kind();
        let id = self.storage.add(shape);
        log::info!("Created {} {}", kind, id);
        Ok(id)
    }

    /// Draw committed shapes bottom to top, then the creation preview.
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        self.storage.draw_all(ctx);
        if let Some(preview) = self.tools.preview_shape() {
            preview.draw(ctx);
        }
    }

    /// Record the current frame using the configured selection style.
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new().with_selection_style(self.config.selection_style());
        self.draw(&mut list);
        list
    }

    /// Drain messages meant for the user.
    pub fn take_advisories(&mut self) -> Vec<EditorError> {
        std::mem::take(&mut self.advisories)
    }

    /// Dispatch a host command.
    pub fn handle(&mut self, command: InputCommand) {
        match command {
            InputCommand::PointerDown {
                position,
                button,
                modifiers,
            } => self.pointer_down(position, button, modifiers),
            InputCommand::PointerMove {
                position,
                button,
                modifiers,
            } => self.pointer_move(position, button, modifiers),
            InputCommand::PointerUp { position, button } => self.pointer_up(position, button),
            InputCommand::KeyDown { key, modifiers } => self.key_down(&key, modifiers),
            InputCommand::Resize { width, height } => self.set_area_size(width, height),
            InputCommand::SetKind { kind } => self.set_shape_kind(kind),
            InputCommand::SetColor { color } => self.set_fill_color(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    fn canvas(width: f64, height: f64) -> Canvas {
        let mut canvas = Canvas::default();
        canvas.set_area_size(width, height);
        canvas
    }

    fn drag(canvas: &mut Canvas, from: (f64, f64), to: (f64, f64), modifiers: Modifiers) {
        canvas.pointer_down(from.into(), MouseButton::Left, modifiers);
        canvas.pointer_move(to.into(), Some(MouseButton::Left), modifiers);
        canvas.pointer_up(to.into(), MouseButton::Left);
    }

    fn click(canvas: &mut Canvas, at: (f64, f64), modifiers: Modifiers) {
        canvas.pointer_down(at.into(), MouseButton::Left, modifiers);
        canvas.pointer_up(at.into(), MouseButton::Left);
    }

    #[test]
    fn test_area_is_inset() {
        let canvas = canvas(640.0, 480.0);
        assert_eq!(canvas.area(), Rect::new(0.0, 0.0, 639.0, 479.0));

        let mut tiny = Canvas::default();
        tiny.set_area_size(0.5, 0.0);
        assert_eq!(tiny.area(), Rect::ZERO);
    }

    #[test]
    fn test_drag_creates_selected_shape() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (0.0, 0.0), (50.0, 30.0), Modifiers::NONE);
        let first = canvas.storage().ids()[0];
        assert_eq!(canvas.selected_ids(), vec![first]);

        drag(&mut canvas, (100.0, 100.0), (150.0, 150.0), Modifiers::NONE);
        let second = canvas.storage().ids()[1];
        assert_eq!(canvas.selected_ids(), vec![second]);
        assert_eq!(
            canvas.storage().get(1).map(Shape::bounds),
            Some(Rect::new(100.0, 100.0, 150.0, 150.0))
        );
    }

    #[test]
    fn test_short_drag_creates_nothing() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (0.0, 0.0), (2.0, 2.0), Modifiers::NONE);
        assert!(canvas.storage().is_empty());
        assert!(canvas.take_advisories().is_empty());
    }

    #[test]
    fn test_creation_out_of_bounds_is_advised() {
        let mut canvas = canvas(100.0, 100.0);
        drag(&mut canvas, (50.0, 50.0), (120.0, 80.0), Modifiers::NONE);
        assert!(canvas.storage().is_empty());
        assert_eq!(
            canvas.take_advisories(),
            vec![EditorError::CreationOutOfBounds {
                kind: ShapeKind::Rectangle
            }]
        );
        assert!(canvas.take_advisories().is_empty());
    }

    #[test]
    fn test_preview_is_drawn_without_ring() {
        let mut canvas = canvas(200.0, 200.0);
        canvas.set_shape_kind(ShapeKind::Ellipse);
        canvas.pointer_down(Point::new(10.0, 10.0), MouseButton::Left, Modifiers::NONE);
        canvas.pointer_move(Point::new(60.0, 40.0), Some(MouseButton::Left), Modifiers::NONE);

        let list = canvas.display_list();
        assert_eq!(
            list.commands(),
            &[DrawCommand::FillEllipse {
                rect: Rect::new(10.0, 10.0, 60.0, 40.0),
                color: ShapeColor::red(),
            }]
        );
        assert!(canvas.storage().is_empty());
    }

    #[test]
    fn test_escape_cancels_creation() {
        let mut canvas = canvas(200.0, 200.0);
        canvas.pointer_down(Point::new(10.0, 10.0), MouseButton::Left, Modifiers::NONE);
        canvas.pointer_move(Point::new(60.0, 40.0), None, Modifiers::NONE);
        canvas.key_down(&Key::Escape, Modifiers::NONE);
        assert!(canvas.preview().is_none());

        canvas.pointer_up(Point::new(60.0, 40.0), MouseButton::Left);
        assert!(canvas.storage().is_empty());
    }

    #[test]
    fn test_drag_moves_selection() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (10.0, 10.0), (30.0, 30.0), Modifiers::NONE);
        drag(&mut canvas, (20.0, 20.0), (50.0, 25.0), Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(40.0, 15.0, 60.0, 35.0))
        );
    }

    #[test]
    fn test_rejected_drag_step_does_not_advance() {
        let mut canvas = canvas(100.0, 100.0);
        drag(&mut canvas, (10.0, 10.0), (30.0, 30.0), Modifiers::NONE);

        canvas.pointer_down(Point::new(15.0, 15.0), MouseButton::Left, Modifiers::NONE);
        // Would push the right edge to 115.
        canvas.pointer_move(Point::new(100.0, 15.0), None, Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(10.0, 10.0, 30.0, 30.0))
        );
        // Measured from (15, 15), not from (100, 15).
        canvas.pointer_move(Point::new(20.0, 15.0), None, Modifiers::NONE);
        canvas.pointer_up(Point::new(20.0, 15.0), MouseButton::Left);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(15.0, 10.0, 35.0, 30.0))
        );
    }

    #[test]
    fn test_ctrl_click_builds_group() {
        let mut canvas = canvas(300.0, 300.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);
        drag(&mut canvas, (100.0, 10.0), (130.0, 40.0), Modifiers::NONE);
        let ids = canvas.storage().ids();

        click(&mut canvas, (20.0, 20.0), Modifiers::CTRL);
        assert_eq!(canvas.selected_ids(), ids);

        // Dragging one member moves both.
        drag(&mut canvas, (20.0, 20.0), (30.0, 20.0), Modifiers::NONE);
        assert_eq!(canvas.storage().get(0).unwrap().bounds().x0, 20.0);
        assert_eq!(canvas.storage().get(1).unwrap().bounds().x0, 110.0);

        // Ctrl-click on a member drops it.
        click(&mut canvas, (120.0, 20.0), Modifiers::CTRL);
        assert_eq!(canvas.selected_ids(), vec![ids[0]]);
    }

    #[test]
    fn test_click_on_empty_space_deselects() {
        let mut canvas = canvas(300.0, 300.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);
        click(&mut canvas, (200.0, 200.0), Modifiers::NONE);
        assert!(canvas.selected_ids().is_empty());
        assert_eq!(canvas.storage().len(), 1);
    }

    #[test]
    fn test_keys_move_resize_delete() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);

        canvas.key_down(&Key::Right, Modifiers::NONE);
        canvas.key_down(&Key::Down, Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(15.0, 15.0, 45.0, 45.0))
        );

        canvas.key_down(&Key::Plus, Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(15.0, 15.0, 50.0, 50.0))
        );
        canvas.key_down(&Key::Minus, Modifiers::NONE);
        canvas.key_down(&Key::Minus, Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(15.0, 15.0, 40.0, 40.0))
        );

        canvas.key_down(&Key::from_name("F1"), Modifiers::NONE);
        canvas.key_down(&Key::Delete, Modifiers::NONE);
        assert!(canvas.storage().is_empty());
    }

    #[test]
    fn test_keys_without_selection_do_nothing() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);
        click(&mut canvas, (150.0, 150.0), Modifiers::NONE);

        canvas.key_down(&Key::Left, Modifiers::NONE);
        canvas.key_down(&Key::Delete, Modifiers::NONE);
        assert_eq!(
            canvas.storage().get(0).map(Shape::bounds),
            Some(Rect::new(10.0, 10.0, 40.0, 40.0))
        );
    }

    #[test]
    fn test_fill_color_recolors_selection() {
        let mut canvas = canvas(300.0, 300.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);
        drag(&mut canvas, (100.0, 10.0), (130.0, 40.0), Modifiers::NONE);

        canvas.set_fill_color(ShapeColor::blue());
        let colors: Vec<ShapeColor> = canvas.storage().iter().map(Shape::fill_color).collect();
        assert_eq!(colors, vec![ShapeColor::red(), ShapeColor::blue()]);
        assert_eq!(canvas.fill_color(), ShapeColor::blue());
    }

    struct FixedPicker(Option<ShapeColor>, Vec<ShapeColor>);

    impl ColorPicker for FixedPicker {
        fn pick(&mut self, current: ShapeColor) -> Option<ShapeColor> {
            self.1.push(current);
            self.0
        }
    }

    #[test]
    fn test_color_picker() {
        let mut canvas = canvas(200.0, 200.0);
        drag(&mut canvas, (10.0, 10.0), (40.0, 40.0), Modifiers::NONE);

        let mut dismissed = FixedPicker(None, Vec::new());
        canvas.pick_fill_color(&mut dismissed);
        assert_eq!(dismissed.1, vec![ShapeColor::red()]);
        assert_eq!(canvas.fill_color(), ShapeColor::red());

        let green = ShapeColor::rgb(0, 255, 0);
        let mut chosen = FixedPicker(Some(green), Vec::new());
        canvas.pick_fill_color(&mut chosen);
        assert_eq!(canvas.fill_color(), green);
        assert_eq!(canvas.storage().get(0).map(Shape::fill_color), Some(green));
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut canvas = canvas(200.0, 200.0);
        canvas.pointer_down(Point::new(0.0, 0.0), MouseButton::Right, Modifiers::NONE);
        canvas.pointer_move(Point::new(50.0, 50.0), None, Modifiers::NONE);
        canvas.pointer_up(Point::new(50.0, 50.0), MouseButton::Right);
        assert!(canvas.storage().is_empty());
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let mut canvas = Canvas::default();
        let commands = [
            InputCommand::Resize {
                width: 300.0,
                height: 300.0,
            },
            InputCommand::SetKind {
                kind: ShapeKind::Circle,
            },
            InputCommand::PointerDown {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
                modifiers: Modifiers::NONE,
            },
            InputCommand::PointerMove {
                position: Point::new(50.0, 50.0),
                button: Some(MouseButton::Left),
                modifiers: Modifiers::NONE,
            },
            InputCommand::PointerUp {
                position: Point::new(50.0, 50.0),
                button: MouseButton::Left,
            },
            InputCommand::KeyDown {
                key: Key::Right,
                modifiers: Modifiers::NONE,
            },
        ];
        for command in commands {
            canvas.handle(command);
        }
        assert_eq!(canvas.area(), Rect::new(0.0, 0.0, 299.0, 299.0));
        let shape = canvas.storage().get(0).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.bounds(), Rect::new(15.0, 10.0, 55.0, 50.0));
        assert_eq!(canvas.display_list().selection_rings(), 1);
    }
}
