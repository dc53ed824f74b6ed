//! ShapeForge Core Library
//!
//! Platform-agnostic shape model, storage, selection and transform logic
//! for the ShapeForge vector-shape editor.

pub mod canvas;
pub mod config;
pub mod error;
pub mod factory;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod storage;
pub mod tools;
pub mod transform;

pub use canvas::{Canvas, ColorPicker};
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use factory::GeometryFactory;
pub use input::{InputCommand, Key, Modifiers, MouseButton};
pub use render::{DisplayList, DrawCommand, DrawContext, SelectionStyle};
pub use selection::{HitMode, PickOutcome, SelectionController};
pub use shapes::{Shape, ShapeColor, ShapeId, ShapeKind, ShapeTrait};
pub use storage::ShapeStorage;
pub use tools::{ToolManager, ToolState};
pub use transform::TransformEngine;
