//! Script playback against a headless canvas.

use kurbo::Rect;
use serde::Serialize;
use shapeforge_core::{Canvas, DrawCommand, EditorConfig, EditorError, InputCommand, ShapeStorage};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("editor error: {0}")]
    Editor(#[from] EditorError),
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
}

/// Final state of a replayed session.
#[derive(Debug, Serialize)]
pub struct Report {
    pub area: Rect,
    pub shapes: ShapeStorage,
    pub display_list: Vec<DrawCommand>,
    pub advisories: Vec<String>,
}

/// Parse a script: a JSON array of input commands.
pub fn parse_script(json: &str) -> Result<Vec<InputCommand>, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a script from `path`, or from `reader` when no path is given.
pub fn load_script(
    path: Option<&Path>,
    mut reader: impl Read,
) -> Result<Vec<InputCommand>, ReplayError> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut json = String::new();
            reader.read_to_string(&mut json)?;
            json
        }
    };
    parse_script(&json)
}

/// Play `commands` on a fresh canvas of `width` x `height`.
pub fn replay(
    config: EditorConfig,
    width: f64,
    height: f64,
    commands: impl IntoIterator<Item = InputCommand>,
) -> Report {
    let mut canvas = Canvas::new(config);
    canvas.set_area_size(width, height);

    let mut advisories = Vec::new();
    let mut count = 0usize;
    for command in commands {
        canvas.handle(command);
        advisories.extend(canvas.take_advisories().iter().map(ToString::to_string));
        count += 1;
    }
    log::info!(
        "Replayed {} command(s), {} shape(s) in scene",
        count,
        canvas.storage().len()
    );

    Report {
        area: canvas.area(),
        display_list: canvas.display_list().into_commands(),
        shapes: canvas.storage().clone(),
        advisories,
    }
}
