//! Editor configuration.

use crate::error::{EditorError, EditorResult};
use crate::render::SelectionStyle;
use crate::selection::HitMode;
use crate::shapes::{ShapeColor, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the editor. Every field has a default, so partial JSON
/// documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Whether a click picks only the topmost shape or every shape under it.
    pub hit_mode: HitMode,
    /// Minimum pointer travel on either axis before a drag creates a shape.
    pub drag_threshold: f64,
    /// Arrow-key nudge distance.
    pub move_step: f64,
    /// Width/height delta applied by the grow and shrink keys.
    pub resize_step: f64,
    /// Gap between a selected shape and its selection ring.
    pub selection_margin: f64,
    pub selection_color: ShapeColor,
    /// Fill color for new shapes.
    pub default_fill: ShapeColor,
    /// Kind created by a drag until the host picks another.
    pub default_kind: ShapeKind,
    /// Stroke width of new lines.
    pub line_width: f64,
    /// Trimmed off the right and bottom of the host area so shapes never
    /// touch the last pixel row/column.
    pub area_inset: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_mode: HitMode::default(),
            drag_threshold: 3.0,
            move_step: 5.0,
            resize_step: 5.0,
            selection_margin: 3.0,
            selection_color: ShapeColor::blue(),
            default_fill: ShapeColor::red(),
            default_kind: ShapeKind::default(),
            line_width: 2.0,
            area_inset: 1.0,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EditorError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would make the editor misbehave.
    pub fn validate(&self) -> EditorResult<()> {
        let non_negative = [
            ("drag_threshold", self.drag_threshold),
            ("selection_margin", self.selection_margin),
            ("area_inset", self.area_inset),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(EditorError::Config(format!("{name} must be >= 0, got {value}")));
            }
        }
        let positive = [
            ("move_step", self.move_step),
            ("resize_step", self.resize_step),
            ("line_width", self.line_width),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(EditorError::Config(format!("{name} must be > 0, got {value}")));
            }
        }
        Ok(())
    }

    /// Selection ring style derived from this configuration.
    pub fn selection_style(&self) -> SelectionStyle {
        SelectionStyle {
            color: self.selection_color,
            margin: self.selection_margin,
            ..SelectionStyle::default()
        }
    }
}
