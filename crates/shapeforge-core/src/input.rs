//! Input commands delivered by the host.

use crate::shapes::{ShapeColor, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
}

/// Keys the editor reacts to. Anything else is carried as [`Key::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Delete,
    Plus,
    Minus,
    Escape,
    Other(String),
}

impl Key {
    /// Map a host key name to a key. Accepts the common spellings
    /// (`"ArrowLeft"`, `"Left"`, `"+"`, `"Add"`, `"Del"`, ...), ignoring case.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "delete" | "del" => Key::Delete,
            "+" | "=" | "plus" | "add" => Key::Plus,
            "-" | "minus" | "subtract" => Key::Minus,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Delete => "Delete",
            Key::Plus => "+",
            Key::Minus => "-",
            Key::Escape => "Escape",
            Key::Other(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_name(&name)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

/// One input event or host command, as delivered to `Canvas::handle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputCommand {
    PointerDown {
        position: Point,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
        /// Button held during the move, if any.
        #[serde(default)]
        button: Option<MouseButton>,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// The host's drawing area changed size.
    Resize { width: f64, height: f64 },
    SetKind { kind: ShapeKind },
    SetColor { color: ShapeColor },
}
