//! Element kinds and their creation defaults.

use kurbo::Size;
use serde::{Deserialize, Serialize};

use super::SerializableColor;

/// Closed set of things that can live on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Sticky,
    Text,
    Rectangle,
    Circle,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Sticky,
        ElementKind::Text,
        ElementKind::Rectangle,
        ElementKind::Circle,
    ];

    /// Size given to new elements. Text renders at its intrinsic size.
    pub fn default_size(self) -> Option<Size> {
        match self {
            ElementKind::Sticky => Some(Size::new(160.0, 100.0)),
            ElementKind::Rectangle => Some(Size::new(120.0, 80.0)),
            ElementKind::Circle => Some(Size::new(80.0, 80.0)),
            ElementKind::Text => None,
        }
    }

    /// Text payload given to new elements.
    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Sticky => "New note",
            ElementKind::Text => "Text",
            ElementKind::Rectangle | ElementKind::Circle => "",
        }
    }

    /// Fill or accent color given to new elements.
    pub fn default_color(self) -> SerializableColor {
        match self {
            ElementKind::Sticky => SerializableColor::from_rgb_hex(0xFEF7CD),
            ElementKind::Rectangle => SerializableColor::from_rgb_hex(0xE3F2FD),
            ElementKind::Circle => SerializableColor::from_rgb_hex(0xF3E5F5),
            ElementKind::Text => SerializableColor::from_rgb_hex(0x4285F4),
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Sticky => "sticky",
            ElementKind::Text => "text",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
        }
    }
}
