//! Tool system for the canvas.

use crate::elements::ElementKind;
use serde::{Deserialize, Serialize};

/// Available tools, in toolbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Cursor,
    Hand,
    Rectangle,
    Circle,
    Pen,
    Sticky,
    Text,
    Image,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Cursor,
        ToolKind::Hand,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Pen,
        ToolKind::Sticky,
        ToolKind::Text,
        ToolKind::Image,
    ];

    /// The element a canvas click creates with this tool, if any.
    ///
    /// Pen and Image are selectable but have no element kind, so clicks with
    /// them create nothing.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Circle => Some(ElementKind::Circle),
            ToolKind::Sticky => Some(ElementKind::Sticky),
            ToolKind::Text => Some(ElementKind::Text),
            ToolKind::Cursor | ToolKind::Hand | ToolKind::Pen | ToolKind::Image => None,
        }
    }

    /// Whether canvas clicks with this tool are navigation rather than creation.
    pub fn is_navigation(self) -> bool {
        matches!(self, ToolKind::Cursor | ToolKind::Hand)
    }

    /// Human-readable label for the toolbar and status bar.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Cursor => "Cursor",
            ToolKind::Hand => "Hand",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Pen => "Pen",
            ToolKind::Sticky => "Sticky note",
            ToolKind::Text => "Text",
            ToolKind::Image => "Image",
        }
    }

    /// Icon name for the toolbar button.
    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Cursor => "MousePointer",
            ToolKind::Hand => "Hand",
            ToolKind::Rectangle => "Square",
            ToolKind::Circle => "Circle",
            ToolKind::Pen => "Pen",
            ToolKind::Sticky => "StickyNote",
            ToolKind::Text => "Type",
            ToolKind::Image => "Image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool() {
        assert_eq!(ToolKind::default(), ToolKind::Cursor);
    }

    #[test]
    fn test_creating_tools() {
        let creating: Vec<_> = ToolKind::ALL
            .into_iter()
            .filter(|t| t.element_kind().is_some())
            .collect();
        assert_eq!(
            creating,
            vec![ToolKind::Rectangle, ToolKind::Circle, ToolKind::Sticky, ToolKind::Text]
        );
    }

    #[test]
    fn test_navigation_tools_create_nothing() {
        for tool in ToolKind::ALL.into_iter().filter(|t| t.is_navigation()) {
            assert!(tool.element_kind().is_none());
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let tool: ToolKind = serde_json::from_str("\"sticky\"").unwrap();
        assert_eq!(tool, ToolKind::Sticky);
        assert_eq!(serde_json::to_string(&ToolKind::Hand).unwrap(), "\"hand\"");
    }
}
