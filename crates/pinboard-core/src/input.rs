//! User intents accepted by the interaction controller.
//!
//! Front ends translate their native pointer and button events into
//! [`Command`] values; scripted sessions use the same vocabulary through serde.

use crate::elements::ElementId;
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single user intent, in screen-space coordinates where a point is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Activate a tool.
    SelectTool(ToolKind),
    /// Primary button pressed, optionally over an element.
    PointerDown {
        position: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<ElementId>,
    },
    /// Pointer moved within the canvas.
    PointerMove { position: Point },
    /// Primary button released.
    PointerUp,
    /// Pointer left the canvas container.
    PointerLeave,
    /// Click (press and release) on the canvas.
    CanvasClicked(Point),
    ZoomIn,
    ZoomOut,
    ResetView,
    ClearCanvas,
}

impl Command {
    /// Parse a JSON array of commands.
    pub fn parse_script(json: &str) -> Result<Vec<Command>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = r#"[
            { "select_tool": "sticky" },
            { "canvas_clicked": { "x": 100.0, "y": 80.0 } },
            { "pointer_down": { "position": { "x": 1.0, "y": 2.0 }, "target": 3 } },
            { "pointer_move": { "position": { "x": 4.0, "y": 5.0 } } },
            "pointer_up",
            "zoom_in",
            "clear_canvas"
        ]"#;
        let commands = Command::parse_script(script).unwrap();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[0], Command::SelectTool(ToolKind::Sticky));
        assert_eq!(commands[1], Command::CanvasClicked(Point::new(100.0, 80.0)));
        assert_eq!(
            commands[2],
            Command::PointerDown {
                position: Point::new(1.0, 2.0),
                target: Some(ElementId(3)),
            }
        );
        assert_eq!(commands[4], Command::PointerUp);
        assert_eq!(commands[6], Command::ClearCanvas);
    }

    #[test]
    fn test_pointer_down_target_optional() {
        let commands =
            Command::parse_script(r#"[{ "pointer_down": { "position": { "x": 0.0, "y": 0.0 } } }]"#)
                .unwrap();
        assert_eq!(
            commands[0],
            Command::PointerDown {
                position: Point::ZERO,
                target: None,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Command::parse_script(r#"["undo"]"#).is_err());
    }
}
