//! UI chrome around the canvas: toolbar, status bar, empty-canvas hint and
//! pointer cursor. Everything here only reads controller state.

use pinboard_core::controller::InteractionController;
use pinboard_core::tools::ToolKind;
use std::fmt;

/// One toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub tool: ToolKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Toolbar buttons in display order, with the active tool flagged.
pub fn toolbar(controller: &InteractionController) -> Vec<ToolbarButton> {
    let active = controller.active_tool();
    ToolKind::ALL
        .into_iter()
        .map(|tool| ToolbarButton {
            tool,
            label: tool.label(),
            icon: tool.icon(),
            active: tool == active,
        })
        .collect()
}

/// Status bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    pub element_count: usize,
    pub tool_label: &'static str,
    pub zoom_percent: u32,
}

impl StatusBar {
    pub fn from_controller(controller: &InteractionController) -> Self {
        Self {
            element_count: controller.element_count(),
            tool_label: controller.active_tool().label(),
            zoom_percent: controller.camera().zoom_percent(),
        }
    }
}

impl fmt::Display for StatusBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elements: {}  Tool: {}  {}%",
            self.element_count, self.tool_label, self.zoom_percent
        )
    }
}

/// Hint shown on an empty canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateHint {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// (icon, caption) pairs.
    pub items: [(&'static str, &'static str); 3],
}

/// The empty-canvas hint, if the canvas has no elements.
pub fn empty_state_hint(controller: &InteractionController) -> Option<EmptyStateHint> {
    (controller.element_count() == 0).then_some(EmptyStateHint {
        title: "Pick a tool and click on the canvas",
        subtitle: "Create sticky notes, shapes and text",
        items: [
            ("StickyNote", "Sticky notes"),
            ("Square", "Shapes"),
            ("Type", "Text"),
        ],
    })
}

/// Pointer cursor the front end should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
    Grabbing,
}

impl CursorHint {
    pub fn from_controller(controller: &InteractionController) -> Self {
        if controller.is_panning() {
            CursorHint::Grabbing
        } else if controller.active_tool() == ToolKind::Hand {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }

    /// CSS cursor keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}
