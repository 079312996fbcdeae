//! Interaction controller: turns user intents into canvas state changes.
//!
//! The controller owns the view state (camera, active tool, drag and pan
//! gestures) and the element document, and is the only thing that mutates
//! them. Every command runs to completion before the next one is handled.
//!
//! Dragging works in screen space: the offset between the pointer and the
//! element is captured at press time and held constant, so an element follows
//! the raw pointer delta regardless of the zoom factor.

use crate::camera::{Camera, ViewTransform};
use crate::canvas::CanvasDocument;
use crate::config::CanvasConfig;
use crate::elements::{CanvasElement, ElementId};
use crate::input::Command;
use crate::tools::ToolKind;
use kurbo::{Point, Rect, Size, Vec2};

/// State of the element drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No element is being dragged.
    #[default]
    Idle,
    /// An element follows the pointer.
    Dragging {
        /// Element being moved.
        element: ElementId,
        /// Pointer position minus element position, captured at press time.
        offset: Vec2,
    },
}

/// An in-progress hand-tool gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Screen position where the gesture began.
    pub start: Point,
    /// Most recent screen position seen during the gesture.
    pub last: Point,
}

/// Runtime canvas state and the commands that drive it.
#[derive(Debug, Clone)]
pub struct InteractionController {
    document: CanvasDocument,
    camera: Camera,
    tool: ToolKind,
    drag: DragState,
    pan: Option<PanGesture>,
    /// Canvas container bounds in screen space; `None` while layout is unknown.
    viewport: Option<Rect>,
    config: CanvasConfig,
    needs_redraw: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Create a controller with default settings and an 800x600 viewport at the screen origin.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create a controller from a config. Zoom stays inside the configured
    /// bounds whatever the step.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            document: CanvasDocument::new(),
            camera: Camera::from_config(&config),
            tool: ToolKind::default(),
            drag: DragState::Idle,
            pan: None,
            viewport: Some(Rect::from_origin_size(Point::ZERO, Size::new(800.0, 600.0))),
            config,
            needs_redraw: true,
        }
    }

    /// Set the canvas container bounds in screen space, or `None` when unavailable.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) {
        self.viewport = viewport;
        self.needs_redraw = true;
    }

    /// Canvas container bounds in screen space.
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Top-left corner of the canvas container in screen space.
    pub fn origin(&self) -> Option<Point> {
        self.viewport.map(|r| r.origin())
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[CanvasElement] {
        self.document.elements()
    }

    pub fn element_count(&self) -> usize {
        self.document.count()
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tool
    }

    pub fn zoom(&self) -> f64 {
        self.camera.zoom()
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.camera.offset
    }

    pub fn view_transform(&self) -> ViewTransform {
        self.camera.view_transform()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn pan_gesture(&self) -> Option<PanGesture> {
        self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Return whether anything visible changed since the last call, and reset the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Topmost element under a screen point, for front ends that cannot
    /// resolve pointer targets themselves.
    pub fn element_at_screen(&self, screen_point: Point) -> Option<ElementId> {
        let origin = self.origin()?;
        let canvas_point = self.camera.screen_to_canvas(screen_point, origin);
        self.document.element_at(canvas_point)
    }

    /// Route a command to the matching handler.
    pub fn dispatch(&mut self, command: Command) {
        log::trace!("Dispatching {:?}", command);
        match command {
            Command::SelectTool(tool) => self.select_tool(tool),
            Command::PointerDown { position, target } => self.pointer_down(position, target),
            Command::PointerMove { position } => self.pointer_move(position),
            Command::PointerUp => self.pointer_up(),
            Command::PointerLeave => self.pointer_leave(),
            Command::CanvasClicked(position) => {
                self.canvas_clicked(position);
            }
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::ResetView => self.reset_view(),
            Command::ClearCanvas => self.clear_canvas(),
        }
    }

    /// Activate a tool. An active drag is left alone.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
            self.tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Primary button pressed at a screen point, over `target` if it hit an element.
    pub fn pointer_down(&mut self, screen_point: Point, target: Option<ElementId>) {
        match target {
            Some(id) => self.begin_drag(id, screen_point),
            None => {
                if self.tool == ToolKind::Hand {
                    self.pan = Some(PanGesture {
                        start: screen_point,
                        last: screen_point,
                    });
                    self.needs_redraw = true;
                    log::debug!("Pan started at ({:.1}, {:.1})", screen_point.x, screen_point.y);
                }
            }
        }
    }

    /// Like [`Self::pointer_down`], resolving the target by hit testing.
    pub fn pointer_down_at(&mut self, screen_point: Point) {
        let target = self.element_at_screen(screen_point);
        self.pointer_down(screen_point, target);
    }

    fn begin_drag(&mut self, id: ElementId, screen_point: Point) {
        // Presses on elements never reach the canvas, so other tools do nothing here.
        if self.tool != ToolKind::Cursor {
            return;
        }
        if self.is_dragging() {
            log::trace!("Ignoring press on {} while a drag is active", id);
            return;
        }
        let Some(element) = self.document.get(id) else {
            log::trace!("Ignoring press on missing element {}", id);
            return;
        };
        let offset = screen_point - element.position();
        self.drag = DragState::Dragging {
            element: id,
            offset,
        };
        log::debug!("Drag started on {}", id);
    }

    /// Pointer moved to a screen point.
    pub fn pointer_move(&mut self, screen_point: Point) {
        if self.viewport.is_none() {
            return;
        }

        if let DragState::Dragging { element, offset } = self.drag {
            if self.document.update_element_position(element, screen_point - offset) {
                self.needs_redraw = true;
            }
        }

        if let Some(pan) = &mut self.pan {
            let delta = screen_point - pan.last;
            pan.last = screen_point;
            if self.config.drag_to_pan {
                self.camera.pan(delta);
                self.needs_redraw = true;
            }
        }
    }

    /// Primary button released: ends every gesture.
    pub fn pointer_up(&mut self) {
        self.release();
    }

    /// Pointer left the canvas: ends every gesture.
    pub fn pointer_leave(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let DragState::Dragging { element, .. } = self.drag {
            log::debug!("Drag ended on {}", element);
        }
        if self.pan.take().is_some() {
            self.needs_redraw = true;
        }
        self.drag = DragState::Idle;
    }

    /// Click on the canvas. Creates an element when the active tool makes one.
    ///
    /// Returns the id of the created element.
    pub fn canvas_clicked(&mut self, screen_point: Point) -> Option<ElementId> {
        if self.tool.is_navigation() || self.is_panning() {
            return None;
        }
        let origin = self.origin()?;
        let Some(kind) = self.tool.element_kind() else {
            log::debug!("{:?} tool does not create elements", self.tool);
            return None;
        };

        let canvas_point = self.camera.screen_to_canvas(screen_point, origin);
        let id = self.document.create_element(kind, canvas_point).id();
        self.needs_redraw = true;
        Some(id)
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
        self.needs_redraw = true;
        log::debug!("Zoom: {}%", self.camera.zoom_percent());
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
        self.needs_redraw = true;
        log::debug!("Zoom: {}%", self.camera.zoom_percent());
    }

    /// Back to 100% zoom with no pan offset.
    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.needs_redraw = true;
    }

    /// Remove every element.
    pub fn clear_canvas(&mut self) {
        self.document.clear_all();
        self.needs_redraw = true;
    }
}
