//! Camera module for pan/zoom transforms.
//!
//! Screen space is the raw pointer space of the viewport. Canvas space is where
//! elements live. The view transform translates by the pan offset first and
//! then scales around the canvas top-left, so zooming never recenters content.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CanvasConfig;

/// Zoom level that corresponds to "100%" in the UI.
pub const BASE_ZOOM: f64 = 1.0;

/// Convert a screen point to canvas space.
///
/// `origin` is the top-left corner of the canvas container in screen space.
pub fn to_canvas_space(screen_point: Point, origin: Point, pan: Vec2, zoom: f64) -> Point {
    ((screen_point - origin - pan) / zoom).to_point()
}

/// Convert a canvas point back to screen space.
pub fn to_screen_space(canvas_point: Point, origin: Point, pan: Vec2, zoom: f64) -> Point {
    origin + pan + canvas_point.to_vec2() * zoom
}

/// Compose the translate-then-scale descriptor for the given view state.
pub fn apply_view_transform(pan: Vec2, zoom: f64) -> ViewTransform {
    ViewTransform {
        translate: pan,
        scale: zoom,
    }
}

/// A translate-then-scale view transform with the scale origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Translation applied before scaling (screen pixels).
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// Canvas-to-container affine.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Container-to-canvas affine.
    pub fn inverse(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.translate)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        apply_view_transform(Vec2::ZERO, BASE_ZOOM)
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Camera manages the view transform for the canvas.
///
/// Zoom is always kept inside `[min_zoom, max_zoom]`; the pan offset is
/// unbounded.
#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    /// Current translation offset (pan)
    pub offset: Vec2,
    /// Current zoom level (BASE_ZOOM = 100% in UI)
    zoom: f64,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
    /// Multiplicative step used by `zoom_in` / `zoom_out`.
    pub zoom_step: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera using the zoom bounds and step from `config`.
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: BASE_ZOOM,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the camera bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoom percentage as shown in the status bar.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Get the view transform descriptor for rendering.
    pub fn view_transform(&self) -> ViewTransform {
        apply_view_transform(self.offset, self.zoom)
    }

    /// Get the affine transform for rendering (canvas to container).
    pub fn transform(&self) -> Affine {
        self.view_transform().to_affine()
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_point: Point, origin: Point) -> Point {
        to_canvas_space(screen_point, origin, self.offset, self.zoom)
    }

    /// Convert a canvas point to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_point: Point, origin: Point) -> Point {
        to_screen_space(canvas_point, origin, self.offset, self.zoom)
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom in one step, anchored at the canvas top-left.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.zoom_step);
    }

    /// Zoom out one step, anchored at the canvas top-left.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.zoom_step);
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = BASE_ZOOM;
    }
}
