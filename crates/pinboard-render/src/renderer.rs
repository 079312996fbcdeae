//! Renderer trait abstraction.

use kurbo::{Affine, Size};
use peniko::Color;
use pinboard_core::controller::InteractionController;
use pinboard_core::elements::CanvasElement;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Invalid viewport: {0}x{1}")]
    InvalidViewport(f64, f64),
}

impl From<std::fmt::Error> for RendererError {
    fn from(err: std::fmt::Error) -> Self {
        RendererError::RenderFailed(err.to_string())
    }
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Stroke color for outlined shapes.
pub const PRIMARY_COLOR: Color = Color::from_rgba8(66, 133, 244, 255);
/// Color of element text.
pub const INK_COLOR: Color = Color::from_rgba8(31, 41, 55, 255);

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The controller whose state is drawn.
    pub controller: &'a InteractionController,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Whether to draw toolbar, status bar and the empty-canvas hint.
    pub show_chrome: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context sized to the controller's viewport.
    pub fn new(controller: &'a InteractionController) -> Self {
        let viewport_size = controller
            .viewport()
            .map(|r| r.size())
            .unwrap_or(Size::new(800.0, 600.0));
        Self {
            controller,
            viewport_size,
            background_color: Color::WHITE,
            show_chrome: true,
        }
    }

    /// Override the viewport size.
    pub fn with_viewport_size(mut self, size: Size) -> Self {
        self.viewport_size = size;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Toggle the UI chrome.
    pub fn with_chrome(mut self, show: bool) -> Self {
        self.show_chrome = show;
        self
    }

    /// Canvas-to-viewport transform for this frame.
    pub fn view_transform(&self) -> Affine {
        self.controller.view_transform().to_affine()
    }

    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(RendererError::InvalidViewport(width, height))
        }
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Per-element drawing, shared by the backends.
pub trait ElementRenderer {
    /// Draw one element with the canvas-to-viewport transform.
    fn render_element(&mut self, element: &CanvasElement, transform: Affine) -> RenderResult<()>;
}
