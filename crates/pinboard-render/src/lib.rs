//! Pinboard Render Library
//!
//! Renderer abstraction and implementations for Pinboard. Renderers only read
//! controller state; they never mutate the canvas.

mod renderer;
pub mod chrome;
pub mod display_list;
pub mod svg;

pub use chrome::{CursorHint, EmptyStateHint, StatusBar, ToolbarButton, empty_state_hint, toolbar};
pub use display_list::{DisplayEntry, DisplayItem, DisplayListRenderer};
pub use renderer::{ElementRenderer, INK_COLOR, PRIMARY_COLOR, RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
