//! Pinboard Core Library
//!
//! Platform-agnostic canvas model for the Pinboard editor: the pan/zoom
//! transform, the element document and the interaction controller that
//! drives them from user intents.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod controller;
pub mod elements;
pub mod input;
pub mod tools;

pub use camera::{Camera, ViewTransform, apply_view_transform, to_canvas_space, to_screen_space};
pub use canvas::CanvasDocument;
pub use config::{CanvasConfig, ConfigError};
pub use controller::{DragState, InteractionController, PanGesture};
pub use elements::{CanvasElement, ElementId, ElementKind, SerializableColor};
pub use input::Command;
pub use tools::ToolKind;
