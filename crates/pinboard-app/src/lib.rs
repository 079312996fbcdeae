//! Pinboard Application
//!
//! Headless application shell: loads configuration, replays recorded user
//! intents through the interaction controller and exports snapshots.

mod app;

pub use app::{App, AppConfig, AppError, AppResult};
