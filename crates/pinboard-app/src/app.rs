//! Application state and session replay.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use pinboard_core::config::{CanvasConfig, ConfigError};
use pinboard_core::controller::InteractionController;
use pinboard_core::elements::SerializableColor;
use pinboard_core::input::Command;
use pinboard_render::{RenderContext, Renderer, RendererError, StatusBar, SvgRenderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid session script: {0}")]
    Script(#[source] serde_json::Error),
    #[error("Invalid app config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("Invalid canvas config: {0}")]
    Canvas(#[from] ConfigError),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

fn read_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Top-left of the canvas container, below the toolbar.
    pub canvas_origin: Point,
    /// Canvas background as `#rrggbb`.
    pub background_color: String,
    /// Draw toolbar-independent chrome (status bar, empty hint) in snapshots.
    pub show_chrome: bool,
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Pinboard".to_string(),
            width: 1280,
            height: 800,
            canvas_origin: Point::new(0.0, 80.0),
            background_color: "#FFFFFF".to_string(),
            show_chrome: true,
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(AppError::Config)?;
        config.canvas.validate()?;
        config.background()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let config = Self::from_json(&read_file(path)?)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parsed background color.
    pub fn background(&self) -> AppResult<Color> {
        SerializableColor::parse_hex(&self.background_color)
            .map(Color::from)
            .ok_or_else(|| AppError::InvalidColor(self.background_color.clone()))
    }

    /// Canvas container bounds in screen space.
    pub fn canvas_bounds(&self) -> Rect {
        let size = Size::new(
            (f64::from(self.width) - self.canvas_origin.x).max(0.0),
            (f64::from(self.height) - self.canvas_origin.y).max(0.0),
        );
        Rect::from_origin_size(self.canvas_origin, size)
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    controller: InteractionController,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut controller = InteractionController::with_config(config.canvas.clone());
        controller.set_viewport(Some(config.canvas_bounds()));
        log::info!("{}: canvas {:?}", config.title, config.canvas_bounds());
        Self { config, controller }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Feed commands through the controller in order.
    ///
    /// Returns how many commands produced a visible change.
    pub fn replay(&mut self, commands: impl IntoIterator<Item = Command>) -> usize {
        let mut redraws = 0;
        for command in commands {
            self.controller.dispatch(command);
            if self.controller.take_redraw() {
                redraws += 1;
            }
        }
        log::info!("{}", StatusBar::from_controller(&self.controller));
        if let Some(bounds) = self.controller.document().bounds() {
            log::debug!("Content bounds {:?}", bounds);
        }
        redraws
    }

    /// Load a JSON session script and replay it.
    pub fn replay_file(&mut self, path: &Path) -> AppResult<usize> {
        let commands = Command::parse_script(&read_file(path)?).map_err(AppError::Script)?;
        log::info!("Replaying {} commands from {:?}", commands.len(), path);
        Ok(self.replay(commands))
    }

    /// Render the current board to SVG.
    pub fn render_svg(&self) -> AppResult<String> {
        let ctx = RenderContext::new(&self.controller)
            .with_background(self.config.background()?)
            .with_chrome(self.config.show_chrome);
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx)?;
        Ok(renderer.into_svg())
    }

    /// Write an SVG snapshot of the current board.
    pub fn write_svg(&self, path: &Path) -> AppResult<()> {
        let svg = self.render_svg()?;
        std::fs::write(path, svg).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote snapshot to {:?}", path);
        Ok(())
    }

    /// The board document as pretty JSON.
    pub fn document_json(&self) -> AppResult<String> {
        self.controller.document().to_json().map_err(AppError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::elements::ElementKind;
    use pinboard_core::tools::ToolKind;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.canvas_bounds(), Rect::new(0.0, 80.0, 1280.0, 800.0));
        assert_eq!(config.background().unwrap(), Color::WHITE);
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let err = AppConfig::from_json(r#"{ "background_color": "white" }"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidColor(_)));
    }

    #[test]
    fn test_config_rejects_bad_zoom() {
        let err = AppConfig::from_json(r#"{ "canvas": { "min_zoom": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, AppError::Canvas(_)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Board", "canvas_origin": {{ "x": 64.0, "y": 0.0 }} }}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Board");
        assert_eq!(config.canvas_origin, Point::new(64.0, 0.0));
        assert_eq!(config.width, 1280);
    }

    #[test]
    fn test_replay_creates_in_canvas_space() {
        let mut app = App::new(AppConfig::default());
        let redraws = app.replay([
            Command::SelectTool(ToolKind::Sticky),
            Command::CanvasClicked(Point::new(100.0, 180.0)),
            Command::PointerMove {
                position: Point::new(1.0, 1.0),
            },
        ]);
        assert_eq!(redraws, 2);

        let element = &app.controller().elements()[0];
        assert_eq!(element.kind, ElementKind::Sticky);
        assert_eq!(element.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_replay_file_and_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("session.json");
        std::fs::write(
            &script,
            r#"[
                { "select_tool": "rectangle" },
                { "canvas_clicked": { "x": 50.0, "y": 130.0 } },
                { "select_tool": "cursor" },
                { "pointer_down": { "position": { "x": 60.0, "y": 60.0 }, "target": 1 } },
                { "pointer_move": { "position": { "x": 90.0, "y": 100.0 } } },
                "pointer_up",
                "zoom_in"
            ]"#,
        )
        .unwrap();

        let mut app = App::new(AppConfig::default());
        app.replay_file(&script).unwrap();
        let element = &app.controller().elements()[0];
        assert_eq!(element.position(), Point::new(80.0, 90.0));

        let out = dir.path().join("board.svg");
        app.write_svg(&out).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains(r#"data-kind="rectangle""#));
        assert!(svg.contains("120%"));

        let json = app.document_json().unwrap();
        assert!(json.contains("\"rectangle\""));
        assert!(json.contains(&app.controller().document().id));
    }

    #[test]
    fn test_replay_rejects_bad_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("bad.json");
        std::fs::write(&script, r#"[{ "rotate": 90 }]"#).unwrap();

        let mut app = App::new(AppConfig::default());
        assert!(matches!(app.replay_file(&script), Err(AppError::Script(_))));
        assert!(matches!(
            app.replay_file(&dir.path().join("missing.json")),
            Err(AppError::Read { .. })
        ));
    }
}
