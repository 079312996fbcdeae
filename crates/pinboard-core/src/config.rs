//! Canvas configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::camera::BASE_ZOOM;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid zoom bounds: min {min} must be positive and no greater than max {max}")]
    ZoomBounds { min: f64, max: f64 },
    #[error("Zoom bounds [{min}, {max}] must contain the 100% level")]
    BaseZoomOutOfBounds { min: f64, max: f64 },
    #[error("Invalid zoom step {0}: must be greater than 1")]
    ZoomStep(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for the view and interaction behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Factor applied per zoom in/out step.
    pub zoom_step: f64,
    /// Apply pointer movement to the pan offset while the hand tool is held down.
    ///
    /// Off by default: a hand-tool press only enters the panning state.
    pub drag_to_pan: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.3,
            max_zoom: 3.0,
            zoom_step: 1.2,
            drag_to_pan: false,
        }
    }
}

impl CanvasConfig {
    /// Check that the zoom bounds and step are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::ZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.min_zoom..=self.max_zoom).contains(&BASE_ZOOM) {
            return Err(ConfigError::BaseZoomOutOfBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.zoom_step > 1.0) {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded canvas config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json(r#"{ "drag_to_pan": true }"#).unwrap();
        assert!(config.drag_to_pan);
        assert!((config.min_zoom - 0.3).abs() < f64::EPSILON);
        assert!((config.max_zoom - 3.0).abs() < f64::EPSILON);
        assert!((config.zoom_step - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = CanvasConfig::from_json(r#"{ "min_zoom": 2.0, "max_zoom": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZoomBounds { .. }));
    }

    #[test]
    fn test_rejects_bounds_excluding_base_zoom() {
        let err = CanvasConfig::from_json(r#"{ "min_zoom": 1.5, "max_zoom": 4.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BaseZoomOutOfBounds { .. }));
    }

    #[test]
    fn test_rejects_shrinking_step() {
        let err = CanvasConfig::from_json(r#"{ "zoom_step": 0.9 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZoomStep(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_zoom": 5.0 }}"#).unwrap();

        let config = CanvasConfig::load(file.path()).unwrap();
        assert!((config.max_zoom - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CanvasConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
