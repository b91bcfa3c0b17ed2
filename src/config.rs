use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::curve::Smoothing;
use crate::error::ConfigError;

pub const DEFAULT_SAMPLE_THRESHOLD: f32 = 1.5;
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 300;
pub const DEFAULT_SURFACE_HEIGHT: f32 = 300.0;

/// Tunables for capture, rendering and the widget chrome.
///
/// Unknown fields are rejected, missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignatureConfig {
    /// Minimum distance between consecutive recorded vertices
    pub sample_threshold: f32,
    /// Height of the finished bitmap in pixels
    pub output_height: u32,
    pub raster_line_width: f32,
    pub preview_line_width: f32,
    /// Height of the on-screen capture surface
    pub surface_height: f32,
    pub color: Color32,
    /// Solid fill behind the rasterized stroke; transparent when `None`
    pub background: Option<Color32>,
    pub smoothing: Smoothing,
    pub placeholder: String,
    pub border_color: Color32,
    pub corner_radius: f32,
    pub done_label: String,
    pub clear_label: String,
    pub cancel_label: String,
    /// Write each finished signature as a PNG into `save_dir`
    pub save_signature: bool,
    pub save_dir: Option<PathBuf>,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            sample_threshold: DEFAULT_SAMPLE_THRESHOLD,
            output_height: DEFAULT_OUTPUT_HEIGHT,
            raster_line_width: 1.0,
            preview_line_width: 2.0,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            color: Color32::BLACK,
            background: None,
            smoothing: Smoothing::default(),
            placeholder: "Sign here".to_owned(),
            border_color: Color32::from_rgb(110, 182, 225),
            corner_radius: 7.0,
            done_label: "Done".to_owned(),
            clear_label: "Redo".to_owned(),
            cancel_label: "Cancel".to_owned(),
            save_signature: false,
            save_dir: None,
        }
    }
}

impl SignatureConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_threshold.is_finite() || self.sample_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sample_threshold must be non-negative, got {}",
                self.sample_threshold
            )));
        }
        if self.output_height == 0 {
            return Err(ConfigError::Invalid("output_height must be positive".to_owned()));
        }
        for (name, value) in [
            ("raster_line_width", self.raster_line_width),
            ("preview_line_width", self.preview_line_width),
            ("surface_height", self.surface_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.save_signature && self.save_dir.is_none() {
            return Err(ConfigError::Invalid(
                "save_signature requires save_dir".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SignatureConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_threshold, 1.5);
        assert_eq!(config.output_height, 300);
        assert_eq!(config.smoothing, Smoothing::Quadratic);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SignatureConfig::from_json(r#"{ "output_height": 120, "smoothing": "Linear" }"#)
            .unwrap();
        assert_eq!(config.output_height, 120);
        assert_eq!(config.smoothing, Smoothing::Linear);
        assert_eq!(config.done_label, "Done");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SignatureConfig::from_json(r#"{ "raster_line_width": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SignatureConfig::from_json(r#"{ "save_signature": true }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SignatureConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_color() {
        let config = SignatureConfig {
            color: Color32::from_rgb(10, 20, 200),
            ..Default::default()
        };
        let parsed = SignatureConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
