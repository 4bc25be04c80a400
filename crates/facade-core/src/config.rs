//! Pipeline and job configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encode::FilterType;

/// Display width every variant is resized to.
pub const DEFAULT_TARGET_WIDTH: u32 = 760;

/// JPEG quality used for the flattened variants.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Encoding parameters shared by all six outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Output width in pixels; height follows the aspect ratio.
    pub target_width: u32,

    /// JPEG quality (1-100).
    pub jpeg_quality: u8,

    /// Background RGB that JPEG variants are flattened onto.
    pub background: [u8; 3],

    /// Resampling filter for the width resize.
    pub filter: FilterType,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            background: [255, 255, 255],
            filter: FilterType::Lanczos3,
        }
    }
}

/// Settings for processing one record through the external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Object storage namespace outputs are uploaded under.
    pub storage_namespace: String,

    /// Annotation type written back to the record (and used as the upload folder).
    pub annotation_type: String,

    /// Encoding parameters.
    pub variants: VariantConfig,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            storage_namespace: "amsterdam".to_string(),
            annotation_type: "mask".to_string(),
            variants: VariantConfig::default(),
        }
    }
}

impl JobConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load config from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match Self::from_json_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }
}
