//! JS-friendly input types.
//!
//! Masks cross the boundary as plain `[{x, y}, ...]` arrays through
//! serde_wasm_bindgen and are validated into a core `Mask` here.

use facade_core::{Coordinate, Mask, MaskError, VariantConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A mask vertex as sent from JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
}

impl From<JsPoint> for Coordinate {
    fn from(p: JsPoint) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

/// Validate JS points into a mask.
pub(crate) fn to_mask(points: Vec<JsPoint>) -> Result<Mask, MaskError> {
    Mask::new(points.into_iter().map(Coordinate::from).collect())
}

/// Deserialize and validate a mask passed as a `JsValue`.
pub(crate) fn mask_from_js(value: JsValue) -> Result<Mask, JsValue> {
    let points: Vec<JsPoint> =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_mask(points).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default config with an optional width override.
pub(crate) fn variant_config(target_width: Option<u32>) -> VariantConfig {
    let mut config = VariantConfig::default();
    if let Some(width) = target_width {
        config.target_width = width;
    }
    config
}
