//! Shape derivation bindings.
//!
//! Lets a UI preview the square and contain crops without rendering.

use std::collections::BTreeMap;

use facade_core::{Mask, Shape};
use wasm_bindgen::prelude::*;

use crate::types::mask_from_js;

/// Derive the mask, square and contain shapes for an image of the given size.
///
/// Returns `{ mask: {type: "polygon", points}, square: {type: "rect", x, y,
/// width, height}, contain: {...} }`.
#[wasm_bindgen]
pub fn derive_shapes(width: u32, height: u32, mask: JsValue) -> Result<JsValue, JsValue> {
    let mask = mask_from_js(mask)?;
    serde_wasm_bindgen::to_value(&shape_map(width, height, &mask))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn shape_map(width: u32, height: u32, mask: &Mask) -> BTreeMap<&'static str, Shape> {
    facade_core::derive_shapes(width, height, mask)
        .into_iter()
        .map(|(kind, shape)| (kind.as_str(), shape))
        .collect()
}
