//! Six-variant render bindings.

use facade_core::{save_with_config, Mask, OutputSet, PipelineError};
use js_sys::{Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;

use crate::types::{mask_from_js, variant_config};

/// Render the mask, square and contain variants of a screenshot.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (JPEG, PNG or WebP)
/// * `mask` - Facade outline as `[{x, y}, ...]` in source pixels
/// * `target_width` - Output width, 760 when omitted
///
/// # Returns
///
/// An object mapping `mask.png`, `mask.jpg`, `square.png`, `square.jpg`,
/// `contain.png` and `contain.jpg` to `Uint8Array`s.
///
/// # Example
///
/// ```typescript
/// const files = save_variants(bytes, mask, 760);
/// await upload('square.jpg', files['square.jpg'], 'image/jpeg');
/// ```
#[wasm_bindgen]
pub fn save_variants(
    bytes: &[u8],
    mask: JsValue,
    target_width: Option<u32>,
) -> Result<Object, JsValue> {
    let mask = mask_from_js(mask)?;
    let outputs = render(bytes, &mask, target_width).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let files = Object::new();
    for (filename, data) in outputs.iter() {
        Reflect::set(&files, &JsValue::from_str(filename), &Uint8Array::from(data))?;
    }
    Ok(files)
}

fn render(bytes: &[u8], mask: &Mask, target_width: Option<u32>) -> Result<OutputSet, PipelineError> {
    save_with_config(bytes, mask, &variant_config(target_width))
}
