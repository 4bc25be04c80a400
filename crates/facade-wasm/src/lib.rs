//! Facade WASM - WebAssembly bindings for the facade variant pipeline
//!
//! Exposes facade-core to JavaScript so the variants can be rendered in the
//! browser or in a worker before upload.
//!
//! # Module Structure
//!
//! - `types` - JS-friendly mask input and conversion helpers
//! - `save` - The six-variant render (`save_variants`)
//! - `shapes` - Shape derivation without rendering (`derive_shapes`)
//!
//! # Usage
//!
//! ```typescript
//! import init, { save_variants } from '@facade/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await screenshot.arrayBuffer());
//! const files = save_variants(bytes, [{ x: 10, y: 10 }, { x: 90, y: 12 }, { x: 50, y: 80 }]);
//! console.log(Object.keys(files)); // mask.png, mask.jpg, ...
//! ```

use wasm_bindgen::prelude::*;

mod save;
mod shapes;
mod types;

pub use save::save_variants;
pub use shapes::derive_shapes;
pub use types::JsPoint;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
