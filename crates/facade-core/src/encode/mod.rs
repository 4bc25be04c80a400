//! Output encoding for facade variants.
//!
//! This module provides functionality for:
//! - Resizing composited images to the display width (alpha-correct)
//! - Encoding RGBA images to lossless PNG
//! - Flattening alpha onto a background and encoding to JPEG
//!
//! # Examples
//!
//! ```ignore
//! use facade_core::config::VariantConfig;
//! use facade_core::encode::{to_jpg_variant, to_png_variant};
//!
//! let config = VariantConfig::default();
//! let png = to_png_variant(&composited, &config)?;
//! let jpg = to_jpg_variant(&composited, &config)?;
//! ```

mod error;
mod jpeg;
mod png;
mod resize;
mod variant;

pub use error::EncodeError;
pub use jpeg::{encode_jpeg, flatten};
pub use png::encode_png;
pub use resize::{resize, resize_to_width, FilterType};
pub use variant::{encode_variant, to_jpg_variant, to_png_variant, OutputFormat};
