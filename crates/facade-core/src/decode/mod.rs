//! Source image decoding.
//!
//! The source photograph arrives as encoded bytes in any format enabled on the
//! `image` crate (PNG, JPEG, WebP). It is decoded once per pipeline run into an
//! RGBA8 [`DecodedImage`] that every later stage borrows read-only.
//!
//! Intrinsic dimensions are used as stored in the file; EXIF orientation is
//! not applied, so mask coordinates refer to the raw pixel grid.

mod source;
mod types;

pub use source::decode_image;
pub use types::{DecodeError, DecodedImage};
