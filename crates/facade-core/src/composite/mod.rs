//! Mask compositing and transparent-border trimming.
//!
//! The compositor takes the decoded source and a rasterized coverage mask of
//! the same size, scales the source alpha by the mask's coverage ("in"
//! blend), then crops away fully transparent rows and columns.

mod blend;
mod trim;

pub use blend::apply_mask;
pub use trim::{content_bounds, trim, ContentBounds};

use crate::decode::DecodedImage;

/// RGBA result of masking and trimming; input to the encoder.
pub type CompositedImage = DecodedImage;
