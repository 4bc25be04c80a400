//! Polygon geometry for facade masks.
//!
//! This module turns a facade mask (a closed polygon in source-image pixel
//! coordinates) into the three shapes the variant pipeline renders:
//!
//! - **Mask**: the polygon itself
//! - **Square**: a square crop anchored on the mask's long axis, centered on
//!   its short axis, always inside the image
//! - **Contain**: the tight axis-aligned bounding box of the mask
//!
//! # Coordinate System
//!
//! - Coordinates are in source pixels, origin at the top-left corner
//! - X grows to the right, Y grows downward
//! - Coordinates are real numbers; they are not snapped to the pixel grid here

mod domain;
mod shapes;
mod types;

pub use domain::domain;
pub use shapes::{derive_contain, derive_mask_shape, derive_shapes, derive_square};
pub use types::{Axis, Coordinate, Domain, Mask, MaskError, Rect, Shape, ShapeKind};
