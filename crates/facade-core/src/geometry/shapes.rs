//! Shape derivation: mask polygon, square crop and bounding box.

use super::{Axis, Mask, Rect, Shape, ShapeKind};

/// Derive a square crop region from a mask.
///
/// The side is the mask's larger extent, capped by both image dimensions.
/// Along the mask's long axis the square starts at the mask's leading edge;
/// along the short axis it is centered on the mask. Both offsets are then
/// clamped so the square stays fully inside the image.
///
/// A landscape mask (`width > height`) anchors horizontally; portrait and
/// square masks anchor vertically.
///
/// # Arguments
///
/// * `image_width` - Source image width in pixels
/// * `image_height` - Source image height in pixels
/// * `mask` - The facade mask
///
/// # Degenerate masks
///
/// A mask whose points coincide yields a zero-sized square at the clamped
/// position. No division is involved, so this never produces NaN.
pub fn derive_square(image_width: u32, image_height: u32, mask: &Mask) -> Shape {
    let width = image_width as f64;
    let height = image_height as f64;

    let domain_x = mask.domain(Axis::X);
    let domain_y = mask.domain(Axis::Y);
    let mask_width = domain_x.length();
    let mask_height = domain_y.length();

    let side = width.min(height).min(mask_width.max(mask_height));

    let (x, y) = if mask_width > mask_height {
        (
            clamp_offset(domain_x.min, width - side),
            clamp_offset(domain_y.midpoint() - side / 2.0, height - side),
        )
    } else {
        (
            clamp_offset(domain_x.midpoint() - side / 2.0, width - side),
            clamp_offset(domain_y.min, height - side),
        )
    };

    Shape::Rect(Rect::new(x, y, side, side))
}

/// Derive the tight axis-aligned bounding box of a mask.
pub fn derive_contain(mask: &Mask) -> Shape {
    let domain_x = mask.domain(Axis::X);
    let domain_y = mask.domain(Axis::Y);

    Shape::Rect(Rect::new(
        domain_x.min,
        domain_y.min,
        domain_x.length(),
        domain_y.length(),
    ))
}

/// The mask polygon itself, unchanged.
pub fn derive_mask_shape(mask: &Mask) -> Shape {
    Shape::Polygon {
        points: mask.points().to_vec(),
    }
}

/// Derive all three shapes in output order: mask, square, contain.
pub fn derive_shapes(image_width: u32, image_height: u32, mask: &Mask) -> [(ShapeKind, Shape); 3] {
    let domain_x = mask.domain(Axis::X);
    let domain_y = mask.domain(Axis::Y);
    if domain_x.min < 0.0
        || domain_y.min < 0.0
        || domain_x.max > image_width as f64
        || domain_y.max > image_height as f64
    {
        tracing::warn!(
            image_width,
            image_height,
            min_x = domain_x.min,
            min_y = domain_y.min,
            max_x = domain_x.max,
            max_y = domain_y.max,
            "mask extends past the image bounds, clamping"
        );
    }

    [
        (ShapeKind::Mask, derive_mask_shape(mask)),
        (ShapeKind::Square, derive_square(image_width, image_height, mask)),
        (ShapeKind::Contain, derive_contain(mask)),
    ]
}

/// `min(upper, max(0, value))`, with `upper` itself never below zero.
#[inline]
fn clamp_offset(value: f64, upper: f64) -> f64 {
    value.max(0.0).min(upper.max(0.0))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
