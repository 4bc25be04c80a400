//! Alpha-in blend of a source image with a coverage mask.

use super::CompositedImage;
use crate::decode::DecodedImage;
use crate::raster::RasterMask;

/// Keep source pixels where the mask is opaque, clear them where it is not.
///
/// Output color is the source color; output alpha is
/// `source_alpha * coverage / 255`, rounded. Pixels that end up with zero
/// alpha are written as `(0, 0, 0, 0)` so no hidden color survives into
/// later resampling.
///
/// The mask must have the same dimensions as the source. This is a
/// precondition of the pipeline and is only checked in debug builds.
pub fn apply_mask(source: &DecodedImage, mask: &RasterMask) -> CompositedImage {
    debug_assert_eq!(
        (source.width, source.height),
        (mask.width, mask.height),
        "Mask dimensions must match the source"
    );

    let mut pixels = vec![0u8; source.pixels.len()];

    for ((dst, src), &coverage) in pixels
        .chunks_exact_mut(4)
        .zip(source.pixels.chunks_exact(4))
        .zip(mask.coverage.iter())
    {
        let alpha = mul_div_255(src[3], coverage);
        if alpha == 0 {
            continue;
        }
        dst[..3].copy_from_slice(&src[..3]);
        dst[3] = alpha;
    }

    DecodedImage::new(source.width, source.height, pixels)
}

/// `round(a * b / 255)` in integer arithmetic.
#[inline]
fn mul_div_255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}
