//! JPEG encoding with alpha flattening.
//!
//! JPEG has no alpha channel, so composited images are first blended onto an
//! opaque background color, then encoded with the `image` crate's baseline
//! JPEG encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::error::check_buffer;
use super::EncodeError;
use crate::decode::DecodedImage;

/// Blend RGBA pixels onto an opaque background, producing RGB pixels.
///
/// `out = color * alpha + background * (1 - alpha)` per channel, rounded.
pub fn flatten(image: &DecodedImage, background: [u8; 3]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.pixel_count() * 3);

    for px in image.pixels.chunks_exact(4) {
        let a = px[3] as u32;
        for c in 0..3 {
            let blended = px[c] as u32 * a + background[c] as u32 * (255 - a);
            rgb.push(((blended + 127) / 255) as u8);
        }
    }

    rgb
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 75-90: Good quality for web display (default: 80)
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    check_buffer(pixels, width, height, 3)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
