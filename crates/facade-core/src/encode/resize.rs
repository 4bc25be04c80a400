//! Alpha-correct image resizing.
//!
//! Composited images carry cleared transparent regions. Resampling straight
//! (non-premultiplied) RGBA would blend the black of cleared pixels into the
//! silhouette edge, so color channels are premultiplied by alpha before
//! filtering and divided back out afterwards.

use image::{ImageBuffer, Rgba};
use serde::{Deserialize, Serialize};

use super::EncodeError;
use crate::decode::DecodedImage;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

type Rgba32F = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` if the target or the source has a
/// zero dimension, and `EncodeError::InvalidPixelData` if the source buffer
/// does not match its dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    super::error::check_buffer(&image.pixels, image.width, image.height, 4)?;

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let premultiplied = premultiply(image);
    let resized = image::imageops::resize(&premultiplied, width, height, filter.to_image_filter());

    Ok(unpremultiply(&resized))
}

/// Resize an image so its width equals `target_width`, preserving aspect ratio.
///
/// Unlike a fit-within resize, this enlarges images narrower than the
/// target as well as shrinking wider ones.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero target width or an
/// empty source image.
pub fn resize_to_width(
    image: &DecodedImage,
    target_width: u32,
    filter: FilterType,
) -> Result<DecodedImage, EncodeError> {
    if target_width == 0 || image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: target_width,
            height: image.height,
        });
    }

    let height = calculate_height_for_width(image.width, image.height, target_width);
    resize(image, target_width, height, filter)
}

/// Height that keeps the aspect ratio at the given width; at least 1.
fn calculate_height_for_width(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 || height == 0 {
        return 0;
    }

    let scaled = height as f64 * target_width as f64 / width as f64;
    (scaled.round() as u32).max(1)
}

fn premultiply(image: &DecodedImage) -> Rgba32F {
    let data = image
        .pixels
        .chunks_exact(4)
        .flat_map(|px| {
            let a = px[3] as f32 / 255.0;
            [
                px[0] as f32 / 255.0 * a,
                px[1] as f32 / 255.0 * a,
                px[2] as f32 / 255.0 * a,
                a,
            ]
        })
        .collect();

    // Length is width * height * 4 by construction
    Rgba32F::from_raw(image.width, image.height, data).unwrap_or_default()
}

fn unpremultiply(image: &Rgba32F) -> DecodedImage {
    let (width, height) = image.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        let a = a.clamp(0.0, 1.0);
        let alpha = to_u8(a);
        if alpha == 0 {
            pixels.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        pixels.extend_from_slice(&[to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha]);
    }

    DecodedImage::new(width, height, pixels)
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
