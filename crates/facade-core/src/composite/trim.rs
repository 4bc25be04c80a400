//! Cropping of fully transparent borders.

use super::CompositedImage;
use crate::decode::DecodedImage;

/// Pixel bounding box of visible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Find the smallest box containing every pixel with non-zero alpha.
///
/// Returns `None` when the image is empty or fully transparent.
pub fn content_bounds(image: &DecodedImage) -> Option<ContentBounds> {
    if image.is_empty() {
        return None;
    }

    let width = image.width as usize;
    let mut min_x = usize::MAX;
    let mut max_x = 0;
    let mut min_y = usize::MAX;
    let mut max_y = 0;

    for (y, row) in image.pixels.chunks_exact(width * 4).enumerate() {
        let mut visible = row
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] != 0)
            .map(|(x, _)| x);

        let Some(first) = visible.next() else {
            continue;
        };
        let last = visible.last().unwrap_or(first);

        min_x = min_x.min(first);
        max_x = max_x.max(last);
        min_y = min_y.min(y);
        max_y = y;
    }

    if min_y == usize::MAX {
        return None;
    }

    Some(ContentBounds {
        x: min_x as u32,
        y: min_y as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    })
}

/// Crop away fully transparent border rows and columns.
///
/// # Behavior
///
/// - An image with no transparent border is returned unchanged
/// - A fully transparent image trims to a 0x0 image
/// - Transparent pixels inside the content box are kept
pub fn trim(image: &CompositedImage) -> CompositedImage {
    let Some(bounds) = content_bounds(image) else {
        return DecodedImage::empty();
    };

    if bounds.width == image.width && bounds.height == image.height {
        return image.clone();
    }

    let src_stride = image.width as usize * 4;
    let row_len = bounds.width as usize * 4;
    let mut pixels = Vec::with_capacity(row_len * bounds.height as usize);

    // Copy pixel data row by row
    for y in bounds.y..bounds.y + bounds.height {
        let start = y as usize * src_stride + bounds.x as usize * 4;
        pixels.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage::new(bounds.width, bounds.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
