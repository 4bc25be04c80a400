//! Shape rasterization into single-channel coverage masks.
//!
//! This is the only place where geometry becomes pixels. A shape is filled in
//! opaque white on a transparent `tiny_skia::Pixmap` with exactly the source
//! image's dimensions, and the pixmap's alpha channel becomes the coverage
//! mask. Edges are anti-aliased, so pixels the outline only partly covers get
//! fractional coverage.

mod polygon;
mod rect;

pub use polygon::fill_polygon;
pub use rect::fill_rect;

use tiny_skia::{Color, Paint, Pixmap};

use crate::geometry::Shape;

/// Coverage value for pixels fully inside a shape.
pub const OPAQUE: u8 = 255;

/// Single-channel coverage mask (0 = transparent, 255 = opaque).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Coverage per pixel in row-major order (1 byte per pixel).
    pub coverage: Vec<u8>,
}

impl RasterMask {
    /// Create a fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    /// Take the alpha channel of a rendered pixmap as coverage.
    pub fn from_pixmap(pixmap: &Pixmap) -> Self {
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            coverage: pixmap.data().chunks_exact(4).map(|px| px[3]).collect(),
        }
    }

    /// Coverage at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels with non-zero coverage.
    pub fn covered_pixels(&self) -> usize {
        self.coverage.iter().filter(|&&c| c > 0).count()
    }

    /// Number of pixels with coverage strictly between 0 and 255.
    pub fn partial_pixels(&self) -> usize {
        self.coverage
            .iter()
            .filter(|&&c| c > 0 && c < OPAQUE)
            .count()
    }
}

/// Render `shape` into a `width` x `height` coverage mask.
///
/// Parts of the shape outside the canvas are clipped. A zero-sized canvas,
/// or one too large for a pixmap, yields an all-transparent mask.
pub fn rasterize(width: u32, height: u32, shape: &Shape) -> RasterMask {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        if width > 0 && height > 0 {
            tracing::warn!(width, height, "canvas too large to rasterize");
        }
        return RasterMask::new(width, height);
    };
    pixmap.fill(Color::TRANSPARENT);

    let paint = coverage_paint();
    match shape {
        Shape::Polygon { points } => fill_polygon(&mut pixmap, points, &paint),
        Shape::Rect(r) => fill_rect(&mut pixmap, r, &paint),
    }

    RasterMask::from_pixmap(&pixmap)
}

/// Opaque white, anti-aliased.
fn coverage_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    paint.anti_alias = true;
    paint
}
