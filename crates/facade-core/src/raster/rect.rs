//! Axis-aligned rectangle fill.

use tiny_skia::{Paint, Pixmap, Transform};

use crate::geometry::Rect;

/// Fill `rect` into `pixmap`, clipped to the canvas.
///
/// Empty rectangles and rectangles that do not fit in `f32` are skipped.
pub fn fill_rect(pixmap: &mut Pixmap, rect: &Rect, paint: &Paint) {
    if rect.is_empty() {
        return;
    }

    let Some(r) = tiny_skia::Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    ) else {
        return;
    };

    pixmap.fill_rect(r, paint, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{RasterMask, OPAQUE};

    fn filled(width: u32, height: u32, rect: Rect) -> RasterMask {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        fill_rect(&mut pixmap, &rect, &paint);
        RasterMask::from_pixmap(&pixmap)
    }

    #[test]
    fn test_integer_rect() {
        let mask = filled(10, 10, Rect::new(2.0, 3.0, 4.0, 5.0));

        assert_eq!(mask.covered_pixels(), 20);
        assert_eq!(mask.partial_pixels(), 0);
        assert_eq!(mask.get(2, 3), OPAQUE);
        assert_eq!(mask.get(5, 7), OPAQUE);
        assert_eq!(mask.get(6, 7), 0);
        assert_eq!(mask.get(5, 8), 0);
        assert_eq!(mask.get(1, 3), 0);
    }

    #[test]
    fn test_full_canvas_rect() {
        let mask = filled(7, 5, Rect::new(0.0, 0.0, 7.0, 5.0));
        assert!(mask.coverage.iter().all(|&c| c == OPAQUE));
    }

    #[test]
    fn test_rect_clipped_to_canvas() {
        let mask = filled(10, 10, Rect::new(8.0, -4.0, 10.0, 6.0));
        // Columns 8..10, rows 0..2
        assert_eq!(mask.covered_pixels(), 4);
    }

    #[test]
    fn test_rect_outside_canvas() {
        let mask = filled(10, 10, Rect::new(20.0, 20.0, 5.0, 5.0));
        assert_eq!(mask.covered_pixels(), 0);
    }

    #[test]
    fn test_zero_size_rect() {
        let mask = filled(10, 10, Rect::new(4.0, 4.0, 0.0, 0.0));
        assert_eq!(mask.covered_pixels(), 0);

        let mask = filled(10, 10, Rect::new(4.0, 4.0, 5.0, 0.0));
        assert_eq!(mask.covered_pixels(), 0);
    }

    #[test]
    fn test_sub_pixel_edges_are_fractional() {
        // Covers x in [0.6, 1.4): 40% of columns 0 and 1
        let mask = filled(4, 4, Rect::new(0.6, 0.0, 0.8, 4.0));

        for y in 0..4 {
            for x in 0..2 {
                let c = mask.get(x, y);
                assert!((60..=140).contains(&c), "coverage {} at ({}, {})", c, x, y);
            }
            assert_eq!(mask.get(2, y), 0);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
