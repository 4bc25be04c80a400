//! Even-odd polygon fill.
//!
//! The outline is closed back to its first vertex and filled with the
//! even-odd rule, which handles concave and self-intersecting masks without
//! triangulation.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::geometry::Coordinate;

/// Fill a closed polygon into `pixmap` using the even-odd rule.
///
/// Fewer than three vertices, coordinates that do not fit in `f32`, and
/// polygons with no area leave the pixmap unchanged.
pub fn fill_polygon(pixmap: &mut Pixmap, points: &[Coordinate], paint: &Paint) {
    let Some(path) = polygon_path(points) else {
        return;
    };

    pixmap.fill_path(&path, paint, FillRule::EvenOdd, Transform::identity(), None);
}

fn polygon_path(points: &[Coordinate]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(first.x as f32, first.y as f32);
    for point in rest {
        builder.line_to(point.x as f32, point.y as f32);
    }
    builder.close();
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{RasterMask, OPAQUE};

    fn poly(raw: &[(f64, f64)]) -> Vec<Coordinate> {
        raw.iter().copied().map(Coordinate::from).collect()
    }

    fn filled(width: u32, height: u32, raw: &[(f64, f64)]) -> RasterMask {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        fill_polygon(&mut pixmap, &poly(raw), &paint);
        RasterMask::from_pixmap(&pixmap)
    }

    #[test]
    fn test_triangle_fill() {
        // Right triangle with legs of 10 along the axes
        let mask = filled(20, 20, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);

        assert_eq!(mask.get(0, 0), OPAQUE);
        assert_eq!(mask.get(8, 0), OPAQUE);
        assert_eq!(mask.get(0, 8), OPAQUE);
        assert_eq!(mask.get(8, 8), 0);
        assert_eq!(mask.get(15, 15), 0);

        // The hypotenuse halves pixel (4, 5)
        let edge = mask.get(4, 5);
        assert!(edge > 64 && edge < 192, "edge coverage {}", edge);

        // Total coverage is the triangle's area of 50 pixels
        let area = mask.coverage.iter().map(|&c| c as f64).sum::<f64>() / 255.0;
        assert!((area - 50.0).abs() < 1.5, "area {}", area);
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let cw = filled(30, 30, &[(5.0, 5.0), (25.0, 5.0), (25.0, 25.0), (5.0, 25.0)]);
        let ccw = filled(30, 30, &[(5.0, 5.0), (5.0, 25.0), (25.0, 25.0), (25.0, 5.0)]);
        assert_eq!(cw, ccw);
    }

    #[test]
    fn test_concave_polygon() {
        // U shape: notch cut from the top between x=10 and x=20 down to y=20
        let mask = filled(
            30,
            30,
            &[
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 20.0),
                (20.0, 20.0),
                (20.0, 0.0),
                (30.0, 0.0),
                (30.0, 30.0),
                (0.0, 30.0),
            ],
        );

        assert_eq!(mask.get(5, 5), OPAQUE); // left arm
        assert_eq!(mask.get(25, 5), OPAQUE); // right arm
        assert_eq!(mask.get(15, 5), 0); // notch
        assert_eq!(mask.get(15, 25), OPAQUE); // base
        assert_eq!(mask.covered_pixels(), 30 * 30 - 10 * 20);
        assert_eq!(mask.partial_pixels(), 0);
    }

    #[test]
    fn test_self_intersecting_even_odd() {
        // Bow tie: two triangles meeting at (10, 10)
        let mask = filled(20, 20, &[(0.0, 0.0), (20.0, 20.0), (20.0, 0.0), (0.0, 20.0)]);

        assert_eq!(mask.get(1, 10), OPAQUE); // left lobe
        assert_eq!(mask.get(18, 10), OPAQUE); // right lobe
        assert_eq!(mask.get(10, 2), 0); // above the crossing
        assert_eq!(mask.get(10, 17), 0); // below the crossing
    }

    #[test]
    fn test_polygon_clipped_to_canvas() {
        let mask = filled(10, 10, &[(-5.0, -5.0), (15.0, -5.0), (15.0, 15.0), (-5.0, 15.0)]);
        assert!(mask.coverage.iter().all(|&c| c == OPAQUE));
    }

    #[test]
    fn test_polygon_outside_canvas() {
        let mask = filled(10, 10, &[(20.0, 20.0), (30.0, 20.0), (25.0, 30.0)]);
        assert_eq!(mask.covered_pixels(), 0);
    }

    #[test]
    fn test_degenerate_polygons_cover_nothing() {
        // All points equal
        let point = filled(10, 10, &[(4.0, 4.0), (4.0, 4.0), (4.0, 4.0)]);
        assert_eq!(point.covered_pixels(), 0);

        // Collinear horizontal line
        let line = filled(10, 10, &[(1.0, 5.0), (5.0, 5.0), (9.0, 5.0)]);
        assert_eq!(line.covered_pixels(), 0);
    }

    #[test]
    fn test_too_few_points_is_noop() {
        assert!(polygon_path(&poly(&[(0.0, 0.0), (5.0, 5.0)])).is_none());
        assert!(polygon_path(&[]).is_none());
    }

    #[test]
    fn test_non_finite_in_f32_is_noop() {
        let mask = filled(10, 10, &[(0.0, 0.0), (1e300, 0.0), (0.0, 5.0)]);
        assert_eq!(mask.covered_pixels(), 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
