//! Core types for mask geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for mask validation and shape derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaskError {
    /// No points at all.
    #[error("Mask has no points")]
    Empty,

    /// Fewer than three points cannot describe a polygon.
    #[error("Mask needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    /// A coordinate is NaN or infinite.
    #[error("Mask coordinate {index} is not a finite number")]
    NonFiniteCoordinate { index: usize },

    /// The shape covers no pixel of the source image.
    #[error("The {shape} shape covers no pixels of the source image")]
    EmptyRegion { shape: ShapeKind },
}

/// A point in source-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A validated facade mask: an ordered, closed polygon of at least 3 points.
///
/// The first and last points are implicitly connected. Points may lie
/// outside the source image; shape derivation and rasterization clamp them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mask {
    points: Vec<Coordinate>,
}

impl Mask {
    /// Minimum number of points for a polygon.
    pub const MIN_POINTS: usize = 3;

    /// Create a mask from its polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns `MaskError::TooFewPoints` for fewer than three points and
    /// `MaskError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, MaskError> {
        if points.len() < Self::MIN_POINTS {
            return Err(MaskError::TooFewPoints {
                count: points.len(),
            });
        }

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(MaskError::NonFiniteCoordinate { index });
        }

        Ok(Self { points })
    }

    /// The polygon vertices in order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated mask; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Extent of the mask along one axis.
    pub fn domain(&self, axis: Axis) -> Domain {
        // A validated mask is never empty
        super::domain(&self.points, axis).unwrap_or(Domain { min: 0.0, max: 0.0 })
    }
}

impl<'de> Deserialize<'de> for Mask {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Coordinate>::deserialize(deserializer)?;
        Mask::new(points).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Vec<Coordinate>> for Mask {
    type Error = MaskError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Mask::new(points)
    }
}

/// Coordinate axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, point: &Coordinate) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// Closed interval `[min, max]` along one axis. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// `max - min`, never negative.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.min + self.length() / 2.0
    }
}

/// Axis-aligned rectangle in source pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle; negative sizes are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A renderable region derived from a mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Closed polygon, filled with the even-odd rule.
    Polygon { points: Vec<Coordinate> },
    /// Filled axis-aligned rectangle.
    Rect(Rect),
}

impl Shape {
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Shape::Rect(rect) => Some(rect),
            Shape::Polygon { .. } => None,
        }
    }
}

/// Which of the three derived shapes an output comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Mask,
    Square,
    Contain,
}

impl ShapeKind {
    /// All kinds, in output order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Mask, ShapeKind::Square, ShapeKind::Contain];

    /// Filename stem used for this shape's outputs.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Mask => "mask",
            ShapeKind::Square => "square",
            ShapeKind::Contain => "contain",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Coordinate> {
        raw.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_mask_requires_three_points() {
        let err = Mask::new(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap_err();
        assert_eq!(err, MaskError::TooFewPoints { count: 2 });

        assert!(Mask::new(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])).is_ok());
    }

    #[test]
    fn test_mask_rejects_non_finite() {
        let err = Mask::new(pts(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)])).unwrap_err();
        assert_eq!(err, MaskError::NonFiniteCoordinate { index: 1 });

        let err = Mask::new(pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, f64::INFINITY)])).unwrap_err();
        assert_eq!(err, MaskError::NonFiniteCoordinate { index: 2 });
    }

    #[test]
    fn test_mask_deserialize_from_json() {
        let json = r#"[{"x": 1, "y": 2}, {"x": 3.5, "y": 4}, {"x": 0, "y": 9}]"#;
        let mask: Mask = serde_json::from_str(json).unwrap();
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.points()[1], Coordinate::new(3.5, 4.0));
    }

    #[test]
    fn test_mask_deserialize_validates() {
        let json = r#"[{"x": 1, "y": 2}]"#;
        let result: Result<Mask, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_domain_length_and_midpoint() {
        let d = Domain { min: 10.0, max: 30.0 };
        assert_eq!(d.length(), 20.0);
        assert_eq!(d.midpoint(), 20.0);

        let point = Domain { min: 5.0, max: 5.0 };
        assert_eq!(point.length(), 0.0);
        assert_eq!(point.midpoint(), 5.0);
    }

    #[test]
    fn test_rect_clamps_negative_size() {
        let r = Rect::new(1.0, 2.0, -3.0, -4.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_shape_kind_names() {
        let names: Vec<_> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["mask", "square", "contain"]);
        assert_eq!(ShapeKind::Square.to_string(), "square");
    }

    #[test]
    fn test_shape_serializes_tagged() {
        let shape = Shape::Rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        let value = serde_json::to_value(&shape).unwrap();
        assert_eq!(value["type"], "rect");
        assert_eq!(value["width"], 3.0);

        let err = MaskError::EmptyRegion {
            shape: ShapeKind::Contain,
        };
        assert_eq!(
            err.to_string(),
            "The contain shape covers no pixels of the source image"
        );
    }
}
