//! Axis-aligned extents of a point set.

use super::{Axis, Coordinate, Domain, MaskError};

/// Compute the extent of `points` along `axis`.
///
/// # Errors
///
/// Returns `MaskError::Empty` if `points` is empty.
///
/// # Example
///
/// ```ignore
/// let d = domain(mask.points(), Axis::X)?;
/// println!("mask spans {} px horizontally", d.length());
/// ```
pub fn domain(points: &[Coordinate], axis: Axis) -> Result<Domain, MaskError> {
    let mut values = points.iter().map(|p| axis.of(p));
    let first = values.next().ok_or(MaskError::Empty)?;

    let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
    Ok(Domain { min, max })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
