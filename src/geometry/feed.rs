//! Feed-gap marker at the antenna centre.

use crate::float_types::Real;
use crate::math::deg_to_rad;
use crate::traits::Outline;
use nalgebra::{Point2, Rotation2};

/// Marker rotation relative to α, in degrees.
///
/// Layout convention carried over as-is; it has no physical derivation and
/// is pending review by someone who knows the feed design.
pub const FEED_GAP_ROTATION_OFFSET_DEG: Real = -75.0;

/// Marker height as a fraction of the seed radius r₁.
pub const FEED_GAP_HEIGHT_FRACTION: Real = 0.02;

/// Rectangle centred on the origin: `width` across the gap, rotated by `rotation` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedGapShape {
    pub width: Real,
    pub height: Real,
    pub rotation: Real,
    pub vertices: [Point2<Real>; 4],
}

impl FeedGapShape {
    pub fn new(width: Real, height: Real, rotation: Real) -> Self {
        let rot = Rotation2::new(rotation);
        let (hw, hh) = (width / 2.0, height / 2.0);
        let vertices = [
            rot * Point2::new(-hw, -hh),
            rot * Point2::new(hw, -hh),
            rot * Point2::new(hw, hh),
            rot * Point2::new(-hw, hh),
        ];
        Self {
            width,
            height,
            rotation,
            vertices,
        }
    }

    /// Marker for a gap of `feed_gap_mm`, seed radius `r1_mm` and tooth angle α.
    pub fn for_antenna(feed_gap_mm: Real, r1_mm: Real, tooth_angle_deg: Real) -> Self {
        Self::new(
            feed_gap_mm,
            r1_mm * FEED_GAP_HEIGHT_FRACTION,
            deg_to_rad(tooth_angle_deg + FEED_GAP_ROTATION_OFFSET_DEG),
        )
    }
}

impl Outline for FeedGapShape {
    fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_preserves_the_rectangle() {
        let marker = FeedGapShape::for_antenna(3.0, 100.0, 30.0);
        assert!((marker.height - 2.0).abs() < 1e-12);
        assert!((marker.area() - 6.0).abs() < 1e-9);
        assert!((marker.perimeter() - 10.0).abs() < 1e-9);

        // centred on the origin
        let c = marker.vertices.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.x, acc.1 + p.y));
        assert!(c.0.abs() < 1e-12 && c.1.abs() < 1e-12);
    }
}
