//! Converts a tooth-pair sequence into planar shapes, in millimetres.
//!
//! Placement: the radius gap `rₙ..rₙ₊₁` becomes one tooth in Q1 (`[0°, α]`)
//! when its index is even and in Q3 (`[90°, 90°+α]`) when odd, each mirrored
//! by 180°. The beta wedge `[α, 90°]` (and its mirror) runs solid from r₁ out
//! to `r_last·√Γ`. Angles are measured from the top of the layout.

pub mod feed;
pub mod sector;

pub use feed::FeedGapShape;
pub use sector::{AnnularSector, BetaSection, Quadrant, Side, ToothGeometry};

use crate::aabb::Bounds;
use crate::calculator::{ToothResult, feed_gap_meters};
use crate::float_types::{METER, Real};
use crate::params::DesignParameters;
use crate::traits::Outline;
use log::debug;
use nalgebra::Point2;

/// Every shape of one antenna layout. Rebuilt from scratch, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaGeometry {
    pub teeth: Vec<ToothGeometry>,
    pub beta_sections: Vec<BetaSection>,
    pub feed_gap: Option<FeedGapShape>,
    /// Over tooth vertices only.
    pub bounds: Bounds,
}

impl AntennaGeometry {
    /// Bounds over every shape, arcs included.
    pub fn extent(&self) -> Bounds {
        let mut points: Vec<Point2<Real>> = Vec::new();
        for tooth in &self.teeth {
            points.extend(tooth.sector.extreme_points());
        }
        for beta in &self.beta_sections {
            points.extend(beta.sector.extreme_points());
        }
        if let Some(feed) = &self.feed_gap {
            points.extend_from_slice(&feed.vertices);
        }
        Bounds::from_points(&points)
    }

    pub fn total_tooth_area(&self) -> Real {
        total_area(&self.teeth)
    }

    /// True when not even a beta wedge could be built.
    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty() && self.beta_sections.is_empty() && self.feed_gap.is_none()
    }
}

/// Sum of shoelace areas.
pub fn total_area<T: Outline>(shapes: &[T]) -> Real {
    shapes.iter().map(Outline::area).sum()
}

/// Builds teeth, beta wedges and the feed-gap marker for `results`.
///
/// Fewer than two results yield no teeth; an empty slice yields an empty
/// geometry. Neither case is an error.
pub fn build_geometry(results: &[ToothResult], params: &DesignParameters) -> AntennaGeometry {
    let alpha = params.tooth_angle_deg;

    let teeth: Vec<ToothGeometry> = results
        .windows(2)
        .enumerate()
        .flat_map(|(index, pair)| {
            Side::BOTH.map(|side| ToothGeometry::new(index, side, pair[0], pair[1], alpha))
        })
        .collect();

    let (beta_sections, feed_gap) = match (results.first(), results.last()) {
        (Some(first), Some(last)) => {
            let inner = first.inner_radius_m * METER;
            let outer = last.outer_radius_m(params.scaling_factor) * METER;
            let betas = Side::BOTH
                .map(|side| BetaSection::new(side, inner, outer, alpha))
                .to_vec();

            let gap_mm = feed_gap_meters(params.effective_permittivity, first.frequency_hz) * METER;
            (betas, Some(FeedGapShape::for_antenna(gap_mm, inner, alpha)))
        },
        _ => (Vec::new(), None),
    };

    let bounds = Bounds::from_points(teeth.iter().flat_map(|t| t.vertices()));

    debug!(
        "built {} teeth, {} beta sections from {} tooth pairs",
        teeth.len(),
        beta_sections.len(),
        results.len()
    );

    AntennaGeometry {
        teeth,
        beta_sections,
        feed_gap,
        bounds,
    }
}
