//! Annular sectors and the tooth / beta-wedge shapes built from them.

use crate::calculator::ToothResult;
use crate::float_types::{FRAC_PI_2, Real};
use crate::math::{deg_to_rad, polar_to_cartesian};
use crate::traits::Outline;
use nalgebra::Point2;

/// Layout angle for `degrees` measured clockwise (on a y-down canvas) from the top.
#[inline]
pub fn layout_angle(degrees: Real) -> Real {
    -FRAC_PI_2 + deg_to_rad(degrees)
}

/// Region between two radii and two layout angles (radians, `start < end`).
///
/// Corner order is inner-start, outer-start, outer-end, inner-end; the edges
/// between them are radial lines and arcs about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnularSector {
    pub inner_radius: Real,
    pub outer_radius: Real,
    pub start_angle: Real,
    pub end_angle: Real,
    pub vertices: [Point2<Real>; 4],
}

impl AnnularSector {
    pub fn new(inner_radius: Real, outer_radius: Real, start_angle: Real, end_angle: Real) -> Self {
        let vertices = [
            polar_to_cartesian(inner_radius, start_angle),
            polar_to_cartesian(outer_radius, start_angle),
            polar_to_cartesian(outer_radius, end_angle),
            polar_to_cartesian(inner_radius, end_angle),
        ];
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            vertices,
        }
    }

    /// Sector spanning `[start_deg, end_deg]` in layout degrees.
    pub fn from_degrees(inner_radius: Real, outer_radius: Real, start_deg: Real, end_deg: Real) -> Self {
        Self::new(inner_radius, outer_radius, layout_angle(start_deg), layout_angle(end_deg))
    }

    /// Angular sweep in radians.
    #[inline]
    pub fn span(&self) -> Real {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn inner_start(&self) -> Point2<Real> {
        self.vertices[0]
    }

    #[inline]
    pub fn outer_start(&self) -> Point2<Real> {
        self.vertices[1]
    }

    #[inline]
    pub fn outer_end(&self) -> Point2<Real> {
        self.vertices[2]
    }

    #[inline]
    pub fn inner_end(&self) -> Point2<Real> {
        self.vertices[3]
    }

    /// True area of the ring sector, arcs included.
    pub fn exact_area(&self) -> Real {
        0.5 * self.span() * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    /// Midpoint of the band, at mid radius and mid angle.
    pub fn center(&self) -> Point2<Real> {
        polar_to_cartesian(
            (self.inner_radius + self.outer_radius) / 2.0,
            (self.start_angle + self.end_angle) / 2.0,
        )
    }

    /// Corners plus every axis crossing of the outer arc, enough for exact bounds.
    pub fn extreme_points(&self) -> Vec<Point2<Real>> {
        let mut points = self.vertices.to_vec();
        let mut k = (self.start_angle / FRAC_PI_2).floor() + 1.0;
        while k * FRAC_PI_2 < self.end_angle {
            points.push(polar_to_cartesian(self.outer_radius, k * FRAC_PI_2));
            k += 1.0;
        }
        points
    }
}

impl Outline for AnnularSector {
    fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }
}

/// Which half of the order-2 symmetric structure a shape belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Primary,
    /// Rotated by 180°.
    Mirrored,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Primary, Side::Mirrored];

    /// 0 or 1.
    pub const fn index(self) -> usize {
        match self {
            Side::Primary => 0,
            Side::Mirrored => 1,
        }
    }

    pub const fn offset_deg(self) -> Real {
        match self {
            Side::Primary => 0.0,
            Side::Mirrored => 180.0,
        }
    }
}

/// Angular slot a tooth sits in. Q1 spans `[0°, α]`, Q3 spans `[90°, 90°+α]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Q1,
    Q3,
}

impl Quadrant {
    /// Even radius gaps go to Q1, odd ones to Q3.
    pub const fn for_gap(index: usize) -> Self {
        if index % 2 == 0 { Quadrant::Q1 } else { Quadrant::Q3 }
    }

    pub const fn start_deg(self) -> Real {
        match self {
            Quadrant::Q1 => 0.0,
            Quadrant::Q3 => 90.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::Q1 => "Q1",
            Quadrant::Q3 => "Q3",
        }
    }

    /// CSS class used by the SVG serializer.
    pub const fn css_class(self) -> &'static str {
        match self {
            Quadrant::Q1 => "quadrant-1",
            Quadrant::Q3 => "quadrant-3",
        }
    }
}

/// One tooth: the band between two consecutive radii in one quadrant slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothGeometry {
    /// 0-based index of the radius gap `rₙ..rₙ₊₁`.
    pub pair_index: usize,
    pub side: Side,
    pub quadrant: Quadrant,
    pub sector: AnnularSector,
    /// Tooth pair at the inner radius.
    pub inner: ToothResult,
    /// Tooth pair at the outer radius.
    pub outer: ToothResult,
}

impl ToothGeometry {
    /// Builds the tooth between `inner` and `outer` (radii converted to mm).
    pub fn new(
        pair_index: usize,
        side: Side,
        inner: ToothResult,
        outer: ToothResult,
        tooth_angle_deg: Real,
    ) -> Self {
        let quadrant = Quadrant::for_gap(pair_index);
        let start = quadrant.start_deg() + side.offset_deg();
        let sector = AnnularSector::from_degrees(
            inner.inner_radius_m * crate::float_types::METER,
            outer.inner_radius_m * crate::float_types::METER,
            start,
            start + tooth_angle_deg,
        );
        Self {
            pair_index,
            side,
            quadrant,
            sector,
            inner,
            outer,
        }
    }

    #[inline]
    pub fn inner_radius(&self) -> Real {
        self.sector.inner_radius
    }

    #[inline]
    pub fn outer_radius(&self) -> Real {
        self.sector.outer_radius
    }
}

impl Outline for ToothGeometry {
    fn vertices(&self) -> &[Point2<Real>] {
        &self.sector.vertices
    }
}

/// Solid wedge spanning `[α, 90°]` (plus 180° when mirrored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaSection {
    pub side: Side,
    pub sector: AnnularSector,
}

impl BetaSection {
    pub fn new(side: Side, inner_radius: Real, outer_radius: Real, tooth_angle_deg: Real) -> Self {
        let offset = side.offset_deg();
        Self {
            side,
            sector: AnnularSector::from_degrees(
                inner_radius,
                outer_radius,
                tooth_angle_deg + offset,
                90.0 + offset,
            ),
        }
    }
}

impl Outline for BetaSection {
    fn vertices(&self) -> &[Point2<Real>] {
        &self.sector.vertices
    }
}
