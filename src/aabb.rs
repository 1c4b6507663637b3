use crate::float_types::Real;
use nalgebra::Point2;

/// Axis-aligned bounds of a set of 2D points, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Default for Bounds {
    /// Zero-sized bounds at the origin; what an empty point set yields.
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }
}

impl Bounds {
    #[inline]
    pub const fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Scans `points` for per-axis minima and maxima.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2<Real>>) -> Self {
        let mut mins = Point2::new(Real::INFINITY, Real::INFINITY);
        let mut maxs = Point2::new(Real::NEG_INFINITY, Real::NEG_INFINITY);
        let mut any = false;

        for p in points {
            any = true;
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
        }

        if any { Self::new(mins, maxs) } else { Self::default() }
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
        )
    }

    /// True when the bounds enclose no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            Point2::new(self.mins.x.min(other.mins.x), self.mins.y.min(other.mins.y)),
            Point2::new(self.maxs.x.max(other.maxs.x), self.maxs.y.max(other.maxs.y)),
        )
    }

    /// Grows each axis by `fraction` of its size, half applied to each side.
    pub fn padded(&self, fraction: Real) -> Self {
        let dx = self.width() * fraction / 2.0;
        let dy = self.height() * fraction / 2.0;
        Self::new(
            Point2::new(self.mins.x - dx, self.mins.y - dy),
            Point2::new(self.maxs.x + dx, self.maxs.y + dy),
        )
    }

    #[inline]
    pub fn contains(&self, p: &Point2<Real>) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.y >= self.mins.y && p.y <= self.maxs.y
    }
}
