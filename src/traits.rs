use crate::aabb::Bounds;
use crate::float_types::Real;
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// A closed planar outline given by its corner vertices.
///
/// Arcs between corners are not sampled: `area` and `perimeter` treat the
/// outline as the straight-edged polygon through its vertices.
pub trait Outline {
    fn vertices(&self) -> &[Point2<Real>];

    /// Shoelace area of the vertex polygon.
    fn area(&self) -> Real {
        polygon_area(self.vertices())
    }

    /// Sum of consecutive vertex distances, closing edge included.
    fn perimeter(&self) -> Real {
        polygon_perimeter(self.vertices())
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_points(self.vertices())
    }

    /// Converts the vertex ring into a `geo` polygon (ring is closed by `geo`).
    fn to_geo_polygon(&self) -> GeoPolygon<Real> {
        let ring: Vec<(Real, Real)> = self.vertices().iter().map(|p| (p.x, p.y)).collect();
        GeoPolygon::new(LineString::from(ring), vec![])
    }
}

/// Unsigned polygon area via the shoelace formula.
pub fn polygon_area(vertices: &[Point2<Real>]) -> Real {
    let n = vertices.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += vertices[i].x * vertices[j].y;
        twice_area -= vertices[j].x * vertices[i].y;
    }
    twice_area.abs() / 2.0
}

/// Closed polygon perimeter.
pub fn polygon_perimeter(vertices: &[Point2<Real>]) -> Real {
    let n = vertices.len();
    (0..n)
        .map(|i| crate::math::distance(&vertices[i], &vertices[(i + 1) % n]))
        .sum()
}
