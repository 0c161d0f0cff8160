//! Geometric primitives of optical boundaries
//!
//! This module contains the two boundary shapes supported in a 2D scene, the flat [`LineSegment`] and
//! the circular [`CurvedSegment`], as well as the [`Geometry`] enum combining both.
//!
//! All shapes share the same normal convention: the boundary normal is the reversed traversal
//! direction (`p1 - p2`) rotated by 90° counter-clockwise. Standing at `p1` and looking towards `p2`
//! the normal points to the right-hand side. Curved segments use a radial normal which is signed such
//! that it continuously turns into the flat normal for an infinite radius.
mod arc;
mod line;

pub use arc::CurvedSegment;
pub use line::LineSegment;

use nalgebra::{Point2, Vector2};
use uom::si::f64::Length;

use crate::{
    error::{PolResult, PolrayError},
    ray::Ray,
};

/// Minimum length (in meter) of a segment or chord. Shorter segments are rejected as degenerate.
pub const MIN_SEGMENT_LENGTH: f64 = 1.0e-9;

/// Strip the units of a point. The returned point is given in meter.
pub(crate) fn to_meter(p: &Point2<Length>) -> Point2<f64> {
    p.map(|c| c.value)
}

fn check_end_points(p1: &Point2<Length>, p2: &Point2<Length>) -> PolResult<()> {
    if p1.iter().chain(p2.iter()).any(|c| !c.is_finite()) {
        return Err(PolrayError::Geometry(
            "end point coordinates must be finite".into(),
        ));
    }
    let length = (to_meter(p2) - to_meter(p1)).norm();
    if length <= MIN_SEGMENT_LENGTH {
        return Err(PolrayError::Geometry(format!(
            "segment length ({length} m) is too small"
        )));
    }
    Ok(())
}

/// The intersection of a [`Ray`] with a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    distance: Length,
    point: Point2<Length>,
    normal: Vector2<f64>,
    height: Length,
    interface: Option<usize>,
}
impl Hit {
    pub(crate) const fn new(
        distance: Length,
        point: Point2<Length>,
        normal: Vector2<f64>,
        height: Length,
    ) -> Self {
        Self {
            distance,
            point,
            normal,
            height,
            interface: None,
        }
    }
    /// Tag this [`Hit`] with the index of the interface it belongs to.
    #[must_use]
    pub(crate) const fn with_interface(mut self, index: usize) -> Self {
        self.interface = Some(index);
        self
    }
    /// Returns the distance from the ray origin to the intersection point.
    #[must_use]
    pub const fn distance(&self) -> Length {
        self.distance
    }
    /// Returns the intersection point.
    #[must_use]
    pub const fn point(&self) -> Point2<Length> {
        self.point
    }
    /// Returns the (unit) boundary normal at the intersection point.
    ///
    /// **Note**: The normal follows the boundary convention and is not flipped towards the incoming ray.
    #[must_use]
    pub const fn normal(&self) -> Vector2<f64> {
        self.normal
    }
    /// Returns the signed height of the intersection point.
    ///
    /// The height is measured along the chord direction (`p1 -> p2`) relative to the chord midpoint.
    #[must_use]
    pub const fn height(&self) -> Length {
        self.height
    }
    /// Returns the index of the interface (within its scene) this [`Hit`] belongs to.
    ///
    /// Hits calculated directly on a [`Geometry`] are not associated with any interface.
    #[must_use]
    pub const fn interface(&self) -> Option<usize> {
        self.interface
    }
}

/// The shape of an optical boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// flat segment
    Line(LineSegment),
    /// circular arc
    Arc(CurvedSegment),
}
impl Geometry {
    /// Create a flat [`Geometry`] between two points.
    ///
    /// # Errors
    ///
    /// This function will return an error if the segment is degenerate (see [`LineSegment::new`]).
    pub fn line(p1: Point2<Length>, p2: Point2<Length>) -> PolResult<Self> {
        Ok(Self::Line(LineSegment::new(p1, p2)?))
    }
    /// Create a curved [`Geometry`] between two points with a signed radius of curvature.
    ///
    /// A radius of +/- infinity corresponds to a flat segment. In this case a [`Geometry::Line`] is returned.
    ///
    /// # Errors
    ///
    /// This function will return an error if the segment is degenerate (see [`CurvedSegment::new`]).
    pub fn arc(p1: Point2<Length>, p2: Point2<Length>, radius: Length) -> PolResult<Self> {
        if radius.is_infinite() {
            Self::line(p1, p2)
        } else {
            Ok(Self::Arc(CurvedSegment::new(p1, p2, radius)?))
        }
    }
    /// Returns the start point.
    #[must_use]
    pub const fn p1(&self) -> Point2<Length> {
        match self {
            Self::Line(l) => l.p1(),
            Self::Arc(a) => a.p1(),
        }
    }
    /// Returns the end point.
    #[must_use]
    pub const fn p2(&self) -> Point2<Length> {
        match self {
            Self::Line(l) => l.p2(),
            Self::Arc(a) => a.p2(),
        }
    }
    /// Returns the unit chord direction pointing from `p1` to `p2`.
    #[must_use]
    pub fn tangent(&self) -> Vector2<f64> {
        match self {
            Self::Line(l) => l.tangent(),
            Self::Arc(a) => a.tangent(),
        }
    }
    /// Returns the boundary normal at the given point.
    ///
    /// For a flat segment the point is ignored.
    #[must_use]
    pub fn normal_at(&self, point: &Point2<Length>) -> Vector2<f64> {
        match self {
            Self::Line(l) => l.normal(),
            Self::Arc(a) => a.normal(point),
        }
    }
    /// Calculate the intersection of a [`Ray`] with this [`Geometry`].
    ///
    /// Only intersections farther away from the ray origin than `min_distance` are considered. This
    /// function returns `None` if there is no valid intersection.
    #[must_use]
    pub fn intersect(&self, ray: &Ray, min_distance: Length) -> Option<Hit> {
        match self {
            Self::Line(l) => l.intersect(ray, min_distance),
            Self::Arc(a) => a.intersect(ray, min_distance),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{meter, millimeter, nanometer, polarization::Jones};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use num::Zero;
    use uom::si::length::millimeter;

    fn ray_from(x: f64, y: f64, dir: Vector2<f64>) -> Ray {
        Ray::new(
            millimeter!(x, y),
            dir,
            nanometer!(633.0),
            Jones::horizontal(),
            1.0,
        )
        .unwrap()
    }
    #[test]
    fn arc_with_infinite_radius_is_line() {
        let g = Geometry::arc(
            millimeter!(0.0, 1.0),
            millimeter!(0.0, -1.0),
            millimeter!(f64::INFINITY),
        )
        .unwrap();
        assert_matches!(g, Geometry::Line(_));
        let g = Geometry::arc(
            millimeter!(0.0, 1.0),
            millimeter!(0.0, -1.0),
            millimeter!(f64::NEG_INFINITY),
        )
        .unwrap();
        assert_matches!(g, Geometry::Line(_));
    }
    #[test]
    fn degenerate_geometry() {
        assert!(Geometry::line(millimeter!(1.0, 1.0), millimeter!(1.0, 1.0)).is_err());
        assert!(Geometry::arc(
            millimeter!(0.0, 1.0),
            millimeter!(0.0, -1.0),
            millimeter!(0.5)
        )
        .is_err());
    }
    #[test]
    fn flat_vs_curved_continuity() {
        let p1 = millimeter!(-12.725, 12.7);
        let p2 = millimeter!(-12.725, -12.7);
        let line = Geometry::line(p1, p2).unwrap();
        for radius in [1.0e6, -1.0e6] {
            let arc = Geometry::arc(p1, p2, meter!(radius)).unwrap();
            for y in [-10.0, -2.5, 0.0, 4.0, 9.0] {
                let ray = ray_from(-40.0, y, Vector2::new(1.0, 0.1).normalize());
                let hit_line = line.intersect(&ray, Length::zero()).unwrap();
                let hit_arc = arc.intersect(&ray, Length::zero()).unwrap();
                assert_abs_diff_eq!(
                    hit_line.point().x.get::<millimeter>(),
                    hit_arc.point().x.get::<millimeter>(),
                    epsilon = 1e-4
                );
                assert_abs_diff_eq!(
                    hit_line.point().y.get::<millimeter>(),
                    hit_arc.point().y.get::<millimeter>(),
                    epsilon = 1e-4
                );
                assert_abs_diff_eq!(hit_line.normal(), hit_arc.normal(), epsilon = 1e-5);
                assert_abs_diff_eq!(
                    hit_line.height().get::<millimeter>(),
                    hit_arc.height().get::<millimeter>(),
                    epsilon = 1e-4
                );
            }
            assert_abs_diff_eq!(
                line.normal_at(&p1),
                arc.normal_at(&p1),
                epsilon = 1e-5
            );
            assert_abs_diff_eq!(line.tangent(), arc.tangent(), epsilon = 1e-15);
        }
    }
    #[test]
    fn end_points() {
        let g = Geometry::arc(
            millimeter!(0.0, 1.0),
            millimeter!(0.0, -1.0),
            millimeter!(5.0),
        )
        .unwrap();
        assert_eq!(g.p1(), millimeter!(0.0, 1.0));
        assert_eq!(g.p2(), millimeter!(0.0, -1.0));
    }
}
