//! Curved boundary segment
//!
//! A circular arc between two end points with a signed radius of curvature. The sign convention
//! follows the boundary normal of a flat segment with the same end points (see
//! [`LineSegment::normal`](super::LineSegment::normal)):
//!   - positive radius: the arc bulges towards the side the normal points to. The center of
//!     curvature lies on the opposite side.
//!   - negative radius: the arc bulges towards the other side.
//!
//! Only the minor arc (the one with the smaller sagitta) between the end points is part of the
//! boundary.
use nalgebra::{Point2, Vector2};
use roots::{find_roots_quadratic, Roots};
use uom::si::f64::Length;

use super::{check_end_points, to_meter, Hit};
use crate::{
    error::{PolResult, PolrayError},
    meter,
    ray::Ray,
    utils::rotate_ccw,
};

#[derive(Debug, Clone, PartialEq)]
/// A circular arc defined by two end points and a signed radius of curvature.
pub struct CurvedSegment {
    p1: Point2<Length>,
    p2: Point2<Length>,
    radius: Length,
    // center of curvature in meter
    center: Point2<f64>,
    // unit vector from the chord midpoint towards the arc apex
    bulge: Vector2<f64>,
}
impl CurvedSegment {
    /// Creates a new [`CurvedSegment`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - any coordinate is not finite
    ///  - the chord is shorter than [`MIN_SEGMENT_LENGTH`](super::MIN_SEGMENT_LENGTH)
    ///  - the radius is zero, `NaN` or infinite (use a [`LineSegment`](super::LineSegment) instead)
    ///  - the absolute radius is smaller than half the chord length
    pub fn new(p1: Point2<Length>, p2: Point2<Length>, radius: Length) -> PolResult<Self> {
        check_end_points(&p1, &p2)?;
        if !radius.is_normal() {
            return Err(PolrayError::Geometry(
                "radius of curvature must be != 0.0 and finite".into(),
            ));
        }
        let a = to_meter(&p1);
        let b = to_meter(&p2);
        let half_chord = 0.5 * (b - a).norm();
        let r = radius.value.abs();
        if r < half_chord * (1.0 - 1.0e-12) {
            return Err(PolrayError::Geometry(format!(
                "radius of curvature ({r} m) must be at least half the chord length ({half_chord} m)"
            )));
        }
        let flat_normal = rotate_ccw(&(a - b)).normalize();
        let bulge = radius.value.signum() * flat_normal;
        let midpoint = a + 0.5 * (b - a);
        let offset = r.mul_add(r, -half_chord * half_chord).max(0.0).sqrt();
        Ok(Self {
            p1,
            p2,
            radius,
            center: midpoint - offset * bulge,
            bulge,
        })
    }
    /// Returns the start point of this [`CurvedSegment`].
    #[must_use]
    pub const fn p1(&self) -> Point2<Length> {
        self.p1
    }
    /// Returns the end point of this [`CurvedSegment`].
    #[must_use]
    pub const fn p2(&self) -> Point2<Length> {
        self.p2
    }
    /// Returns the signed radius of curvature of this [`CurvedSegment`].
    #[must_use]
    pub const fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the center of curvature of this [`CurvedSegment`].
    #[must_use]
    pub fn center(&self) -> Point2<Length> {
        meter!(self.center.x, self.center.y)
    }
    /// Returns the center of curvature and the (absolute) radius.
    #[must_use]
    pub fn center_and_radius(&self) -> (Point2<Length>, Length) {
        (self.center(), self.radius.abs())
    }
    /// Returns the chord length of this [`CurvedSegment`].
    #[must_use]
    pub fn chord_length(&self) -> Length {
        meter!((to_meter(&self.p2) - to_meter(&self.p1)).norm())
    }
    /// Returns the unit chord direction pointing from `p1` to `p2`.
    #[must_use]
    pub fn tangent(&self) -> Vector2<f64> {
        (to_meter(&self.p2) - to_meter(&self.p1)).normalize()
    }
    /// Returns the boundary normal at the given point of the arc.
    ///
    /// The normal is the radial direction, signed such that it coincides with the normal of a flat
    /// segment between the same end points in the limit of an infinite radius.
    #[must_use]
    pub fn normal(&self, point: &Point2<Length>) -> Vector2<f64> {
        self.normal_in_meter(&to_meter(point))
    }
    fn normal_in_meter(&self, point: &Point2<f64>) -> Vector2<f64> {
        self.radius.value.signum() * (point - self.center).normalize()
    }
    fn midpoint(&self) -> Point2<f64> {
        let a = to_meter(&self.p1);
        a + 0.5 * (to_meter(&self.p2) - a)
    }
    /// Checks if a point on the full circle also lies on the arc between `p1` and `p2`.
    fn is_on_arc(&self, point: &Point2<f64>) -> bool {
        let tolerance = 1.0e-9 * self.chord_length().value;
        (point - self.midpoint()).dot(&self.bulge) >= -tolerance
    }
    /// Calculate the intersection of a [`Ray`] with this [`CurvedSegment`].
    ///
    /// The ray is intersected with the full circle (`|origin + t * dir - center|² = r²`). The roots are
    /// examined in ascending order and the first one with `t > min_distance` lying on the arc is
    /// returned.
    #[must_use]
    pub fn intersect(&self, ray: &Ray, min_distance: Length) -> Option<Hit> {
        let pos = to_meter(&ray.position());
        let dir = ray.direction();
        let oc = pos - self.center;
        let r = self.radius.value;
        // |dir| = 1 => a = 1
        let b = 2.0 * dir.dot(&oc);
        let c = oc.dot(&oc) - r * r;
        let mut candidates = match find_roots_quadratic(1.0, b, c) {
            Roots::One(t) => vec![t[0]],
            Roots::Two(t) => vec![t[0], t[1]],
            _ => return None,
        };
        candidates.sort_by(f64::total_cmp);
        candidates
            .into_iter()
            .filter(|t| *t > min_distance.value)
            .map(|t| (t, pos + t * dir))
            .find(|(_, point)| self.is_on_arc(point))
            .map(|(t, point)| {
                let height = (point - self.midpoint()).dot(&self.tangent());
                Hit::new(
                    meter!(t),
                    meter!(point.x, point.y),
                    self.normal_in_meter(&point),
                    meter!(height),
                )
            })
    }
}
