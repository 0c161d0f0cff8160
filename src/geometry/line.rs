//! Flat boundary segment
//!
//! A straight segment between two end points. The boundary normal is the reversed traversal
//! direction (`p1 - p2`) rotated by 90° counter-clockwise. Hence, looking from `p1` towards `p2`,
//! the normal points to the right-hand side.
use nalgebra::{Point2, Vector2};
use uom::si::f64::Length;

use super::{check_end_points, to_meter, Hit};
use crate::{error::PolResult, meter, ray::Ray, utils::rotate_ccw};

#[derive(Debug, Clone, PartialEq)]
/// A flat segment between two points.
pub struct LineSegment {
    p1: Point2<Length>,
    p2: Point2<Length>,
}
impl LineSegment {
    /// Creates a new [`LineSegment`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - any coordinate is not finite
    ///  - the segment is shorter than [`MIN_SEGMENT_LENGTH`](super::MIN_SEGMENT_LENGTH)
    pub fn new(p1: Point2<Length>, p2: Point2<Length>) -> PolResult<Self> {
        check_end_points(&p1, &p2)?;
        Ok(Self { p1, p2 })
    }
    /// Returns the start point of this [`LineSegment`].
    #[must_use]
    pub const fn p1(&self) -> Point2<Length> {
        self.p1
    }
    /// Returns the end point of this [`LineSegment`].
    #[must_use]
    pub const fn p2(&self) -> Point2<Length> {
        self.p2
    }
    /// Returns the length of this [`LineSegment`].
    #[must_use]
    pub fn length(&self) -> Length {
        meter!((to_meter(&self.p2) - to_meter(&self.p1)).norm())
    }
    /// Returns the unit vector pointing from `p1` to `p2`.
    #[must_use]
    pub fn tangent(&self) -> Vector2<f64> {
        (to_meter(&self.p2) - to_meter(&self.p1)).normalize()
    }
    /// Returns the boundary normal of this [`LineSegment`].
    #[must_use]
    pub fn normal(&self) -> Vector2<f64> {
        rotate_ccw(&(to_meter(&self.p1) - to_meter(&self.p2))).normalize()
    }
    /// Calculate the intersection of a [`Ray`] with this [`LineSegment`].
    ///
    /// The ray parameter `t` and the segment parameter `u` are obtained by solving the 2x2 linear
    /// system `origin + t * dir = p1 + u * (p2 - p1)`. A hit is only valid if `t > min_distance` and
    /// `u` lies in `[0, 1]`. Rays running parallel to the segment never hit.
    #[must_use]
    pub fn intersect(&self, ray: &Ray, min_distance: Length) -> Option<Hit> {
        let pos = to_meter(&ray.position());
        let dir = ray.direction();
        let a = to_meter(&self.p1);
        let edge = to_meter(&self.p2) - a;
        let denom = cross(&dir, &edge);
        if denom.abs() <= f64::EPSILON * edge.norm() {
            return None;
        }
        let w = a - pos;
        let t = cross(&w, &edge) / denom;
        let u = cross(&w, &dir) / denom;
        if t <= min_distance.value || !(0.0..=1.0).contains(&u) {
            return None;
        }
        let point = pos + t * dir;
        Some(Hit::new(
            meter!(t),
            meter!(point.x, point.y),
            self.normal(),
            meter!((u - 0.5) * edge.norm()),
        ))
    }
}

/// z component of the 3D cross product of two in-plane vectors.
fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x.mul_add(b.y, -a.y * b.x)
}
