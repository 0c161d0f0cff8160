#![warn(missing_docs)]
//! Point queries on traced ray paths
//!
//! Used for "inspect ray near coordinate" interactions: find the path segment closest to a given point
//! and report the beam state on that segment.
use nalgebra::Point2;
use uom::si::f64::Length;

use crate::{geometry::to_meter, polarization::Jones, ray_path::RayPath};

/// The path segment found by [`inspect_near`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inspection {
    path_index: usize,
    segment_index: usize,
    distance: Length,
    intensity: f64,
    polarization: Jones,
}
impl Inspection {
    /// Returns the index of the [`RayPath`] in the inspected slice.
    #[must_use]
    pub const fn path_index(&self) -> usize {
        self.path_index
    }
    /// Returns the index of the segment within the path.
    #[must_use]
    pub const fn segment_index(&self) -> usize {
        self.segment_index
    }
    /// Returns the distance between the inspected point and the segment.
    #[must_use]
    pub const fn distance(&self) -> Length {
        self.distance
    }
    /// Returns the intensity on the segment.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
    /// Returns the polarization on the segment.
    #[must_use]
    pub const fn polarization(&self) -> Jones {
        self.polarization
    }
}

/// Distance (in meter) of `point` to the segment between `a` and `b`.
fn distance_to_segment(point: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f64::EPSILON * f64::EPSILON {
        return (point - a).norm();
    }
    let s = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (point - (a + ab * s)).norm()
}

/// Find the path segment closest to `point`.
///
/// Only segments within `max_distance` are considered. If two segments are equally close, the first one
/// (lowest path index, then lowest segment index) is returned. Returns `None` if no segment is close
/// enough.
#[must_use]
pub fn inspect_near(
    paths: &[RayPath],
    point: Point2<Length>,
    max_distance: Length,
) -> Option<Inspection> {
    let point = to_meter(&point);
    let mut nearest: Option<Inspection> = None;
    for (path_index, path) in paths.iter().enumerate() {
        let points = path.points();
        for (segment_index, (segment, ends)) in
            path.segments().iter().zip(points.windows(2)).enumerate()
        {
            let distance = distance_to_segment(&point, &to_meter(&ends[0]), &to_meter(&ends[1]));
            if distance > max_distance.value {
                continue;
            }
            if nearest.map_or(true, |best| distance < best.distance.value) {
                nearest = Some(Inspection {
                    path_index,
                    segment_index,
                    distance: Length::new::<uom::si::length::meter>(distance),
                    intensity: segment.intensity(),
                    polarization: segment.polarization(),
                });
            }
        }
    }
    nearest
}
