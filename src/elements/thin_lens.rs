//! Ideal thin lens
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use super::Interaction;
use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    ray::Ray,
    utils::rotate_ccw,
};

/// An ideal (aberration free) thin lens.
///
/// The ray direction is modified according to the paraxial ray-transfer relation `u' = u - h / f`, where
/// `u` is the ray slope with respect to the lens axis (the boundary normal oriented along the propagation
/// direction) and `h` is the signed height of the hit point along the chord. A positive focal length
/// focuses, a negative one defocuses. The lens acts identically for both propagation directions and leaves
/// the polarization untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThinLens {
    efl: Length,
}
impl ThinLens {
    /// Creates a new [`ThinLens`] with the given effective focal length.
    ///
    /// # Errors
    ///
    /// This function will return an error if the focal length is zero or not finite.
    pub fn new(efl: Length) -> PolResult<Self> {
        if efl.is_zero() || !efl.is_normal() {
            return Err(PolrayError::Interface(
                "focal length must be != 0.0 and finite".into(),
            ));
        }
        Ok(Self { efl })
    }
    /// Returns the effective focal length of this [`ThinLens`].
    #[must_use]
    pub const fn efl(&self) -> Length {
        self.efl
    }
}
impl Interaction for ThinLens {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let normal = hit.normal();
        let dir = ray.direction();
        let axis = dir.dot(&normal).signum() * normal;
        let transverse = rotate_ccw(&normal);
        let along_axis = dir.dot(&axis);
        let new_dir = if along_axis < f64::EPSILON {
            // grazing incidence
            dir
        } else {
            let slope = dir.dot(&transverse) / along_axis;
            let new_slope = slope - (hit.height() / self.efl).value;
            axis + new_slope * transverse
        };
        vec![ray.spawn(hit, new_dir, ray.polarization(), ray.intensity())]
    }
}
