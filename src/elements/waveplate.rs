//! Linear retarder
use serde::{Deserialize, Serialize};
use uom::si::f64::Angle;

use super::{transmitted_child, Interaction};
use crate::{
    degree,
    error::{PolResult, PolrayError},
    geometry::Hit,
    polarization::retarder_matrix,
    ray::Ray,
};

/// An ideal waveplate (linear retarder).
///
/// The fast axis is measured in the beam-attached Jones basis of a ray passing the plate in forward
/// direction. A pass is a forward pass if the ray travels along the boundary normal, i.e. against the
/// chord direction rotated by 90° counter-clockwise. For a backward pass the in-plane basis vector is
/// reversed with respect to the plate, so the fast axis enters with negated angle.
///
/// The pass direction is derived from the geometry only, a waveplate does not keep track of rays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waveplate {
    retardation: Angle,
    fast_axis: Angle,
}
impl Waveplate {
    /// Creates a new [`Waveplate`] with the given retardation (phase shift) and fast axis.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the angles is not finite.
    pub fn new(retardation: Angle, fast_axis: Angle) -> PolResult<Self> {
        if !retardation.is_finite() || !fast_axis.is_finite() {
            return Err(PolrayError::Interface(
                "retardation and fast axis must be finite".into(),
            ));
        }
        Ok(Self {
            retardation,
            fast_axis,
        })
    }
    /// Creates a quarter-wave plate with the given fast axis.
    ///
    /// # Errors
    ///
    /// This function will return an error if the fast axis is not finite.
    pub fn quarter_wave(fast_axis: Angle) -> PolResult<Self> {
        Self::new(degree!(90.0), fast_axis)
    }
    /// Creates a half-wave plate with the given fast axis.
    ///
    /// # Errors
    ///
    /// This function will return an error if the fast axis is not finite.
    pub fn half_wave(fast_axis: Angle) -> PolResult<Self> {
        Self::new(degree!(180.0), fast_axis)
    }
    /// Returns the retardation of this [`Waveplate`].
    #[must_use]
    pub const fn retardation(&self) -> Angle {
        self.retardation
    }
    /// Returns the fast axis of this [`Waveplate`].
    #[must_use]
    pub const fn fast_axis(&self) -> Angle {
        self.fast_axis
    }
}
impl Interaction for Waveplate {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let forward = ray.direction().dot(&hit.normal()) > 0.0;
        let fast_axis = if forward {
            self.fast_axis
        } else {
            -self.fast_axis
        };
        ray.polarization()
            .transform(&retarder_matrix(fast_axis, self.retardation))
            .and_then(|(pol, power)| transmitted_child(ray, hit, pol, power))
            .into_iter()
            .collect()
    }
}
