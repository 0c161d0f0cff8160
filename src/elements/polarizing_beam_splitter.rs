//! Polarizing beam splitter
use serde::{Deserialize, Serialize};
use uom::si::f64::Angle;

use super::{reflected_child, Interaction};
use crate::{
    degree,
    error::{PolResult, PolrayError},
    geometry::Hit,
    polarization::projection_matrix,
    ray::Ray,
};

/// An ideal polarizing beam splitter.
///
/// The component along the transmission axis is transmitted, the perpendicular component is reflected
/// (with the mirror phase). The axis is measured in the beam-attached Jones basis, starting at the
/// in-plane (p) axis towards the out-of-plane (s) axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarizingBeamSplitter {
    transmission_axis: Angle,
}
impl PolarizingBeamSplitter {
    /// Creates a new [`PolarizingBeamSplitter`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the axis angle is not finite.
    pub fn new(transmission_axis: Angle) -> PolResult<Self> {
        if !transmission_axis.is_finite() {
            return Err(PolrayError::Interface(
                "transmission axis must be finite".into(),
            ));
        }
        Ok(Self { transmission_axis })
    }
    /// Returns the transmission axis of this [`PolarizingBeamSplitter`].
    #[must_use]
    pub const fn transmission_axis(&self) -> Angle {
        self.transmission_axis
    }
}
impl Interaction for PolarizingBeamSplitter {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let pol = ray.polarization();
        let mut children = Vec::with_capacity(2);
        if let Some((t_pol, power)) = pol.transform(&projection_matrix(self.transmission_axis)) {
            children.push(ray.spawn(hit, ray.direction(), t_pol, ray.intensity() * power));
        }
        let blocked_axis = self.transmission_axis + degree!(90.0);
        if let Some((r_pol, power)) = pol.transform(&projection_matrix(blocked_axis)) {
            children.extend(reflected_child(ray, hit, &r_pol, power));
        }
        children
    }
}
