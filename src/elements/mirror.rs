//! Specular reflector
use serde::{Deserialize, Serialize};

use super::{reflected_child, Interaction};
use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    ray::Ray,
};

/// An ideal mirror with a constant reflectivity.
///
/// The reflected ray picks up the mirror phase (π for the p component). The transmitted part
/// (`1 - reflectivity`) is lost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mirror {
    reflectivity: f64,
}
impl Mirror {
    /// Creates a new [`Mirror`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the reflectivity is outside the interval `[0.0, 1.0]`.
    pub fn new(reflectivity: f64) -> PolResult<Self> {
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(PolrayError::Interface(
                "reflectivity must be within [0.0;1.0]".into(),
            ));
        }
        Ok(Self { reflectivity })
    }
    /// Returns the reflectivity of this [`Mirror`].
    #[must_use]
    pub const fn reflectivity(&self) -> f64 {
        self.reflectivity
    }
}
impl Default for Mirror {
    /// A perfect mirror (reflectivity 1.0).
    fn default() -> Self {
        Self { reflectivity: 1.0 }
    }
}
impl Interaction for Mirror {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        reflected_child(ray, hit, &ray.polarization(), self.reflectivity)
            .into_iter()
            .collect()
    }
}
