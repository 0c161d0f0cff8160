//! Non-polarizing beam splitter
use serde::{Deserialize, Serialize};

use super::{reflected_child, transmitted_child, Interaction};
use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    ray::Ray,
};

/// An ideal, polarization independent beam splitter.
///
/// The splitting ratios are given in percent. The transmitted ray keeps its direction and polarization,
/// the reflected ray picks up the mirror phase. A splitter with `split_t + split_r < 100` is lossy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSplitter {
    split_t: f64,
    split_r: f64,
}
impl BeamSplitter {
    /// Creates a new [`BeamSplitter`] with the given transmission and reflection (in percent).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - one of the ratios is negative or not finite
    ///  - the sum of both ratios exceeds 100%
    pub fn new(split_t: f64, split_r: f64) -> PolResult<Self> {
        if split_t.is_sign_negative() || !split_t.is_finite() {
            return Err(PolrayError::Interface(
                "transmission must be >=0.0 and finite".into(),
            ));
        }
        if split_r.is_sign_negative() || !split_r.is_finite() {
            return Err(PolrayError::Interface(
                "reflection must be >=0.0 and finite".into(),
            ));
        }
        if split_t + split_r > 100.0 {
            return Err(PolrayError::Interface(
                "sum of transmission and reflection must be <= 100%".into(),
            ));
        }
        Ok(Self { split_t, split_r })
    }
    /// Returns the transmission (in percent) of this [`BeamSplitter`].
    #[must_use]
    pub const fn split_t(&self) -> f64 {
        self.split_t
    }
    /// Returns the reflection (in percent) of this [`BeamSplitter`].
    #[must_use]
    pub const fn split_r(&self) -> f64 {
        self.split_r
    }
}
impl Interaction for BeamSplitter {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let pol = ray.polarization();
        [
            transmitted_child(ray, hit, pol, self.split_t / 100.0),
            reflected_child(ray, hit, &pol, self.split_r / 100.0),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
