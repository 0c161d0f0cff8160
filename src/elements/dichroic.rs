//! Wavelength-selective mirror
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use super::{reflected_child, transmitted_child, Interaction};
use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    ray::Ray,
};

/// An ideal dichroic mirror with a sharp cutoff wavelength.
///
/// If `reflect_below` is set, rays with a wavelength below the cutoff are reflected (like a perfect
/// [`Mirror`](super::Mirror)) and all others are transmitted unchanged. Otherwise the behaviour is
/// inverted. A ray at exactly the cutoff wavelength does not count as "below".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dichroic {
    cutoff: Length,
    reflect_below: bool,
}
impl Dichroic {
    /// Creates a new [`Dichroic`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the cutoff wavelength is <= 0.0 or not finite.
    pub fn new(cutoff: Length, reflect_below: bool) -> PolResult<Self> {
        if cutoff.is_zero() || cutoff.is_sign_negative() || !cutoff.is_finite() {
            return Err(PolrayError::Interface(
                "cutoff wavelength must be >0 and finite".into(),
            ));
        }
        Ok(Self {
            cutoff,
            reflect_below,
        })
    }
    /// Returns the cutoff wavelength of this [`Dichroic`].
    #[must_use]
    pub const fn cutoff(&self) -> Length {
        self.cutoff
    }
    /// Returns `true` if wavelengths below the cutoff are reflected.
    #[must_use]
    pub const fn reflect_below(&self) -> bool {
        self.reflect_below
    }
    /// Returns `true` if a ray of the given wavelength is reflected.
    #[must_use]
    pub fn reflects(&self, wavelength: Length) -> bool {
        (wavelength < self.cutoff) == self.reflect_below
    }
}
impl Interaction for Dichroic {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let child = if self.reflects(ray.wavelength()) {
            reflected_child(ray, hit, &ray.polarization(), 1.0)
        } else {
            transmitted_child(ray, hit, ray.polarization(), 1.0)
        };
        child.into_iter().collect()
    }
}
