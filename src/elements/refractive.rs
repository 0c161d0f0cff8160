//! Boundary between two homogeneous media
use log::debug;
use serde::{Deserialize, Serialize};

use super::{reflect, Interaction};
use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    polarization::fresnel_coefficients,
    ray::Ray,
};

/// A refractive boundary between a medium with index `n1` and a medium with index `n2`.
///
/// The medium `n1` lies on the side the boundary normal points to (the right-hand side when looking from
/// `p1` to `p2`). Depending on the side the ray arrives from, the ray is refracted from `n1` into `n2` or
/// vice versa. The split between the transmitted and reflected ray follows the Fresnel equations. Above
/// the critical angle, only a totally reflected ray is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefractiveBoundary {
    n1: f64,
    n2: f64,
}
impl RefractiveBoundary {
    /// Creates a new [`RefractiveBoundary`].
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the refractive indices is < 1.0 or not finite.
    pub fn new(n1: f64, n2: f64) -> PolResult<Self> {
        for n in [n1, n2] {
            if n < 1.0 || !n.is_finite() {
                return Err(PolrayError::Interface(
                    "refractive index must be >=1.0 and finite".into(),
                ));
            }
        }
        Ok(Self { n1, n2 })
    }
    /// Returns the refractive index on the side the boundary normal points to.
    #[must_use]
    pub const fn n1(&self) -> f64 {
        self.n1
    }
    /// Returns the refractive index on the opposite side.
    #[must_use]
    pub const fn n2(&self) -> f64 {
        self.n2
    }
}
impl Interaction for RefractiveBoundary {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        let dir = ray.direction();
        let normal = hit.normal();
        // `facing` points back into the medium the ray comes from
        let (n_in, n_out, facing) = if dir.dot(&normal) < 0.0 {
            (self.n1, self.n2, normal)
        } else {
            (self.n2, self.n1, -normal)
        };
        let cos_i = -dir.dot(&facing);
        let coefficients = fresnel_coefficients(n_in, n_out, cos_i);
        let pol = ray.polarization();
        let mut children = Vec::with_capacity(2);
        if coefficients.is_total_internal_reflection() {
            debug!(
                "total internal reflection at ({:?}, {:?})",
                hit.point().x,
                hit.point().y
            );
        } else {
            let mu = n_in / n_out;
            let refracted = mu * dir + mu.mul_add(cos_i, -coefficients.cos_refraction()) * facing;
            if let Some((t_pol, power)) = pol.transform(&coefficients.transmission_matrix()) {
                children.push(
                    ray.spawn(hit, refracted, t_pol, ray.intensity() * power)
                        .in_medium(n_out),
                );
            }
        }
        if let Some((r_pol, power)) = pol.transform(&coefficients.reflection_matrix()) {
            children.push(ray.spawn(
                hit,
                reflect(&dir, &facing),
                r_pol,
                ray.intensity() * power,
            ));
        }
        children
    }
}
