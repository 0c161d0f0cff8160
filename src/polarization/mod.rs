#![warn(missing_docs)]
//! Module for handling the polarization state of rays
//!
//! The polarization of a ray is stored as a normalized [`Jones`] vector. Its basis is attached to the
//! beam: the `h` component is the in-plane transverse field (propagation direction rotated by 90°
//! counter-clockwise), the `v` component is the field perpendicular to the scene plane. Since all rays
//! and all boundary normals of a 2D scene lie in the scene plane, `h` is always the p component and
//! `v` the s component with respect to the plane of incidence.
//!
//! The power of a ray is not stored in the Jones vector but in the ray intensity. Transforms therefore
//! return the normalized output state together with the transmitted power fraction.
mod fresnel;
mod transforms;

pub use fresnel::{fresnel_coefficients, FresnelCoefficients};
pub use transforms::{mirror_matrix, projection_matrix, retarder_matrix};

use nalgebra::{Complex, Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::Display as StrumDisplay;
use uom::si::{angle::radian, f64::Angle};

use crate::error::{PolResult, PolrayError};

/// Transforms resulting in a smaller power fraction produce no output state.
pub const MIN_POWER_FRACTION: f64 = 1.0e-24;

/// Handedness of a polarization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Handedness {
    /// linear polarization (no circular component)
    Linear,
    /// left-handed (positive `S3`)
    Left,
    /// right-handed (negative `S3`)
    Right,
}

/// A normalized Jones vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jones {
    vector: Vector2<Complex<f64>>,
}
impl Jones {
    /// Creates a new [`Jones`] vector from its (unnormalized) components.
    ///
    /// # Errors
    ///
    /// This function will return an error if a component is not finite or both components are zero.
    pub fn new(h: Complex<f64>, v: Complex<f64>) -> PolResult<Self> {
        if !(h.is_finite() && v.is_finite()) {
            return Err(PolrayError::Polarization(
                "Jones vector components must be finite".into(),
            ));
        }
        let vector = Vector2::new(h, v);
        if vector.norm_squared() <= MIN_POWER_FRACTION {
            return Err(PolrayError::Polarization(
                "Jones vector must not be zero".into(),
            ));
        }
        Ok(Self {
            vector: vector.normalize(),
        })
    }
    /// Horizontal (in-plane, p) linear polarization.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            vector: Vector2::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)),
        }
    }
    /// Vertical (out-of-plane, s) linear polarization.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            vector: Vector2::new(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)),
        }
    }
    /// Linear polarization with the given angle measured from the horizontal towards the vertical axis.
    #[must_use]
    pub fn linear(angle: Angle) -> Self {
        let (sin, cos) = angle.get::<radian>().sin_cos();
        Self {
            vector: Vector2::new(Complex::new(cos, 0.0), Complex::new(sin, 0.0)),
        }
    }
    /// Left-handed circular polarization `(1, i) / sqrt(2)`.
    #[must_use]
    pub fn left_circular() -> Self {
        Self {
            vector: Vector2::new(Complex::new(1.0, 0.0), Complex::new(0.0, 1.0))
                * Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
        }
    }
    /// Right-handed circular polarization `(1, -i) / sqrt(2)`.
    #[must_use]
    pub fn right_circular() -> Self {
        Self {
            vector: Vector2::new(Complex::new(1.0, 0.0), Complex::new(0.0, -1.0))
                * Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
        }
    }
    /// Returns the horizontal (p) component.
    #[must_use]
    pub fn h(&self) -> Complex<f64> {
        self.vector.x
    }
    /// Returns the vertical (s) component.
    #[must_use]
    pub fn v(&self) -> Complex<f64> {
        self.vector.y
    }
    /// Returns the Jones vector as `nalgebra` vector.
    #[must_use]
    pub const fn as_vector(&self) -> &Vector2<Complex<f64>> {
        &self.vector
    }
    /// Returns the normalized Stokes parameters `[S0, S1, S2, S3]` of this state.
    #[must_use]
    pub fn stokes(&self) -> [f64; 4] {
        let h = self.h();
        let v = self.v();
        let cross = h.conj() * v;
        [
            h.norm_sqr() + v.norm_sqr(),
            h.norm_sqr() - v.norm_sqr(),
            2.0 * cross.re,
            2.0 * cross.im,
        ]
    }
    /// Returns the [`Handedness`] of this state.
    ///
    /// States with `|S3| < 1e-9` are considered linear.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        let s3 = self.stokes()[3];
        if s3.abs() < 1.0e-9 {
            Handedness::Linear
        } else if s3 > 0.0 {
            Handedness::Left
        } else {
            Handedness::Right
        }
    }
    /// Returns the orientation of the polarization ellipse measured from the horizontal axis.
    #[must_use]
    pub fn orientation(&self) -> Angle {
        let [_, s1, s2, _] = self.stokes();
        Angle::new::<radian>(0.5 * s2.atan2(s1))
    }
    /// Checks if two Jones vectors describe the same polarization state.
    ///
    /// Both states are considered equal if they only differ by a global phase factor.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self, epsilon: f64) -> bool {
        (self.vector.dotc(&other.vector).norm() - 1.0).abs() < epsilon
    }
    /// Apply a Jones matrix to this state.
    ///
    /// Returns the normalized output state and the power fraction (squared norm of the unnormalized
    /// result). `None` is returned if the power fraction is below [`MIN_POWER_FRACTION`].
    #[must_use]
    pub fn transform(&self, matrix: &Matrix2<Complex<f64>>) -> Option<(Self, f64)> {
        let out = matrix * self.vector;
        let power = out.norm_squared();
        if power <= MIN_POWER_FRACTION || !power.is_finite() {
            return None;
        }
        Some((
            Self {
                vector: out.normalize(),
            },
            power,
        ))
    }
}
impl Default for Jones {
    fn default() -> Self {
        Self::horizontal()
    }
}
impl Display for Jones {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i, {:.4}{:+.4}i)",
            self.h().re,
            self.h().im,
            self.v().re,
            self.v().im
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::degree;
    use approx::assert_abs_diff_eq;
    use uom::si::angle::degree;

    #[test]
    fn new() {
        assert!(Jones::new(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)).is_err());
        assert!(Jones::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 0.0)).is_err());
        assert!(Jones::new(Complex::new(f64::INFINITY, 0.0), Complex::new(1.0, 0.0)).is_err());
        let j = Jones::new(Complex::new(3.0, 0.0), Complex::new(0.0, 4.0)).unwrap();
        assert_abs_diff_eq!(j.h().re, 0.6);
        assert_abs_diff_eq!(j.v().im, 0.8);
        assert_abs_diff_eq!(j.as_vector().norm(), 1.0);
    }
    #[test]
    fn linear() {
        let j = Jones::linear(degree!(45.0));
        assert_abs_diff_eq!(j.h().re, std::f64::consts::FRAC_1_SQRT_2);
        assert_abs_diff_eq!(j.v().re, std::f64::consts::FRAC_1_SQRT_2);
        assert_abs_diff_eq!(j.orientation().get::<degree>(), 45.0, epsilon = 1e-12);
        assert!(Jones::linear(degree!(0.0)).is_equivalent(&Jones::horizontal(), 1e-12));
        assert!(Jones::linear(degree!(90.0)).is_equivalent(&Jones::vertical(), 1e-12));
    }
    #[test]
    fn stokes() {
        assert_eq!(Jones::horizontal().stokes(), [1.0, 1.0, 0.0, 0.0]);
        assert_eq!(Jones::vertical().stokes(), [1.0, -1.0, 0.0, 0.0]);
        let s = Jones::left_circular().stokes();
        assert_abs_diff_eq!(s[0], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s[1], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s[3], 1.0, epsilon = 1e-15);
    }
    #[test]
    fn handedness() {
        assert_eq!(Jones::horizontal().handedness(), Handedness::Linear);
        assert_eq!(Jones::linear(degree!(30.0)).handedness(), Handedness::Linear);
        assert_eq!(Jones::left_circular().handedness(), Handedness::Left);
        assert_eq!(Jones::right_circular().handedness(), Handedness::Right);
        assert_eq!(format!("{}", Handedness::Right), "Right");
    }
    #[test]
    fn equivalence_ignores_global_phase() {
        let j = Jones::linear(degree!(20.0));
        let shifted = Jones::new(j.h() * Complex::new(0.0, 1.0), j.v() * Complex::new(0.0, 1.0))
            .unwrap();
        assert_ne!(j, shifted);
        assert!(j.is_equivalent(&shifted, 1e-12));
        assert!(!Jones::horizontal().is_equivalent(&Jones::vertical(), 1e-12));
        assert!(!Jones::left_circular().is_equivalent(&Jones::right_circular(), 1e-12));
    }
    #[test]
    fn transform() {
        let half = Matrix2::new(
            Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
        );
        let (j, power) = Jones::linear(degree!(45.0)).transform(&half).unwrap();
        assert_abs_diff_eq!(power, 0.25, epsilon = 1e-15);
        assert!(j.is_equivalent(&Jones::horizontal(), 1e-12));
        assert!(Jones::vertical().transform(&half).is_none());
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Jones::horizontal()),
            "(1.0000+0.0000i, 0.0000+0.0000i)"
        );
    }
}
