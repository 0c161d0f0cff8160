//! Fresnel coefficients of a refractive boundary
//!
//! Formulas taken from `https://de.wikipedia.org/wiki/Fresnelsche_Formeln`. The p convention is chosen
//! such that, at normal incidence, the reflection matrix equals the [`mirror_matrix`](super::mirror_matrix)
//! (up to a global phase and a scaling factor).
use nalgebra::{Complex, Matrix2};

/// Amplitude coefficients for reflection and transmission at a boundary between two media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FresnelCoefficients {
    r_s: Complex<f64>,
    r_p: Complex<f64>,
    t_s: Complex<f64>,
    t_p: Complex<f64>,
    cos_t: f64,
    // n2 cos(beta) / n1 cos(alpha): converts |t|² into a power transmittance
    transmission_factor: f64,
    total_internal_reflection: bool,
}

/// Calculate the [`FresnelCoefficients`] for a ray travelling from a medium with index `n1` into a medium
/// with index `n2`.
///
/// `cos_incidence` is the cosine of the angle between the incoming ray and the boundary normal and is
/// expected within `[0, 1]`. Above the critical angle the reflection coefficients become complex
/// (with unit magnitude) and the transmission vanishes.
#[must_use]
pub fn fresnel_coefficients(n1: f64, n2: f64, cos_incidence: f64) -> FresnelCoefficients {
    let cos_alpha = cos_incidence.clamp(0.0, 1.0);
    if (n1 - n2).abs() < f64::EPSILON {
        return FresnelCoefficients {
            r_s: Complex::new(0.0, 0.0),
            r_p: Complex::new(0.0, 0.0),
            t_s: Complex::new(1.0, 0.0),
            t_p: Complex::new(1.0, 0.0),
            cos_t: cos_alpha,
            transmission_factor: 1.0,
            total_internal_reflection: false,
        };
    }
    let sin_alpha_sq = cos_alpha.mul_add(-cos_alpha, 1.0);
    let sin_beta_sq = (n1 / n2).powi(2) * sin_alpha_sq;
    let total_internal_reflection = sin_beta_sq > 1.0;
    let cos_beta = if total_internal_reflection {
        Complex::new(0.0, (sin_beta_sq - 1.0).sqrt())
    } else {
        Complex::new((1.0 - sin_beta_sq).sqrt(), 0.0)
    };
    let n1_cos_alpha = Complex::new(n1 * cos_alpha, 0.0);
    let n2_cos_alpha = Complex::new(n2 * cos_alpha, 0.0);
    // s-polarization
    let r_s = (n1_cos_alpha - cos_beta * n2) / (n1_cos_alpha + cos_beta * n2);
    let t_s = (n1_cos_alpha * 2.0) / (n1_cos_alpha + cos_beta * n2);
    // p-polarization
    let r_p = (n2_cos_alpha - cos_beta * n1) / (n2_cos_alpha + cos_beta * n1);
    let t_p = (n1_cos_alpha * 2.0) / (n2_cos_alpha + cos_beta * n1);
    let transmission_factor = if total_internal_reflection || cos_alpha <= 0.0 {
        0.0
    } else {
        (n2 * cos_beta.re) / (n1 * cos_alpha)
    };
    FresnelCoefficients {
        r_s,
        r_p,
        t_s,
        t_p,
        cos_t: if total_internal_reflection {
            0.0
        } else {
            cos_beta.re
        },
        transmission_factor,
        total_internal_reflection,
    }
}

impl FresnelCoefficients {
    /// Returns `true` if the incoming ray is totally reflected.
    #[must_use]
    pub const fn is_total_internal_reflection(&self) -> bool {
        self.total_internal_reflection
    }
    /// Returns the cosine of the refraction angle (0.0 for total internal reflection).
    #[must_use]
    pub const fn cos_refraction(&self) -> f64 {
        self.cos_t
    }
    /// Returns the amplitude reflection coefficient for s-polarization.
    #[must_use]
    pub const fn r_s(&self) -> Complex<f64> {
        self.r_s
    }
    /// Returns the amplitude reflection coefficient for p-polarization.
    #[must_use]
    pub const fn r_p(&self) -> Complex<f64> {
        self.r_p
    }
    /// Returns the power reflectance for s-polarization.
    #[must_use]
    pub fn reflectance_s(&self) -> f64 {
        self.r_s.norm_sqr()
    }
    /// Returns the power reflectance for p-polarization.
    #[must_use]
    pub fn reflectance_p(&self) -> f64 {
        self.r_p.norm_sqr()
    }
    /// Returns the power transmittance for s-polarization.
    #[must_use]
    pub fn transmittance_s(&self) -> f64 {
        self.transmission_factor * self.t_s.norm_sqr()
    }
    /// Returns the power transmittance for p-polarization.
    #[must_use]
    pub fn transmittance_p(&self) -> f64 {
        self.transmission_factor * self.t_p.norm_sqr()
    }
    /// Returns the reflectance for unpolarized light (mean of s and p).
    #[must_use]
    pub fn reflectance_unpolarized(&self) -> f64 {
        (self.reflectance_s() + self.reflectance_p()) / 2.
    }
    /// Jones matrix of the reflected field in the `(p, s)` basis.
    #[must_use]
    pub fn reflection_matrix(&self) -> Matrix2<Complex<f64>> {
        Matrix2::new(self.r_p, Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), self.r_s)
    }
    /// Jones matrix of the transmitted field in the `(p, s)` basis.
    ///
    /// The matrix is scaled such that the squared norm of the result is the transmitted power fraction.
    #[must_use]
    pub fn transmission_matrix(&self) -> Matrix2<Complex<f64>> {
        let scale = self.transmission_factor.sqrt();
        Matrix2::new(
            self.t_p * scale,
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
            self.t_s * scale,
        )
    }
}
