//! Jones matrices of the supported polarization transforms
//!
//! All matrices act on Jones vectors given in the beam-attached `(h, v) = (p, s)` basis.
use nalgebra::{Complex, Matrix2};
use uom::si::{angle::radian, f64::Angle};

fn real(value: f64) -> Complex<f64> {
    Complex::new(value, 0.0)
}

/// Jones matrix of an ideal mirror.
///
/// The s component is unchanged, the p component picks up a phase shift of π.
#[must_use]
pub fn mirror_matrix() -> Matrix2<Complex<f64>> {
    Matrix2::new(real(-1.0), real(0.0), real(0.0), real(1.0))
}

/// Rotation into a frame whose first axis has the given angle with respect to the horizontal axis.
fn rotation(angle: Angle) -> Matrix2<Complex<f64>> {
    let (sin, cos) = angle.get::<radian>().sin_cos();
    Matrix2::new(real(cos), real(sin), real(-sin), real(cos))
}

/// Jones matrix of a linear retarder (waveplate).
///
/// The field component along the fast axis is unchanged while the component along the slow axis
/// is delayed by `retardation` (90° for a quarter-wave plate, 180° for a half-wave plate).
#[must_use]
pub fn retarder_matrix(fast_axis: Angle, retardation: Angle) -> Matrix2<Complex<f64>> {
    let delay = Matrix2::new(
        real(1.0),
        real(0.0),
        real(0.0),
        Complex::from_polar(1.0, retardation.get::<radian>()),
    );
    rotation(-fast_axis) * delay * rotation(fast_axis)
}

/// Jones matrix of an ideal linear polarizer transmitting along the given axis.
///
/// The matrix projects a state onto the axis. Together with the projection onto the perpendicular
/// axis it forms a lossless decomposition of the input state.
#[must_use]
pub fn projection_matrix(axis: Angle) -> Matrix2<Complex<f64>> {
    let (sin, cos) = axis.get::<radian>().sin_cos();
    Matrix2::new(
        real(cos * cos),
        real(cos * sin),
        real(sin * cos),
        real(sin * sin),
    )
}
