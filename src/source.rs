#![warn(missing_docs)]
//! Emitting sources
//!
//! A [`Source`] emits a fan of rays from a single point. The seed rays are evenly distributed over the fan
//! angle and all carry the full intensity (1.0).
use nalgebra::{Point2, Vector2};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::{millimeter, nanometer},
};

use crate::{
    error::{PolResult, PolrayError},
    polarization::Jones,
    ray::Ray,
    utils::usize_to_f64,
};

/// A point source emitting a (possibly fanned) set of rays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    position: Point2<Length>,
    direction: Angle,
    fan_angle: Angle,
    ray_count: usize,
    wavelength: Length,
    polarization: Jones,
}
impl Source {
    /// Creates a new [`Source`].
    ///
    /// `direction` is the angle of the central ray measured counter-clockwise from the x axis. For
    /// `ray_count > 1`, the rays are evenly spaced over `[direction - fan_angle / 2, direction + fan_angle / 2]`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the position is not finite
    ///  - the direction is not finite
    ///  - the fan angle is negative or not finite
    ///  - `ray_count` is zero
    ///  - the wavelength is <= 0.0 or not finite
    ///  - the polarization is not a valid Jones vector (e.g. created from a non-finite angle)
    pub fn new(
        position: Point2<Length>,
        direction: Angle,
        fan_angle: Angle,
        ray_count: usize,
        wavelength: Length,
        polarization: Jones,
    ) -> PolResult<Self> {
        if position.iter().any(|c| !c.is_finite()) {
            return Err(PolrayError::Source("position must be finite".into()));
        }
        if !direction.is_finite() {
            return Err(PolrayError::Source("direction must be finite".into()));
        }
        if fan_angle.is_sign_negative() || !fan_angle.is_finite() {
            return Err(PolrayError::Source(
                "fan angle must be >= 0.0 and finite".into(),
            ));
        }
        if ray_count.is_zero() {
            return Err(PolrayError::Source("number of rays must be > 0".into()));
        }
        if wavelength.is_zero() || wavelength.is_sign_negative() || !wavelength.is_finite() {
            return Err(PolrayError::Source("wavelength must be > 0".into()));
        }
        Jones::new(polarization.h(), polarization.v())
            .map_err(|e| PolrayError::Source(format!("invalid polarization: {e}")))?;
        Ok(Self {
            position,
            direction,
            fan_angle,
            ray_count,
            wavelength,
            polarization,
        })
    }
    /// Creates a [`Source`] emitting a single ray.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parameters are invalid (see [`Source::new`]).
    pub fn single_ray(
        position: Point2<Length>,
        direction: Angle,
        wavelength: Length,
        polarization: Jones,
    ) -> PolResult<Self> {
        Self::new(
            position,
            direction,
            Angle::zero(),
            1,
            wavelength,
            polarization,
        )
    }
    /// Returns the position of this [`Source`].
    #[must_use]
    pub const fn position(&self) -> Point2<Length> {
        self.position
    }
    /// Returns the direction of the central ray.
    #[must_use]
    pub const fn direction(&self) -> Angle {
        self.direction
    }
    /// Returns the full fan angle.
    #[must_use]
    pub const fn fan_angle(&self) -> Angle {
        self.fan_angle
    }
    /// Returns the number of emitted rays.
    #[must_use]
    pub const fn ray_count(&self) -> usize {
        self.ray_count
    }
    /// Returns the wavelength of the emitted rays.
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the polarization of the emitted rays.
    #[must_use]
    pub const fn polarization(&self) -> Jones {
        self.polarization
    }
    /// Returns the emission angles of all rays.
    #[must_use]
    pub fn ray_angles(&self) -> Vec<Angle> {
        if self.ray_count == 1 {
            return vec![self.direction];
        }
        let start = self.direction - self.fan_angle / 2.0;
        let step = self.fan_angle / usize_to_f64(self.ray_count - 1);
        (0..self.ray_count)
            .map(|i| start + step * usize_to_f64(i))
            .collect()
    }
    /// Generate the seed rays of this [`Source`].
    ///
    /// # Errors
    ///
    /// This function will return an error if a ray cannot be created.
    pub fn seed_rays(&self) -> PolResult<Vec<Ray>> {
        self.ray_angles()
            .into_iter()
            .map(|angle| {
                let (sin, cos) = angle.get::<radian>().sin_cos();
                Ray::new(
                    self.position,
                    Vector2::new(cos, sin),
                    self.wavelength,
                    self.polarization,
                    1.0,
                )
            })
            .collect()
    }
}
impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ray(s) from ({:.3} mm, {:.3} mm) at {:.2}° (fan {:.2}°), {:.1} nm",
            self.ray_count,
            self.position.x.get::<millimeter>(),
            self.position.y.get::<millimeter>(),
            self.direction.get::<degree>(),
            self.fan_angle.get::<degree>(),
            self.wavelength.get::<nanometer>()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{degree, millimeter, nanometer};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn source(fan: f64, count: usize) -> PolResult<Source> {
        Source::new(
            millimeter!(1.0, 2.0),
            degree!(10.0),
            degree!(fan),
            count,
            nanometer!(633.0),
            Jones::vertical(),
        )
    }
    #[test]
    fn new() {
        assert!(source(10.0, 0).is_err());
        assert!(source(-1.0, 3).is_err());
        assert!(source(f64::NAN, 3).is_err());
        assert!(Source::single_ray(
            millimeter!(f64::NAN, 0.0),
            degree!(0.0),
            nanometer!(633.0),
            Jones::horizontal()
        )
        .is_err());
        assert!(Source::single_ray(
            millimeter!(0.0, 0.0),
            degree!(f64::INFINITY),
            nanometer!(633.0),
            Jones::horizontal()
        )
        .is_err());
        assert!(Source::single_ray(
            millimeter!(0.0, 0.0),
            degree!(0.0),
            nanometer!(0.0),
            Jones::horizontal()
        )
        .is_err());
        assert_matches!(
            Source::single_ray(
                millimeter!(0.0, 0.0),
                degree!(0.0),
                nanometer!(633.0),
                Jones::linear(degree!(f64::NAN))
            ),
            Err(PolrayError::Source(_))
        );
        let s = source(10.0, 3).unwrap();
        assert_eq!(s.ray_count(), 3);
        assert_eq!(s.wavelength(), nanometer!(633.0));
        assert_eq!(s.polarization(), Jones::vertical());
        assert_eq!(s.position(), millimeter!(1.0, 2.0));
    }
    #[test]
    fn single_ray_uses_central_direction() {
        let s = source(20.0, 1).unwrap();
        let angles = s.ray_angles();
        assert_eq!(angles.len(), 1);
        assert_abs_diff_eq!(angles[0].get::<degree>(), 10.0, epsilon = 1e-12);
    }
    #[test]
    fn fan_is_evenly_spaced() {
        let s = source(20.0, 5).unwrap();
        let angles: Vec<f64> = s.ray_angles().iter().map(|a| a.get::<degree>()).collect();
        for (angle, expected) in angles.iter().zip([0.0, 5.0, 10.0, 15.0, 20.0]) {
            assert_abs_diff_eq!(*angle, expected, epsilon = 1e-9);
        }
    }
    #[test]
    fn seed_rays() {
        let s = source(0.0, 3).unwrap();
        let rays = s.seed_rays().unwrap();
        assert_eq!(rays.len(), 3);
        for ray in rays {
            assert_eq!(ray.intensity(), 1.0);
            assert_eq!(ray.event_count(), 0);
            assert_eq!(ray.position(), millimeter!(1.0, 2.0));
            assert_eq!(ray.polarization(), Jones::vertical());
            assert_abs_diff_eq!(ray.direction().norm(), 1.0, epsilon = 1e-15);
            assert_abs_diff_eq!(
                ray.direction().y.atan2(ray.direction().x).to_degrees(),
                10.0,
                epsilon = 1e-9
            );
        }
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", source(5.0, 2).unwrap()),
            "2 ray(s) from (1.000 mm, 2.000 mm) at 10.00° (fan 5.00°), 633.0 nm"
        );
    }
}
