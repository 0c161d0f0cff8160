#![warn(missing_docs)]
//! Optical element behaviour
//!
//! Each element type is represented by its own property struct implementing the [`Interaction`] trait.
//! The closed [`ElementProperties`] enum combines all of them and forms the single dispatch point used by
//! the tracer.
//!
//! All elements are stateless: an interaction only depends on the incoming [`Ray`] and the [`Hit`] and
//! returns zero, one or two child rays. Each child starts at the hit point, its event count is increased by
//! one and its intensity never exceeds the intensity of the incoming ray.
mod beam_splitter;
mod dichroic;
mod mirror;
mod polarizing_beam_splitter;
mod refractive;
mod thin_lens;
mod waveplate;

pub use beam_splitter::BeamSplitter;
pub use dichroic::Dichroic;
pub use mirror::Mirror;
pub use polarizing_beam_splitter::PolarizingBeamSplitter;
pub use refractive::RefractiveBoundary;
pub use thin_lens::ThinLens;
pub use waveplate::Waveplate;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    geometry::Hit,
    polarization::{mirror_matrix, Jones},
    ray::Ray,
};

/// Behaviour of an optical element hit by a [`Ray`].
pub trait Interaction {
    /// Calculate the rays leaving the element after the given [`Ray`] hit it at [`Hit`].
    ///
    /// An empty vector means that the ray was absorbed.
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray>;
}

/// The properties of an optical interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
pub enum ElementProperties {
    /// specular reflector
    Mirror(Mirror),
    /// ideal thin lens
    ThinLens(ThinLens),
    /// boundary between two media
    Refractive(RefractiveBoundary),
    /// non-polarizing beam splitter
    BeamSplitter(BeamSplitter),
    /// polarizing beam splitter
    PolarizingBeamSplitter(PolarizingBeamSplitter),
    /// linear retarder
    Waveplate(Waveplate),
    /// wavelength-selective mirror
    Dichroic(Dichroic),
}
impl ElementProperties {
    /// Returns the name of the element type (e.g. `"Mirror"`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
impl Interaction for ElementProperties {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        match self {
            Self::Mirror(e) => e.interact(ray, hit),
            Self::ThinLens(e) => e.interact(ray, hit),
            Self::Refractive(e) => e.interact(ray, hit),
            Self::BeamSplitter(e) => e.interact(ray, hit),
            Self::PolarizingBeamSplitter(e) => e.interact(ray, hit),
            Self::Waveplate(e) => e.interact(ray, hit),
            Self::Dichroic(e) => e.interact(ray, hit),
        }
    }
}
macro_rules! impl_from_element {
    ($($element:ident => $variant:ident),*) => {
        $(
            impl From<$element> for ElementProperties {
                fn from(element: $element) -> Self {
                    Self::$variant(element)
                }
            }
        )*
    };
}
impl_from_element!(
    Mirror => Mirror,
    ThinLens => ThinLens,
    RefractiveBoundary => Refractive,
    BeamSplitter => BeamSplitter,
    PolarizingBeamSplitter => PolarizingBeamSplitter,
    Waveplate => Waveplate,
    Dichroic => Dichroic
);

/// Specular reflection of a direction at a surface with the given normal.
#[must_use]
pub(crate) fn reflect(direction: &Vector2<f64>, normal: &Vector2<f64>) -> Vector2<f64> {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Create the specularly reflected child of a ray with the mirror polarization transform applied.
///
/// The child carries `fraction` times the given input state. `None` is returned if no power is reflected.
pub(crate) fn reflected_child(
    ray: &Ray,
    hit: &Hit,
    polarization: &Jones,
    fraction: f64,
) -> Option<Ray> {
    if fraction <= 0.0 {
        return None;
    }
    let (pol, power) = polarization.transform(&mirror_matrix())?;
    Some(ray.spawn(
        hit,
        reflect(&ray.direction(), &hit.normal()),
        pol,
        ray.intensity() * fraction * power,
    ))
}

/// Create a child continuing in the same direction with the given (normalized) state and power fraction.
pub(crate) fn transmitted_child(
    ray: &Ray,
    hit: &Hit,
    polarization: Jones,
    fraction: f64,
) -> Option<Ray> {
    if fraction <= 0.0 {
        return None;
    }
    Some(ray.spawn(
        hit,
        ray.direction(),
        polarization,
        ray.intensity() * fraction,
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        geometry::{Geometry, Hit},
        millimeter, nanometer,
        polarization::Jones,
        ray::Ray,
    };
    use nalgebra::Vector2;
    use num::Zero;
    use uom::si::f64::Length;

    /// Vertical segment at `x = 10 mm` from `y = +10 mm` to `y = -10 mm`. Its normal points to `-x`.
    pub fn vertical_line() -> Geometry {
        Geometry::line(millimeter!(10.0, 10.0), millimeter!(10.0, -10.0)).unwrap()
    }
    pub fn ray(x: f64, y: f64, direction: Vector2<f64>, polarization: Jones) -> Ray {
        Ray::new(
            millimeter!(x, y),
            direction,
            nanometer!(633.0),
            polarization,
            1.0,
        )
        .unwrap()
    }
    pub fn hit(geometry: &Geometry, ray: &Ray) -> Hit {
        geometry.intersect(ray, Length::zero()).unwrap().with_interface(0)
    }
}

#[cfg(test)]
mod test {
    use super::{test_support::*, *};
    use crate::{degree, millimeter};
    use approx::assert_abs_diff_eq;

    #[test]
    fn kind() {
        assert_eq!(
            ElementProperties::from(Mirror::new(1.0).unwrap()).kind(),
            "Mirror"
        );
        assert_eq!(
            ElementProperties::from(RefractiveBoundary::new(1.0, 1.5).unwrap()).kind(),
            "Refractive"
        );
        assert_eq!(
            ElementProperties::from(Waveplate::half_wave(degree!(0.0)).unwrap()).kind(),
            "Waveplate"
        );
    }
    #[test]
    fn reflect_direction() {
        let r = reflect(&Vector2::new(1.0, -1.0), &Vector2::new(0.0, 1.0));
        assert_abs_diff_eq!(r, Vector2::new(1.0, 1.0));
        // independent of the normal orientation
        let r = reflect(&Vector2::new(1.0, -1.0), &Vector2::new(0.0, -1.0));
        assert_abs_diff_eq!(r, Vector2::new(1.0, 1.0));
    }
    #[test]
    fn dispatch() {
        let geometry = vertical_line();
        let ray = ray(0.0, 0.0, Vector2::x(), Jones::horizontal());
        let hit = hit(&geometry, &ray);
        let elements: Vec<ElementProperties> = vec![
            Mirror::new(1.0).unwrap().into(),
            ThinLens::new(millimeter!(100.0)).unwrap().into(),
            RefractiveBoundary::new(1.0, 1.5).unwrap().into(),
            BeamSplitter::new(50.0, 50.0).unwrap().into(),
            PolarizingBeamSplitter::new(degree!(0.0)).unwrap().into(),
            Waveplate::quarter_wave(degree!(45.0)).unwrap().into(),
            Dichroic::new(crate::nanometer!(500.0), true).unwrap().into(),
        ];
        let nr_of_children: Vec<usize> = elements
            .iter()
            .map(|e| e.interact(&ray, &hit).len())
            .collect();
        assert_eq!(nr_of_children, vec![1, 1, 2, 2, 1, 1, 1]);
        for element in &elements {
            for child in element.interact(&ray, &hit) {
                assert_eq!(child.event_count(), 1);
                assert_eq!(child.wavelength(), ray.wavelength());
                assert_abs_diff_eq!(child.direction().norm(), 1.0, epsilon = 1e-12);
                assert!(child.intensity() <= ray.intensity());
                assert_eq!(child.path_so_far().len(), 2);
            }
        }
    }
}
