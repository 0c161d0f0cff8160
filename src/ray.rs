#![warn(missing_docs)]
//! Module for handling optical rays
use std::fmt::Display;

use nalgebra::{Point2, Vector2};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::Length,
    length::{meter, nanometer},
};

use crate::{
    error::{PolResult, PolrayError},
    geometry::Hit,
    polarization::Jones,
    ray_path::SegmentState,
};

/// Struct that contains all information about an optical ray
///
/// A [`Ray`] is never modified while it is traced. Interactions with an optical interface create new
/// (child) rays starting at the intersection point, which inherit the history of their parent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ray {
    /// current position (start point of the current segment)
    pos: Point2<Length>,
    /// position history (start points of all completed segments)
    pos_hist: Vec<Point2<Length>>,
    /// intensity and polarization of all completed segments
    seg_hist: Vec<SegmentState>,
    /// indices of all interfaces hit so far
    hit_hist: Vec<usize>,
    /// normalized propagation direction
    dir: Vector2<f64>,
    /// wavelength of the ray
    wvl: Length,
    /// normalized Jones vector
    pol: Jones,
    /// intensity relative to the seed ray
    intensity: f64,
    /// number of interactions this ray (and its ancestors) went through
    event_count: u32,
    /// optical path length of the ray
    path_length: Length,
    // refractive index of the medium this ray is propagating in.
    refractive_index: f64,
}
impl Ray {
    /// Creates a new [`Ray`].
    ///
    /// The direction vector is normalized.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given position is not finite
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the given intensity is outside the interval `[0.0, 1.0]`
    ///  - the direction vector has a zero length or is not finite
    ///  - the polarization is not a valid Jones vector
    pub fn new(
        position: Point2<Length>,
        direction: Vector2<f64>,
        wave_length: Length,
        polarization: Jones,
        intensity: f64,
    ) -> PolResult<Self> {
        if position.iter().any(|c| !c.is_finite()) {
            return Err(PolrayError::Other("position must be finite".into()));
        }
        if wave_length.is_zero() || wave_length.is_sign_negative() || !wave_length.is_finite() {
            return Err(PolrayError::Other("wavelength must be >0".into()));
        }
        if !(0.0..=1.0).contains(&intensity) {
            return Err(PolrayError::Other(
                "intensity must be within [0.0;1.0]".into(),
            ));
        }
        if direction.norm().is_zero() || !direction.iter().all(|c| c.is_finite()) {
            return Err(PolrayError::Other("length of direction must be >0".into()));
        }
        Jones::new(polarization.h(), polarization.v())?;
        Ok(Self {
            pos: position,
            pos_hist: Vec::<Point2<Length>>::with_capacity(8),
            seg_hist: Vec::<SegmentState>::with_capacity(8),
            hit_hist: Vec::<usize>::with_capacity(8),
            dir: direction.normalize(),
            wvl: wave_length,
            pol: polarization,
            intensity,
            event_count: 0,
            path_length: Length::zero(),
            refractive_index: 1.0,
        })
    }
    /// Returns the position of this [`Ray`].
    #[must_use]
    pub const fn position(&self) -> Point2<Length> {
        self.pos
    }
    /// Returns the (normalized) direction of this [`Ray`].
    #[must_use]
    pub const fn direction(&self) -> Vector2<f64> {
        self.dir
    }
    /// Returns the wavelength of this [`Ray`].
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wvl
    }
    /// Returns the polarization state of this [`Ray`].
    #[must_use]
    pub const fn polarization(&self) -> Jones {
        self.pol
    }
    /// Returns the intensity of this [`Ray`].
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
    /// Returns the number of interactions of this [`Ray`] and its ancestors.
    #[must_use]
    pub const fn event_count(&self) -> u32 {
        self.event_count
    }
    /// Returns the optical path length accumulated up to the current position.
    #[must_use]
    pub const fn path_length(&self) -> Length {
        self.path_length
    }
    /// Returns the refractive index of the medium this [`Ray`] propagates in.
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the polyline traversed so far.
    ///
    /// **Note**: This function adds the current ray position to the list.
    #[must_use]
    pub fn path_so_far(&self) -> Vec<Point2<Length>> {
        let mut path = self.pos_hist.clone();
        path.push(self.pos);
        path
    }
    /// Returns the intensity and polarization of all completed segments.
    #[must_use]
    pub fn segment_history(&self) -> &[SegmentState] {
        &self.seg_hist
    }
    /// Returns the indices of all interfaces hit so far.
    #[must_use]
    pub fn interface_history(&self) -> &[usize] {
        &self.hit_hist
    }
    /// Returns the state of the current segment.
    #[must_use]
    pub const fn segment_state(&self) -> SegmentState {
        SegmentState::new(self.intensity, self.pol)
    }
    /// Returns the point reached after freely propagating by the given distance.
    #[must_use]
    pub fn point_at(&self, distance: Length) -> Point2<Length> {
        self.pos + Vector2::new(distance * self.dir.x, distance * self.dir.y)
    }
    /// Create a child ray starting at the given [`Hit`].
    ///
    /// The child inherits the history of this ray extended by the current segment. Its event count is
    /// incremented and the optical path length is increased by the distance to the hit (weighted with the
    /// refractive index of the current medium). The intensity is clamped to `[0, self.intensity]`.
    pub(crate) fn spawn(
        &self,
        hit: &Hit,
        direction: Vector2<f64>,
        polarization: Jones,
        intensity: f64,
    ) -> Self {
        let mut pos_hist = self.pos_hist.clone();
        pos_hist.push(self.pos);
        let mut seg_hist = self.seg_hist.clone();
        seg_hist.push(self.segment_state());
        let mut hit_hist = self.hit_hist.clone();
        if let Some(index) = hit.interface() {
            hit_hist.push(index);
        }
        let norm = direction.norm();
        let dir = if norm.is_normal() {
            direction / norm
        } else {
            self.dir
        };
        Self {
            pos: hit.point(),
            pos_hist,
            seg_hist,
            hit_hist,
            dir,
            wvl: self.wvl,
            pol: polarization,
            intensity: intensity.clamp(0.0, self.intensity),
            event_count: self.event_count + 1,
            path_length: self.path_length + hit.distance() * self.refractive_index,
            refractive_index: self.refractive_index,
        }
    }
    /// Set the refractive index of the medium this [`Ray`] propagates in.
    ///
    /// The index is not validated. It is only called with indices of already validated interfaces.
    #[must_use]
    pub(crate) fn in_medium(mut self, refractive_index: f64) -> Self {
        self.refractive_index = refractive_index;
        self
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = Length::format_args(meter, uom::fmt::DisplayStyle::Abbreviation);
        let nm = Length::format_args(nanometer, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "pos: ({}, {}), dir: ({}, {}), intensity: {:.6}, wavelength: {:.4}, polarization: {}, events: {}",
            m.with(self.pos[0]),
            m.with(self.pos[1]),
            self.dir[0],
            self.dir[1],
            self.intensity,
            nm.with(self.wvl),
            self.pol,
            self.event_count
        )
    }
}
