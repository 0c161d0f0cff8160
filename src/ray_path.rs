#![warn(missing_docs)]
//! Terminal records of traced rays
//!
//! A [`RayPath`] is created once a branch of the ray tree stops propagating. It is immutable and carries
//! everything needed for rendering or analysis: the polyline, the state of each segment and the reason the
//! branch was terminated.
use std::{collections::BTreeMap, fmt::Display};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};
use uom::si::{f64::Length, length::millimeter};

use crate::{geometry::Hit, polarization::Jones, ray::Ray};

/// Intensity and polarization of a single segment of a ray path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentState {
    intensity: f64,
    polarization: Jones,
}
impl SegmentState {
    /// Creates a new [`SegmentState`].
    #[must_use]
    pub const fn new(intensity: f64, polarization: Jones) -> Self {
        Self {
            intensity,
            polarization,
        }
    }
    /// Returns the intensity of this segment.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
    /// Returns the polarization of this segment.
    #[must_use]
    pub const fn polarization(&self) -> Jones {
        self.polarization
    }
}

/// The reason a ray branch stopped propagating.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    StrumDisplay,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum TerminationReason {
    /// the ray left the scene without hitting any further interface
    Escaped,
    /// the maximum number of events was reached
    EventLimitReached,
    /// the intensity dropped below the configured threshold
    BelowThreshold,
    /// an interaction did not produce any outgoing ray
    Absorbed,
}

/// A completely traced branch of a ray tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayPath {
    points: Vec<Point2<Length>>,
    segments: Vec<SegmentState>,
    interfaces: Vec<usize>,
    final_state: SegmentState,
    wavelength: Length,
    optical_path_length: Length,
    seed: usize,
    termination: TerminationReason,
}
impl RayPath {
    /// Finalize a ray at its current position.
    ///
    /// This is used for rays which are terminated right where they were created (by event limit or
    /// intensity threshold). The state created by the last interaction is kept as final state.
    pub(crate) fn at_position(ray: &Ray, seed: usize, termination: TerminationReason) -> Self {
        Self {
            points: ray.path_so_far(),
            segments: ray.segment_history().to_vec(),
            interfaces: ray.interface_history().to_vec(),
            final_state: ray.segment_state(),
            wavelength: ray.wavelength(),
            optical_path_length: ray.path_length(),
            seed,
            termination,
        }
    }
    /// Finalize a ray after propagating it by `distance` along its direction.
    ///
    /// The polyline is extended by the end point and the current segment state is recorded.
    pub(crate) fn propagated(
        ray: &Ray,
        distance: Length,
        seed: usize,
        termination: TerminationReason,
    ) -> Self {
        let mut path = Self::at_position(ray, seed, termination);
        path.points.push(ray.point_at(distance));
        path.segments.push(ray.segment_state());
        path.optical_path_length += distance * ray.refractive_index();
        path
    }
    /// Finalize a ray absorbed at the given [`Hit`].
    pub(crate) fn absorbed(ray: &Ray, hit: &Hit, seed: usize) -> Self {
        let mut path = Self::propagated(ray, hit.distance(), seed, TerminationReason::Absorbed);
        if let Some(end) = path.points.last_mut() {
            *end = hit.point();
        }
        path.interfaces.extend(hit.interface());
        path
    }
    /// Returns the polyline of this [`RayPath`] (start point, all hit points and end point).
    #[must_use]
    pub fn points(&self) -> &[Point2<Length>] {
        &self.points
    }
    /// Returns the intensity and polarization of each segment.
    ///
    /// Segment `i` connects `points()[i]` and `points()[i + 1]`.
    #[must_use]
    pub fn segments(&self) -> &[SegmentState] {
        &self.segments
    }
    /// Returns the indices (within the traced scene) of all interfaces hit along this path.
    #[must_use]
    pub fn interfaces(&self) -> &[usize] {
        &self.interfaces
    }
    /// Returns the final intensity of this [`RayPath`].
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.final_state.intensity()
    }
    /// Returns the intensity and polarization at the end of this [`RayPath`].
    ///
    /// For a branch stopped right after an interaction (event limit or threshold), this is the state
    /// leaving that interaction, which has no segment of its own.
    #[must_use]
    pub const fn final_state(&self) -> SegmentState {
        self.final_state
    }
    /// Returns the polarization at the end of this [`RayPath`].
    #[must_use]
    pub const fn final_polarization(&self) -> Jones {
        self.final_state.polarization()
    }
    /// Returns the wavelength of this [`RayPath`].
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the optical path length (geometric length weighted with the refractive index).
    #[must_use]
    pub const fn optical_path_length(&self) -> Length {
        self.optical_path_length
    }
    /// Returns the index of the seed ray this path originates from.
    #[must_use]
    pub const fn seed(&self) -> usize {
        self.seed
    }
    /// Returns the [`TerminationReason`] of this [`RayPath`].
    #[must_use]
    pub const fn termination(&self) -> TerminationReason {
        self.termination
    }
}
impl Display for RayPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "seed {}: {} points, intensity: {:.6}, termination: {}",
            self.seed,
            self.points.len(),
            self.intensity(),
            self.termination
        )?;
        if let Some(end) = self.points.last() {
            write!(f, ", end: ({:.4}, {:.4})", mm.with(end.x), mm.with(end.y))?;
        }
        Ok(())
    }
}

/// The result of a trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceResult {
    paths: Vec<RayPath>,
    cancelled: bool,
}
impl TraceResult {
    pub(crate) const fn new(paths: Vec<RayPath>, cancelled: bool) -> Self {
        Self { paths, cancelled }
    }
    /// Returns all traced [`RayPath`]s ordered by their seed.
    #[must_use]
    pub fn paths(&self) -> &[RayPath] {
        &self.paths
    }
    /// Consumes the result and returns the traced [`RayPath`]s.
    #[must_use]
    pub fn into_paths(self) -> Vec<RayPath> {
        self.paths
    }
    /// Returns `true` if the trace was cancelled before all rays were traced.
    #[must_use]
    pub const fn cancelled(&self) -> bool {
        self.cancelled
    }
    /// Returns the number of paths per [`TerminationReason`].
    ///
    /// Every reason is contained in the returned map, even if no path terminated for this reason.
    #[must_use]
    pub fn statistics(&self) -> BTreeMap<TerminationReason, usize> {
        let mut stats: BTreeMap<TerminationReason, usize> =
            TerminationReason::iter().map(|r| (r, 0)).collect();
        for path in &self.paths {
            *stats.entry(path.termination()).or_default() += 1;
        }
        stats
    }
    /// Returns the sum of the final intensities of all paths with the given [`TerminationReason`].
    #[must_use]
    pub fn total_intensity(&self, termination: TerminationReason) -> f64 {
        self.paths
            .iter()
            .filter(|p| p.termination() == termination)
            .map(RayPath::intensity)
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, nanometer};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    fn ray() -> Ray {
        Ray::new(
            millimeter!(0.0, 0.0),
            Vector2::x(),
            nanometer!(633.0),
            Jones::horizontal(),
            1.0,
        )
        .unwrap()
    }
    #[test]
    fn termination_display() {
        assert_eq!(format!("{}", TerminationReason::Escaped), "Escaped");
        assert_eq!(
            format!("{}", TerminationReason::EventLimitReached),
            "EventLimitReached"
        );
        assert_eq!(TerminationReason::iter().count(), 4);
    }
    #[test]
    fn propagated() {
        let path = RayPath::propagated(&ray(), millimeter!(10.0), 2, TerminationReason::Escaped);
        assert_eq!(
            path.points(),
            &[millimeter!(0.0, 0.0), millimeter!(10.0, 0.0)]
        );
        assert_eq!(path.segments().len(), 1);
        assert_eq!(path.intensity(), 1.0);
        assert_eq!(path.seed(), 2);
        assert_eq!(path.final_polarization(), Jones::horizontal());
        assert_eq!(path.final_state(), path.segments()[0]);
        assert_abs_diff_eq!(path.optical_path_length().get::<millimeter>(), 10.0);
        assert_eq!(path.termination(), TerminationReason::Escaped);
    }
    #[test]
    fn at_position() {
        let hit = Hit::new(
            millimeter!(5.0),
            millimeter!(5.0, 0.0),
            Vector2::new(-1.0, 0.0),
            millimeter!(0.0),
        )
        .with_interface(0);
        let child = ray().spawn(&hit, Vector2::x(), Jones::vertical(), 0.5);
        let path = RayPath::at_position(&child, 0, TerminationReason::BelowThreshold);
        assert_eq!(path.points().len(), 2);
        assert_eq!(path.segments().len(), 1);
        assert_eq!(path.interfaces(), &[0]);
        assert_eq!(path.intensity(), 0.5);
        // the only completed segment is the one of the parent
        assert_eq!(
            path.segments()[0],
            SegmentState::new(1.0, Jones::horizontal())
        );
        // the state leaving the last interaction is kept
        assert_eq!(path.final_polarization(), Jones::vertical());
        assert_eq!(path.final_state(), SegmentState::new(0.5, Jones::vertical()));
        assert_eq!(path.wavelength(), nanometer!(633.0));
    }
    #[test]
    fn absorbed() {
        let hit = Hit::new(
            millimeter!(5.0),
            millimeter!(5.0, 0.0),
            Vector2::new(-1.0, 0.0),
            millimeter!(0.0),
        )
        .with_interface(4);
        let path = RayPath::absorbed(&ray(), &hit, 0);
        assert_eq!(path.points(), &[millimeter!(0.0, 0.0), millimeter!(5.0, 0.0)]);
        assert_eq!(path.interfaces(), &[4]);
        assert_eq!(path.termination(), TerminationReason::Absorbed);
        assert_abs_diff_eq!(path.optical_path_length().get::<millimeter>(), 5.0);
    }
    #[test]
    fn statistics() {
        let result = TraceResult::new(
            vec![
                RayPath::propagated(&ray(), millimeter!(1.0), 0, TerminationReason::Escaped),
                RayPath::propagated(&ray(), millimeter!(1.0), 1, TerminationReason::Escaped),
                RayPath::at_position(&ray(), 1, TerminationReason::Absorbed),
            ],
            false,
        );
        let stats = result.statistics();
        assert_eq!(stats[&TerminationReason::Escaped], 2);
        assert_eq!(stats[&TerminationReason::Absorbed], 1);
        assert_eq!(stats[&TerminationReason::BelowThreshold], 0);
        assert_eq!(stats[&TerminationReason::EventLimitReached], 0);
        assert_abs_diff_eq!(result.total_intensity(TerminationReason::Escaped), 2.0);
        assert!(!result.cancelled());
        assert_eq!(result.into_paths().len(), 3);
    }
    #[test]
    fn display() {
        let path = RayPath::propagated(&ray(), millimeter!(10.0), 0, TerminationReason::Escaped);
        assert_eq!(
            format!("{path}"),
            "seed 0: 2 points, intensity: 1.000000, termination: Escaped, end: (10.0000 mm, 0.0000 mm)"
        );
    }
}
