//! Configuration of a trace
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    error::{PolResult, PolrayError},
    meter, nanometer, picometer,
};

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configuration data for a trace.
///
/// The config contains the following info
///   - maximum number of events (interactions) per ray path
///   - intensity threshold below which rays are dropped
///   - escape length: length of the last segment of rays leaving the scene
///   - self-intersection epsilon: minimum distance of a valid hit from the ray origin
///   - tie tolerance: hits closer to each other than this distance are considered simultaneous
///   - parallel: trace the seed rays on a thread pool
///
/// Lengths are (de)serialized in meter.
pub struct TraceConfig {
    max_events: u32,
    intensity_threshold: f64,
    escape_length: Length,
    self_intersection_epsilon: Length,
    tie_tolerance: Length,
    parallel: bool,
}
impl Default for TraceConfig {
    /// Create a default config for a trace with the following parameters:
    ///   - maximum number of events: `100`
    ///   - intensity threshold: `1e-3`
    ///   - escape length: `1 m`
    ///   - self-intersection epsilon: `1 nm`
    ///   - tie tolerance: `1 pm`
    ///   - parallel: `true`
    fn default() -> Self {
        Self {
            max_events: 100,
            intensity_threshold: 1.0e-3,
            escape_length: meter!(1.0),
            self_intersection_epsilon: nanometer!(1.0),
            tie_tolerance: picometer!(1.0),
            parallel: true,
        }
    }
}
impl TraceConfig {
    /// Read a [`TraceConfig`] from a YAML string.
    ///
    /// Missing fields are set to their default values.
    ///
    /// # Errors
    ///
    /// This function will return an error if the string cannot be parsed or contains invalid values.
    pub fn from_yaml(yaml: &str) -> PolResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| PolrayError::Config(format!("parsing of trace config failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }
    /// Check all values of this [`TraceConfig`].
    ///
    /// # Errors
    ///
    /// This function will return an error if any of the values is out of range (see the setters).
    pub fn validate(&self) -> PolResult<()> {
        check_max_events(self.max_events)?;
        check_intensity_threshold(self.intensity_threshold)?;
        check_escape_length(self.escape_length)?;
        check_tolerance("self-intersection epsilon", self.self_intersection_epsilon)?;
        check_tolerance("tie tolerance", self.tie_tolerance)
    }
    /// Returns the maximum number of events per ray path.
    #[must_use]
    pub const fn max_events(&self) -> u32 {
        self.max_events
    }
    /// Sets the maximum number of events per ray path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given number is zero.
    pub fn set_max_events(&mut self, max_events: u32) -> PolResult<()> {
        check_max_events(max_events)?;
        self.max_events = max_events;
        Ok(())
    }
    /// Returns the intensity threshold. Rays with a lower intensity are not traced any further.
    #[must_use]
    pub const fn intensity_threshold(&self) -> f64 {
        self.intensity_threshold
    }
    /// Sets the intensity threshold.
    ///
    /// # Errors
    ///
    /// This function will return an error if the threshold is outside the interval `[0.0, 1.0]`.
    pub fn set_intensity_threshold(&mut self, intensity_threshold: f64) -> PolResult<()> {
        check_intensity_threshold(intensity_threshold)?;
        self.intensity_threshold = intensity_threshold;
        Ok(())
    }
    /// Returns the length of the final segment of a ray leaving the scene.
    #[must_use]
    pub const fn escape_length(&self) -> Length {
        self.escape_length
    }
    /// Sets the escape length.
    ///
    /// # Errors
    ///
    /// This function will return an error if the length is <= 0.0 or not finite.
    pub fn set_escape_length(&mut self, escape_length: Length) -> PolResult<()> {
        check_escape_length(escape_length)?;
        self.escape_length = escape_length;
        Ok(())
    }
    /// Returns the minimum distance of a valid intersection from the ray origin.
    #[must_use]
    pub const fn self_intersection_epsilon(&self) -> Length {
        self.self_intersection_epsilon
    }
    /// Sets the self-intersection epsilon.
    ///
    /// # Errors
    ///
    /// This function will return an error if the length is negative or not finite.
    pub fn set_self_intersection_epsilon(&mut self, epsilon: Length) -> PolResult<()> {
        check_tolerance("self-intersection epsilon", epsilon)?;
        self.self_intersection_epsilon = epsilon;
        Ok(())
    }
    /// Returns the distance below which two hits are considered simultaneous.
    #[must_use]
    pub const fn tie_tolerance(&self) -> Length {
        self.tie_tolerance
    }
    /// Sets the tie tolerance.
    ///
    /// # Errors
    ///
    /// This function will return an error if the length is negative or not finite.
    pub fn set_tie_tolerance(&mut self, tie_tolerance: Length) -> PolResult<()> {
        check_tolerance("tie tolerance", tie_tolerance)?;
        self.tie_tolerance = tie_tolerance;
        Ok(())
    }
    /// Returns `true` if the seed rays are traced in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }
    /// Switch between parallel and sequential tracing of the seed rays.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }
}

fn check_max_events(max_events: u32) -> PolResult<()> {
    if max_events.is_zero() {
        return Err(PolrayError::Config(
            "maximum number of events must be > 0".into(),
        ));
    }
    Ok(())
}
fn check_intensity_threshold(threshold: f64) -> PolResult<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(PolrayError::Config(
            "intensity threshold must be within [0.0;1.0]".into(),
        ));
    }
    Ok(())
}
fn check_escape_length(length: Length) -> PolResult<()> {
    if length.is_zero() || length.is_sign_negative() || !length.is_finite() {
        return Err(PolrayError::Config(
            "escape length must be > 0.0 and finite".into(),
        ));
    }
    Ok(())
}
fn check_tolerance(name: &str, length: Length) -> PolResult<()> {
    if length.is_sign_negative() || !length.is_finite() {
        return Err(PolrayError::Config(format!(
            "{name} must be >= 0.0 and finite"
        )));
    }
    Ok(())
}
