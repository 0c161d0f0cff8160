#![warn(missing_docs)]
//! The optical scene
//!
//! A [`Scene`] owns all [`OpticalInterface`]s and [`Source`]s of an optical setup. Interfaces are referenced
//! by their index (in insertion order). This index is also used to resolve ties between simultaneous hits:
//! the interface added first wins.
use nalgebra::Point2;
use uom::si::f64::Length;

use crate::{
    elements::ElementProperties,
    error::{PolResult, PolrayError},
    geometry::{Geometry, Hit},
    optical_interface::OpticalInterface,
    ray::Ray,
    source::Source,
};

/// A collection of optical interfaces and sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    description: String,
    interfaces: Vec<OpticalInterface>,
    sources: Vec<Source>,
}
impl Scene {
    /// Creates a new (empty) [`Scene`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the description of this [`Scene`].
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Sets the description of this [`Scene`].
    pub fn set_description(&mut self, description: &str) {
        description.clone_into(&mut self.description);
    }
    /// Add an already constructed [`OpticalInterface`] to this [`Scene`] and return its index.
    pub fn add_interface(&mut self, interface: OpticalInterface) -> usize {
        self.interfaces.push(interface);
        self.interfaces.len() - 1
    }
    /// Add a flat interface between `p1` and `p2` and return its index.
    ///
    /// # Errors
    ///
    /// This function will return an error naming the interface if the geometry is degenerate.
    pub fn add_line(
        &mut self,
        name: &str,
        p1: Point2<Length>,
        p2: Point2<Length>,
        properties: impl Into<ElementProperties>,
    ) -> PolResult<usize> {
        let geometry = Geometry::line(p1, p2).map_err(|e| self.interface_error(name, &e))?;
        Ok(self.add_interface(OpticalInterface::new(name, geometry, properties)))
    }
    /// Add a curved interface between `p1` and `p2` with the given signed radius of curvature and return its
    /// index.
    ///
    /// # Errors
    ///
    /// This function will return an error naming the interface if the geometry is degenerate.
    pub fn add_arc(
        &mut self,
        name: &str,
        p1: Point2<Length>,
        p2: Point2<Length>,
        radius: Length,
        properties: impl Into<ElementProperties>,
    ) -> PolResult<usize> {
        let geometry =
            Geometry::arc(p1, p2, radius).map_err(|e| self.interface_error(name, &e))?;
        Ok(self.add_interface(OpticalInterface::new(name, geometry, properties)))
    }
    fn interface_error(&self, name: &str, error: &PolrayError) -> PolrayError {
        PolrayError::Scene(format!(
            "interface '{name}' (index {}): {error}",
            self.interfaces.len()
        ))
    }
    /// Add a [`Source`] to this [`Scene`] and return its index.
    pub fn add_source(&mut self, source: Source) -> usize {
        self.sources.push(source);
        self.sources.len() - 1
    }
    /// Returns the interface with the given index.
    ///
    /// # Errors
    ///
    /// This function will return an error if the index does not exist.
    pub fn interface(&self, index: usize) -> PolResult<&OpticalInterface> {
        self.interfaces.get(index).ok_or_else(|| {
            PolrayError::Scene(format!("interface with index {index} does not exist"))
        })
    }
    /// Returns all interfaces of this [`Scene`].
    #[must_use]
    pub fn interfaces(&self) -> &[OpticalInterface] {
        &self.interfaces
    }
    /// Returns all sources of this [`Scene`].
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
    /// Generate the seed rays of all sources (in the order the sources were added).
    ///
    /// # Errors
    ///
    /// This function will return an error naming the source if its rays cannot be created.
    pub fn seed_rays(&self) -> PolResult<Vec<Ray>> {
        let mut rays = Vec::new();
        for (index, source) in self.sources.iter().enumerate() {
            let seeds = source
                .seed_rays()
                .map_err(|e| PolrayError::Scene(format!("source {index}: {e}")))?;
            rays.extend(seeds);
        }
        Ok(rays)
    }
    /// Find the nearest intersection of a [`Ray`] with any interface of this [`Scene`].
    ///
    /// Only intersections farther away than `min_distance` are considered. Hits whose distances differ by
    /// less than `tie_tolerance` are considered simultaneous. In this case the interface with the lowest
    /// index wins. The returned [`Hit`] carries the index of the interface.
    #[must_use]
    pub fn nearest_hit(
        &self,
        ray: &Ray,
        min_distance: Length,
        tie_tolerance: Length,
    ) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for (index, interface) in self.interfaces.iter().enumerate() {
            if let Some(hit) = interface.intersect(ray, min_distance) {
                let closer = nearest.map_or(true, |best| {
                    hit.distance() < best.distance() - tie_tolerance
                });
                if closer {
                    nearest = Some(hit.with_interface(index));
                }
            }
        }
        nearest
    }
}
