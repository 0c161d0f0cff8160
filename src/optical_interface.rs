#![warn(missing_docs)]
//! An optical interface: a boundary shape combined with an element behaviour
use std::fmt::Display;

use uom::si::f64::Length;
use uuid::Uuid;

use crate::{
    elements::{ElementProperties, Interaction},
    geometry::{Geometry, Hit},
    ray::Ray,
};

/// A single boundary of a scene.
///
/// An [`OpticalInterface`] pairs a [`Geometry`] with its [`ElementProperties`]. Interfaces are created
/// while building a [`Scene`](crate::scene::Scene) and are read-only during a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalInterface {
    name: String,
    uuid: Uuid,
    geometry: Geometry,
    properties: ElementProperties,
}
impl OpticalInterface {
    /// Creates a new [`OpticalInterface`] with a random identifier.
    #[must_use]
    pub fn new(name: &str, geometry: Geometry, properties: impl Into<ElementProperties>) -> Self {
        Self {
            name: name.to_owned(),
            uuid: Uuid::new_v4(),
            geometry,
            properties: properties.into(),
        }
    }
    /// Returns the name of this [`OpticalInterface`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the unique identifier of this [`OpticalInterface`].
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }
    /// Sets the unique identifier of this [`OpticalInterface`].
    pub fn set_uuid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
    }
    /// Returns a reference to the geometry of this [`OpticalInterface`].
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }
    /// Returns a reference to the properties of this [`OpticalInterface`].
    #[must_use]
    pub const fn properties(&self) -> &ElementProperties {
        &self.properties
    }
    /// Calculate the intersection of a [`Ray`] with this interface.
    ///
    /// See [`Geometry::intersect`].
    #[must_use]
    pub fn intersect(&self, ray: &Ray, min_distance: Length) -> Option<Hit> {
        self.geometry.intersect(ray, min_distance)
    }
}
impl Interaction for OpticalInterface {
    fn interact(&self, ray: &Ray, hit: &Hit) -> Vec<Ray> {
        self.properties.interact(ray, hit)
    }
}
impl Display for OpticalInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.name, self.properties.kind())
    }
}
