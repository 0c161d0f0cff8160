//! This is the documentation for the **polray** package, a polarization-aware two-dimensional ray
//! propagation engine for the simulation of optical systems.
//!
//! A [`Scene`] consists of optical interfaces (flat or curved boundaries carrying an element behaviour
//! like a mirror, a lens or a waveplate) and light sources. The [`Tracer`] follows every seed ray through
//! the scene, splitting it at partially reflecting elements, and returns the terminated branches as
//! [`RayPath`]s including the intensity and Jones vector of every segment.
//!
//! ```rust
//! use polray::{degree, millimeter, nanometer};
//! use polray::{elements::Mirror, polarization::Jones, Scene, Source, TraceConfig, Tracer};
//!
//! let mut scene = Scene::new();
//! scene
//!     .add_line("mirror", millimeter!(10.0, 10.0), millimeter!(10.0, -10.0), Mirror::default())
//!     .unwrap();
//! scene.add_source(
//!     Source::single_ray(
//!         millimeter!(0.0, 0.0),
//!         degree!(0.0),
//!         nanometer!(633.0),
//!         Jones::horizontal(),
//!     )
//!     .unwrap(),
//! );
//! let result = Tracer::new(TraceConfig::default()).trace(&scene).unwrap();
//! assert_eq!(result.paths().len(), 1);
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod elements;
pub mod error;
pub mod geometry;
pub mod inspect;
pub mod optical_interface;
pub mod polarization;
pub mod ray;
pub mod ray_path;
pub mod scene;
pub mod source;
pub mod tracer;
pub mod utils;

pub use optical_interface::OpticalInterface;
pub use ray_path::{RayPath, TerminationReason, TraceResult};
pub use scene::Scene;
pub use source::Source;
pub use tracer::{CancellationToken, TraceConfig, Tracer};
