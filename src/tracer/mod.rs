#![warn(missing_docs)]
//! The ray tracing engine
//!
//! The [`Tracer`] seeds rays from all sources of a [`Scene`] and follows each seed through the scene. For every
//! ray, the nearest hit among all interfaces is determined and the element behaviour of the hit interface
//! creates the child rays. Children are pushed onto an explicit work stack (depth-first expansion) until
//! they
//!   - leave the scene ([`TerminationReason::Escaped`]),
//!   - reach the maximum number of events ([`TerminationReason::EventLimitReached`]),
//!   - fall below the intensity threshold ([`TerminationReason::BelowThreshold`]) or
//!   - are absorbed ([`TerminationReason::Absorbed`]).
//!
//! Seeds are independent of each other and are traced in parallel (unless disabled in the [`TraceConfig`]).
//! The resulting paths are ordered by seed.
mod cancellation;
mod config;

pub use cancellation::CancellationToken;
pub use config::TraceConfig;

use itertools::Itertools;
use log::{info, warn};
use rayon::prelude::*;

use crate::{
    elements::Interaction,
    error::PolResult,
    ray::Ray,
    ray_path::{RayPath, TerminationReason, TraceResult},
    scene::Scene,
};

/// The ray tracing engine.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    config: TraceConfig,
    cancellation: Option<CancellationToken>,
}
impl Tracer {
    /// Creates a new [`Tracer`] with the given [`TraceConfig`].
    #[must_use]
    pub const fn new(config: TraceConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }
    /// Attach a [`CancellationToken`] to this [`Tracer`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
    /// Returns the [`TraceConfig`] of this [`Tracer`].
    #[must_use]
    pub const fn config(&self) -> &TraceConfig {
        &self.config
    }
    /// Trace all sources of the given [`Scene`].
    ///
    /// A cancelled trace is not an error. It returns the paths finalized so far and
    /// [`TraceResult::cancelled`] is set.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config is invalid or the seed rays cannot be created.
    pub fn trace(&self, scene: &Scene) -> PolResult<TraceResult> {
        self.config.validate()?;
        if scene.sources().is_empty() {
            warn!("scene does not contain any source");
        }
        if scene.interfaces().is_empty() {
            warn!("scene does not contain any interface");
        }
        let seeds = scene.seed_rays()?;
        info!(
            "tracing {} seed ray(s) through {} interface(s)",
            seeds.len(),
            scene.interfaces().len()
        );
        let per_seed: Vec<(Vec<RayPath>, bool)> = if self.config.parallel() {
            seeds
                .into_par_iter()
                .enumerate()
                .map(|(index, seed)| self.trace_seed(scene, index, seed))
                .collect()
        } else {
            seeds
                .into_iter()
                .enumerate()
                .map(|(index, seed)| self.trace_seed(scene, index, seed))
                .collect()
        };
        let cancelled = per_seed.iter().any(|(_, cancelled)| *cancelled) || self.is_cancelled();
        let paths: Vec<RayPath> = per_seed.into_iter().flat_map(|(paths, _)| paths).collect();
        let result = TraceResult::new(paths, cancelled);
        if cancelled {
            warn!(
                "trace cancelled: {} path(s) finalized",
                result.paths().len()
            );
        }
        info!(
            "trace finished: {}",
            result
                .statistics()
                .iter()
                .map(|(reason, count)| format!("{reason}: {count}"))
                .join(", ")
        );
        Ok(result)
    }
    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
    /// Trace a single seed ray. Returns the finalized paths and `true` if the trace was cancelled.
    fn trace_seed(&self, scene: &Scene, seed_index: usize, seed: Ray) -> (Vec<RayPath>, bool) {
        let config = &self.config;
        let mut paths = Vec::new();
        let mut stack = vec![seed];
        while let Some(ray) = stack.pop() {
            if self.is_cancelled() {
                return (paths, true);
            }
            let Some(hit) = scene.nearest_hit(
                &ray,
                config.self_intersection_epsilon(),
                config.tie_tolerance(),
            ) else {
                paths.push(RayPath::propagated(
                    &ray,
                    config.escape_length(),
                    seed_index,
                    TerminationReason::Escaped,
                ));
                continue;
            };
            let children = hit
                .interface()
                .and_then(|index| scene.interfaces().get(index))
                .map_or_else(Vec::new, |interface| interface.interact(&ray, &hit));
            if children.is_empty() {
                paths.push(RayPath::absorbed(&ray, &hit, seed_index));
                continue;
            }
            let mut pending = Vec::with_capacity(children.len());
            for child in children {
                if child.event_count() >= config.max_events() {
                    paths.push(RayPath::at_position(
                        &child,
                        seed_index,
                        TerminationReason::EventLimitReached,
                    ));
                } else if child.intensity() < config.intensity_threshold() {
                    paths.push(RayPath::at_position(
                        &child,
                        seed_index,
                        TerminationReason::BelowThreshold,
                    ));
                } else {
                    pending.push(child);
                }
            }
            // reversed, so that the first child is expanded first
            stack.extend(pending.into_iter().rev());
        }
        (paths, false)
    }
}

/// Trace all sources of a [`Scene`] with the given [`TraceConfig`].
///
/// This is a shortcut for `Tracer::new(config).trace(scene)`.
///
/// # Errors
///
/// This function will return an error if the config is invalid or the seed rays cannot be created.
pub fn trace(scene: &Scene, config: TraceConfig) -> PolResult<TraceResult> {
    Tracer::new(config).trace(scene)
}
