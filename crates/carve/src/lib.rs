//! Carve: procedural level generation as a reinforcement-learning environment.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Carve sub-crates. For most users, adding `carve` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use carve::prelude::*;
//!
//! // Compose the binary (maze) problem with the turtle editing strategy.
//! let mut env = registry::make("binary", "turtle", RenderMode::RgbArray).unwrap();
//!
//! // Seeded reset, then drive the step loop.
//! let (observation, _info) = env.reset(Some(42));
//! assert!(observation.heatmap.is_zeroed());
//!
//! let mut rng = rand::rng();
//! for _ in 0..100 {
//!     let action = env.action_space().sample(&mut rng);
//!     let result = env.step(&action);
//!     if result.terminated || result.truncated {
//!         env.reset(None);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `carve-core` | Tile vocabulary, grid, distributions, parameters, frames |
//! | [`rep`] | `carve-rep` | The `Representation` trait, spaces, and editing strategies |
//! | [`prob`] | `carve-prob` | The `Problem` trait, stats, metrics, reward shaping |
//! | [`probs`] | `carve-probs` | Reference problems (binary) |
//! | [`env`] | `carve-env` | The episode engine, heatmap, registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: tiles, grids, distributions, parameters, frames (`carve-core`).
pub use carve_core as types;

/// Editing strategies and space descriptors (`carve-rep`).
///
/// The [`rep::Representation`] trait is the extension point for custom
/// editing strategies; [`rep::Narrow`], [`rep::Wide`], [`rep::Turtle`]
/// and their cast/multi variants are the built-ins.
pub use carve_rep as rep;

/// Level evaluation contract and metrics (`carve-prob`).
///
/// The [`prob::Problem`] trait is the extension point for custom game
/// problems; [`prob::metrics`] holds the shared grid analyses.
pub use carve_prob as prob;

/// Reference problem implementations (`carve-probs`).
pub use carve_probs as probs;

/// The episode engine (`carve-env`).
///
/// [`env::PcgEnv`] drives reset/step with budget-based truncation;
/// [`env::registry`] resolves strategy names to instances.
pub use carve_env as env;

/// Common imports for typical Carve usage.
///
/// ```rust
/// use carve::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use carve_core::{
        ParamUpdate, PixelBuffer, Rgb, StringMap, TileDistribution, TileGrid, TileId, TileVocab,
    };

    // Editing strategies
    pub use carve_rep::{
        Action, ActionSpace, Edit, EdgeBehavior, Narrow, NarrowCast, NarrowMulti, ObservationSpace,
        RepObservation, Representation, StampPattern, Turtle, TurtleCast, Wide,
    };

    // Problems
    pub use carve_prob::{range_reward, Problem, Stats};
    pub use carve_probs::BinaryProblem;

    // Engine
    pub use carve_env::{
        registry, ConfigError, Heatmap, Observation, PcgEnv, RenderMode, StepInfo, StepResult,
    };
}
