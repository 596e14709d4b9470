//! Environment engine orchestrating Carve episodes.
//!
//! [`PcgEnv`] composes one [`Problem`](carve_prob::Problem) with one
//! [`Representation`](carve_rep::Representation) and drives the
//! episode lifecycle: reset, step, budget-based truncation, and the
//! per-cell edit heatmap. Environments are built either directly from
//! resolved strategy instances via [`PcgEnv::new`] or by name through
//! [`registry::make`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod heatmap;
pub mod info;
pub mod registry;

pub(crate) mod render;

pub use config::{ConfigError, RenderMode};
pub use env::{Observation, PcgEnv, StepResult};
pub use heatmap::Heatmap;
pub use info::StepInfo;
