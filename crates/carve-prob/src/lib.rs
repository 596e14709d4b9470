//! Level evaluation for Carve environments.
//!
//! This crate defines the [`Problem`] trait — the strategy abstraction
//! that scores a tile grid into named metrics, a scalar reward, and a
//! goal judgment — together with the grid-analysis helpers concrete
//! problems are built from.
//!
//! Concrete game problems live in `carve-probs`; this crate only fixes
//! the contract the environment engine drives them through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metrics;
pub mod problem;

pub use problem::{range_reward, Problem, Stats};
