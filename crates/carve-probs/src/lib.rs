//! Reference problem implementations for the Carve framework.
//!
//! Problems here serve two roles: they make the engine exercisable
//! end-to-end out of the box, and they show the intended shape of a
//! [`Problem`](carve_prob::Problem) implementation — pure stats from
//! the tile-name view, interval-shaped rewards over stat transitions,
//! and a goal judgment independent of the engine's budgets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary;

pub use binary::BinaryProblem;
