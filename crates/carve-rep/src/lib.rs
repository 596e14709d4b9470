//! Grid-editing strategies for Carve environments.
//!
//! This crate defines the [`Representation`] trait — the strategy
//! abstraction that translates an agent action into a tile-grid
//! mutation — along with the action/observation space descriptors and
//! the concrete editing strategies.
//!
//! # Strategies
//!
//! - [`Narrow`]: row-major scan cursor, one tile placement per action
//! - [`NarrowCast`]: narrow plus a multi-cell stamp dimension
//! - [`NarrowMulti`]: several independent scan cursors per step
//! - [`Wide`]: absolute `(x, y, tile)` placement, no cursor
//! - [`Turtle`]: persistent cursor moved in cardinal steps
//! - [`TurtleCast`]: turtle plus multi-cell stamps
//!
//! Every strategy owns the episode grid and a seeded ChaCha8 RNG, so
//! identical seeds replay identical episodes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod narrow;
pub mod narrow_cast;
pub mod narrow_multi;
pub mod representation;
pub mod spaces;
pub mod stamp;
pub mod turtle;
pub mod turtle_cast;
pub mod wide;

pub(crate) mod state;

pub use edge::EdgeBehavior;
pub use narrow::Narrow;
pub use narrow_cast::NarrowCast;
pub use narrow_multi::NarrowMulti;
pub use representation::{Edit, RepObservation, Representation};
pub use spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
pub use stamp::StampPattern;
pub use turtle::Turtle;
pub use turtle_cast::TurtleCast;
pub use wide::Wide;
