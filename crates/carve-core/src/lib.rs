//! Core types for the Carve level-design environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Carve workspace:
//! the tile vocabulary, the tile grid and its name-keyed view, the
//! initial-fill distribution, the parameter update set, and the RGB
//! frame buffer used for rendering.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frame;
pub mod grid;
pub mod param;
pub mod tile;

pub use frame::{PixelBuffer, Rgb};
pub use grid::{StringMap, TileGrid};
pub use param::ParamUpdate;
pub use tile::{TileDistribution, TileId, TileVocab};
