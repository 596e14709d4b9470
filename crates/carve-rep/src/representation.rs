//! The [`Representation`] trait and the [`Edit`] report.
//!
//! Representations are the editing half of an environment: they own
//! the episode grid, translate agent actions into tile mutations, and
//! declare the action/observation space shapes the caller sees.

use carve_core::{ParamUpdate, PixelBuffer, Rgb, TileDistribution, TileGrid};
use smallvec::SmallVec;

use crate::spaces::{Action, ActionSpace, ObservationSpace};

/// Outcome of applying one action to the grid.
///
/// `cells_changed` is the number of cells whose value actually changed
/// (0 for a no-op — placing an already-present tile, or a move-only
/// action). `(x, y)` is the representative cell the edit is attributed
/// to for heatmap purposes: the edited scan position, the cursor, or a
/// stamp's origin — never a post-advance position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    /// Number of cells whose value changed.
    pub cells_changed: u32,
    /// Representative cell x coordinate.
    pub x: u32,
    /// Representative cell y coordinate.
    pub y: u32,
}

impl Edit {
    /// An edit that changed `cells_changed` cells at `(x, y)`.
    pub fn changed(cells_changed: u32, x: u32, y: u32) -> Self {
        Self {
            cells_changed,
            x,
            y,
        }
    }

    /// A no-op report at `(x, y)`.
    pub fn noop(x: u32, y: u32) -> Self {
        Self {
            cells_changed: 0,
            x,
            y,
        }
    }

    /// Whether the action left the grid untouched.
    pub fn is_noop(&self) -> bool {
        self.cells_changed == 0
    }
}

/// Structured snapshot returned by [`Representation::observe`].
///
/// `map` is a clone of the current grid; `positions` holds the cursor
/// coordinates for cursor-based strategies and is empty for
/// position-free ones. The environment appends the heatmap channel
/// before handing the observation to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepObservation {
    /// The current grid contents.
    pub map: TileGrid,
    /// Cursor positions as `(x, y)`, in strategy-defined order.
    pub positions: SmallVec<[(u32, u32); 4]>,
}

/// A pluggable grid-editing strategy.
///
/// # Contract
///
/// - The strategy owns the grid's contents; problems only ever read it.
/// - [`update()`](Self::update) applies at most a bounded number of
///   cell mutations and reports the change count and representative
///   cell. A `cells_changed` of 0 must mean the grid is bit-identical
///   to before the call.
/// - Out-of-range action components are resolved by deterministic
///   clamping or wrapping — never a panic, never an out-of-vocabulary
///   cell value. Callers wanting strict validation check
///   [`ActionSpace::contains`] first.
/// - [`action_space()`](Self::action_space) and
///   [`observation_space()`](Self::observation_space) are pure
///   functions of `(width, height, num_tiles)`: idempotent, and
///   re-derivable after any parameter adjustment.
/// - [`seed()`](Self::seed) fully determines all strategy randomness:
///   same seed, same reset fill, same cursor trajectory.
///
/// # Object safety
///
/// This trait is object-safe; environments store strategies as
/// `Box<dyn Representation>`.
///
/// # Examples
///
/// A minimal strategy that stamps tile 0 onto the origin:
///
/// ```
/// use carve_rep::{
///     Action, ActionSpace, Edit, GridChannel, ObservationSpace, RepObservation, Representation,
/// };
/// use carve_core::{TileDistribution, TileGrid, TileId};
///
/// struct Origin {
///     grid: TileGrid,
/// }
///
/// impl Representation for Origin {
///     fn name(&self) -> &str {
///         "origin"
///     }
///
///     fn seed(&mut self, seed: Option<u64>) -> u64 {
///         seed.unwrap_or(0)
///     }
///
///     fn reset(&mut self, width: u32, height: u32, _dist: &TileDistribution) {
///         self.grid = TileGrid::new(width, height, TileId(1));
///     }
///
///     fn action_space(&self, _w: u32, _h: u32, num_tiles: u32) -> ActionSpace {
///         ActionSpace::Discrete { n: num_tiles }
///     }
///
///     fn observation_space(&self, w: u32, h: u32, num_tiles: u32) -> ObservationSpace {
///         ObservationSpace {
///             map: GridChannel {
///                 width: w,
///                 height: h,
///                 high: num_tiles.saturating_sub(1),
///             },
///             positions: None,
///             heatmap: None,
///         }
///     }
///
///     fn observe(&self) -> RepObservation {
///         RepObservation {
///             map: self.grid.clone(),
///             positions: Default::default(),
///         }
///     }
///
///     fn update(&mut self, _action: &Action) -> Edit {
///         let changed = self.grid.set(0, 0, TileId(0));
///         Edit::changed(u32::from(changed), 0, 0)
///     }
///
///     fn grid(&self) -> &TileGrid {
///         &self.grid
///     }
/// }
///
/// let mut rep = Origin {
///     grid: TileGrid::new(1, 1, TileId(0)),
/// };
/// rep.reset(4, 4, &TileDistribution::uniform(2));
/// assert_eq!(rep.update(&Action::discrete(0)).cells_changed, 1);
/// assert_eq!(rep.update(&Action::discrete(0)).cells_changed, 0);
/// ```
pub trait Representation: Send {
    /// Strategy identifier used by the registry and error reporting.
    fn name(&self) -> &str;

    /// Reseed the strategy RNG; returns the effective seed.
    ///
    /// `None` draws a fresh seed from process entropy so the caller can
    /// still record and reproduce the episode.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// Re-initialize the grid for a new episode.
    ///
    /// Fills `width × height` cells by sampling `dist` and resets all
    /// cursor state.
    fn reset(&mut self, width: u32, height: u32, dist: &TileDistribution);

    /// The action shape for the given grid parameters.
    fn action_space(&self, width: u32, height: u32, num_tiles: u32) -> ActionSpace;

    /// The observation shape for the given grid parameters.
    ///
    /// The heatmap channel is left unset; the environment attaches it.
    fn observation_space(&self, width: u32, height: u32, num_tiles: u32) -> ObservationSpace;

    /// Snapshot the current grid and cursor state.
    fn observe(&self) -> RepObservation;

    /// Apply one action to the grid.
    fn update(&mut self, action: &Action) -> Edit;

    /// Apply recognized parameter adjustments; unrecognized knobs are
    /// ignored by construction.
    fn adjust_param(&mut self, update: &ParamUpdate) {
        let _ = update;
    }

    /// Read-only access to the owned grid.
    fn grid(&self) -> &TileGrid;

    /// Draw strategy decoration over a rendered frame.
    ///
    /// The default outlines each cursor cell; position-free strategies
    /// inherit a no-op because they report no positions.
    fn render_overlay(&self, frame: &mut PixelBuffer, tile_size: u32) {
        for &(x, y) in self.observe().positions.iter() {
            frame.outline_rect(
                x * tile_size,
                y * tile_size,
                tile_size,
                tile_size,
                Rgb(255, 64, 64),
            );
        }
    }
}
