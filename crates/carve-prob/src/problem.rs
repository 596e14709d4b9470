//! The [`Problem`] trait and reward shaping helpers.

use carve_core::{ParamUpdate, PixelBuffer, Rgb, StringMap, TileDistribution, TileVocab};
use indexmap::IndexMap;

/// Named numeric metrics computed from one grid snapshot.
///
/// Backed by an [`IndexMap`] so metric iteration order is deterministic
/// for logging and replay. Keys are `&'static str` because every
/// problem's metric names are compile-time constants.
pub type Stats = IndexMap<&'static str, f64>;

/// A pluggable level evaluator.
///
/// # Contract
///
/// - [`stats()`](Self::stats) is a pure function of the tile-name grid:
///   deterministic for a fixed grid, no internal state consulted.
/// - [`reward()`](Self::reward) and
///   [`episode_over()`](Self::episode_over) compare **two** stat
///   snapshots — a transition — never a single one.
/// - **Equal snapshots are neutral.** On a no-op step the engine skips
///   the stats recomputation and passes the same snapshot as both `new`
///   and `old`. Every implementation must treat equal snapshots as "no
///   progress": reward exactly 0, not terminal. Deviating from this is
///   deliberate domain design, never an accident.
/// - [`reward()`](Self::reward) is always finite.
/// - [`debug_info()`](Self::debug_info) is diagnostics for the caller;
///   the engine never branches on it.
/// - The vocabulary and dimensions are immutable during an episode;
///   dimension knobs applied through
///   [`adjust_param()`](Self::adjust_param) take effect at the next
///   reset.
///
/// # Object safety
///
/// This trait is object-safe; environments store problems as
/// `Box<dyn Problem>`.
pub trait Problem: Send {
    /// Problem identifier used by the registry and error reporting.
    fn name(&self) -> &str;

    /// Reseed problem-internal randomness.
    ///
    /// The engine forwards the editing strategy's effective seed here
    /// so one recorded number reproduces the whole episode. Problems
    /// with no stochastic setup inherit the no-op.
    fn seed(&mut self, seed: u64) {
        let _ = seed;
    }

    /// Level width in cells.
    fn width(&self) -> u32;

    /// Level height in cells.
    fn height(&self) -> u32;

    /// The tile vocabulary, including the designated border tile.
    fn tile_vocab(&self) -> &TileVocab;

    /// Per-tile weights for the initial random fill.
    fn init_distribution(&self) -> TileDistribution;

    /// Episode setup from the freshly generated level's stats.
    ///
    /// Called once per reset, after the editing strategy has filled the
    /// grid and `init_stats` has been computed from it. Problems cache
    /// whatever baseline they judge progress against.
    fn reset(&mut self, init_stats: &Stats);

    /// Compute the named metrics for a grid snapshot.
    fn stats(&self, map: &StringMap) -> Stats;

    /// Scalar reward for the `old → new` stat transition.
    fn reward(&self, new: &Stats, old: &Stats) -> f64;

    /// Goal judgment for the `old → new` stat transition.
    ///
    /// Independent of the engine's budget-based truncation.
    fn episode_over(&self, new: &Stats, old: &Stats) -> bool;

    /// Auxiliary diagnostics surfaced to the caller.
    fn debug_info(&self, new: &Stats, old: &Stats) -> Stats;

    /// Apply recognized parameter adjustments; unrecognized knobs are
    /// ignored by construction.
    fn adjust_param(&mut self, update: &ParamUpdate) {
        let _ = update;
    }

    /// Render color for a tile name.
    fn tile_color(&self, tile: &str) -> Rgb {
        let _ = tile;
        Rgb(128, 128, 128)
    }

    /// Edge length of one rendered tile square, in pixels.
    fn tile_size(&self) -> u32 {
        16
    }

    /// Render the level into a base frame: one solid
    /// [`tile_color()`](Self::tile_color) square per cell, background
    /// in the border tile's color. Strategy decoration is drawn on top
    /// by the engine. Problems with real tile art override this.
    fn render(&self, map: &StringMap) -> PixelBuffer {
        let tile = self.tile_size().max(1);
        let background = self.tile_color(self.tile_vocab().border_name());
        let mut frame = PixelBuffer::new(map.width() * tile, map.height() * tile, background);
        for (x, y, name) in map.iter() {
            frame.fill_rect(x * tile, y * tile, tile, tile, self.tile_color(name));
        }
        frame
    }
}

/// Reward for moving a metric toward the interval `[low, high]`.
///
/// Positive when the value gets closer to the interval, negative when
/// it drifts away, 0 once inside (or unchanged). With
/// `low == high == f64::INFINITY` this degenerates to "reward any
/// increase", the usual shaping for open-ended metrics like path
/// length.
///
/// # Examples
///
/// ```
/// use carve_prob::range_reward;
///
/// // Region count moving toward the target of exactly 1.
/// assert_eq!(range_reward(2.0, 4.0, 1.0, 1.0), 2.0);
/// assert_eq!(range_reward(1.0, 1.0, 1.0, 1.0), 0.0);
/// assert_eq!(range_reward(3.0, 1.0, 1.0, 1.0), -2.0);
///
/// // Open-ended: longer paths are always better.
/// let inf = f64::INFINITY;
/// assert_eq!(range_reward(12.0, 7.0, inf, inf), 5.0);
/// ```
pub fn range_reward(new_value: f64, old_value: f64, low: f64, high: f64) -> f64 {
    // Written as differences of clamped coordinates rather than
    // interval distances so an infinite band stays finite.
    if old_value <= high && new_value <= high {
        return new_value.min(low) - old_value.min(low);
    }
    if old_value >= low && new_value >= low {
        return old_value.max(high) - new_value.max(high);
    }
    // The transition crossed the whole interval.
    (new_value.min(low) - old_value.min(low)) + (old_value.max(high) - new_value.max(high))
}
