//! Test utilities and mock strategies for Carve development.
//!
//! Provides a [`MockProblem`] with trivially checkable metrics and a
//! [`ScriptedRep`] whose edit reports are scripted in advance, so
//! engine tests can drive exact change counts and coordinates without
//! real game semantics.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use carve_core::{ParamUpdate, StringMap, TileDistribution, TileGrid, TileId, TileVocab};
use carve_prob::{Problem, Stats};
use carve_rep::{
    Action, ActionSpace, Edit, GridChannel, ObservationSpace, RepObservation, Representation,
};

/// A problem whose only metric is the number of `solid` cells.
///
/// Reward is the raw metric delta; the episode is over once the count
/// reaches `target` (never, by default). Width and height are
/// configurable so tests can pin exact budget arithmetic.
pub struct MockProblem {
    width: u32,
    height: u32,
    vocab: TileVocab,
    target: Option<f64>,
}

impl MockProblem {
    pub fn new() -> Self {
        Self::sized(4, 4)
    }

    /// A mock problem with the given level dimensions.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vocab: TileVocab::new(vec!["empty", "solid"], TileId(1)),
            target: None,
        }
    }

    /// Declare the episode over once `solid` cells reach `target`.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }
}

impl Default for MockProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for MockProblem {
    fn name(&self) -> &str {
        "mock"
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile_vocab(&self) -> &TileVocab {
        &self.vocab
    }

    fn init_distribution(&self) -> TileDistribution {
        // All-empty fill keeps initial stats at zero.
        TileDistribution::new(vec![1.0, 0.0])
    }

    fn reset(&mut self, _init_stats: &Stats) {}

    fn stats(&self, map: &StringMap) -> Stats {
        let mut stats = Stats::new();
        stats.insert(
            "filled",
            f64::from(carve_prob::metrics::count_tiles(map, "solid")),
        );
        stats
    }

    fn reward(&self, new: &Stats, old: &Stats) -> f64 {
        new.get("filled").copied().unwrap_or(0.0) - old.get("filled").copied().unwrap_or(0.0)
    }

    fn episode_over(&self, new: &Stats, _old: &Stats) -> bool {
        match self.target {
            Some(target) => new.get("filled").copied().unwrap_or(0.0) >= target,
            None => false,
        }
    }

    fn debug_info(&self, new: &Stats, _old: &Stats) -> Stats {
        let mut info = Stats::new();
        info.insert("filled", new.get("filled").copied().unwrap_or(0.0));
        info
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(width) = update.width {
            self.width = width.max(1);
        }
        if let Some(height) = update.height {
            self.height = height.max(1);
        }
    }
}

/// A representation that replays a scripted sequence of edit reports.
///
/// Each [`update()`](Representation::update) pops the next scripted
/// [`Edit`]; when the script is exhausted every further action is a
/// no-op at the origin. A scripted edit with a non-zero change count
/// flips the cell at its coordinates so the grid genuinely changes
/// (the reported count is taken from the script verbatim).
pub struct ScriptedRep {
    grid: TileGrid,
    script: VecDeque<Edit>,
}

impl ScriptedRep {
    pub fn new(script: Vec<Edit>) -> Self {
        Self {
            grid: TileGrid::new(1, 1, TileId(0)),
            script: script.into(),
        }
    }

    /// Edits not yet consumed by the engine.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Representation for ScriptedRep {
    fn name(&self) -> &str {
        "scripted"
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        seed.unwrap_or(0)
    }

    fn reset(&mut self, width: u32, height: u32, _dist: &TileDistribution) {
        self.grid = TileGrid::new(width, height, TileId(0));
    }

    fn action_space(&self, _width: u32, _height: u32, num_tiles: u32) -> ActionSpace {
        ActionSpace::Discrete { n: num_tiles + 1 }
    }

    fn observation_space(&self, width: u32, height: u32, num_tiles: u32) -> ObservationSpace {
        ObservationSpace {
            map: GridChannel {
                width,
                height,
                high: num_tiles.saturating_sub(1),
            },
            positions: None,
            heatmap: None,
        }
    }

    fn observe(&self) -> RepObservation {
        RepObservation {
            map: self.grid.clone(),
            positions: Default::default(),
        }
    }

    fn update(&mut self, _action: &Action) -> Edit {
        match self.script.pop_front() {
            Some(edit) => {
                if edit.cells_changed > 0 {
                    let flipped = if self.grid.get(edit.x, edit.y) == TileId(0) {
                        TileId(1)
                    } else {
                        TileId(0)
                    };
                    self.grid.set(edit.x, edit.y, flipped);
                }
                edit
            }
            None => Edit::noop(0, 0),
        }
    }

    fn grid(&self) -> &TileGrid {
        &self.grid
    }
}
