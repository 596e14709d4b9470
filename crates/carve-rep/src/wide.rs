//! Wide strategy: absolute placement, no cursor state.

use carve_core::{TileDistribution, TileGrid};
use smallvec::SmallVec;

use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace};
use crate::state::RepState;

/// Position-free strategy.
///
/// The action encodes an absolute `(x, y, tile)` triple; there is no
/// cursor, so the observation carries no positions channel and the
/// render overlay is empty. Components are clamped into the grid and
/// vocabulary.
#[derive(Clone, Debug)]
pub struct Wide {
    state: RepState,
}

impl Wide {
    /// Create a wide strategy.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
        }
    }
}

impl Default for Wide {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for Wide {
    fn name(&self) -> &str {
        "wide"
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.state.seed(seed)
    }

    fn reset(&mut self, width: u32, height: u32, dist: &TileDistribution) {
        self.state.fill(width, height, dist);
    }

    fn action_space(&self, width: u32, height: u32, num_tiles: u32) -> ActionSpace {
        ActionSpace::MultiDiscrete {
            nvec: [width, height, num_tiles].into_iter().collect(),
        }
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
            map: self.state.grid.clone(),
            positions: SmallVec::new(),
        }
    }

    fn update(&mut self, action: &Action) -> Edit {
        let x = action.component(0).min(self.state.grid.width() - 1);
        let y = action.component(1).min(self.state.grid.height() - 1);
        let tile = self.state.clamp_tile(action.component(2));
        let changed = self.state.grid.set(x, y, tile);
        Edit::changed(u32::from(changed), x, y)
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}
