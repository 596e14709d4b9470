//! Narrow-multi strategy: several independent scan cursors per step.

use carve_core::{ParamUpdate, TileDistribution, TileGrid};
use smallvec::SmallVec;

use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
use crate::state::{scan_advance, RepState};

/// Multi-cursor scan strategy.
///
/// `num_agents` cursors start evenly spaced along the row-major sweep
/// and each advances by `num_agents` cells per step, so together they
/// partition the grid into interleaved sweeps. The action carries one
/// tile choice per cursor (0 = skip, as in [`Narrow`](crate::Narrow));
/// the edit is attributed to the first cursor that changed a cell.
#[derive(Clone, Debug)]
pub struct NarrowMulti {
    state: RepState,
    cursors: SmallVec<[(u32, u32); 4]>,
    num_agents: u32,
}

impl NarrowMulti {
    /// Default cursor count.
    pub const DEFAULT_AGENTS: u32 = 3;

    /// Create a narrow-multi strategy with the default cursor count.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
            cursors: SmallVec::new(),
            num_agents: Self::DEFAULT_AGENTS,
        }
    }

    /// Spread cursors evenly along the row-major sweep order.
    fn spread_cursors(&mut self) {
        let width = self.state.grid.width();
        let area = u64::from(width) * u64::from(self.state.grid.height());
        self.cursors.clear();
        for i in 0..self.num_agents {
            let linear = u64::from(i) * area / u64::from(self.num_agents);
            self.cursors
                .push(((linear % u64::from(width)) as u32, (linear / u64::from(width)) as u32));
        }
    }
}

impl Default for NarrowMulti {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for NarrowMulti {
    fn name(&self) -> &str {
        "narrowmulti"
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.state.seed(seed)
    }

    fn reset(&mut self, width: u32, height: u32, dist: &TileDistribution) {
        self.state.fill(width, height, dist);
        self.spread_cursors();
    }

    fn action_space(&self, _width: u32, _height: u32, num_tiles: u32) -> ActionSpace {
        ActionSpace::MultiDiscrete {
            nvec: (0..self.num_agents).map(|_| num_tiles + 1).collect(),
        }
    }

    fn observation_space(&self, width: u32, height: u32, num_tiles: u32) -> ObservationSpace {
        ObservationSpace {
            map: GridChannel {
                width,
                height,
                high: num_tiles.saturating_sub(1),
            },
            positions: Some(PositionChannel {
                count: self.num_agents,
                x_high: width.saturating_sub(1),
                y_high: height.saturating_sub(1),
            }),
            heatmap: None,
        }
    }

    fn observe(&self) -> RepObservation {
        RepObservation {
            map: self.state.grid.clone(),
            positions: self.cursors.clone(),
        }
    }

    fn update(&mut self, action: &Action) -> Edit {
        let fallback = self.cursors.first().copied().unwrap_or((0, 0));
        let mut cells_changed = 0;
        let mut attributed: Option<(u32, u32)> = None;
        for i in 0..self.cursors.len() {
            let (cx, cy) = self.cursors[i];
            let a = action.component(i);
            if a > 0 {
                let tile = self.state.clamp_tile(a - 1);
                if self.state.grid.set(cx, cy, tile) {
                    cells_changed += 1;
                    if attributed.is_none() {
                        attributed = Some((cx, cy));
                    }
                }
            }
        }
        let (w, h) = (self.state.grid.width(), self.state.grid.height());
        let step = self.num_agents;
        for cursor in self.cursors.iter_mut() {
            scan_advance(&mut cursor.0, &mut cursor.1, w, h, step);
        }
        let (x, y) = attributed.unwrap_or(fallback);
        Edit::changed(cells_changed, x, y)
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(agents) = update.num_agents {
            self.num_agents = agents.max(1);
            self.spread_cursors();
        }
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}
