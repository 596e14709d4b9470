//! Narrow-cast strategy: a scan cursor that stamps neighborhood shapes.

use carve_core::{ParamUpdate, TileDistribution, TileGrid};
use smallvec::smallvec;

use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
use crate::stamp::{self, StampPattern};
use crate::state::{scan_advance, RepState};

/// Scan-cursor strategy with a stamp-pattern action dimension.
///
/// Component 0 picks the tile (0 = skip) exactly like
/// [`Narrow`](crate::Narrow); component 1 picks a [`StampPattern`]
/// applied around the scan position, so one action can touch several
/// cells. The edit is attributed to the stamp origin.
#[derive(Clone, Debug)]
pub struct NarrowCast {
    state: RepState,
    x: u32,
    y: u32,
    random_start: bool,
    cast_radius: u32,
}

impl NarrowCast {
    /// Create a narrow-cast strategy with radius-1 stamps.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
            x: 0,
            y: 0,
            random_start: false,
            cast_radius: 1,
        }
    }
}

impl Default for NarrowCast {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for NarrowCast {
    fn name(&self) -> &str {
        "narrowcast"
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.state.seed(seed)
    }

    fn reset(&mut self, width: u32, height: u32, dist: &TileDistribution) {
        self.state.fill(width, height, dist);
        let (x, y) = self.state.random_cell();
        self.x = x;
        self.y = y;
    }

    fn action_space(&self, _width: u32, _height: u32, num_tiles: u32) -> ActionSpace {
        ActionSpace::MultiDiscrete {
            nvec: [num_tiles + 1, StampPattern::COUNT].into_iter().collect(),
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
                count: 1,
                x_high: width.saturating_sub(1),
                y_high: height.saturating_sub(1),
            }),
            heatmap: None,
        }
    }

    fn observe(&self) -> RepObservation {
        RepObservation {
            map: self.state.grid.clone(),
            positions: smallvec![(self.x, self.y)],
        }
    }

    fn update(&mut self, action: &Action) -> Edit {
        let a = action.component(0);
        let pattern = StampPattern::from_index(action.component(1));
        let (ex, ey) = (self.x, self.y);
        let mut cells_changed = 0;
        if a > 0 {
            let tile = self.state.clamp_tile(a - 1);
            cells_changed =
                stamp::apply(&mut self.state.grid, ex, ey, tile, pattern, self.cast_radius);
        }
        if self.random_start {
            let (x, y) = self.state.random_cell();
            self.x = x;
            self.y = y;
        } else {
            let (w, h) = (self.state.grid.width(), self.state.grid.height());
            scan_advance(&mut self.x, &mut self.y, w, h, 1);
        }
        Edit::changed(cells_changed, ex, ey)
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(random_start) = update.random_start {
            self.random_start = random_start;
        }
        if let Some(radius) = update.cast_radius {
            self.cast_radius = radius.max(1);
        }
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}
