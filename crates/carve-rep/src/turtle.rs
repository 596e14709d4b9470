//! Turtle strategy: a persistent cursor moved in cardinal steps.

use carve_core::{ParamUpdate, TileDistribution, TileGrid};
use smallvec::smallvec;

use crate::edge::EdgeBehavior;
use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
use crate::state::RepState;

/// Cursor movement deltas: up, down, left, right.
pub(crate) const DIRECTIONS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Persistent-cursor strategy.
///
/// Actions 0–3 move the cursor one cell up/down/left/right; action
/// `4 + t` places tile `t` at the cursor without moving it. The cursor
/// clamps at grid edges by default and wraps when the `wrap` knob is
/// set. Moves are no-ops from the grid's point of view.
#[derive(Clone, Debug)]
pub struct Turtle {
    state: RepState,
    x: u32,
    y: u32,
    edge: EdgeBehavior,
}

impl Turtle {
    /// Create a turtle strategy with clamping edges.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
            x: 0,
            y: 0,
            edge: EdgeBehavior::Clamp,
        }
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for Turtle {
    fn name(&self) -> &str {
        "turtle"
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
        ActionSpace::Discrete {
            n: DIRECTIONS.len() as u32 + num_tiles,
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
        let moves = DIRECTIONS.len() as u32;
        let a = action.scalar();
        if a < moves {
            let (dx, dy) = DIRECTIONS[a as usize];
            self.x = self.edge.resolve(i64::from(self.x) + dx, self.state.grid.width());
            self.y = self
                .edge
                .resolve(i64::from(self.y) + dy, self.state.grid.height());
            return Edit::noop(self.x, self.y);
        }
        let tile = self.state.clamp_tile(a - moves);
        let changed = self.state.grid.set(self.x, self.y, tile);
        Edit::changed(u32::from(changed), self.x, self.y)
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(wrap) = update.wrap {
            self.edge = if wrap {
                EdgeBehavior::Wrap
            } else {
                EdgeBehavior::Clamp
            };
        }
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}
