//! Turtle-cast strategy: a turtle cursor that stamps neighborhood shapes.

use carve_core::{ParamUpdate, TileDistribution, TileGrid};
use smallvec::smallvec;

use crate::edge::EdgeBehavior;
use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
use crate::stamp::{self, StampPattern};
use crate::state::RepState;
use crate::turtle::DIRECTIONS;

/// Persistent-cursor strategy with stamp placements.
///
/// Actions 0–3 move the cursor as in [`Turtle`](crate::Turtle); action
/// `4 + t·P + p` stamps tile `t` with [`StampPattern`] `p` centered on
/// the cursor (`P` = [`StampPattern::COUNT`]). The edit is attributed
/// to the cursor cell.
#[derive(Clone, Debug)]
pub struct TurtleCast {
    state: RepState,
    x: u32,
    y: u32,
    edge: EdgeBehavior,
    cast_radius: u32,
}

impl TurtleCast {
    /// Create a turtle-cast strategy with clamping edges and radius-1 stamps.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
            x: 0,
            y: 0,
            edge: EdgeBehavior::Clamp,
            cast_radius: 1,
        }
    }
}

impl Default for TurtleCast {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for TurtleCast {
    fn name(&self) -> &str {
        "turtlecast"
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
            n: DIRECTIONS.len() as u32 + num_tiles * StampPattern::COUNT,
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
        let rel = a - moves;
        let tile = self.state.clamp_tile(rel / StampPattern::COUNT);
        let pattern = StampPattern::from_index(rel % StampPattern::COUNT);
        let cells_changed = stamp::apply(
            &mut self.state.grid,
            self.x,
            self.y,
            tile,
            pattern,
            self.cast_radius,
        );
        Edit::changed(cells_changed, self.x, self.y)
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(wrap) = update.wrap {
            self.edge = if wrap {
                EdgeBehavior::Wrap
            } else {
                EdgeBehavior::Clamp
            };
        }
        if let Some(radius) = update.cast_radius {
            self.cast_radius = radius.max(1);
        }
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}
