//! Narrow strategy: a row-major scan cursor, one placement per action.

use carve_core::{ParamUpdate, TileDistribution, TileGrid};
use smallvec::smallvec;

use crate::representation::{Edit, RepObservation, Representation};
use crate::spaces::{Action, ActionSpace, GridChannel, ObservationSpace, PositionChannel};
use crate::state::{scan_advance, RepState};

/// Scan-cursor strategy.
///
/// The cursor visits cells in row-major order, advancing on every call
/// whether or not the tile changed. Action 0 skips the cell; action
/// `t + 1` places tile `t` at the scan position. With the
/// `random_start` knob the cursor is re-randomized after each step
/// instead of sweeping.
#[derive(Clone, Debug)]
pub struct Narrow {
    state: RepState,
    x: u32,
    y: u32,
    random_start: bool,
}

impl Narrow {
    /// Create a narrow strategy with a sweeping cursor.
    pub fn new() -> Self {
        Self {
            state: RepState::new(),
            x: 0,
            y: 0,
            random_start: false,
        }
    }
}

impl Default for Narrow {
    fn default() -> Self {
        Self::new()
    }
}

impl Representation for Narrow {
    fn name(&self) -> &str {
        "narrow"
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
        // Slot 0 is the skip action.
        ActionSpace::Discrete { n: num_tiles + 1 }
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
        let a = action.scalar();
        let (ex, ey) = (self.x, self.y);
        let mut cells_changed = 0;
        if a > 0 {
            let tile = self.state.clamp_tile(a - 1);
            if self.state.grid.set(ex, ey, tile) {
                cells_changed = 1;
            }
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
    }

    fn grid(&self) -> &TileGrid {
        &self.state.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carve_core::TileId;

    fn ready(width: u32, height: u32) -> Narrow {
        let mut rep = Narrow::new();
        rep.seed(Some(42));
        rep.reset(width, height, &TileDistribution::new(vec![1.0, 0.0]));
        rep
    }

    #[test]
    fn action_space_has_a_skip_slot() {
        let rep = Narrow::new();
        assert_eq!(rep.action_space(8, 8, 3), ActionSpace::Discrete { n: 4 });
    }

    #[test]
    fn skip_action_is_a_noop_but_advances_the_cursor() {
        let mut rep = ready(4, 4);
        let before = rep.observe().positions[0];
        let edit = rep.update(&Action::discrete(0));
        assert!(edit.is_noop());
        assert_eq!((edit.x, edit.y), before);
        assert_ne!(rep.observe().positions[0], before);
    }

    #[test]
    fn placement_reports_the_edited_cell() {
        let mut rep = ready(4, 4);
        let (cx, cy) = rep.observe().positions[0];
        // Grid is all tile 0; placing tile 1 must change the cell.
        let edit = rep.update(&Action::discrete(2));
        assert_eq!(edit.cells_changed, 1);
        assert_eq!((edit.x, edit.y), (cx, cy));
        assert_eq!(rep.grid().get(cx, cy), TileId(1));
    }

    #[test]
    fn replacing_the_same_tile_is_a_noop() {
        let mut rep = ready(4, 4);
        // Grid is all tile 0; action 1 places tile 0 again.
        let edit = rep.update(&Action::discrete(1));
        assert!(edit.is_noop());
    }

    #[test]
    fn cursor_sweeps_the_whole_grid() {
        let mut rep = ready(3, 2);
        let mut visited = std::collections::HashSet::new();
        for _ in 0..6 {
            visited.insert(rep.observe().positions[0]);
            rep.update(&Action::discrete(0));
        }
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn out_of_range_tile_clamps_into_vocabulary() {
        let mut rep = ready(4, 4);
        let edit = rep.update(&Action::discrete(99));
        assert_eq!(edit.cells_changed, 1);
        assert_eq!(rep.grid().get(edit.x, edit.y), TileId(1));
    }

    #[test]
    fn random_start_rerandomizes_instead_of_sweeping() {
        let mut rep = ready(16, 16);
        rep.adjust_param(&ParamUpdate {
            random_start: Some(true),
            ..ParamUpdate::default()
        });
        // A sweep always advances exactly one cell; random jumps cannot
        // do that ten times in a row.
        let linear = |(x, y): (u32, u32)| y * 16 + x;
        let mut all_single_steps = true;
        for _ in 0..10 {
            let a = rep.observe().positions[0];
            rep.update(&Action::discrete(0));
            let b = rep.observe().positions[0];
            if (linear(b) + 256 - linear(a)) % 256 != 1 {
                all_single_steps = false;
            }
        }
        assert!(!all_single_steps);
    }
}
