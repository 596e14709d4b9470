//! Multi-cell stamp patterns for the cast strategies.

use carve_core::{TileGrid, TileId};
use smallvec::{smallvec, SmallVec};

/// A small neighborhood shape stamped in one action.
///
/// The cast strategies add a pattern dimension to their action space:
/// one action places the same tile over every cell of the selected
/// pattern, clipped at grid edges. `radius` scales the plus, square,
/// row, and column shapes; `Single` is always one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StampPattern {
    /// The origin cell only.
    Single,
    /// Cardinal arms of length `radius` plus the origin.
    Plus,
    /// The full `(2·radius + 1)²` block.
    Square,
    /// A horizontal line of `2·radius + 1` cells.
    Row,
    /// A vertical line of `2·radius + 1` cells.
    Column,
}

impl StampPattern {
    /// Number of patterns, the size of the action-space dimension.
    pub const COUNT: u32 = 5;

    /// Decode an action component into a pattern.
    ///
    /// Out-of-range indices wrap, keeping the decode total.
    pub fn from_index(i: u32) -> Self {
        match i % Self::COUNT {
            0 => Self::Single,
            1 => Self::Plus,
            2 => Self::Square,
            3 => Self::Row,
            _ => Self::Column,
        }
    }

    /// Cell offsets covered by this pattern, origin included.
    pub fn offsets(self, radius: u32) -> SmallVec<[(i64, i64); 9]> {
        let r = i64::from(radius.max(1));
        match self {
            Self::Single => smallvec![(0, 0)],
            Self::Plus => {
                let mut out: SmallVec<[(i64, i64); 9]> = smallvec![(0, 0)];
                for d in 1..=r {
                    out.push((d, 0));
                    out.push((-d, 0));
                    out.push((0, d));
                    out.push((0, -d));
                }
                out
            }
            Self::Square => {
                let mut out = SmallVec::new();
                for dy in -r..=r {
                    for dx in -r..=r {
                        out.push((dx, dy));
                    }
                }
                out
            }
            Self::Row => (-r..=r).map(|d| (d, 0)).collect(),
            Self::Column => (-r..=r).map(|d| (0, d)).collect(),
        }
    }
}

/// Stamp `tile` over `pattern` centered at `(x, y)`, clipping cells
/// that fall outside the grid. Returns the number of cells changed.
pub(crate) fn apply(
    grid: &mut TileGrid,
    x: u32,
    y: u32,
    tile: TileId,
    pattern: StampPattern,
    radius: u32,
) -> u32 {
    let (w, h) = (i64::from(grid.width()), i64::from(grid.height()));
    let mut changed = 0;
    for (dx, dy) in pattern.offsets(radius) {
        let px = i64::from(x) + dx;
        let py = i64::from(y) + dy;
        if px < 0 || py < 0 || px >= w || py >= h {
            continue;
        }
        if grid.set(px as u32, py as u32, tile) {
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pattern_sizes_at_radius_one() {
        assert_eq!(StampPattern::Single.offsets(1).len(), 1);
        assert_eq!(StampPattern::Plus.offsets(1).len(), 5);
        assert_eq!(StampPattern::Square.offsets(1).len(), 9);
        assert_eq!(StampPattern::Row.offsets(1).len(), 3);
        assert_eq!(StampPattern::Column.offsets(1).len(), 3);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(StampPattern::from_index(0), StampPattern::Single);
        assert_eq!(StampPattern::from_index(4), StampPattern::Column);
        assert_eq!(StampPattern::from_index(5), StampPattern::Single);
        assert_eq!(StampPattern::from_index(7), StampPattern::Square);
    }

    #[test]
    fn apply_clips_at_the_corner() {
        let mut grid = TileGrid::new(4, 4, TileId(0));
        let changed = apply(&mut grid, 0, 0, TileId(1), StampPattern::Square, 1);
        // Only the 2x2 in-bounds quadrant of the 3x3 block lands.
        assert_eq!(changed, 4);
        assert_eq!(grid.get(0, 0), TileId(1));
        assert_eq!(grid.get(1, 1), TileId(1));
        assert_eq!(grid.get(2, 2), TileId(0));
    }

    #[test]
    fn apply_counts_only_real_changes() {
        let mut grid = TileGrid::new(5, 5, TileId(0));
        grid.set(2, 2, TileId(1));
        let changed = apply(&mut grid, 2, 2, TileId(1), StampPattern::Plus, 1);
        // Center already holds the tile; only the four arms change.
        assert_eq!(changed, 4);
    }

    proptest! {
        #[test]
        fn offsets_stay_within_radius(index in 0u32..16, radius in 1u32..4) {
            let pattern = StampPattern::from_index(index);
            let r = i64::from(radius);
            for (dx, dy) in pattern.offsets(radius) {
                prop_assert!(dx.abs() <= r && dy.abs() <= r);
            }
        }
    }
}
