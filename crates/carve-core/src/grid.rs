//! The mutable 2D tile grid and its name-keyed view.

use crate::tile::{TileId, TileVocab};

/// A row-major 2D array of tile indices.
///
/// Dimensions are fixed for the lifetime of an episode; the grid is
/// replaced wholesale at the next reset. Cell values are valid indices
/// into the active [`TileVocab`] — editing strategies clamp incoming
/// tile indices into range before writing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<TileId>,
}

impl TileGrid {
    /// Create a grid filled with one tile.
    ///
    /// Zero dimensions are clamped to 1 so a degenerate configuration
    /// yields a 1×1 grid rather than an unusable one.
    pub fn new(width: u32, height: u32, fill: TileId) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Tile at `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> TileId {
        self.cells[self.idx(x, y)]
    }

    /// Write `tile` at `(x, y)`; returns `true` if the cell value changed.
    ///
    /// Placing the tile a cell already holds is a no-op and reports
    /// `false`, which is how editing strategies detect no-change actions.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, tile: TileId) -> bool {
        let i = self.idx(x, y);
        let changed = self.cells[i] != tile;
        self.cells[i] = tile;
        changed
    }

    /// The raw cell slice in row-major order.
    pub fn cells(&self) -> &[TileId] {
        &self.cells
    }

    /// One row of cells.
    pub fn row(&self, y: u32) -> &[TileId] {
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }
}

/// A grid view keyed by tile name rather than tile index.
///
/// This is the only grid encoding problems ever evaluate: it decouples
/// level metrics from the representation-internal index assignment, so
/// the same problem logic holds under any vocabulary ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringMap {
    width: u32,
    height: u32,
    names: Vec<&'static str>,
}

impl StringMap {
    /// Translate a grid's cells into tile names through a vocabulary.
    pub fn from_grid(grid: &TileGrid, vocab: &TileVocab) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            names: grid.cells().iter().map(|&id| vocab.name(id)).collect(),
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile name at `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> &'static str {
        self.names[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Iterate over all cells as `(x, y, name)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &'static str)> + '_ {
        let width = self.width;
        self.names
            .iter()
            .enumerate()
            .map(move |(i, &name)| ((i as u32) % width, (i as u32) / width, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> TileVocab {
        TileVocab::new(vec!["empty", "solid"], TileId(1))
    }

    #[test]
    fn new_grid_is_uniformly_filled() {
        let grid = TileGrid::new(4, 3, TileId(1));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.cells().iter().all(|&t| t == TileId(1)));
    }

    #[test]
    fn zero_dimensions_are_clamped() {
        let grid = TileGrid::new(0, 0, TileId(0));
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn set_reports_change_only_on_new_value() {
        let mut grid = TileGrid::new(4, 4, TileId(0));
        assert!(grid.set(2, 1, TileId(1)));
        assert!(!grid.set(2, 1, TileId(1)));
        assert_eq!(grid.get(2, 1), TileId(1));
    }

    #[test]
    fn row_major_layout() {
        let mut grid = TileGrid::new(3, 2, TileId(0));
        grid.set(2, 0, TileId(1));
        grid.set(0, 1, TileId(1));
        assert_eq!(grid.row(0), &[TileId(0), TileId(0), TileId(1)]);
        assert_eq!(grid.row(1), &[TileId(1), TileId(0), TileId(0)]);
    }

    #[test]
    fn string_map_translates_through_vocab() {
        let mut grid = TileGrid::new(2, 2, TileId(0));
        grid.set(1, 1, TileId(1));
        let map = StringMap::from_grid(&grid, &vocab());
        assert_eq!(map.get(0, 0), "empty");
        assert_eq!(map.get(1, 1), "solid");
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
    }

    #[test]
    fn string_map_iter_is_row_major() {
        let mut grid = TileGrid::new(2, 2, TileId(0));
        grid.set(0, 1, TileId(1));
        let map = StringMap::from_grid(&grid, &vocab());
        let cells: Vec<_> = map.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, "empty"),
                (1, 0, "empty"),
                (0, 1, "solid"),
                (1, 1, "empty"),
            ]
        );
    }
}
