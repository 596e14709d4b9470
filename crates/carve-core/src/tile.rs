//! Tile identifiers, the tile vocabulary, and initial-fill distributions.

use std::fmt;

/// Index of a tile type within the active [`TileVocab`].
///
/// Grid cells store `TileId`s; problems never see them — grids are
/// translated to tile names (see [`StringMap`](crate::grid::StringMap))
/// before evaluation, so problem logic stays decoupled from the
/// representation-internal indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

impl TileId {
    /// The vocabulary slot this id addresses.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for TileId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Ordered tile-type vocabulary with a designated border tile.
///
/// The vocabulary is immutable for the lifetime of an episode: every
/// grid cell holds a valid index into it, and the border tile pads the
/// outside of the level in renders and observations.
///
/// # Examples
///
/// ```
/// use carve_core::{TileId, TileVocab};
///
/// let vocab = TileVocab::new(vec!["empty", "solid"], TileId(1));
/// assert_eq!(vocab.len(), 2);
/// assert_eq!(vocab.name(TileId(0)), "empty");
/// assert_eq!(vocab.index_of("solid"), Some(TileId(1)));
/// assert_eq!(vocab.border(), TileId(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVocab {
    names: Vec<&'static str>,
    border: TileId,
}

impl TileVocab {
    /// Maximum vocabulary size: cell values are `u8` indices.
    pub const MAX_TILES: usize = 256;

    /// Create a vocabulary from an ordered name list and a border tile.
    ///
    /// Degenerate inputs are clamped rather than rejected: a name list
    /// longer than [`MAX_TILES`](Self::MAX_TILES) is truncated, and an
    /// out-of-range border id is clamped to the last slot.
    pub fn new(mut names: Vec<&'static str>, border: TileId) -> Self {
        names.truncate(Self::MAX_TILES);
        let last = names.len().saturating_sub(1) as u8;
        let border = TileId(border.0.min(last));
        Self { names, border }
    }

    /// Number of tile types.
    pub fn len(&self) -> u32 {
        self.names.len() as u32
    }

    /// Whether the vocabulary has no tile types.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The ordered tile names.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Name of a tile id.
    ///
    /// Ids held by grids are valid by construction (editing strategies
    /// clamp into the vocabulary range), so lookup is a direct index.
    pub fn name(&self, id: TileId) -> &'static str {
        self.names[id.index()]
    }

    /// Look a tile name up by identifier.
    pub fn index_of(&self, name: &str) -> Option<TileId> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| TileId(i as u8))
    }

    /// The designated border (padding) tile.
    pub fn border(&self) -> TileId {
        self.border
    }

    /// Name of the border tile.
    pub fn border_name(&self) -> &'static str {
        self.name(self.border)
    }
}

/// Per-tile weights for the initial random fill.
///
/// Weights need not be normalized; sampling scans the cumulative sum.
/// An all-zero (or empty) weight set falls back to a uniform pick so a
/// degenerate distribution can never wedge an episode reset.
#[derive(Clone, Debug, PartialEq)]
pub struct TileDistribution {
    weights: Vec<f64>,
}

impl TileDistribution {
    /// Create a distribution from raw per-tile weights.
    ///
    /// Negative or non-finite weights are treated as zero.
    pub fn new(weights: Vec<f64>) -> Self {
        let weights = weights
            .into_iter()
            .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
            .collect();
        Self { weights }
    }

    /// Uniform distribution over `num_tiles` tile types.
    pub fn uniform(num_tiles: u32) -> Self {
        Self {
            weights: vec![1.0; num_tiles.max(1) as usize],
        }
    }

    /// Number of tile types covered by the distribution.
    pub fn len(&self) -> u32 {
        self.weights.len() as u32
    }

    /// Whether the distribution covers no tile types.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of one tile, or 0 outside the covered range.
    pub fn weight(&self, id: TileId) -> f64 {
        self.weights.get(id.index()).copied().unwrap_or(0.0)
    }

    /// Sample a tile from a uniform draw `unit` in `[0, 1)`.
    ///
    /// Taking the draw as a parameter keeps this crate free of an RNG
    /// dependency; callers hand in one `f64` per sample from their own
    /// seeded generator. Cumulative-weight scan — avoids the
    /// `rand_distr` dependency.
    pub fn sample(&self, unit: f64) -> TileId {
        let unit = unit.clamp(0.0, 1.0 - f64::EPSILON);
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            // Uniform fallback for degenerate weights.
            let n = self.weights.len().max(1);
            return TileId((unit * n as f64) as u8);
        }
        let mut acc = 0.0;
        let target = unit * total;
        for (i, w) in self.weights.iter().enumerate() {
            acc += w;
            if target < acc {
                return TileId(i as u8);
            }
        }
        TileId(self.weights.len().saturating_sub(1) as u8)
    }
}
