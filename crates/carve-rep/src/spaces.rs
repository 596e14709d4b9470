//! Action and observation space descriptors.
//!
//! Space descriptors are the shape contract between a strategy and the
//! caller driving the environment: they are pure functions of
//! `(width, height, num_tiles)` and re-derivable at any time, so two
//! calls with unchanged parameters always yield identical values.

use rand::Rng;
use smallvec::SmallVec;

/// Shape of the actions a strategy accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionSpace {
    /// A single integer in `[0, n)`.
    Discrete {
        /// Number of distinct actions.
        n: u32,
    },
    /// A vector of integers, component `i` in `[0, nvec[i])`.
    MultiDiscrete {
        /// Per-component exclusive upper bounds.
        nvec: SmallVec<[u32; 4]>,
    },
}

impl ActionSpace {
    /// Whether `action` lies within this space.
    pub fn contains(&self, action: &Action) -> bool {
        match (self, action) {
            (Self::Discrete { n }, Action::Discrete(v)) => v < n,
            (Self::MultiDiscrete { nvec }, Action::Multi(vals)) => {
                vals.len() == nvec.len() && vals.iter().zip(nvec.iter()).all(|(v, n)| v < n)
            }
            _ => false,
        }
    }

    /// Draw a uniformly random action from this space.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        match self {
            Self::Discrete { n } => Action::Discrete(rng.random_range(0..(*n).max(1))),
            Self::MultiDiscrete { nvec } => Action::Multi(
                nvec.iter()
                    .map(|&n| rng.random_range(0..n.max(1)))
                    .collect(),
            ),
        }
    }
}

/// One agent action.
///
/// Strategies resolve out-of-range components by deterministic
/// clamping (never a panic, never a corrupted grid), and a missing
/// component reads as 0 — validation, if wanted, happens upstream via
/// [`ActionSpace::contains`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A single integer choice.
    Discrete(u32),
    /// A vector of integer choices.
    Multi(SmallVec<[u32; 4]>),
}

impl Action {
    /// A discrete action.
    pub fn discrete(v: u32) -> Self {
        Self::Discrete(v)
    }

    /// A multi-component action.
    pub fn multi<I: IntoIterator<Item = u32>>(vals: I) -> Self {
        Self::Multi(vals.into_iter().collect())
    }

    /// The scalar value: the discrete choice, or the first component of
    /// a multi action (0 when empty).
    pub fn scalar(&self) -> u32 {
        match self {
            Self::Discrete(v) => *v,
            Self::Multi(vals) => vals.first().copied().unwrap_or(0),
        }
    }

    /// Component `i` of a multi action; missing components read as 0.
    pub fn component(&self, i: usize) -> u32 {
        match self {
            Self::Discrete(v) => {
                if i == 0 {
                    *v
                } else {
                    0
                }
            }
            Self::Multi(vals) => vals.get(i).copied().unwrap_or(0),
        }
    }
}

/// Shape of one grid-valued observation channel: `height × width`
/// integers in `[0, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridChannel {
    /// Channel width in cells.
    pub width: u32,
    /// Channel height in cells.
    pub height: u32,
    /// Inclusive upper bound on cell values.
    pub high: u32,
}

/// Shape of the cursor-position observation channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionChannel {
    /// Number of cursors reported.
    pub count: u32,
    /// Inclusive upper bound on the x coordinate.
    pub x_high: u32,
    /// Inclusive upper bound on the y coordinate.
    pub y_high: u32,
}

/// Shape contract for the full observation.
///
/// Strategies fill in the `map` channel and, for cursor-based
/// strategies, `positions`. The `heatmap` channel is attached by the
/// environment (via [`with_heatmap`](Self::with_heatmap)) because only
/// the environment knows the episode change budget that bounds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationSpace {
    /// The tile-grid channel, values in `[0, num_tiles)`.
    pub map: GridChannel,
    /// Cursor positions, absent for position-free strategies.
    pub positions: Option<PositionChannel>,
    /// Per-cell edit counts, values in `[0, max_changes]`.
    pub heatmap: Option<GridChannel>,
}

impl ObservationSpace {
    /// Attach the heatmap channel, bounded by the change budget.
    pub fn with_heatmap(mut self, max_changes: u32) -> Self {
        self.heatmap = Some(GridChannel {
            width: self.map.width,
            height: self.map.height,
            high: max_changes,
        });
        self
    }
}
