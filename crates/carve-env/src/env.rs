//! The episode engine.
//!
//! [`PcgEnv`] is the user-facing environment: it composes one problem
//! and one editing strategy, drives reset/step, enforces the change
//! and iteration budgets, and assembles the observation returned to
//! the caller each step.
//!
//! # Ownership model
//!
//! `PcgEnv` is [`Send`] (can be moved between threads) but all mutating
//! methods take `&mut self` — concurrent use of one instance must be
//! serialized by the caller. Independent instances share nothing and
//! run in parallel freely.

use carve_core::{ParamUpdate, PixelBuffer, StringMap, TileId};
use carve_prob::{Problem, Stats};
use carve_rep::{Action, ActionSpace, ObservationSpace, Representation};
use smallvec::SmallVec;

use crate::config::RenderMode;
use crate::heatmap::Heatmap;
use crate::info::StepInfo;
use crate::render;

// Compile-time assertion: PcgEnv is Send (strategies are boxed Send
// trait objects). Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<PcgEnv>();
    }
};

/// Fraction of the grid the agent may modify per episode by default.
const DEFAULT_CHANGE_PERCENTAGE: f64 = 0.2;

// ── Observation / StepResult ────────────────────────────────────

/// The structured observation handed to the caller.
///
/// `map` and `positions` come from the editing strategy's snapshot;
/// `heatmap` is the engine's per-cell edit-count channel, bounded by
/// the episode change budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Current grid contents.
    pub map: carve_core::TileGrid,
    /// Cursor positions, empty for position-free strategies.
    pub positions: SmallVec<[(u32, u32); 4]>,
    /// Per-cell edit counts, values in `[0, max_changes]`.
    pub heatmap: Heatmap,
}

/// Result of one [`PcgEnv::step()`] call.
///
/// `terminated` (the problem judged the goal satisfied) and
/// `truncated` (a budget ran out) are independent — both can be true
/// on the same step. Callers end the episode on `terminated ||
/// truncated`.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Observation after applying the action.
    pub observation: Observation,
    /// Scalar reward for this transition.
    pub reward: f64,
    /// Goal-completion judgment from the problem.
    pub terminated: bool,
    /// Budget exhaustion: `changes >= max_changes` or
    /// `iteration >= max_iterations`.
    pub truncated: bool,
    /// Problem diagnostics plus episode accounting.
    pub info: StepInfo,
}

// ── PcgEnv ──────────────────────────────────────────────────────

/// A procedural-level-design episode engine.
///
/// Construction takes already-resolved strategy instances; name-based
/// lookup lives in [`registry`](crate::registry). A new environment is
/// born ready — construction seeds from process entropy and runs an
/// initial reset — but callers normally call
/// [`reset()`](Self::reset) with a recorded seed before training on it.
///
/// # Example
///
/// ```
/// use carve_env::{PcgEnv, RenderMode};
/// use carve_probs::BinaryProblem;
/// use carve_rep::{Action, Wide};
///
/// let mut env = PcgEnv::new(
///     Box::new(BinaryProblem::new()),
///     Box::new(Wide::new()),
///     RenderMode::RgbArray,
/// );
/// let (observation, _info) = env.reset(Some(42));
/// assert!(observation.heatmap.is_zeroed());
///
/// let result = env.step(&Action::multi([3, 3, 0]));
/// assert_eq!(result.info.iterations, 1);
/// ```
pub struct PcgEnv {
    problem: Box<dyn Problem>,
    rep: Box<dyn Representation>,
    render_mode: RenderMode,
    stats: Stats,
    iteration: u32,
    changes: u32,
    change_percentage: f64,
    max_changes: u32,
    max_iterations: u32,
    heatmap: Heatmap,
    action_space: ActionSpace,
    observation_space: ObservationSpace,
}

impl PcgEnv {
    /// Compose a problem and an editing strategy into an environment.
    pub fn new(
        problem: Box<dyn Problem>,
        rep: Box<dyn Representation>,
        render_mode: RenderMode,
    ) -> Self {
        let mut env = Self {
            problem,
            rep,
            render_mode,
            stats: Stats::new(),
            iteration: 0,
            changes: 0,
            change_percentage: DEFAULT_CHANGE_PERCENTAGE,
            max_changes: 1,
            max_iterations: 1,
            heatmap: Heatmap::new(1, 1),
            action_space: ActionSpace::Discrete { n: 1 },
            observation_space: ObservationSpace {
                map: carve_rep::GridChannel {
                    width: 1,
                    height: 1,
                    high: 0,
                },
                positions: None,
                heatmap: None,
            },
        };
        env.seed(None);
        env.reset_episode();
        env
    }

    /// Reseed both strategies; returns the effective seed.
    ///
    /// The editing strategy resolves `None` to a fresh entropy seed and
    /// the problem is seeded with the same effective value, so one
    /// recorded number reproduces the whole episode.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let effective = self.rep.seed(seed);
        self.problem.seed(effective);
        effective
    }

    /// Start a new episode; the only way out of a terminated or
    /// truncated one.
    ///
    /// Reseeds if `seed` is given, zeroes the counters and heatmap,
    /// has the strategy refill the grid from the problem's initial
    /// distribution, and gives the problem its baseline stats. The
    /// returned info is a default — diagnostics start with the first
    /// step.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        if seed.is_some() {
            self.seed(seed);
        }
        self.reset_episode();
        (self.observation(), StepInfo::default())
    }

    fn reset_episode(&mut self) {
        self.changes = 0;
        self.iteration = 0;
        self.derive_budgets();
        let (width, height) = (self.problem.width(), self.problem.height());
        self.rep
            .reset(width, height, &self.problem.init_distribution());
        self.stats = self.problem.stats(&self.string_map());
        self.problem.reset(&self.stats);
        self.heatmap = Heatmap::new(width, height);
        self.derive_spaces();
    }

    /// Advance the episode by one action.
    ///
    /// The iteration counter always advances, no-op or not. Stats are
    /// recomputed **only** when the edit changed at least one cell: on
    /// a no-op the problem sees the same snapshot as both `new` and
    /// `old`, which by the [`Problem`] contract yields a neutral
    /// reward and no termination.
    pub fn step(&mut self, action: &Action) -> StepResult {
        self.iteration += 1;
        let old_stats = self.stats.clone();
        let edit = self.rep.update(action);
        if edit.cells_changed > 0 {
            self.changes = self.changes.saturating_add(edit.cells_changed);
            self.heatmap.bump(edit.x, edit.y, self.max_changes);
            self.stats = self.problem.stats(&self.string_map());
        }
        let reward = self.problem.reward(&self.stats, &old_stats);
        let terminated = self.problem.episode_over(&self.stats, &old_stats);
        let truncated =
            self.changes >= self.max_changes || self.iteration >= self.max_iterations;
        let info = StepInfo {
            debug: self.problem.debug_info(&self.stats, &old_stats),
            iterations: self.iteration,
            changes: self.changes,
            max_iterations: self.max_iterations,
            max_changes: self.max_changes,
        };
        StepResult {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
            info,
        }
    }

    /// Apply parameter adjustments to the engine and both strategies.
    ///
    /// `change_percentage` is clamped to `[0, 1]` with a floor of one
    /// changeable cell. Budgets and space shapes are re-derived after
    /// the strategies have seen the update, since they may depend on
    /// parameters (such as dimensions) the strategies just received.
    pub fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(pct) = update.change_percentage {
            if pct.is_finite() {
                self.change_percentage = pct.clamp(0.0, 1.0);
            }
        }
        self.problem.adjust_param(update);
        self.rep.adjust_param(update);
        self.derive_budgets();
        self.derive_spaces();
    }

    /// Render the current level.
    ///
    /// `RgbArray` returns the composed frame (problem base plus
    /// strategy overlay); `Human` returns `None` — display side
    /// effects are the caller's concern.
    pub fn render(&self) -> Option<PixelBuffer> {
        match self.render_mode {
            RenderMode::RgbArray => {
                Some(render::compose(self.problem.as_ref(), self.rep.as_ref()))
            }
            RenderMode::Human => None,
        }
    }

    /// The current observation without advancing the episode.
    pub fn observation(&self) -> Observation {
        let rep_obs = self.rep.observe();
        Observation {
            map: rep_obs.map,
            positions: rep_obs.positions,
            heatmap: self.heatmap.clone(),
        }
    }

    fn derive_budgets(&mut self) {
        let area = u64::from(self.problem.width()) * u64::from(self.problem.height());
        let budget = (self.change_percentage * area as f64) as u64;
        self.max_changes = budget.clamp(1, u64::from(u32::MAX)) as u32;
        self.max_iterations = u64::from(self.max_changes)
            .saturating_mul(area)
            .min(u64::from(u32::MAX)) as u32;
    }

    fn derive_spaces(&mut self) {
        let (width, height) = (self.problem.width(), self.problem.height());
        let num_tiles = self.num_tiles();
        self.action_space = self.rep.action_space(width, height, num_tiles);
        self.observation_space = self
            .rep
            .observation_space(width, height, num_tiles)
            .with_heatmap(self.max_changes);
    }

    fn string_map(&self) -> StringMap {
        StringMap::from_grid(self.rep.grid(), self.problem.tile_vocab())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The action shape the composed strategy accepts.
    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    /// The observation shape, heatmap channel included.
    pub fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    /// Number of tile types in the active vocabulary.
    pub fn num_tiles(&self) -> u32 {
        self.problem.tile_vocab().len()
    }

    /// The border (padding) tile of the active vocabulary.
    pub fn border_tile(&self) -> TileId {
        self.problem.tile_vocab().border()
    }

    /// Steps taken this episode.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Cumulative cells changed this episode.
    pub fn changes(&self) -> u32 {
        self.changes
    }

    /// This episode's change budget.
    pub fn max_changes(&self) -> u32 {
        self.max_changes
    }

    /// This episode's iteration budget.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The per-cell edit heatmap.
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// The configured render mode.
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }
}

impl std::fmt::Debug for PcgEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcgEnv")
            .field("problem", &self.problem.name())
            .field("representation", &self.rep.name())
            .field("iteration", &self.iteration)
            .field("changes", &self.changes)
            .field("max_changes", &self.max_changes)
            .field("max_iterations", &self.max_iterations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carve_rep::Edit;
    use carve_test_utils::{MockProblem, ScriptedRep};

    fn scripted_env(width: u32, height: u32, script: Vec<Edit>) -> PcgEnv {
        let mut env = PcgEnv::new(
            Box::new(MockProblem::sized(width, height)),
            Box::new(ScriptedRep::new(script)),
            RenderMode::RgbArray,
        );
        env.reset(Some(0));
        env
    }

    #[test]
    fn construction_leaves_the_env_ready() {
        let env = PcgEnv::new(
            Box::new(MockProblem::sized(4, 4)),
            Box::new(ScriptedRep::new(vec![])),
            RenderMode::Human,
        );
        // Default 20% of 16 cells floors at 3; iterations scale by area.
        assert_eq!(env.max_changes(), 3);
        assert_eq!(env.max_iterations(), 48);
        assert_eq!(env.iteration(), 0);
    }

    #[test]
    fn noop_steps_advance_iteration_only() {
        let mut env = scripted_env(4, 4, vec![]);
        let result = env.step(&Action::discrete(0));
        assert_eq!(result.info.iterations, 1);
        assert_eq!(result.info.changes, 0);
        assert!(result.observation.heatmap.is_zeroed());
        assert_eq!(result.reward, 0.0);
        assert!(!result.terminated);
    }

    #[test]
    fn changing_steps_accumulate_changes_and_heat() {
        let mut env = scripted_env(
            4,
            4,
            vec![Edit::changed(1, 2, 3), Edit::changed(1, 2, 3)],
        );
        env.step(&Action::discrete(0));
        let result = env.step(&Action::discrete(0));
        assert_eq!(result.info.changes, 2);
        assert_eq!(result.observation.heatmap.get(2, 3), 2);
        assert_eq!(result.observation.heatmap.get(0, 0), 0);
    }

    #[test]
    fn heatmap_bumps_once_per_step_for_multi_cell_edits() {
        let mut env = scripted_env(4, 4, vec![Edit::changed(3, 1, 1)]);
        let result = env.step(&Action::discrete(0));
        assert_eq!(result.info.changes, 3);
        assert_eq!(result.observation.heatmap.get(1, 1), 1);
    }

    #[test]
    fn debug_info_carries_problem_diagnostics() {
        let mut env = scripted_env(4, 4, vec![Edit::changed(1, 0, 0)]);
        let result = env.step(&Action::discrete(0));
        assert_eq!(result.info.debug["filled"], 1.0);
        assert_eq!(result.reward, 1.0);
    }

    #[test]
    fn adjust_param_clamps_change_percentage() {
        let mut env = scripted_env(4, 4, vec![]);
        env.adjust_param(&ParamUpdate {
            change_percentage: Some(7.5),
            ..ParamUpdate::default()
        });
        assert_eq!(env.max_changes(), 16);
        env.adjust_param(&ParamUpdate {
            change_percentage: Some(-1.0),
            ..ParamUpdate::default()
        });
        // Clamped to 0, floored at one changeable cell.
        assert_eq!(env.max_changes(), 1);
    }

    #[test]
    fn nan_change_percentage_is_ignored() {
        let mut env = scripted_env(4, 4, vec![]);
        let before = env.max_changes();
        env.adjust_param(&ParamUpdate {
            change_percentage: Some(f64::NAN),
            ..ParamUpdate::default()
        });
        assert_eq!(env.max_changes(), before);
    }

    #[test]
    fn debug_names_both_strategies() {
        let env = scripted_env(4, 4, vec![]);
        let text = format!("{env:?}");
        assert!(text.contains("mock"));
        assert!(text.contains("scripted"));
    }
}
