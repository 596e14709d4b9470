//! Episode lifecycle integration tests: reset, stepping, budgets, and
//! the termination/truncation split.

use carve_core::ParamUpdate;
use carve_env::{registry, PcgEnv, RenderMode};
use carve_rep::{Action, Wide};
use carve_test_utils::MockProblem;

/// A 4x4 mock world driven by the wide strategy, so tests can place
/// tiles at exact cells.
fn wide_env(change_percentage: f64) -> PcgEnv {
    let mut env = PcgEnv::new(
        Box::new(MockProblem::sized(4, 4)),
        Box::new(Wide::new()),
        RenderMode::RgbArray,
    );
    env.adjust_param(&ParamUpdate {
        change_percentage: Some(change_percentage),
        ..ParamUpdate::default()
    });
    env.reset(Some(1234));
    env
}

#[test]
fn reset_zeroes_counters_and_heatmap() {
    let mut env = wide_env(0.5);
    env.step(&Action::multi([1, 1, 1]));
    env.step(&Action::multi([2, 2, 1]));
    assert!(env.changes() > 0);

    let (observation, info) = env.reset(None);
    assert_eq!(env.iteration(), 0);
    assert_eq!(env.changes(), 0);
    assert!(observation.heatmap.is_zeroed());
    assert_eq!(info.iterations, 0);
    assert_eq!(info.changes, 0);
}

#[test]
fn half_budget_on_a_4x4_grid() {
    // change_percentage = 0.5 on 16 cells: budget 8, iterations 8 * 16.
    let env = wide_env(0.5);
    assert_eq!(env.max_changes(), 8);
    assert_eq!(env.max_iterations(), 128);
}

#[test]
fn truncation_after_the_eighth_real_change() {
    let mut env = wide_env(0.5);
    // The mock fill is all-empty; placing solid at distinct cells is
    // one real change per step.
    for i in 0..7u32 {
        let result = env.step(&Action::multi([i % 4, i / 4, 1]));
        assert!(!result.truncated, "step {i} is inside the budget");
    }
    let result = env.step(&Action::multi([3, 1, 1]));
    assert_eq!(result.info.changes, 8);
    assert!(result.truncated, "eighth change exhausts the budget");
}

#[test]
fn replacing_the_present_tile_reports_no_change() {
    let mut env = wide_env(0.5);
    // Cell (0, 0) holds tile 0 after the all-empty fill.
    let result = env.step(&Action::multi([0, 0, 0]));
    assert_eq!(result.info.changes, 0);
    assert_eq!(result.reward, 0.0);
    assert!(result.observation.heatmap.is_zeroed());
    assert_eq!(result.info.iterations, 1);
}

#[test]
fn full_change_percentage_frees_the_whole_grid() {
    let mut env = wide_env(0.5);
    env.adjust_param(&ParamUpdate {
        change_percentage: Some(1.0),
        ..ParamUpdate::default()
    });
    assert_eq!(env.max_changes(), 16);
    assert_eq!(env.max_iterations(), 256);
}

#[test]
fn terminated_and_truncated_are_independent() {
    let mut env = PcgEnv::new(
        Box::new(MockProblem::sized(4, 4).with_target(3.0)),
        Box::new(Wide::new()),
        RenderMode::Human,
    );
    // Default 20% of 16 floors at 3 changes.
    env.reset(Some(7));
    assert_eq!(env.max_changes(), 3);

    env.step(&Action::multi([0, 0, 1]));
    let mid = env.step(&Action::multi([1, 0, 1]));
    assert!(!mid.terminated);
    assert!(!mid.truncated);

    // The third change reaches the goal and the budget on one step.
    let last = env.step(&Action::multi([2, 0, 1]));
    assert!(last.terminated, "target of 3 filled cells reached");
    assert!(last.truncated, "budget of 3 changes exhausted");
}

#[test]
fn stepping_past_truncation_is_still_well_defined() {
    let mut env = wide_env(0.5);
    for i in 0..16u32 {
        env.step(&Action::multi([i % 4, i / 4, 1]));
    }
    // Budget long gone; the engine keeps answering until reset.
    let result = env.step(&Action::multi([0, 0, 0]));
    assert!(result.truncated);
    assert_eq!(result.info.iterations, 17);

    // Reset is the only way back to a fresh episode.
    env.reset(None);
    assert_eq!(env.iteration(), 0);
    assert!(!env.step(&Action::multi([0, 0, 0])).truncated);
}

#[test]
fn space_getters_are_idempotent() {
    for rep_name in registry::representation_names() {
        let env = registry::make("binary", rep_name, RenderMode::RgbArray).unwrap();
        assert_eq!(
            env.action_space(),
            env.action_space(),
            "action space for {rep_name}"
        );
        assert_eq!(
            env.observation_space(),
            env.observation_space(),
            "observation space for {rep_name}"
        );
    }
}

#[test]
fn observation_space_heatmap_tracks_the_budget() {
    let mut env = registry::make("binary", "narrow", RenderMode::RgbArray).unwrap();
    let heatmap = env.observation_space().heatmap.unwrap();
    assert_eq!(heatmap.high, env.max_changes());

    env.adjust_param(&ParamUpdate {
        change_percentage: Some(1.0),
        ..ParamUpdate::default()
    });
    let heatmap = env.observation_space().heatmap.unwrap();
    assert_eq!(heatmap.high, env.max_changes());
}

#[test]
fn info_counters_match_the_engine_accessors() {
    let mut env = wide_env(0.5);
    let result = env.step(&Action::multi([1, 2, 1]));
    assert_eq!(result.info.iterations, env.iteration());
    assert_eq!(result.info.changes, env.changes());
    assert_eq!(result.info.max_changes, env.max_changes());
    assert_eq!(result.info.max_iterations, env.max_iterations());
}

#[test]
fn render_respects_the_mode() {
    let rgb = registry::make("binary", "turtle", RenderMode::RgbArray).unwrap();
    let frame = rgb.render().expect("rgb_array returns a frame");
    assert!(frame.width() > 0);

    let human = registry::make("binary", "turtle", RenderMode::Human).unwrap();
    assert!(human.render().is_none());
}
