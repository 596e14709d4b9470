//! The binary (maze) problem: empty/solid tiles, connectivity and
//! path-length metrics.

use carve_core::{ParamUpdate, Rgb, StringMap, TileDistribution, TileId, TileVocab};
use carve_prob::metrics::{count_regions, longest_path};
use carve_prob::{range_reward, Problem, Stats};

const EMPTY: &str = "empty";
const SOLID: &str = "solid";

const REGIONS: &str = "regions";
const PATH_LENGTH: &str = "path-length";
const PATH_IMPROVEMENT: &str = "path-imp";

/// Carve one fully connected region with a long shortest path.
///
/// Two tile types (`empty`, `solid`; the border is solid). Stats are
/// the empty-region count and the longest shortest path over empty
/// cells. Reward pushes the region count toward exactly 1 (weighted
/// heavily) and pays any path-length increase; the episode is over
/// once the level is a single region whose path has grown by at least
/// `path_length_target` steps over the reset baseline.
#[derive(Clone, Debug)]
pub struct BinaryProblem {
    width: u32,
    height: u32,
    vocab: TileVocab,
    prob_empty: f64,
    path_target: f64,
    start_path_length: f64,
}

impl BinaryProblem {
    /// Default level width.
    pub const DEFAULT_WIDTH: u32 = 14;
    /// Default level height.
    pub const DEFAULT_HEIGHT: u32 = 14;
    /// Default required path-length improvement.
    pub const DEFAULT_PATH_TARGET: f64 = 20.0;

    /// Reward weight for the region-count metric.
    const REGION_WEIGHT: f64 = 5.0;
    /// Reward weight for the path-length metric.
    const PATH_WEIGHT: f64 = 1.0;

    /// Create the problem with default dimensions and target.
    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            vocab: TileVocab::new(vec![EMPTY, SOLID], TileId(1)),
            prob_empty: 0.5,
            path_target: Self::DEFAULT_PATH_TARGET,
            start_path_length: 0.0,
        }
    }

    fn path_improvement(&self, stats: &Stats) -> f64 {
        stats.get(PATH_LENGTH).copied().unwrap_or(0.0) - self.start_path_length
    }
}

impl Default for BinaryProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for BinaryProblem {
    fn name(&self) -> &str {
        "binary"
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile_vocab(&self) -> &TileVocab {
        &self.vocab
    }

    fn init_distribution(&self) -> TileDistribution {
        TileDistribution::new(vec![self.prob_empty, 1.0 - self.prob_empty])
    }

    fn reset(&mut self, init_stats: &Stats) {
        self.start_path_length = init_stats.get(PATH_LENGTH).copied().unwrap_or(0.0);
    }

    fn stats(&self, map: &StringMap) -> Stats {
        let mut stats = Stats::new();
        stats.insert(REGIONS, f64::from(count_regions(map, &[EMPTY])));
        stats.insert(PATH_LENGTH, f64::from(longest_path(map, &[EMPTY])));
        stats
    }

    fn reward(&self, new: &Stats, old: &Stats) -> f64 {
        let stat = |s: &Stats, key| s.get(key).copied().unwrap_or(0.0);
        let regions = range_reward(stat(new, REGIONS), stat(old, REGIONS), 1.0, 1.0);
        let path = range_reward(
            stat(new, PATH_LENGTH),
            stat(old, PATH_LENGTH),
            f64::INFINITY,
            f64::INFINITY,
        );
        regions * Self::REGION_WEIGHT + path * Self::PATH_WEIGHT
    }

    fn episode_over(&self, new: &Stats, _old: &Stats) -> bool {
        let regions = new.get(REGIONS).copied().unwrap_or(0.0);
        regions == 1.0 && self.path_improvement(new) >= self.path_target
    }

    fn debug_info(&self, new: &Stats, _old: &Stats) -> Stats {
        let mut info = Stats::new();
        info.insert(REGIONS, new.get(REGIONS).copied().unwrap_or(0.0));
        info.insert(PATH_LENGTH, new.get(PATH_LENGTH).copied().unwrap_or(0.0));
        info.insert(PATH_IMPROVEMENT, self.path_improvement(new));
        info
    }

    fn adjust_param(&mut self, update: &ParamUpdate) {
        if let Some(width) = update.width {
            self.width = width.max(1);
        }
        if let Some(height) = update.height {
            self.height = height.max(1);
        }
        if let Some(target) = update.path_length_target {
            if target.is_finite() && target >= 0.0 {
                self.path_target = target;
            }
        }
    }

    fn tile_color(&self, tile: &str) -> Rgb {
        match tile {
            EMPTY => Rgb(255, 255, 255),
            SOLID => Rgb(40, 40, 40),
            _ => Rgb(128, 128, 128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carve_core::TileGrid;

    /// Build the tile-name view from rows of '.' (empty) and '#' (solid).
    fn map_from(rows: &[&str]) -> StringMap {
        let vocab = TileVocab::new(vec![EMPTY, SOLID], TileId(1));
        let mut grid = TileGrid::new(rows[0].len() as u32, rows.len() as u32, TileId(0));
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.set(x as u32, y as u32, TileId(1));
                }
            }
        }
        StringMap::from_grid(&grid, &vocab)
    }

    #[test]
    fn stats_report_regions_and_path_length() {
        let prob = BinaryProblem::new();
        let stats = prob.stats(&map_from(&["..#..", "..#.."]));
        assert_eq!(stats[REGIONS], 2.0);
        assert_eq!(stats[PATH_LENGTH], 2.0);
    }

    #[test]
    fn merging_regions_pays_the_region_weight() {
        let prob = BinaryProblem::new();
        let old = prob.stats(&map_from(&["..#..", "..#.."]));
        let new = prob.stats(&map_from(&["..#..", "....."]));
        // Regions 2 -> 1 pays 5; the path also lengthens.
        let reward = prob.reward(&new, &old);
        assert!(reward >= 5.0, "reward {reward} should include the merge");
    }

    #[test]
    fn equal_snapshots_are_neutral_and_not_terminal_by_path() {
        let mut prob = BinaryProblem::new();
        let stats = prob.stats(&map_from(&["....", "####"]));
        prob.reset(&stats);
        assert_eq!(prob.reward(&stats, &stats), 0.0);
        // Single region but no improvement over the baseline.
        assert!(!prob.episode_over(&stats, &stats));
    }

    #[test]
    fn episode_ends_when_connected_and_long_enough() {
        let mut prob = BinaryProblem::new();
        prob.adjust_param(&ParamUpdate {
            path_length_target: Some(2.0),
            ..ParamUpdate::default()
        });
        let start = prob.stats(&map_from(&["..##", "####"]));
        prob.reset(&start);
        // Path grows from 1 to 4 (improvement 3 >= target 2), one region.
        let done = prob.stats(&map_from(&[".....", "####."]));
        assert!(prob.episode_over(&done, &start));
    }

    #[test]
    fn split_level_is_never_terminal() {
        let mut prob = BinaryProblem::new();
        prob.adjust_param(&ParamUpdate {
            path_length_target: Some(0.0),
            ..ParamUpdate::default()
        });
        let stats = prob.stats(&map_from(&["..#..", "..#.."]));
        prob.reset(&stats);
        assert!(!prob.episode_over(&stats, &stats));
    }

    #[test]
    fn debug_info_tracks_improvement_over_the_baseline() {
        let mut prob = BinaryProblem::new();
        let start = prob.stats(&map_from(&["..##"]));
        prob.reset(&start);
        let later = prob.stats(&map_from(&["...."]));
        let info = prob.debug_info(&later, &start);
        assert_eq!(info[PATH_LENGTH], 3.0);
        assert_eq!(info[PATH_IMPROVEMENT], 2.0);
    }

    #[test]
    fn dimension_knobs_apply_between_episodes() {
        let mut prob = BinaryProblem::new();
        prob.adjust_param(&ParamUpdate {
            width: Some(8),
            height: Some(6),
            ..ParamUpdate::default()
        });
        assert_eq!(prob.width(), 8);
        assert_eq!(prob.height(), 6);
    }

    #[test]
    fn init_distribution_matches_the_vocabulary() {
        let prob = BinaryProblem::new();
        let dist = prob.init_distribution();
        assert_eq!(dist.len(), prob.tile_vocab().len());
    }
}
