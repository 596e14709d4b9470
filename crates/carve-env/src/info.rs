//! Per-step diagnostic information.

use carve_prob::Stats;

/// Diagnostics returned alongside every step result.
///
/// `debug` is the problem's own diagnostic map, surfaced verbatim; the
/// numeric fields are the engine's episode accounting. Nothing here is
/// consulted for control flow — callers decide episode end from the
/// step result's `terminated`/`truncated` flags alone.
#[derive(Clone, Debug, Default)]
pub struct StepInfo {
    /// Problem-specific diagnostics for this transition.
    pub debug: Stats,
    /// Steps taken this episode, including no-ops.
    pub iterations: u32,
    /// Cumulative cells changed this episode.
    pub changes: u32,
    /// Iteration budget for this episode.
    pub max_iterations: u32,
    /// Change budget for this episode.
    pub max_changes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_info_is_zeroed() {
        let info = StepInfo::default();
        assert!(info.debug.is_empty());
        assert_eq!(info.iterations, 0);
        assert_eq!(info.changes, 0);
        assert_eq!(info.max_iterations, 0);
        assert_eq!(info.max_changes, 0);
    }
}
