//! The shared parameter-adjustment set.

/// A batch of optional parameter adjustments.
///
/// Every knob is optional; each consumer reads only the fields it
/// recognizes and never sees the rest, so one update can carry knobs for
/// the environment, the problem, and the editing strategy at once.
/// Unknown-to-a-consumer fields are ignored, not errors.
///
/// # Examples
///
/// ```
/// use carve_core::ParamUpdate;
///
/// let update = ParamUpdate {
///     change_percentage: Some(0.5),
///     wrap: Some(true),
///     ..ParamUpdate::default()
/// };
/// assert_eq!(update.change_percentage, Some(0.5));
/// assert_eq!(update.num_agents, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamUpdate {
    /// Fraction of the grid the agent may modify per episode, in `[0, 1]`.
    /// Consumed by the environment to derive the change budget.
    pub change_percentage: Option<f64>,
    /// New grid width, applied at the next reset. Consumed by problems.
    pub width: Option<u32>,
    /// New grid height, applied at the next reset. Consumed by problems.
    pub height: Option<u32>,
    /// Scan strategies: re-randomize the cursor after every step instead
    /// of sweeping in row-major order.
    pub random_start: Option<bool>,
    /// Cursor strategies: wrap at grid edges instead of clamping.
    pub wrap: Option<bool>,
    /// Cast strategies: half-extent of the plus/square/line stamp shapes.
    pub cast_radius: Option<u32>,
    /// Multi-cursor strategies: number of independent cursors.
    pub num_agents: Option<u32>,
    /// Path-based problems: required path-length improvement for the
    /// goal judgment.
    pub path_length_target: Option<f64>,
}
