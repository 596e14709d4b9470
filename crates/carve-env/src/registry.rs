//! Name-based strategy lookup.
//!
//! The registry is a pair of closed static tables mapping identifiers
//! to constructors, validated when an environment is built — an
//! unresolvable name is a [`ConfigError`] at construction time, never
//! a runtime surprise. Code that already holds strategy instances can
//! bypass the registry entirely via [`PcgEnv::new`].

use carve_prob::Problem;
use carve_probs::BinaryProblem;
use carve_rep::{Narrow, NarrowCast, NarrowMulti, Representation, Turtle, TurtleCast, Wide};

use crate::config::{ConfigError, RenderMode};
use crate::env::PcgEnv;

/// Constructor for a registered problem.
pub type ProblemCtor = fn() -> Box<dyn Problem>;

/// Constructor for a registered representation.
pub type RepCtor = fn() -> Box<dyn Representation>;

fn binary() -> Box<dyn Problem> {
    Box::new(BinaryProblem::new())
}

fn narrow() -> Box<dyn Representation> {
    Box::new(Narrow::new())
}

fn narrow_cast() -> Box<dyn Representation> {
    Box::new(NarrowCast::new())
}

fn narrow_multi() -> Box<dyn Representation> {
    Box::new(NarrowMulti::new())
}

fn wide() -> Box<dyn Representation> {
    Box::new(Wide::new())
}

fn turtle() -> Box<dyn Representation> {
    Box::new(Turtle::new())
}

fn turtle_cast() -> Box<dyn Representation> {
    Box::new(TurtleCast::new())
}

/// Registered problems.
const PROBLEMS: &[(&str, ProblemCtor)] = &[("binary", binary)];

/// Registered representations.
const REPRESENTATIONS: &[(&str, RepCtor)] = &[
    ("narrow", narrow),
    ("narrowcast", narrow_cast),
    ("narrowmulti", narrow_multi),
    ("wide", wide),
    ("turtle", turtle),
    ("turtlecast", turtle_cast),
];

/// Names of all registered problems, in registration order.
pub fn problem_names() -> Vec<&'static str> {
    PROBLEMS.iter().map(|(name, _)| *name).collect()
}

/// Names of all registered representations, in registration order.
pub fn representation_names() -> Vec<&'static str> {
    REPRESENTATIONS.iter().map(|(name, _)| *name).collect()
}

/// Construct a registered problem by name.
pub fn problem(name: &str) -> Result<Box<dyn Problem>, ConfigError> {
    PROBLEMS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| ConfigError::UnknownProblem {
            name: name.to_string(),
            known: problem_names(),
        })
}

/// Construct a registered representation by name.
pub fn representation(name: &str) -> Result<Box<dyn Representation>, ConfigError> {
    REPRESENTATIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| ConfigError::UnknownRepresentation {
            name: name.to_string(),
            known: representation_names(),
        })
}

/// Build an environment from registered strategy names.
///
/// # Errors
///
/// Returns a [`ConfigError`] naming the known identifiers when either
/// name does not resolve.
///
/// # Examples
///
/// ```
/// use carve_env::{registry, RenderMode};
///
/// let env = registry::make("binary", "turtle", RenderMode::RgbArray).unwrap();
/// assert_eq!(env.num_tiles(), 2);
///
/// assert!(registry::make("binary", "spiral", RenderMode::Human).is_err());
/// ```
pub fn make(
    problem_name: &str,
    representation_name: &str,
    render_mode: RenderMode,
) -> Result<PcgEnv, ConfigError> {
    let problem = problem(problem_name)?;
    let rep = representation(representation_name)?;
    Ok(PcgEnv::new(problem, rep, render_mode))
}
