//! Render modes and configuration-time errors.

use std::error::Error;
use std::fmt;

/// How [`render()`](crate::PcgEnv::render) delivers its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Display side effects only; `render()` returns nothing.
    Human,
    /// `render()` returns the composed RGB frame.
    RgbArray,
}

/// Errors detected while resolving an environment configuration.
///
/// These are the only errors the engine ever raises: once a
/// configuration is valid, every episode operation is a total function
/// of current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The problem name is not in the registry.
    UnknownProblem {
        /// The unresolvable name.
        name: String,
        /// Registered problem names.
        known: Vec<&'static str>,
    },
    /// The representation name is not in the registry.
    UnknownRepresentation {
        /// The unresolvable name.
        name: String,
        /// Registered representation names.
        known: Vec<&'static str>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProblem { name, known } => {
                write!(f, "unknown problem '{name}' (known: {})", known.join(", "))
            }
            Self::UnknownRepresentation { name, known } => {
                write!(
                    f,
                    "unknown representation '{name}' (known: {})",
                    known.join(", ")
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_known_names() {
        let err = ConfigError::UnknownProblem {
            name: "zeldo".to_string(),
            known: vec!["binary"],
        };
        let text = err.to_string();
        assert!(text.contains("zeldo"));
        assert!(text.contains("binary"));
    }
}
