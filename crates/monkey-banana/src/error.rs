//! Typed errors for building a problem instance from external input.
//!
//! Search exhaustion is not an error: it is reported as a result with no
//! path. Only malformed initial states end up here.

use thiserror::Error;

use crate::problem::Location;

/// An initial state that cannot be turned into a valid [`crate::State`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A position name outside the closed location set.
    #[error("unknown location {value:?} for `{field}` (expected one of: door, corner, under_banana)")]
    UnknownLocation { field: &'static str, value: String },

    /// `onBox` was set while the monkey and the box are in different places.
    #[error("monkey at {monkey} cannot stand on the box at {box_position}")]
    OnBoxAwayFromBox {
        monkey: Location,
        box_position: Location,
    },

    /// The document is not valid JSON for an initial state.
    #[error("invalid initial state JSON: {0}")]
    Parse(String),
}
