//! Problem representation: locations, states, actions and the initial-state
//! document.
//!
//! `State` and `Action` only serialize. Input goes through `ProblemConfig`,
//! which validates before producing a `State`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A named place in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Door,
    Corner,
    UnderBanana,
}

impl Location {
    /// Every location, in the order actions are enumerated.
    ///
    /// The depth-first solver returns the first plan this order leads to:
    /// with the corner and the banana ahead of the door it never detours the
    /// box through the doorway.
    pub const ALL: [Location; 3] = [Location::Corner, Location::UnderBanana, Location::Door];

    pub fn as_str(self) -> &'static str {
        match self {
            Location::Door => "door",
            Location::Corner => "corner",
            Location::UnderBanana => "under_banana",
        }
    }

    /// Look up a location by its snake_case name
    pub fn from_name(name: &str) -> Option<Location> {
        Location::ALL.into_iter().find(|loc| loc.as_str() == name)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete snapshot of the room.
///
/// Equality covers all four fields; the solver relies on this for cycle
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(rename = "monkey")]
    pub monkey_position: Location,
    #[serde(rename = "box")]
    pub box_position: Location,
    pub on_box: bool,
    pub has_banana: bool,
}

impl State {
    pub fn new(
        monkey_position: Location,
        box_position: Location,
        on_box: bool,
        has_banana: bool,
    ) -> Self {
        Self {
            monkey_position,
            box_position,
            on_box,
            has_banana,
        }
    }

    /// Monkey at the door, box in the corner, nothing climbed or grabbed.
    pub fn initial() -> Self {
        Self::new(Location::Door, Location::Corner, false, false)
    }

    pub fn is_goal(&self) -> bool {
        self.has_banana
    }

    /// Monkey and box share a location
    pub fn monkey_at_box(&self) -> bool {
        self.monkey_position == self.box_position
    }

    /// The monkey can only be on the box where the box is.
    pub fn is_consistent(&self) -> bool {
        !self.on_box || self.monkey_at_box()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

/// One operation the monkey can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "to", rename_all = "snake_case")]
pub enum Action {
    GoTo(Location),
    PushBoxTo(Location),
    ClimbBox,
    GrabBanana,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GoTo(loc) => write!(f, "go_to_{loc}"),
            Action::PushBoxTo(loc) => write!(f, "push_box_to_{loc}"),
            Action::ClimbBox => f.write_str("climb_box"),
            Action::GrabBanana => f.write_str("grab_banana"),
        }
    }
}

/// Initial-state document accepted by the `solve` subcommand.
///
/// Positions are kept as raw strings so that an unknown name can be reported
/// with the field it came from. Unknown keys are rejected so that a misspelled
/// flag does not silently fall back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemConfig {
    pub monkey: String,
    #[serde(rename = "box")]
    pub box_position: String,
    #[serde(default)]
    pub on_box: bool,
    #[serde(default)]
    pub has_banana: bool,
}

impl ProblemConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Validate the document into a [`State`].
    pub fn to_state(&self) -> Result<State, ConfigurationError> {
        let monkey = parse_location("monkey", &self.monkey)?;
        let box_position = parse_location("box", &self.box_position)?;

        let state = State::new(monkey, box_position, self.on_box, self.has_banana);
        if !state.is_consistent() {
            return Err(ConfigurationError::OnBoxAwayFromBox {
                monkey,
                box_position,
            });
        }
        Ok(state)
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        State::initial().into()
    }
}

impl From<State> for ProblemConfig {
    fn from(state: State) -> Self {
        Self {
            monkey: state.monkey_position.to_string(),
            box_position: state.box_position.to_string(),
            on_box: state.on_box,
            has_banana: state.has_banana,
        }
    }
}

fn parse_location(field: &'static str, value: &str) -> Result<Location, ConfigurationError> {
    Location::from_name(value).ok_or_else(|| ConfigurationError::UnknownLocation {
        field,
        value: value.to_string(),
    })
}
