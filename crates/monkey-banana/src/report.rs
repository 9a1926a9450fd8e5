//! Human-readable rendering of states and solved paths.
//!
//! Nothing here affects the plan itself; it only narrates a path the solver
//! already produced, inferring each step by diffing consecutive states.

use std::fmt;

use crate::problem::{Location, State};

/// Heavy section rule used around banners
pub const RULE: &str = "==================================================";
/// Light rule used under sub-headings
pub const THIN_RULE: &str = "------------------------------";

/// What happened between two consecutive states, as seen from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    GrabbedBanana,
    ClimbedBox,
    Moved { from: Location, to: Location },
    PushedBox { from: Location, to: Location },
    Unknown,
}

impl Transition {
    /// Classify a step by which fields changed.
    ///
    /// Checked in order: banana picked up, box climbed, monkey moved alone,
    /// box moved.
    pub fn classify(from: &State, to: &State) -> Self {
        if !from.has_banana && to.has_banana {
            Transition::GrabbedBanana
        } else if !from.on_box && to.on_box {
            Transition::ClimbedBox
        } else if from.monkey_position != to.monkey_position
            && from.box_position == to.box_position
        {
            Transition::Moved {
                from: from.monkey_position,
                to: to.monkey_position,
            }
        } else if from.box_position != to.box_position {
            Transition::PushedBox {
                from: from.box_position,
                to: to.box_position,
            }
        } else {
            Transition::Unknown
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::GrabbedBanana => f.write_str("Grabbed the banana!"),
            Transition::ClimbedBox => f.write_str("Climbed onto the box"),
            Transition::Moved { from, to } => write!(f, "Went from {from} to {to}"),
            Transition::PushedBox { from, to } => write!(f, "Pushed box from {from} to {to}"),
            Transition::Unknown => f.write_str("Unknown action"),
        }
    }
}

/// Four indented lines describing a state.
pub struct StateView<'a>(pub &'a State);

impl fmt::Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "  Monkey is at: {}", state.monkey_position)?;
        writeln!(f, "  Box is at: {}", state.box_position)?;
        writeln!(f, "  Monkey on box: {}", yes_no(state.on_box))?;
        writeln!(f, "  Has banana: {}", yes_no(state.has_banana))
    }
}

/// Full step-by-step narration of a solved path.
pub struct Transcript<'a>(pub &'a [State]);

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(initial) = self.0.first() else {
            return writeln!(f, "No solution found!");
        };

        writeln!(f, "{RULE}")?;
        writeln!(f, "MONKEY AND BANANA PROBLEM - SOLUTION")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "\nInitial State:")?;
        write!(f, "{}", StateView(initial))?;

        writeln!(f, "\nSolution Steps:")?;
        for (i, pair) in self.0.windows(2).enumerate() {
            let transition = Transition::classify(&pair[0], &pair[1]);
            writeln!(f, "\nStep {}: {transition}", i + 1)?;
            write!(f, "{}", StateView(&pair[1]))?;
        }

        writeln!(f, "\n{RULE}")?;
        writeln!(f, "GOAL ACHIEVED! The monkey got the banana! 🐒🍌")?;
        writeln!(f, "{RULE}")
    }
}

pub fn render_state(state: &State) -> String {
    StateView(state).to_string()
}

pub fn render_solution(path: &[State]) -> String {
    Transcript(path).to_string()
}

/// Opening banner and search heading.
pub fn render_header() -> String {
    format!(
        "MONKEY AND BANANA PROBLEM\n{RULE}\n\nMETHOD 1: State-Space Search (DFS)\n{THIN_RULE}\n"
    )
}

/// The search section of the default output: the transcript, or a notice
/// when the search came back empty.
pub fn render_search_outcome(path: Option<&[State]>) -> String {
    match path {
        Some(path) => render_solution(path),
        None => "No solution found using DFS!\n".to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
