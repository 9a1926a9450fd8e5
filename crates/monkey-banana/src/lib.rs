//! State-space search for the Monkey and Banana planning puzzle.
//!
//! A monkey, a box and a banana sit in a room. The solver runs a depth-first
//! search over the (tiny) space of room states, avoiding cycles on the current
//! path, and returns the first plan that gets the monkey the banana. The
//! `report` and `planner` modules turn that plan into a readable transcript.

pub mod actions;
pub mod error;
pub mod planner;
pub mod problem;
pub mod report;
pub mod solver;

// Re-export main types
pub use actions::{action_between, apply, legal_actions, path_actions, verify_path, ActionList};
pub use error::ConfigurationError;
pub use planner::{render_walkthrough, walkthrough_states, SimplePlanner, FIXED_PLAN};
pub use problem::{Action, Location, ProblemConfig, State};
pub use report::{render_solution, render_state, Transition};
pub use solver::{find_solution, solve, SearchStats, SolverResult};

/// Everything the program prints when run without arguments: the search
/// transcript, the fixed planner listing and the walkthrough.
pub fn render_demo(path: Option<&[State]>) -> String {
    let mut out = report::render_header();
    out.push_str(&report::render_search_outcome(path));
    out.push_str(&format!("\n{}\n", report::RULE));
    out.push_str(&SimplePlanner::new().render());
    out.push_str(&render_walkthrough());
    out
}
