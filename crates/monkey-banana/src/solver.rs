//! Depth-first search with path-based cycle avoidance.
//!
//! The search recurses on the current path of states. A successor that already
//! appears on the path is skipped, which is enough to guarantee termination:
//! the state space is finite and no path repeats a state. Each recursive call
//! owns its own extended copy of the path, so backtracking needs no undo.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::actions::{apply, legal_actions, path_actions};
use crate::problem::{Action, State};

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Successor states generated
    pub states_explored: usize,
    /// Successors rejected because they were already on the path
    pub cycles_skipped: usize,
    /// Longest path (in states) the search descended to
    pub max_depth: usize,
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// The first plan found, from the initial state to a goal state
    pub path: Option<Vec<State>>,
    pub stats: SearchStats,
}

impl SolverResult {
    pub fn solved(&self) -> bool {
        self.path.is_some()
    }

    /// The actions taken along the found path
    pub fn actions(&self) -> Option<Vec<Action>> {
        self.path.as_deref().and_then(path_actions)
    }
}

/// Search for a plan from `initial` to any state holding the banana.
///
/// Exhausting the search space is not an error; the result simply carries no
/// path.
pub fn solve(initial: State) -> SolverResult {
    let mut stats = SearchStats::default();
    let path = search(vec![initial], &mut stats);

    info!(
        solved = path.is_some(),
        steps = path.as_ref().map_or(0, |p| p.len().saturating_sub(1)),
        states_explored = stats.states_explored,
        cycles_skipped = stats.cycles_skipped,
        "search finished"
    );

    SolverResult { path, stats }
}

/// Convenience wrapper returning only the path.
pub fn find_solution(initial: State) -> Option<Vec<State>> {
    solve(initial).path
}

fn search(path: Vec<State>, stats: &mut SearchStats) -> Option<Vec<State>> {
    let current = *path.last()?;
    stats.max_depth = stats.max_depth.max(path.len());

    if current.is_goal() {
        return Some(path);
    }

    let actions = legal_actions(&current);
    debug!(depth = path.len(), state = ?current, candidates = actions.len(), "expanding");

    for action in actions {
        let next = apply(&current, action);
        stats.states_explored += 1;

        if path.contains(&next) {
            stats.cycles_skipped += 1;
            trace!(%action, state = ?next, "skipping revisit");
            continue;
        }

        let mut extended = path.clone();
        extended.push(next);
        if let Some(solution) = search(extended, stats) {
            return Some(solution);
        }
    }

    debug!(depth = path.len(), state = ?current, "dead end, backtracking");
    None
}
