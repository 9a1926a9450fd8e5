//! Action enumeration and the transition function.
//!
//! Both are pure: a state goes in, actions or a new state come out. The
//! enumeration order is fixed (every `go_to`, then every `push_box_to`, then
//! `climb_box`, then `grab_banana`, locations in `Location::ALL` order) because the
//! solver is depth-first and the first plan it finds depends on it.

use smallvec::SmallVec;

use crate::problem::{Action, Location, State};

/// Upper bound on legal actions from a single state (two moves, two pushes, climb).
const MAX_ACTIONS: usize = 5;

/// Legal actions from a state, in enumeration order
pub type ActionList = SmallVec<[Action; MAX_ACTIONS]>;

/// Enumerate every action legal in `state`.
///
/// A goal state is terminal and yields no actions.
pub fn legal_actions(state: &State) -> ActionList {
    let mut actions = ActionList::new();

    if state.has_banana {
        return actions;
    }

    // The monkey cannot walk while perched on the box
    if !state.on_box {
        for loc in Location::ALL {
            if loc != state.monkey_position {
                actions.push(Action::GoTo(loc));
            }
        }
    }

    if state.monkey_at_box() && !state.on_box {
        for loc in Location::ALL {
            if loc != state.box_position {
                actions.push(Action::PushBoxTo(loc));
            }
        }
    }

    if state.monkey_at_box() && state.box_position == Location::UnderBanana && !state.on_box {
        actions.push(Action::ClimbBox);
    }

    if state.on_box && state.box_position == Location::UnderBanana && !state.has_banana {
        actions.push(Action::GrabBanana);
    }

    actions
}

/// Apply `action` to `state`, returning the successor.
///
/// Callers are expected to pass an action from [`legal_actions`]; pushing the
/// box from elsewhere in the room would teleport it.
pub fn apply(state: &State, action: Action) -> State {
    match action {
        Action::GoTo(loc) => State {
            monkey_position: loc,
            on_box: false,
            ..*state
        },
        Action::PushBoxTo(loc) => State {
            monkey_position: loc,
            box_position: loc,
            on_box: false,
            ..*state
        },
        Action::ClimbBox => State {
            on_box: true,
            ..*state
        },
        Action::GrabBanana => State {
            has_banana: true,
            ..*state
        },
    }
}

/// Find the legal action that turns `from` into `to`, if any.
pub fn action_between(from: &State, to: &State) -> Option<Action> {
    legal_actions(from)
        .into_iter()
        .find(|&action| apply(from, action) == *to)
}

/// Recover the actions along a path of states.
///
/// Returns `None` if any consecutive pair is not linked by a legal action.
pub fn path_actions(path: &[State]) -> Option<Vec<Action>> {
    path.windows(2)
        .map(|pair| action_between(&pair[0], &pair[1]))
        .collect()
}

/// Check that a path is a valid plan: every step is a legal transition and it
/// ends at a goal.
pub fn verify_path(path: &[State]) -> bool {
    match path.last() {
        Some(last) => last.is_goal() && path_actions(path).is_some(),
        None => false,
    }
}
