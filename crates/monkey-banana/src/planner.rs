//! A hand-written plan and a narrated walkthrough of it.
//!
//! This is fixed teaching material printed next to the search result. It is
//! not derived from the solver, but the walkthrough states are produced with
//! the real transition function so they stay in step with the rules.

use std::fmt;

use crate::actions::apply;
use crate::problem::{Action, Location, State};
use crate::report::RULE;

/// One step of the fixed plan together with its narration.
#[derive(Debug, Clone, Copy)]
pub struct PlanStep {
    pub action: Action,
    /// Sentence used in the planner listing
    pub narration: &'static str,
    /// Short label used in the walkthrough arrow
    pub label: &'static str,
    /// What the room looks like afterwards
    pub outcome: &'static str,
}

pub const FIXED_PLAN: [PlanStep; 4] = [
    PlanStep {
        action: Action::GoTo(Location::Corner),
        narration: "Monkey goes to the corner where the box is",
        label: "Go to corner",
        outcome: "Now: Monkey at corner with box",
    },
    PlanStep {
        action: Action::PushBoxTo(Location::UnderBanana),
        narration: "Monkey pushes the box from corner to under the banana",
        label: "Push box under banana",
        outcome: "Now: Box under banana, monkey with box",
    },
    PlanStep {
        action: Action::ClimbBox,
        narration: "Monkey climbs onto the box",
        label: "Climb box",
        outcome: "Now: Monkey on box under banana",
    },
    PlanStep {
        action: Action::GrabBanana,
        narration: "Monkey grabs the banana!",
        label: "Grab banana",
        outcome: "Finally: 🎉 Monkey has banana!",
    },
];

/// Replays the fixed plan and records the actions it took.
#[derive(Debug, Default)]
pub struct SimplePlanner {
    actions_taken: Vec<Action>,
}

impl SimplePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the fixed plan, returning the actions in order.
    pub fn plan(&mut self) -> &[Action] {
        self.actions_taken.clear();
        self.actions_taken
            .extend(FIXED_PLAN.iter().map(|step| step.action));
        &self.actions_taken
    }

    pub fn actions_taken(&self) -> &[Action] {
        &self.actions_taken
    }

    /// Run the plan and render the planner section, ending with the
    /// `Plan steps:` summary line.
    pub fn render(&mut self) -> String {
        let actions = self.plan();
        let mut out = PlannerListing.to_string();
        let summary = actions
            .iter()
            .map(Action::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        out.push_str(&format!("\nPlan steps: {summary}\n"));
        out
    }
}

struct PlannerListing;

impl fmt::Display for PlannerListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{RULE}")?;
        writeln!(f, "SIMPLE PLANNER APPROACH")?;
        writeln!(f, "{RULE}")?;
        for (i, step) in FIXED_PLAN.iter().enumerate() {
            let lead = if i == 0 { "\n" } else { "" };
            writeln!(f, "{lead}Step {}: {}", i + 1, step.narration)?;
        }
        writeln!(f, "\n🎉 Success! The monkey enjoyed the banana!")
    }
}

/// States visited by the walkthrough, starting from the initial state.
pub fn walkthrough_states() -> Vec<State> {
    let mut state = State::initial();
    let mut states = vec![state];
    for step in &FIXED_PLAN {
        state = apply(&state, step.action);
        states.push(state);
    }
    states
}

struct Walkthrough;

impl fmt::Display for Walkthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{RULE}")?;
        writeln!(f, "INTERACTIVE DEMONSTRATION")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "\nLet's trace through the solution:")?;
        writeln!(f, "\nStart: Monkey at door, Box in corner")?;
        for step in &FIXED_PLAN {
            writeln!(f, "↓ {}", step.label)?;
            writeln!(f, "{}", step.outcome)?;
        }
        Ok(())
    }
}

/// The narrated walkthrough section.
pub fn render_walkthrough() -> String {
    Walkthrough.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::verify_path;
    use crate::solver::solve;

    #[test]
    fn test_plan_actions() {
        let mut planner = SimplePlanner::new();
        let actions = planner.plan().to_vec();
        assert_eq!(
            actions,
            vec![
                Action::GoTo(Location::Corner),
                Action::PushBoxTo(Location::UnderBanana),
                Action::ClimbBox,
                Action::GrabBanana,
            ]
        );
        assert_eq!(planner.actions_taken(), actions.as_slice());

        // Replanning does not accumulate
        planner.plan();
        assert_eq!(planner.actions_taken().len(), 4);
    }

    #[test]
    fn test_walkthrough_is_legal_plan() {
        let states = walkthrough_states();
        assert_eq!(states.len(), 5);
        assert!(verify_path(&states));
    }

    #[test]
    fn test_walkthrough_matches_search() {
        let searched = solve(State::initial()).path.unwrap();
        assert_eq!(walkthrough_states(), searched);
    }

    #[test]
    fn test_render_summary_line() {
        let text = SimplePlanner::new().render();
        assert!(text.starts_with("\n==="));
        assert!(text.contains("\nStep 1: Monkey goes to the corner where the box is\nStep 2:"));
        assert!(text.ends_with(
            "\nPlan steps: go_to_corner -> push_box_to_under_banana -> climb_box -> grab_banana\n"
        ));
    }

    #[test]
    fn test_render_walkthrough() {
        let text = render_walkthrough();
        assert!(text.contains("INTERACTIVE DEMONSTRATION"));
        assert!(text.contains("↓ Go to corner\nNow: Monkey at corner with box\n"));
        assert!(text.ends_with("↓ Grab banana\nFinally: 🎉 Monkey has banana!\n"));
    }
}
