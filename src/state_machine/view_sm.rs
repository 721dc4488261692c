//! View-selection state machine.
//!
//! ```text
//! Front ←→ Left
//!   ↑ ↘    ↕
//!   └──── Right
//! ```
//!
//! Every state accepts every selection; the target is always the view that
//! was asked for. Selecting the current view is handled in place.

use statig::prelude::*;
use tracing::info;

use crate::view::ViewState;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Events dispatched to the view state machine.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A key press or button click asked for this view.
    Select(ViewState),
}

// ---------------------------------------------------------------------------
// Shared storage
// ---------------------------------------------------------------------------

/// Shared storage for the view state machine.
#[derive(Debug, Default)]
pub struct ViewMachine {
    /// Number of view changes since startup.
    pub changes: u64,
}

impl ViewMachine {
    /// The view a machine state stands for.
    pub fn view_of(state: &State) -> ViewState {
        match state {
            State::Front {} => ViewState::Front,
            State::Left {} => ViewState::Left,
            State::Right {} => ViewState::Right,
        }
    }

    fn route(&mut self, current: ViewState, event: &ViewEvent) -> Outcome<State> {
        let ViewEvent::Select(target) = event;
        if *target == current {
            return Handled;
        }
        self.changes += 1;
        info!(target: "view", from = %current, to = %target, changes = self.changes, "view changed");
        match target {
            ViewState::Front => Transition(State::front()),
            ViewState::Left => Transition(State::left()),
            ViewState::Right => Transition(State::right()),
        }
    }
}

// ---------------------------------------------------------------------------
// State machine implementation
// ---------------------------------------------------------------------------

#[state_machine(
    initial = "State::front()",
    state(derive(Debug, Clone, PartialEq))
)]
impl ViewMachine {
    /// Detailed front-stand scene.
    #[state]
    fn front(&mut self, event: &ViewEvent) -> Outcome<State> {
        self.route(ViewState::Front, event)
    }

    /// Left-stand placeholder.
    #[state]
    fn left(&mut self, event: &ViewEvent) -> Outcome<State> {
        self.route(ViewState::Left, event)
    }

    /// Right-stand placeholder.
    #[state]
    fn right(&mut self, event: &ViewEvent) -> Outcome<State> {
        self.route(ViewState::Right, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_front() {
        let sm = ViewMachine::default().state_machine();
        assert_eq!(ViewMachine::view_of(sm.state()), ViewState::Front);
    }

    #[test]
    fn target_is_always_the_selected_view() {
        let mut sm = ViewMachine::default().state_machine();
        for target in [
            ViewState::Left,
            ViewState::Right,
            ViewState::Right,
            ViewState::Front,
            ViewState::Left,
        ] {
            sm.handle(&ViewEvent::Select(target));
            assert_eq!(ViewMachine::view_of(sm.state()), target);
        }
    }

    #[test]
    fn reselecting_does_not_count_as_a_change() {
        let mut sm = ViewMachine::default().state_machine();
        sm.handle(&ViewEvent::Select(ViewState::Front));
        assert_eq!(sm.inner().changes, 0);
        sm.handle(&ViewEvent::Select(ViewState::Left));
        sm.handle(&ViewEvent::Select(ViewState::Left));
        assert_eq!(sm.inner().changes, 1);
    }
}
