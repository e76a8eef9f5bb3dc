//! Reducer trait for the state container.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// State the reducer starts from before any action has been applied.
    fn initial() -> Self::State {
        Self::State::default()
    }

    /// Process an action and return the new state.
    ///
    /// Total over its domain: actions the reducer does not handle return
    /// the state unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
