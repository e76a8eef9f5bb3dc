//! Reducer for the counter feature.

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Arithmetic wraps at the `i64` limits; there is no other bound.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState::new(state.count.wrapping_add(1)),
            CounterAction::Decrement => CounterState::new(state.count.wrapping_sub(1)),
            CounterAction::Reset => CounterState::default(),
        }
    }
}
