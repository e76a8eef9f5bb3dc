//! Root reducer: routes actions to feature slice reducers.

use crate::counter::CounterReducer;
use crate::store::Reducer;

use super::action::{AppAction, FeatureKey};
use super::state::AppState;

/// Root reducer.
///
/// Lifecycle actions leave slices alone (registration only fills a missing
/// slice). Feature actions reach a slice only once it is registered;
/// before that they are identity transitions.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Init => state,
            AppAction::RegisterFeature(FeatureKey::Counter) => AppState {
                counter: Some(state.counter.unwrap_or_else(CounterReducer::initial)),
            },
            AppAction::Counter(action) => AppState {
                counter: state
                    .counter
                    .map(|slice| CounterReducer::reduce(slice, action)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{CounterAction, CounterState};

    #[test]
    fn init_is_identity() {
        let state = AppState::preloaded(CounterState::new(9));
        assert_eq!(AppReducer::reduce(state.clone(), AppAction::Init), state);
        assert_eq!(
            AppReducer::reduce(AppState::default(), AppAction::Init),
            AppState::default()
        );
    }

    #[test]
    fn register_creates_slice_at_zero() {
        let state = AppReducer::reduce(
            AppState::default(),
            AppAction::RegisterFeature(FeatureKey::Counter),
        );
        assert_eq!(state.counter, Some(CounterState::new(0)));
    }

    #[test]
    fn register_keeps_existing_slice() {
        let state = AppReducer::reduce(
            AppState::preloaded(CounterState::new(5)),
            AppAction::RegisterFeature(FeatureKey::Counter),
        );
        assert_eq!(state.counter, Some(CounterState::new(5)));
    }

    #[test]
    fn counter_action_on_unregistered_slice_is_noop() {
        let state = AppReducer::reduce(
            AppState::default(),
            AppAction::Counter(CounterAction::Increment),
        );
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn counter_action_reaches_slice() {
        let state = AppReducer::reduce(
            AppState::preloaded(CounterState::new(1)),
            CounterAction::Decrement.into(),
        );
        assert_eq!(state.counter, Some(CounterState::new(0)));
    }
}
