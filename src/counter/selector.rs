//! Selectors for the counter feature.

use crate::error::StoreError;
use crate::root::AppState;

use super::state::CounterState;
use super::COUNTER_FEATURE_KEY;

/// Feature selector: the counter slice of the application state.
pub fn select_counter_state(state: &AppState) -> Result<&CounterState, StoreError> {
    state.counter.as_ref().ok_or(StoreError::MissingSlice {
        key: COUNTER_FEATURE_KEY,
    })
}

/// Current counter value.
pub fn select_counter(state: &AppState) -> Result<i64, StoreError> {
    select_counter_state(state).map(|slice| slice.count)
}
