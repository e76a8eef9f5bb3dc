//! Root state composed of feature slices.

use crate::counter::CounterState;
use crate::store::State;

/// Application state. Each field is one feature slice, `None` until the
/// feature is registered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub counter: Option<CounterState>,
}

impl State for AppState {}

impl AppState {
    /// State with the counter slice already present.
    pub fn preloaded(counter: CounterState) -> Self {
        Self {
            counter: Some(counter),
        }
    }
}
