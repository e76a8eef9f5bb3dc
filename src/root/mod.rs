//! Composed application state.
//!
//! The application state is a set of feature slices keyed by
//! [`FeatureKey`]. A slice exists only once its feature has been registered
//! with the store, which [`build_store`] does for every feature the
//! application ships.

mod action;
mod reducer;
mod state;

pub use action::{AppAction, FeatureKey};
pub use reducer::AppReducer;
pub use state::AppState;

use crate::counter::CounterState;
use crate::store::Store;

/// Build the application store.
///
/// The counter slice is preloaded with `initial`; registering the feature
/// afterwards keeps the preloaded value, the same way any already-present
/// slice survives registration.
pub fn build_store(initial: i64) -> Store<AppReducer> {
    let mut store = Store::<AppReducer>::new(AppState::preloaded(CounterState::new(initial)));
    store.dispatch(AppAction::Init);
    store.dispatch(AppAction::RegisterFeature(FeatureKey::Counter));
    tracing::info!(initial, "Store initialized");
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{select_counter, CounterAction};

    #[test]
    fn build_store_seeds_counter() {
        let store = build_store(42);
        assert_eq!(store.select(&select_counter), Ok(42));
        assert_eq!(store.dispatch_count(), 2);
    }

    #[test]
    fn build_store_from_zero() {
        let mut store = build_store(0);
        store.dispatch(AppAction::Counter(CounterAction::Decrement));
        assert_eq!(store.select(&select_counter), Ok(-1));
    }
}
