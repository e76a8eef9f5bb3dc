//! Actions understood by the root reducer.

use crate::counter::{CounterAction, COUNTER_FEATURE_KEY};
use crate::store::Action;

/// Features that own a slice of [`AppState`](super::AppState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Counter,
}

impl FeatureKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::Counter => COUNTER_FEATURE_KEY,
        }
    }
}

/// Every action the application store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Dispatched once when the store is created.
    Init,
    /// Creates the feature's slice from its reducer's initial state.
    RegisterFeature(FeatureKey),
    Counter(CounterAction),
}

impl Action for AppAction {
    fn tag(&self) -> &'static str {
        match self {
            AppAction::Init => "@store/init",
            AppAction::RegisterFeature(_) => "@store/update-reducers",
            AppAction::Counter(action) => action.tag(),
        }
    }
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        AppAction::Counter(action)
    }
}
