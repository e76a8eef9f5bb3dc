//! Owning state container.

use std::fmt;

use super::action::Action;
use super::reducer::Reducer;
use super::selector::{Memoized, Selector};
use crate::error::StoreError;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Single-owner state container.
///
/// Holds the current state, applies the reducer `R` on every dispatch and
/// notifies subscribers synchronously, in subscription order, once the new
/// state is in place. `dispatch` takes `&mut self`, so two reductions can
/// never interleave.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u64,
    dispatch_count: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
            dispatch_count: 0,
        }
    }

    /// Create a store holding the reducer's initial state.
    pub fn from_initial() -> Self {
        Self::new(R::initial())
    }

    /// Current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` through the reducer and notify subscribers.
    pub fn dispatch(&mut self, action: R::Action) {
        let tag = action.tag();
        let next = R::reduce(self.state.clone(), action);
        let previous = std::mem::replace(&mut self.state, next);
        self.dispatch_count += 1;

        tracing::debug!(
            action = tag,
            dispatch = self.dispatch_count,
            subscribers = self.listeners.len(),
            previous = ?previous,
            next = ?self.state,
            "Action dispatched"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Read a value out of the current state.
    pub fn select<S>(&self, selector: &S) -> Result<S::Output, StoreError>
    where
        S: Selector<R::State>,
    {
        selector.select(&self.state)
    }

    /// Register a listener called with the new state after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Register a listener for a selected value.
    ///
    /// `on_change` is called once immediately with the current value, then
    /// only after dispatches that change the selected value. Selector
    /// failures are logged and skipped.
    pub fn subscribe_select<S, F>(&mut self, selector: S, mut on_change: F) -> SubscriptionId
    where
        S: Selector<R::State> + 'static,
        S::Output: Clone + PartialEq + 'static,
        F: FnMut(S::Output) + 'static,
    {
        let mut memo = Memoized::new(selector);
        let mut deliver = move |state: &R::State| match memo.recompute(state) {
            Ok(Some(value)) => on_change(value),
            Ok(None) => {}
            Err(err) => tracing::warn!("Selector subscription skipped: {}", err),
        };
        deliver(&self.state);
        self.subscribe(deliver)
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of actions dispatched since the store was created.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::from_initial()
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .field("dispatch_count", &self.dispatch_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::State;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Tally {
        total: i32,
        touched: u32,
    }

    impl State for Tally {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum TallyAction {
        Add(i32),
        Touch,
    }

    impl Action for TallyAction {
        fn tag(&self) -> &'static str {
            match self {
                TallyAction::Add(_) => "[Tally] Add",
                TallyAction::Touch => "[Tally] Touch",
            }
        }
    }

    struct TallyReducer;

    impl Reducer for TallyReducer {
        type State = Tally;
        type Action = TallyAction;

        fn reduce(state: Self::State, action: Self::Action) -> Self::State {
            match action {
                TallyAction::Add(n) => Tally {
                    total: state.total + n,
                    ..state
                },
                TallyAction::Touch => Tally {
                    touched: state.touched + 1,
                    ..state
                },
            }
        }
    }

    fn select_total(state: &Tally) -> Result<i32, StoreError> {
        Ok(state.total)
    }

    #[test]
    fn dispatch_applies_reducer() {
        let mut store = Store::<TallyReducer>::from_initial();
        store.dispatch(TallyAction::Add(2));
        store.dispatch(TallyAction::Add(3));
        assert_eq!(store.state().total, 5);
        assert_eq!(store.dispatch_count(), 2);
    }

    #[test]
    fn subscribers_see_new_state_in_order() {
        let mut store = Store::<TallyReducer>::new(Tally { total: 10, touched: 0 });
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |s: &Tally| first.borrow_mut().push(("first", s.total)));
        let second = Rc::clone(&seen);
        store.subscribe(move |s: &Tally| second.borrow_mut().push(("second", s.total)));

        store.dispatch(TallyAction::Add(1));
        assert_eq!(*seen.borrow(), vec![("first", 11), ("second", 11)]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::<TallyReducer>::from_initial();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &Tally| *counter.borrow_mut() += 1);

        store.dispatch(TallyAction::Touch);
        assert!(store.unsubscribe(id));
        store.dispatch(TallyAction::Touch);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn subscribe_select_fires_immediately_then_only_on_change() {
        let mut store = Store::<TallyReducer>::from_initial();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        store.subscribe_select(select_total, move |v| sink.borrow_mut().push(v));

        store.dispatch(TallyAction::Touch);
        store.dispatch(TallyAction::Add(4));
        store.dispatch(TallyAction::Touch);
        store.dispatch(TallyAction::Add(0));

        assert_eq!(*values.borrow(), vec![0, 4]);
    }

    #[test]
    fn subscribe_select_skips_failing_selector() {
        let mut store = Store::<TallyReducer>::from_initial();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        let failing = |_: &Tally| -> Result<i32, StoreError> {
            Err(StoreError::MissingSlice { key: "missing" })
        };
        store.subscribe_select(failing, move |v| sink.borrow_mut().push(v));

        store.dispatch(TallyAction::Add(1));
        assert!(values.borrow().is_empty());
        assert_eq!(store.state().total, 1);
    }

    #[test]
    fn select_reads_current_state() {
        let mut store = Store::<TallyReducer>::from_initial();
        store.dispatch(TallyAction::Add(-3));
        assert_eq!(store.select(&select_total), Ok(-3));
        assert_eq!(store.select(&select_total), store.select(&select_total));
    }
}
