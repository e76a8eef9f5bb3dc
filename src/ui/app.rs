use crate::counter::{select_counter, CounterAction};
use crate::error::StoreError;
use crate::root::AppReducer;
use crate::store::Store;
use crate::ui::counter_view::CounterBinding;
use std::cell::RefCell;
use std::rc::Rc;

pub struct App {
    should_quit: bool,
    store: Store<AppReducer>,
    /// Fed by a memoized `select_counter` subscription on `store`.
    binding: Rc<RefCell<CounterBinding>>,
}

impl App {
    /// Bind the view to `store`.
    ///
    /// Fails fast if the store has no counter slice.
    pub fn new(mut store: Store<AppReducer>) -> Result<Self, StoreError> {
        store.select(&select_counter)?;

        let binding = Rc::new(RefCell::new(CounterBinding::default()));
        let sink = Rc::clone(&binding);
        store.subscribe_select(select_counter, move |value| sink.borrow_mut().update(value));

        Ok(Self {
            should_quit: false,
            store,
            binding,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(count = self.count(), "Quit requested");
        self.should_quit = true;
    }

    /// Dispatch a user action to the store.
    pub fn dispatch(&mut self, action: CounterAction) {
        self.store.dispatch(action.into());
    }

    /// Value the view renders.
    pub fn count(&self) -> i64 {
        self.binding.borrow().value()
    }

    /// Number of times the view binding received a new value.
    pub fn view_updates(&self) -> u64 {
        self.binding.borrow().updates()
    }

    pub fn dispatch_count(&self) -> u64 {
        self.store.dispatch_count()
    }

    pub fn store(&self) -> &Store<AppReducer> {
        &self.store
    }
}
