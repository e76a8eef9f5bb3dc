//! Counter feature module.
//!
//! An integer that can be incremented, decremented and reset.
//!
//! # Architecture
//!
//! - `state.rs` - Slice state (`CounterState`, default 0)
//! - `action.rs` - User actions (Increment, Decrement, Reset)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `selector.rs` - Reads the slice out of the composed application state

mod action;
mod reducer;
mod selector;
mod state;

pub use action::{CounterAction, ParseActionError};
pub use reducer::CounterReducer;
pub use selector::{select_counter, select_counter_state};
pub use state::CounterState;

/// Key the counter slice is registered under in the application state.
pub const COUNTER_FEATURE_KEY: &str = "counter";
