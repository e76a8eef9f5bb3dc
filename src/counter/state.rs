//! State for the counter feature.

use crate::store::State;

/// Counter slice: a single unbounded integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl State for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}
