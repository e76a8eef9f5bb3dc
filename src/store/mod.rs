//! Unidirectional state container primitives.
//!
//! This module provides the building blocks for a predictable, single-owner
//! state store.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selector ──→ View
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application data
//! - **Action**: Tagged request to transition state
//! - **Reducer**: Pure function that computes the next state
//! - **Selector**: Pure read function deriving a focused view
//! - **Store**: Owning container that applies reducers and notifies subscribers

mod action;
mod container;
mod reducer;
mod selector;
mod state;

pub use action::Action;
pub use container::{Store, SubscriptionId};
pub use reducer::Reducer;
pub use selector::{Memoized, Selector};
pub use state::State;
