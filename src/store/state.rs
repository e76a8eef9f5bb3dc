//! Base trait for store state.

use std::fmt::Debug;

/// Marker trait for state objects held by a [`Store`](super::Store).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Debug + 'static {}
