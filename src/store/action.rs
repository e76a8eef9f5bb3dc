//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions represent:
/// - User interactions (key presses, button clicks)
/// - Container lifecycle events (initialization, feature registration)
///
/// Actions are consumed by reducers to produce new states. Two actions are
/// the same action when they carry the same tag.
pub trait Action: Debug + 'static {
    /// Stable, human-readable type string for this action.
    fn tag(&self) -> &'static str;
}
