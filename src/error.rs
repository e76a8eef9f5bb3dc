//! Error types for state access.

use thiserror::Error;

/// Errors raised when reading from a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The composed state has no slice under the requested feature key.
    ///
    /// Feature slices are registered when the store is built; reaching this
    /// means a selector ran against a store that was never initialized for
    /// the feature.
    #[error("Missing state slice '{key}': feature was not registered with the store")]
    MissingSlice { key: &'static str },
}
