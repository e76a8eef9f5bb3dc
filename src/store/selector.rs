//! Selectors: pure read functions over a store's state.

use std::marker::PhantomData;

use crate::error::StoreError;

/// Derives a focused value from a larger state object.
///
/// A selector must be pure: the same input state always yields the same
/// output. Any `Fn(&Root) -> Result<T, StoreError>` is a selector.
pub trait Selector<Root> {
    /// Value extracted from the root state.
    type Output;

    /// Read the focused value out of `root`.
    fn select(&self, root: &Root) -> Result<Self::Output, StoreError>;
}

impl<Root, T, F> Selector<Root> for F
where
    F: Fn(&Root) -> Result<T, StoreError>,
{
    type Output = T;

    fn select(&self, root: &Root) -> Result<T, StoreError> {
        self(root)
    }
}

/// Selector wrapper that remembers its last output.
///
/// Lets a view skip re-rendering when the value it depends on has not
/// changed between two reads.
pub struct Memoized<S, Root>
where
    S: Selector<Root>,
{
    selector: S,
    last: Option<S::Output>,
    _root: PhantomData<fn(&Root)>,
}

impl<S, Root> Memoized<S, Root>
where
    S: Selector<Root>,
    S::Output: Clone + PartialEq,
{
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            last: None,
            _root: PhantomData,
        }
    }

    /// Re-run the selector against `root`.
    ///
    /// Returns `Ok(Some(value))` when the value differs from the previous
    /// read (or on the first read), `Ok(None)` when it is unchanged.
    /// A failed read leaves the remembered value untouched.
    pub fn recompute(&mut self, root: &Root) -> Result<Option<S::Output>, StoreError> {
        let value = self.selector.select(root)?;
        if self.last.as_ref() == Some(&value) {
            return Ok(None);
        }
        self.last = Some(value.clone());
        Ok(Some(value))
    }

    /// Last value produced by [`recompute`](Self::recompute).
    pub fn last(&self) -> Option<&S::Output> {
        self.last.as_ref()
    }
}
