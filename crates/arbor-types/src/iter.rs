//! The closable, forward-only iteration protocol.
//!
//! Object stores, reference stores, tree walkers and the filtered file/tree
//! iterators all yield `Result<T, E>` items through [`Iterator::next`], hold
//! resources that must be released through [`CloseableIter::close`], and offer
//! push-style traversal through [`CloseableIter::visit`].
//!
//! A `visit` callback answers with an [`IterFlow`]: `Continue` asks for the
//! next item, `Stop` ends the traversal early without reporting a failure, and
//! an `Err` ends it and is handed back to the caller unchanged.

/// What a [`CloseableIter::visit`] callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterFlow {
    /// Keep iterating.
    Continue,
    /// End the iteration now. Not an error.
    Stop,
}

/// A fallible iterator that holds resources until it is closed.
pub trait CloseableIter: Iterator {
    /// Release every resource held by the iterator.
    ///
    /// Idempotent. Once closed, `next` returns `None`.
    fn close(&mut self);

    /// Feed every item to `f` in order, then close the iterator.
    ///
    /// Returns `Ok(())` when the sequence is exhausted or `f` returns
    /// [`IterFlow::Stop`]. An error from the iterator or from `f` is returned
    /// as is. The iterator is closed exactly once on every path.
    fn visit<T, X, E, F>(mut self, mut f: F) -> Result<(), E>
    where
        Self: Sized + Iterator<Item = Result<T, X>>,
        E: From<X>,
        F: FnMut(T) -> Result<IterFlow, E>,
    {
        let outcome = loop {
            let item = match self.next() {
                None => break Ok(()),
                Some(Err(e)) => break Err(E::from(e)),
                Some(Ok(item)) => item,
            };
            match f(item) {
                Ok(IterFlow::Continue) => {}
                Ok(IterFlow::Stop) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.close();
        outcome
    }
}
