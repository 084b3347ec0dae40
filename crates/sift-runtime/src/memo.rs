#![forbid(unsafe_code)]

//! Argument-keyed memoization for pure query functions.
//!
//! # Design
//!
//! [`Memo<A, R>`] wraps a function and a result cache keyed by argument
//! value equality in shared, reference-counted storage. The first call for a
//! given argument runs the function and stores the result; every later call
//! with an equal argument is a map lookup. Cloning a `Memo` creates a new
//! handle to the **same** cache.
//!
//! # Invariants
//!
//! 1. The wrapped function runs at most once per distinct argument value,
//!    across any number of calls (observable via [`calls()`](Memo::calls)).
//! 2. `call(a)` always equals running the unwrapped function on `a`,
//!    provided the precondition below holds.
//! 3. At most one cache entry exists per distinct argument value.
//! 4. Entries persist until [`invalidate`](Memo::invalidate) or
//!    [`clear`](Memo::clear); there is no implicit eviction.
//!
//! # Precondition
//!
//! The wrapped function must be referentially transparent in its argument:
//! it must not read or mutate anything outside it. A function closing over
//! external mutable data yields silently stale results — that staleness is
//! not detectable at runtime without recomputing, so it is a caller
//! contract, not a checked invariant. Callers whose underlying data does
//! change own the corresponding `invalidate`/`clear` call.

use std::cell::{Cell, RefCell};
use std::hash::Hash;
use std::rc::Rc;

use ahash::AHashMap;

/// Shared interior for [`Memo<A, R>`].
struct MemoInner<A, R> {
    /// The wrapped query function.
    query: Box<dyn Fn(&A) -> R>,
    /// Result cache, one entry per distinct argument value.
    cache: RefCell<AHashMap<A, R>>,
    /// Number of underlying executions.
    calls: Cell<u64>,
}

/// A memoized pure function from `A` to `R`.
pub struct Memo<A, R> {
    inner: Rc<MemoInner<A, R>>,
}

impl<A, R> Clone for Memo<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, R> std::fmt::Debug for Memo<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("entries", &self.inner.cache.borrow().len())
            .field("calls", &self.inner.calls.get())
            .finish()
    }
}

impl<A, R> Memo<A, R>
where
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// Wrap `query` with an empty cache.
    pub fn new(query: impl Fn(&A) -> R + 'static) -> Self {
        Self {
            inner: Rc::new(MemoInner {
                query: Box::new(query),
                cache: RefCell::new(AHashMap::new()),
                calls: Cell::new(0),
            }),
        }
    }

    /// Compute-or-lookup for `arg`.
    ///
    /// Runs the wrapped function only if no equal argument has been seen
    /// before; otherwise returns a clone of the cached result.
    #[must_use]
    pub fn call(&self, arg: &A) -> R {
        if let Some(hit) = self.inner.cache.borrow().get(arg) {
            return hit.clone();
        }
        let result = (self.inner.query)(arg);
        self.inner.calls.set(self.inner.calls.get() + 1);
        self.inner
            .cache
            .borrow_mut()
            .insert(arg.clone(), result.clone());
        result
    }

    /// Number of times the underlying function has executed.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.inner.calls.get()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.cache.borrow().is_empty()
    }

    /// Drop the entry for `arg`, if any. The next call with an equal
    /// argument recomputes.
    pub fn invalidate(&self, arg: &A) -> bool {
        self.inner.cache.borrow_mut().remove(arg).is_some()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.inner.cache.borrow_mut().clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_at_most_once_per_argument() {
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        let double = Memo::new(move |n: &i64| {
            count_clone.set(count_clone.get() + 1);
            n * 2
        });

        assert_eq!(double.call(&5), 10);
        assert_eq!(count.get(), 1);

        // Equal argument: cached, no execution.
        assert_eq!(double.call(&5), 10);
        assert_eq!(count.get(), 1);

        // New argument: one more execution.
        assert_eq!(double.call(&7), 14);
        assert_eq!(count.get(), 2);
        assert_eq!(double.calls(), 2);
        assert_eq!(double.len(), 2);
    }

    #[test]
    fn equals_direct_recomputation() {
        let square = Memo::new(|n: &i64| n * n);
        for n in [-3i64, 0, 4, 4, 9] {
            assert_eq!(square.call(&n), n * n);
        }
    }

    #[test]
    fn invalidate_forces_recompute() {
        let memo = Memo::new(|s: &String| s.len());
        let key = "Grove St PATH".to_owned();

        assert_eq!(memo.call(&key), 13);
        assert_eq!(memo.calls(), 1);

        assert!(memo.invalidate(&key));
        assert_eq!(memo.call(&key), 13);
        assert_eq!(memo.calls(), 2);

        // Invalidating an unseen argument is a no-op.
        assert!(!memo.invalidate(&"absent".to_owned()));
    }

    #[test]
    fn clear_empties_cache() {
        let memo = Memo::new(|n: &u8| *n);
        let _ = memo.call(&1);
        let _ = memo.call(&2);
        assert_eq!(memo.len(), 2);
        memo.clear();
        assert!(memo.is_empty());
        let _ = memo.call(&1);
        assert_eq!(memo.calls(), 3);
    }

    #[test]
    fn clone_shares_cache() {
        let a = Memo::new(|n: &i64| *n + 1);
        let b = a.clone();
        let _ = a.call(&1);
        // The clone sees the cached entry.
        assert_eq!(b.call(&1), 2);
        assert_eq!(b.calls(), 1);
    }

    #[test]
    fn stale_capture_is_caller_responsibility() {
        // A query closing over external mutable data: the cache keeps the
        // first answer until invalidated.
        let source = Rc::new(Cell::new(10i64));
        let source_clone = Rc::clone(&source);
        let memo = Memo::new(move |n: &i64| n + source_clone.get());

        assert_eq!(memo.call(&1), 11);
        source.set(100);
        // Stale, per the documented precondition.
        assert_eq!(memo.call(&1), 11);
        memo.invalidate(&1);
        assert_eq!(memo.call(&1), 101);
    }
}
