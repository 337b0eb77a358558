#![forbid(unsafe_code)]

//! Memoized values derived from a reactive cell.
//!
//! # Design
//!
//! A [`Derived<T>`] pairs a pure compute closure with the version of the
//! source cell it last ran against. Reads compare the source version to
//! the memoized one and recompute only when it has moved, so a burst of
//! source writes costs a single recomputation at the next read, and
//! repeated reads between writes are cache hits.
//!
//! Construction goes through [`Value::map`] or [`ReadOnly::map`]; there
//! is no public constructor. The initial memo is computed eagerly, which
//! lets callers validate their inputs *before* mapping and keeps every
//! read infallible.
//!
//! # Failure Modes
//!
//! - **Re-entrant read**: a compute closure that reads its own
//!   `Derived` panics (`RefCell` borrow rules), same as a re-entrant
//!   cell write.
//! - **Stale closure captures**: the closure owns whatever it captured
//!   at `map` time; captured data is not tracked for changes. Only the
//!   source cell drives recomputation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::{ReadOnly, Value};

/// Last computed value and the source version it corresponds to.
struct Memo<T> {
    value: T,
    source_version: u64,
}

struct DerivedInner<T> {
    compute: Box<dyn Fn() -> T>,
    source_version: Box<dyn Fn() -> u64>,
    memo: RefCell<Memo<T>>,
}

/// A read-only value recomputed from its source cell on demand.
///
/// Cloning a `Derived` shares the memo: a recomputation through one
/// handle is visible to all.
pub struct Derived<T> {
    inner: Rc<DerivedInner<T>>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let memo = self.inner.memo.borrow();
        f.debug_struct("Derived")
            .field("value", &memo.value)
            .field("source_version", &memo.source_version)
            .finish()
    }
}

impl<T: Clone> Derived<T> {
    fn from_parts(compute: Box<dyn Fn() -> T>, source_version: Box<dyn Fn() -> u64>) -> Self {
        let memo = Memo {
            value: compute(),
            source_version: source_version(),
        };
        Self {
            inner: Rc::new(DerivedInner {
                compute,
                source_version,
                memo: RefCell::new(memo),
            }),
        }
    }

    /// Recompute the memo if the source version has moved.
    fn refresh(&self) {
        let current = (self.inner.source_version)();
        let mut memo = self.inner.memo.borrow_mut();
        if memo.source_version != current {
            memo.value = (self.inner.compute)();
            memo.source_version = current;
        }
    }

    /// Clone of the current value, recomputed first if the source
    /// changed since the last read.
    #[must_use]
    pub fn get(&self) -> T {
        self.with(Clone::clone)
    }

    /// Borrow the current value without cloning, recomputing first if
    /// the source changed since the last read.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.refresh();
        let memo = self.inner.memo.borrow();
        f(&memo.value)
    }
}

impl<T: Clone + PartialEq + 'static> Value<T> {
    /// Derive a memoized value from this cell through a pure closure.
    ///
    /// The closure runs once immediately, then again on the first read
    /// after each value-changing write.
    #[must_use]
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        self.read_only().map(f)
    }
}

impl<T: Clone + PartialEq + 'static> ReadOnly<T> {
    /// Derive a memoized value from the underlying cell through a pure
    /// closure. See [`Value::map`].
    #[must_use]
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        let source = self.clone();
        let versioned = self.clone();
        Derived::from_parts(
            Box::new(move || source.with(&f)),
            Box::new(move || versioned.version()),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
