#![forbid(unsafe_code)]

//! Mutable reactive cell and its read-only view.
//!
//! # Design
//!
//! [`Value<T>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). A write that changes the value (decided by
//! `PartialEq`) bumps a version counter and notifies all live watchers
//! in registration order. [`ReadOnly<T>`] shares the same storage but
//! exposes no write operation; it is how a cell owner lets consumers
//! observe without handing out mutation rights.
//!
//! # Failure Modes
//!
//! - **Re-entrant write**: calling `set()` from within a watcher
//!   callback panics (`RefCell` borrow rules). Re-entrant mutation
//!   indicates a cycle in the watcher graph.
//! - **Watcher leak**: a [`WatchGuard`] stored forever keeps its
//!   callback registered. Dead weak references are pruned lazily during
//!   notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Watcher callbacks are held strongly by their [`WatchGuard`] and
/// weakly by the cell.
type WatcherRc<T> = Rc<dyn Fn(&T)>;
type WatcherWeak<T> = Weak<dyn Fn(&T)>;

/// Shared interior for [`Value<T>`] and [`ReadOnly<T>`].
struct CellInner<T> {
    value: T,
    version: u64,
    watchers: Vec<WatcherWeak<T>>,
}

type SharedCell<T> = Rc<RefCell<CellInner<T>>>;

/// A shared, version-tracked mutable cell.
///
/// Cloning a `Value` creates a new handle to the **same** interior:
/// both handles see the same value, version, and watchers.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing write.
/// 2. `set(v)` where `v == current` is a no-op.
/// 3. Watchers run in registration order.
/// 4. Dead watchers (dropped [`WatchGuard`]s) are pruned lazily.
pub struct Value<T> {
    inner: SharedCell<T>,
}

// Manual Clone: shares the interior, no `T: Clone` needed for the handle.
impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Value")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("watchers", &inner.watchers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Value<T> {
    /// Create a cell holding `value`, at version 0, with no watchers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value,
                version: 0,
                watchers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Write a new value. If it differs from the current one (by
    /// `PartialEq`), the version is bumped and live watchers run.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from within a watcher callback.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        notify(&self.inner);
    }

    /// Register a callback invoked with the new value after each change.
    ///
    /// The callback stays registered as long as the returned
    /// [`WatchGuard`] is alive.
    pub fn watch(&self, callback: impl Fn(&T) + 'static) -> WatchGuard {
        attach_watcher(&self.inner, callback)
    }

    /// Current version. Bumps by 1 on each value-changing write; useful
    /// for dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered watcher slots, including dead ones not yet pruned.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    /// A read-only view sharing this cell's interior.
    #[must_use]
    pub fn read_only(&self) -> ReadOnly<T> {
        ReadOnly {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// A view over a [`Value`] that can read, watch, and be mapped, but
/// never write. Cloning shares the underlying cell.
pub struct ReadOnly<T> {
    inner: SharedCell<T>,
}

impl<T> Clone for ReadOnly<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadOnly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ReadOnly")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ReadOnly<T> {
    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Current version of the underlying cell.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Register a callback invoked after each change of the underlying
    /// cell. Writes still happen only through the owning [`Value`].
    pub fn watch(&self, callback: impl Fn(&T) + 'static) -> WatchGuard {
        attach_watcher(&self.inner, callback)
    }
}

/// RAII guard for a watcher callback.
///
/// Dropping the guard drops the strong `Rc` holding the callback, so
/// the `Weak` in the cell's watcher list fails to upgrade on the next
/// notification and is pruned.
pub struct WatchGuard {
    /// Type-erased strong reference keeping the callback alive.
    /// `Rc<dyn Fn(&T)>` cannot coerce to `Rc<dyn Any>` directly, so the
    /// guard boxes it instead.
    _keep: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchGuard").finish_non_exhaustive()
    }
}

fn attach_watcher<T: 'static>(
    inner: &SharedCell<T>,
    callback: impl Fn(&T) + 'static,
) -> WatchGuard {
    let strong: WatcherRc<T> = Rc::new(callback);
    inner.borrow_mut().watchers.push(Rc::downgrade(&strong));
    WatchGuard {
        _keep: Box::new(strong),
    }
}

/// Run live watchers with the current value and prune dead ones.
fn notify<T: Clone>(inner: &SharedCell<T>) {
    // Collect live callbacks first so no borrow is held during calls.
    let callbacks: Vec<WatcherRc<T>> = {
        let mut cell = inner.borrow_mut();
        cell.watchers.retain(|w| w.strong_count() > 0);
        cell.watchers.iter().filter_map(Weak::upgrade).collect()
    };

    let value = inner.borrow().value.clone();
    for cb in &callbacks {
        cb(&value);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
