#![forbid(unsafe_code)]

//! Reactive cells for Glossia.
//!
//! This crate provides the change-tracking primitives the i18n layer is
//! built on:
//!
//! - [`Value`]: a shared, version-tracked mutable cell with change
//!   notification via watcher callbacks.
//! - [`ReadOnly`]: a view over a [`Value`] that can observe but never
//!   write.
//! - [`WatchGuard`]: RAII guard that detaches a watcher on drop.
//! - [`Derived`]: a memoized value computed from one cell, refreshed on
//!   first read after the cell changes.
//!
//! # Architecture
//!
//! `Value<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership; every handle type here is deliberately `!Send` and
//! `!Sync`. Watchers are stored as `Weak` function pointers and pruned
//! lazily during notification.
//!
//! `Derived<T>` does not register a watcher. It remembers the source
//! version its memo was computed against and recomputes on read when the
//! version has moved, so a burst of writes costs one recomputation at
//! the next read.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per value-changing write.
//! 2. Writing a value equal to the current one is a no-op (no version
//!    bump, no notifications).
//! 3. Watchers are notified in registration order.
//! 4. Dropping a [`WatchGuard`] detaches the callback before the next
//!    notification cycle.
//! 5. A [`Derived`] read never returns a value stale with respect to
//!    its source.

pub mod cell;
pub mod derived;

pub use cell::{ReadOnly, Value, WatchGuard};
pub use derived::Derived;
