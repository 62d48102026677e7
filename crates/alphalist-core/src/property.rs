//! Property system for Alphalist.
//!
//! Properties are change-detecting value cells. The list shell keeps each of
//! its invalidation triggers (placement flag, header heights, ...) in a
//! [`Property`], so setting an unchanged value does not throw away derived
//! state.
//!
//! # Property Types
//!
//! - **Property<T>**: A value with change detection
//! - **Derived<T>**: A memoized value rebuilt only after invalidation
//!
//! # Example
//!
//! ```
//! use alphalist_core::{Derived, Property};
//!
//! let header_height = Property::new(40.0_f32);
//! let total = Derived::new();
//!
//! let value = total.get_or_update(|| header_height.get() * 3.0);
//! assert_eq!(value, 120.0);
//!
//! if header_height.set(20.0) {
//!     total.invalidate();
//! }
//! assert_eq!(total.get_or_update(|| header_height.get() * 3.0), 60.0);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

/// A value cell that knows when it changed.
///
/// [`set`](Self::set) compares against the current value and reports whether
/// anything was written, so owners invalidate derived state only on real
/// changes.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wraps an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Reads the value in place.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Writes `value` if it differs. Returns `true` on a write.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Writes `value` if it differs, handing back the previous value.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A memoized derived value.
///
/// `Derived<T>` caches the result of a computation and only recomputes it
/// after [`invalidate`](Self::invalidate) has been called. The computation is
/// supplied at the call site, so the owner decides what inputs it reads.
pub struct Derived<T> {
    cached: RwLock<Option<T>>,
    dirty: AtomicBool,
}

impl<T: Clone> Derived<T> {
    /// Create an empty, dirty cell.
    pub fn new() -> Self {
        Self {
            cached: RwLock::new(None),
            dirty: AtomicBool::new(true),
        }
    }

    /// Return the cached value, running `compute` first if the cell is dirty.
    pub fn get_or_update<F>(&self, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.is_dirty() {
            if let Some(value) = self.cached.read().as_ref() {
                return value.clone();
            }
        }

        let value = compute();
        *self.cached.write() = Some(value.clone());
        self.dirty.store(false, Ordering::Release);
        value
    }

    /// Return the cached value without recomputing, if one is present and clean.
    pub fn peek(&self) -> Option<T> {
        if self.is_dirty() {
            None
        } else {
            self.cached.read().clone()
        }
    }

    /// Mark the cached value as stale.
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Whether the next read will recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

impl<T: Clone> Default for Derived<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("dirty", &self.dirty.load(Ordering::Acquire))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_property_set_reports_change() {
        let header_height = Property::new(40.0_f32);
        assert!(!header_height.set(40.0));
        assert!(header_height.set(24.0));
        assert_eq!(header_height.get(), 24.0);
    }

    #[test]
    fn test_replace_returns_previous() {
        let placement = Property::new("bottom".to_string());
        assert_eq!(placement.replace("bottom".to_string()), None);
        assert_eq!(placement.replace("top".to_string()), Some("bottom".to_string()));
        assert_eq!(placement.with(|v| v.len()), 3);
    }

    #[test]
    fn test_derived_memoizes_until_invalidated() {
        let runs = Cell::new(0);
        let derived = Derived::new();

        let compute = || {
            runs.set(runs.get() + 1);
            runs.get() * 10
        };

        assert_eq!(derived.get_or_update(compute), 10);
        assert_eq!(derived.get_or_update(compute), 10);
        assert_eq!(runs.get(), 1);

        derived.invalidate();
        assert!(derived.peek().is_none());
        assert_eq!(derived.get_or_update(compute), 20);
        assert_eq!(derived.peek(), Some(20));
    }
}
