//! Lazily constructed, owner-held values
//!
//! [`LazySlot`] is the building block for objects an application owns but
//! only creates on first use. Construction runs under a mutex, so concurrent
//! first callers build exactly one value; once filled, reads skip the lock.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

/// A slot that is filled at most once, on first access
#[derive(Debug)]
pub struct LazySlot<T> {
    value: OnceCell<T>,
    init_lock: Mutex<()>,
}

impl<T> LazySlot<T> {
    pub fn new() -> Self {
        Self {
            value: OnceCell::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// The value, if it has been constructed
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Return the value, constructing it with `init` if the slot is empty.
    ///
    /// If `init` panics the lock is released, the slot stays empty and the
    /// panic propagates to the caller.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.value.get() {
            return value;
        }

        let _guard = self.init_lock.lock();
        self.value.get_or_init(init)
    }

    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
