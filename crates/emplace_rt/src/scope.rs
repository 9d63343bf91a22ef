//! Scope-guarded allocation.
//!
//! ```text
//! AllocationScope::<T>::acquire()     register size_of::<T>() bytes
//!        ↓ emplace(args)              T::construct(args) into heap storage
//! Constructed<T>
//!        ↓ finalize()                 ownership moves to the caller
//! Handle<T>
//! ```
//!
//! The bytes are registered before the initializer runs, so a value is
//! always accounted for while it exists. Dropping a guard at any step before
//! `finalize` (including unwinding from a panicking initializer) frees the
//! storage and deregisters its bytes.

use std::marker::PhantomData;
use std::mem;

use crate::{memory_manager, Construct, Handle};

/// Registered bytes, deregistered on drop.
#[derive(Debug)]
pub(crate) struct Reservation {
    bytes: usize,
}

impl Reservation {
    pub(crate) fn register(bytes: usize) -> Self {
        memory_manager().register_allocation(bytes);
        Self { bytes }
    }

    pub(crate) fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        memory_manager().register_deallocation(self.bytes);
    }
}

/// Registered allocation for one `T` that has not been constructed yet.
#[must_use = "dropping an allocation scope releases its storage"]
pub struct AllocationScope<T> {
    reservation: Reservation,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AllocationScope<T> {
    /// Register storage sized for `T`.
    pub fn acquire() -> Self {
        Self {
            reservation: Reservation::register(mem::size_of::<T>()),
            _marker: PhantomData,
        }
    }

    /// Construct `T` from `args` and place it in heap storage.
    pub fn emplace<Args>(self, args: Args) -> Constructed<T>
    where
        T: Construct<Args>,
    {
        let value = T::construct(args);
        self.write(value)
    }

    /// Move an already built value into heap storage.
    pub fn write(self, value: T) -> Constructed<T> {
        Constructed {
            value: Box::new(value),
            reservation: self.reservation,
        }
    }

    /// Bytes registered for this scope.
    pub fn footprint(&self) -> usize {
        self.reservation.bytes()
    }
}

/// A constructed value still owned by its scope.
#[must_use = "dropping a constructed value before `finalize` releases it"]
pub struct Constructed<T> {
    value: Box<T>,
    reservation: Reservation,
}

impl<T> Constructed<T> {
    /// Hand the value to the caller. The bytes stay registered until the
    /// handle is dropped.
    pub fn finalize(self) -> Handle<T> {
        Handle::from_parts(self.value, self.reservation)
    }
}

