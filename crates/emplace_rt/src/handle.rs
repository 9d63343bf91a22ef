//! Owning handles to accounted storage.

use std::fmt;
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::scope::Reservation;
use crate::AllocationScope;

/// Owning pointer to a value whose bytes are registered with the memory
/// manager. Dropping the handle drops the value and deregisters the bytes.
pub struct Handle<T> {
    value: Box<T>,
    reservation: Reservation,
}

impl<T> Handle<T> {
    /// Move an already built value into accounted storage.
    pub fn new(value: T) -> Self {
        AllocationScope::acquire().write(value).finalize()
    }

    pub(crate) fn from_parts(value: Box<T>, reservation: Reservation) -> Self {
        Self { value, reservation }
    }

    /// Move the value out, deregistering its bytes.
    pub fn into_inner(self) -> T {
        *self.value
    }

    /// Bytes registered for this handle.
    pub fn footprint(&self) -> usize {
        self.reservation.bytes()
    }
}

impl<T> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Handle<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.value).finish()
    }
}

/// Owning pointer to an accounted, default-initialized slice.
pub struct ArrayHandle<T> {
    items: Box<[T]>,
    reservation: Reservation,
}

/// Allocate `len` default values, registering `len * size_of::<T>()` bytes.
pub fn new_array<T: Default>(len: usize) -> ArrayHandle<T> {
    let reservation = Reservation::register(mem::size_of::<T>().saturating_mul(len));
    let items = iter::repeat_with(T::default).take(len).collect();
    ArrayHandle { items, reservation }
}

impl<T> ArrayHandle<T> {
    /// Bytes registered for this array.
    pub fn footprint(&self) -> usize {
        self.reservation.bytes()
    }
}

impl<T> Deref for ArrayHandle<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for ArrayHandle<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayHandle").field(&self.items).finish()
    }
}
