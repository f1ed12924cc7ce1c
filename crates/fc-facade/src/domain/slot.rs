//! # Subsystem Slots
//!
//! A facade holds each subsystem in a [`Slot`], tagged with who is
//! responsible for releasing it.
//!
//! ## Invariants
//!
//! - A slot always resolves to exactly one live instance.
//! - `Owned` instances are dropped once, when the slot is dropped.
//! - `Borrowed` instances are never dropped by the slot; `'a` ties the slot
//!   to the lender's lifetime.

use std::fmt;
use std::ops::Deref;

/// Who releases a subsystem instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Created by the facade and released with it.
    Owned,
    /// Supplied by the caller, who keeps lifetime responsibility.
    Borrowed,
}

impl Ownership {
    /// Whether the holder releases the instance.
    pub fn is_owned(self) -> bool {
        matches!(self, Ownership::Owned)
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Owned => write!(f, "owned"),
            Ownership::Borrowed => write!(f, "borrowed"),
        }
    }
}

/// A subsystem instance that is either owned or borrowed.
#[derive(Debug)]
pub enum Slot<'a, T> {
    /// Instance created and owned by the holder.
    Owned(T),
    /// Instance lent by the caller.
    Borrowed(&'a T),
}

impl<'a, T> Slot<'a, T> {
    /// Borrow `reference` if given, otherwise own a default instance.
    pub fn from_option(reference: Option<&'a T>) -> Self
    where
        T: Default,
    {
        match reference {
            Some(instance) => Slot::Borrowed(instance),
            None => Slot::Owned(T::default()),
        }
    }

    /// Ownership tag of this slot.
    pub fn ownership(&self) -> Ownership {
        match self {
            Slot::Owned(_) => Ownership::Owned,
            Slot::Borrowed(_) => Ownership::Borrowed,
        }
    }

    /// The instance, whichever way it is held.
    pub fn get(&self) -> &T {
        match self {
            Slot::Owned(instance) => instance,
            Slot::Borrowed(instance) => instance,
        }
    }

    /// Take the owned instance out of the slot. Borrowed slots yield `None`.
    pub fn into_owned(self) -> Option<T> {
        match self {
            Slot::Owned(instance) => Some(instance),
            Slot::Borrowed(_) => None,
        }
    }
}

impl<T> Deref for Slot<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> From<T> for Slot<'_, T> {
    fn from(instance: T) -> Self {
        Slot::Owned(instance)
    }
}

impl<'a, T> From<&'a T> for Slot<'a, T> {
    fn from(instance: &'a T) -> Self {
        Slot::Borrowed(instance)
    }
}
