//! Reference qualifiers and their bitmask assignments.

use std::fmt;

use crate::MAX_QUALIFIED_ARITY;

/// How a qualified definition takes one argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// `&'a A`, selected by a set bit.
    Shared,
    /// `&'a mut A`, selected by a clear bit.
    Mutable,
}

impl Qualifier {
    /// Single-letter tag used in definition names.
    pub fn tag(self) -> char {
        match self {
            Qualifier::Shared => 'r',
            Qualifier::Mutable => 'm',
        }
    }

    /// Reference prefix for a parameter type, including the trailing space.
    pub fn reference(self) -> &'static str {
        match self {
            Qualifier::Shared => "&'a ",
            Qualifier::Mutable => "&'a mut ",
        }
    }
}

/// Number of distinct assignments for `arity` arguments (`2^arity`).
#[inline]
pub fn assignment_count(arity: u32) -> u64 {
    debug_assert!(arity <= MAX_QUALIFIED_ARITY, "arity {arity} out of range");
    1u64 << arity
}

/// A qualifier per argument position, encoded as an `arity`-bit mask.
///
/// Bit `i` set means argument `i` is [`Qualifier::Shared`]; clear means
/// [`Qualifier::Mutable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifierAssignment {
    arity: u32,
    mask: u64,
}

impl QualifierAssignment {
    /// Build an assignment, or `None` if `mask` does not fit in `arity` bits.
    pub fn new(arity: u32, mask: u64) -> Option<Self> {
        if arity > MAX_QUALIFIED_ARITY || mask >= assignment_count(arity) {
            return None;
        }
        Some(Self { arity, mask })
    }

    /// Every assignment for `arity`, in ascending mask order.
    pub fn all(arity: u32) -> impl Iterator<Item = Self> {
        (0..assignment_count(arity)).map(move |mask| Self { arity, mask })
    }

    pub fn arity(self) -> u32 {
        self.arity
    }

    pub fn mask(self) -> u64 {
        self.mask
    }

    /// Qualifier of argument `index`.
    pub fn qualifier(self, index: u32) -> Qualifier {
        debug_assert!(index < self.arity, "argument {index} out of range");
        if (self.mask >> index) & 1 == 1 {
            Qualifier::Shared
        } else {
            Qualifier::Mutable
        }
    }

    /// Qualifiers in argument order.
    pub fn qualifiers(self) -> impl Iterator<Item = Qualifier> {
        (0..self.arity).map(move |index| self.qualifier(index))
    }

    /// Name tags in argument order, e.g. `rmr` for arity 3, mask `0b101`.
    pub fn tags(self) -> String {
        self.qualifiers().map(Qualifier::tag).collect()
    }
}

impl fmt::Display for QualifierAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:0width$b}", self.arity, self.mask, width = self.arity as usize)
    }
}
