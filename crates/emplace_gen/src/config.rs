//! Generation bounds and runtime path.
//!
//! Both arity bounds are exclusive and independent of each other. The only
//! relation enforced is that every qualified definition has an unchecked
//! definition of the same arity to forward to.

use std::ops::Range;

use crate::GenError;

/// Exclusive arity ceiling of the unchecked family.
pub const UNCHECKED_ARITY_BOUND: u32 = 20;

/// Exclusive arity ceiling of the qualified family.
pub const QUALIFIED_ARITY_BOUND: u32 = 9;

/// Largest accepted qualified bound. Masks are enumerated as `u64`.
pub const MAX_QUALIFIED_ARITY: u32 = 32;

/// Path under which generated code finds `Handle`, `Construct` and `AllocationScope`.
pub const DEFAULT_RUNTIME_PATH: &str = "::emplace_rt";

/// Generator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    unchecked_bound: u32,
    qualified_bound: u32,
    runtime_path: String,
}

impl GenConfig {
    /// Create a configuration with explicit arity bounds.
    ///
    /// Fails when the qualified bound exceeds [`MAX_QUALIFIED_ARITY`] or the
    /// unchecked bound.
    pub fn new(unchecked_bound: u32, qualified_bound: u32) -> Result<Self, GenError> {
        if qualified_bound > MAX_QUALIFIED_ARITY {
            return Err(GenError::ArityTooLarge {
                bound: qualified_bound,
                max: MAX_QUALIFIED_ARITY,
            });
        }
        if qualified_bound > unchecked_bound {
            return Err(GenError::BoundsInverted {
                unchecked: unchecked_bound,
                qualified: qualified_bound,
            });
        }
        Ok(Self {
            unchecked_bound,
            qualified_bound,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        })
    }

    /// Replace the runtime path prefix (`crate` when generating into `emplace_rt` itself).
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    pub fn unchecked_bound(&self) -> u32 {
        self.unchecked_bound
    }

    pub fn qualified_bound(&self) -> u32 {
        self.qualified_bound
    }

    pub fn runtime_path(&self) -> &str {
        &self.runtime_path
    }

    /// Arities of the unchecked family, ascending.
    pub fn unchecked_arities(&self) -> Range<u32> {
        0..self.unchecked_bound
    }

    /// Arities of the qualified family, ascending.
    pub fn qualified_arities(&self) -> Range<u32> {
        0..self.qualified_bound
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            unchecked_bound: UNCHECKED_ARITY_BOUND,
            qualified_bound: QUALIFIED_ARITY_BOUND,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}
