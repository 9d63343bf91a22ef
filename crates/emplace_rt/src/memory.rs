//! Memory accounting.
//!
//! Every byte owned through this crate is registered with a process-global
//! [`MemoryManager`] when storage is reserved and deregistered when it is
//! released. The limit is soft: exceeding it is logged, never refused. A new
//! limit below current usage is rejected.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Errors raised when reconfiguring the memory manager.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory limit of {limit} bytes is below the {used} bytes already registered")]
    LimitBelowUsage { limit: usize, used: usize },
}

static MEMORY_MANAGER: MemoryManager = MemoryManager::new();

/// The process-global memory manager.
#[inline]
pub fn memory_manager() -> &'static MemoryManager {
    &MEMORY_MANAGER
}

/// Byte counter with an optional soft limit.
#[derive(Debug)]
pub struct MemoryManager {
    used: AtomicUsize,
    /// Zero means unlimited.
    limit: AtomicUsize,
}

impl MemoryManager {
    pub const fn new() -> Self {
        Self {
            used: AtomicUsize::new(0),
            limit: AtomicUsize::new(0),
        }
    }

    /// Bytes currently registered.
    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> Option<usize> {
        match self.limit.load(Ordering::Relaxed) {
            0 => None,
            limit => Some(limit),
        }
    }

    /// Set or clear the soft limit. A limit of zero means unlimited.
    ///
    /// Fails, leaving the previous limit in place, when `limit` is below the
    /// bytes registered at the time of the call.
    pub fn set_limit(&self, limit: Option<usize>) -> Result<(), MemoryError> {
        let limit = limit.unwrap_or(0);
        let used = self.used();
        if limit != 0 && limit < used {
            return Err(MemoryError::LimitBelowUsage { limit, used });
        }
        self.limit.store(limit, Ordering::Relaxed);
        tracing::debug!(limit, used, "memory limit set");
        Ok(())
    }

    /// Bytes left under the limit, or `None` when unlimited.
    pub fn available(&self) -> Option<usize> {
        self.limit().map(|limit| limit.saturating_sub(self.used()))
    }

    /// Record `bytes` as allocated.
    pub fn register_allocation(&self, bytes: usize) {
        let used = self
            .used
            .fetch_add(bytes, Ordering::Relaxed)
            .saturating_add(bytes);
        if let Some(limit) = self.limit() {
            if used > limit {
                tracing::warn!(bytes, used, limit, "allocation exceeds memory limit");
            }
        }
    }

    /// Record `bytes` as released.
    ///
    /// Releasing more than is registered clamps usage to zero.
    pub fn register_deallocation(&self, bytes: usize) {
        let previous = match self
            .used
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |used| {
                Some(used.saturating_sub(bytes))
            }) {
            Ok(previous) | Err(previous) => previous,
        };
        if bytes > previous {
            tracing::error!(bytes, used = previous, "deallocation exceeds registered usage");
        }
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}
