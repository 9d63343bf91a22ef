//! Emplace Runtime
//!
//! Scoped allocation accounting and the generated family of in-place
//! constructors built on it.
//!
//! # Pieces
//!
//! - [`MemoryManager`]: process-global byte accounting with a soft limit
//! - [`AllocationScope`]: guard that reserves storage, emplaces a value and
//!   releases everything unless finalized
//! - [`Handle`] / [`ArrayHandle`]: owning pointers that deregister on drop
//! - [`constructors`]: `unchecked_new{n}` and `new{n}_{tags}`, generated at
//!   build time by `emplace_gen`
//!
//! # Usage
//!
//! ```
//! use emplace_rt::{new2_rm, Construct};
//!
//! struct Counter {
//!     start: u32,
//! }
//!
//! impl<'a> Construct<(&'a u32, &'a mut Vec<u32>)> for Counter {
//!     fn construct((start, log): (&'a u32, &'a mut Vec<u32>)) -> Self {
//!         log.push(*start);
//!         Counter { start: *start }
//!     }
//! }
//!
//! let mut log = Vec::new();
//! let counter = new2_rm::<Counter, u32, Vec<u32>>(&7, &mut log);
//! assert_eq!(counter.start, 7);
//! assert_eq!(log, [7]);
//! ```

mod construct;
mod handle;
mod memory;
mod scope;

pub mod constructors {
    //! Generated constructors.
    //!
    //! `unchecked_new{n}` takes `n` arguments by value (`n < 20`).
    //! `new{n}_{tags}` takes argument `i` by `&'a` (`r`) or `&'a mut` (`m`)
    //! and forwards to `unchecked_new{n}` (`n < 9`).

    include!(concat!(env!("OUT_DIR"), "/constructors.rs"));
}

pub use construct::Construct;
pub use constructors::*;
pub use handle::{new_array, ArrayHandle, Handle};
pub use memory::{memory_manager, MemoryError, MemoryManager};
pub use scope::{AllocationScope, Constructed};
