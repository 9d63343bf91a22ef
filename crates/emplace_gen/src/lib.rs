//! Emplace Constructor Generator
//!
//! Emits the family of generic in-place constructors used by `emplace_rt`.
//! Writing every arity and reference-qualifier combination by hand does not
//! scale, so the definitions are derived from two bounds and a bitmask rule.
//!
//! # Architecture
//!
//! ```text
//!              GenConfig (bounds + runtime path)
//!                        ↓
//!   unchecked::emit_unchecked   one definition per arity in [0, U_unchecked)
//!   qualified::emit_qualified   one definition per (arity, mask) in [0, U_qualified) × [0, 2^n)
//!                        ↓
//!              driver::generate  (marker line, canonical order)
//!                        ↓
//!                 Emitter (string, stdout, file)
//! ```
//!
//! # Families
//!
//! - **Unchecked** (`unchecked_new{n}`): takes `n` arguments by value, acquires
//!   an `AllocationScope`, emplaces the result and finalizes it into a `Handle`.
//! - **Qualified** (`new{n}_{tags}`): takes each argument by shared (`r`) or
//!   mutable (`m`) reference according to a bitmask and forwards to the
//!   unchecked definition of the same arity.
//!
//! # Usage
//!
//! ```
//! use emplace_gen::{generate_to_string, GenConfig};
//!
//! let config = GenConfig::new(2, 2).unwrap();
//! let source = generate_to_string(&config);
//! assert!(source.contains("pub fn new1_m<"));
//! ```

mod config;
mod definition;
mod driver;
mod emitter;
mod error;
mod logging;
mod params;
mod qualified;
mod qualifier;
mod source;
mod unchecked;

pub use config::{
    GenConfig, DEFAULT_RUNTIME_PATH, MAX_QUALIFIED_ARITY, QUALIFIED_ARITY_BOUND,
    UNCHECKED_ARITY_BOUND,
};
pub use definition::{qualified_name, unchecked_name, Definition, Family};
pub use driver::{
    definitions, generate, generate_to_string, write_to_path, GenSummary, GENERATED_MARKER,
};
pub use emitter::{Emitter, FileEmitter, StringEmitter, WriterEmitter};
pub use error::GenError;
pub use logging::init_tracing;
pub use params::{descriptors, ParamDescriptor, LIFETIME, RESULT_TYPE_PARAM};
pub use qualified::emit_qualified;
pub use qualifier::{assignment_count, Qualifier, QualifierAssignment};
pub use unchecked::emit_unchecked;
