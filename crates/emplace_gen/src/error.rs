//! Generator errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running the generator.
///
/// Generation itself is pure; the only runtime failure is the output stream.
/// Any write error aborts the run and leaves partial, unusable output behind.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to write generated source: {0}")]
    Io(#[from] io::Error),

    #[error("failed to create `{}`: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("qualified arity bound {bound} exceeds the maximum of {max}")]
    ArityTooLarge { bound: u32, max: u32 },

    #[error("qualified arity bound {qualified} exceeds unchecked arity bound {unchecked}")]
    BoundsInverted { unchecked: u32, qualified: u32 },
}
