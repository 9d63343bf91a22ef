//! Generation driver.
//!
//! Writes the marker line, then the unchecked family in ascending arity, then
//! the qualified family in ascending (arity, mask) order. Definitions are
//! separated by one blank line. Consumers look definitions up by name, but the
//! order is fixed so regenerated files diff cleanly.

use std::path::Path;

use crate::{
    emit_qualified, emit_unchecked, Definition, Emitter, Family, GenConfig, GenError,
    FileEmitter, QualifierAssignment, StringEmitter,
};

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// @generated by emplace-gen. Do not edit by hand.";

/// Definition counts of one generation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenSummary {
    pub unchecked: usize,
    pub qualified: usize,
}

impl GenSummary {
    pub fn total(&self) -> usize {
        self.unchecked + self.qualified
    }

    fn record(&mut self, family: Family) {
        match family {
            Family::Unchecked => self.unchecked += 1,
            Family::Qualified => self.qualified += 1,
        }
    }
}

/// All definitions for `config`, in emission order.
pub fn definitions(config: &GenConfig) -> impl Iterator<Item = Definition> + '_ {
    let runtime_path = config.runtime_path();
    let unchecked = config
        .unchecked_arities()
        .map(move |arity| emit_unchecked(arity, runtime_path));
    let qualified = config
        .qualified_arities()
        .flat_map(QualifierAssignment::all)
        .map(move |assignment| emit_qualified(assignment, runtime_path));
    unchecked.chain(qualified)
}

/// Write the generated file into `emitter`.
///
/// Stops at the first emitter error; whatever was written before it is not a
/// usable file.
pub fn generate<E: Emitter>(config: &GenConfig, emitter: &mut E) -> Result<GenSummary, E::Error> {
    tracing::debug!(
        unchecked_bound = config.unchecked_bound(),
        qualified_bound = config.qualified_bound(),
        runtime_path = config.runtime_path(),
        "generating constructors"
    );

    emitter.emit(GENERATED_MARKER)?;
    emitter.emit_newline()?;

    let mut summary = GenSummary::default();
    for definition in definitions(config) {
        emitter.emit_newline()?;
        emitter.emit(&definition.text)?;
        summary.record(definition.family);
    }

    tracing::debug!(
        unchecked = summary.unchecked,
        qualified = summary.qualified,
        "generated constructors"
    );
    Ok(summary)
}

/// Generate into a string.
pub fn generate_to_string(config: &GenConfig) -> String {
    let mut emitter = StringEmitter::new();
    generate(config, &mut emitter).unwrap_or_else(|never| match never {});
    emitter.output()
}

/// Generate into the file at `path`, creating or truncating it.
///
/// Intended for build scripts writing into `OUT_DIR`.
pub fn write_to_path(config: &GenConfig, path: impl AsRef<Path>) -> Result<GenSummary, GenError> {
    let path = path.as_ref();
    let mut emitter = FileEmitter::create(path).map_err(|source| GenError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = generate(config, &mut emitter)?;
    emitter.finish()?;
    tracing::debug!(path = %path.display(), total = summary.total(), "wrote constructors");
    Ok(summary)
}
