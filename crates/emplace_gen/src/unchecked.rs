//! Unchecked constructor family.
//!
//! One definition per arity. Arguments are taken by value and forwarded as a
//! tuple to `Construct`, inside an `AllocationScope` that releases its storage
//! unless the constructed value is finalized into a `Handle`.

use crate::definition::{unchecked_name, Definition, Family};
use crate::params::{descriptors, ParamDescriptor, RESULT_TYPE_PARAM};
use crate::source::{render_list, render_tuple, SourceBuilder};

/// Parameter count above which clippy's `too_many_arguments` fires.
pub(crate) const CLIPPY_ARGUMENT_LIMIT: u32 = 7;

/// Emit `unchecked_new{arity}`.
///
/// ```text
/// #[inline]
/// pub fn unchecked_new2<T, A0, A1>(a0: A0, a1: A1) -> {rt}::Handle<T>
/// where
///     T: {rt}::Construct<(A0, A1)>,
/// {
///     let scope = {rt}::AllocationScope::<T>::acquire();
///     let constructed = scope.emplace((a0, a1));
///     constructed.finalize()
/// }
/// ```
pub fn emit_unchecked(arity: u32, runtime_path: &str) -> Definition {
    let params = descriptors(arity);
    let name = unchecked_name(arity);

    let mut generics = Vec::with_capacity(params.len() + 1);
    generics.push(RESULT_TYPE_PARAM.to_string());
    generics.extend(params.iter().map(|p| p.type_name().to_string()));

    let inputs: Vec<String> = params
        .iter()
        .map(|p| format!("{}: {}", p.value_name(), p.type_name()))
        .collect();
    let arg_types: Vec<&str> = params.iter().map(ParamDescriptor::type_name).collect();
    let args: Vec<&str> = params.iter().map(ParamDescriptor::value_name).collect();

    let mut src = SourceBuilder::new();
    src.writeln("#[inline]");
    if arity > CLIPPY_ARGUMENT_LIMIT {
        src.writeln("#[allow(clippy::too_many_arguments)]");
    }
    src.writeln(&format!(
        "pub fn {name}<{}>({}) -> {runtime_path}::Handle<{RESULT_TYPE_PARAM}>",
        render_list(&generics),
        render_list(&inputs),
    ));
    src.writeln("where");
    src.indent();
    src.writeln(&format!(
        "{RESULT_TYPE_PARAM}: {runtime_path}::Construct<{}>,",
        render_tuple(&arg_types)
    ));
    src.dedent();
    src.writeln("{");
    src.indent();
    src.writeln(&format!(
        "let scope = {runtime_path}::AllocationScope::<{RESULT_TYPE_PARAM}>::acquire();"
    ));
    src.writeln(&format!("let constructed = scope.emplace({});", render_tuple(&args)));
    src.writeln("constructed.finalize()");
    src.dedent();
    src.writeln("}");

    tracing::trace!(%name, arity, "rendered unchecked definition");

    Definition {
        family: Family::Unchecked,
        arity,
        assignment: None,
        name,
        params,
        text: src.finish(),
    }
}
