//! Qualified constructor family.
//!
//! For a given arity, every bitmask yields one wrapper that takes each
//! argument by `&'a` or `&'a mut` and forwards the references unchanged to the
//! unchecked constructor of the same arity.

use crate::definition::{qualified_name, unchecked_name, Definition, Family};
use crate::params::{descriptors, ParamDescriptor, LIFETIME, RESULT_TYPE_PARAM};
use crate::source::{render_list, render_tuple, SourceBuilder};
use crate::unchecked::CLIPPY_ARGUMENT_LIMIT;
use crate::QualifierAssignment;

/// Emit the wrapper for `assignment`.
///
/// ```text
/// #[inline]
/// pub fn new2_rm<'a, T, A0: ?Sized, A1: ?Sized>(a0: &'a A0, a1: &'a mut A1) -> {rt}::Handle<T>
/// where
///     T: {rt}::Construct<(&'a A0, &'a mut A1)>,
/// {
///     unchecked_new2::<T, &'a A0, &'a mut A1>(a0, a1)
/// }
/// ```
pub fn emit_qualified(assignment: QualifierAssignment, runtime_path: &str) -> Definition {
    let arity = assignment.arity();
    let params = descriptors(arity);
    let name = qualified_name(assignment);

    let mut generics = Vec::with_capacity(params.len() + 2);
    if arity > 0 {
        generics.push(LIFETIME.to_string());
    }
    generics.push(RESULT_TYPE_PARAM.to_string());
    generics.extend(params.iter().map(|p| format!("{}: ?Sized", p.type_name())));

    let ref_types: Vec<String> = params
        .iter()
        .zip(assignment.qualifiers())
        .map(|(p, q)| format!("{}{}", q.reference(), p.type_name()))
        .collect();
    let inputs: Vec<String> = params
        .iter()
        .zip(&ref_types)
        .map(|(p, ty)| format!("{}: {ty}", p.value_name()))
        .collect();
    let mut forwarded_types = Vec::with_capacity(ref_types.len() + 1);
    forwarded_types.push(RESULT_TYPE_PARAM.to_string());
    forwarded_types.extend(ref_types.iter().cloned());
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
        render_tuple(&ref_types)
    ));
    src.dedent();
    src.writeln("{");
    src.indent();
    src.writeln(&format!(
        "{}::<{}>({})",
        unchecked_name(arity),
        render_list(&forwarded_types),
        render_list(&args),
    ));
    src.dedent();
    src.writeln("}");

    tracing::trace!(%name, %assignment, "rendered qualified definition");

    Definition {
        family: Family::Qualified,
        arity,
        assignment: Some(assignment),
        name,
        params,
        text: src.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assignment(arity: u32, mask: u64) -> QualifierAssignment {
        QualifierAssignment::new(arity, mask).unwrap_or_else(|| panic!("invalid mask {mask}"))
    }

    #[test]
    fn arity_zero_has_no_lifetime() {
        let def = emit_qualified(assignment(0, 0), "::emplace_rt");
        assert_eq!(def.name, "new0");
        assert_eq!(
            def.text,
            "\
#[inline]
pub fn new0<T>() -> ::emplace_rt::Handle<T>
where
    T: ::emplace_rt::Construct<()>,
{
    unchecked_new0::<T>()
}
"
        );
    }

    #[test]
    fn mask_101_shares_outer_arguments() {
        let def = emit_qualified(assignment(3, 0b101), "::emplace_rt");
        assert_eq!(def.name, "new3_rmr");
        assert_eq!(def.assignment.map(QualifierAssignment::mask), Some(5));
        assert_eq!(
            def.text,
            "\
#[inline]
pub fn new3_rmr<'a, T, A0: ?Sized, A1: ?Sized, A2: ?Sized>(a0: &'a A0, a1: &'a mut A1, a2: &'a A2) -> ::emplace_rt::Handle<T>
where
    T: ::emplace_rt::Construct<(&'a A0, &'a mut A1, &'a A2)>,
{
    unchecked_new3::<T, &'a A0, &'a mut A1, &'a A2>(a0, a1, a2)
}
"
        );
    }

    #[test]
    fn arity_one_where_clause_is_one_tuple() {
        let def = emit_qualified(assignment(1, 1), "crate");
        assert_eq!(def.name, "new1_r");
        assert!(def
            .text
            .contains("    T: crate::Construct<(&'a A0,)>,\n"));
        assert!(def.text.contains("    unchecked_new1::<T, &'a A0>(a0)\n"));
    }

    #[test]
    fn body_forwards_every_parameter_unchanged() {
        let def = emit_qualified(assignment(4, 0b0110), "crate");
        assert_eq!(def.name, "new4_mrrm");
        assert!(def
            .text
            .contains("unchecked_new4::<T, &'a mut A0, &'a A1, &'a A2, &'a mut A3>(a0, a1, a2, a3)"));
    }

    #[test]
    fn wide_arities_silence_argument_lint() {
        let def = emit_qualified(assignment(8, 0), "crate");
        assert!(def.text.starts_with("#[inline]\n#[allow(clippy::too_many_arguments)]\n"));
    }
}
