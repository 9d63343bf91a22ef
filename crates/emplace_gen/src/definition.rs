//! Emitted definitions and their names.

use std::fmt;

use crate::{ParamDescriptor, QualifierAssignment};

/// Which generator produced a definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// By-value arguments, emplaced under an allocation scope.
    Unchecked,
    /// Reference-qualified wrappers forwarding to [`Family::Unchecked`].
    Qualified,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Unchecked => "unchecked",
            Family::Qualified => "qualified",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated function, identified by family, arity and (for the
/// qualified family) its qualifier assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub family: Family,
    pub arity: u32,
    /// `Some` exactly for [`Family::Qualified`].
    pub assignment: Option<QualifierAssignment>,
    pub name: String,
    pub params: Vec<ParamDescriptor>,
    /// Rendered source, ending in a newline.
    pub text: String,
}

/// `unchecked_new{arity}`.
pub fn unchecked_name(arity: u32) -> String {
    format!("unchecked_new{arity}")
}

/// `new0` for arity 0, otherwise `new{arity}_{tags}`.
pub fn qualified_name(assignment: QualifierAssignment) -> String {
    match assignment.arity() {
        0 => "new0".to_string(),
        arity => format!("new{arity}_{}", assignment.tags()),
    }
}
