//! Positional parameter naming.
//!
//! Type parameters are `A0, A1, ..` and value parameters `a0, a1, ..`.
//! The index suffix keeps every name distinct within a definition and away
//! from [`RESULT_TYPE_PARAM`] and [`LIFETIME`].

/// Result type parameter shared by every definition.
pub const RESULT_TYPE_PARAM: &str = "T";

/// Lifetime binding the references of a qualified definition.
pub const LIFETIME: &str = "'a";

/// Names synthesized for argument position `index`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamDescriptor {
    type_name: String,
    value_name: String,
}

impl ParamDescriptor {
    pub fn new(index: u32) -> Self {
        Self {
            type_name: format!("A{index}"),
            value_name: format!("a{index}"),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }
}

/// Descriptors for positions `0..arity`.
pub fn descriptors(arity: u32) -> Vec<ParamDescriptor> {
    (0..arity).map(ParamDescriptor::new).collect()
}
