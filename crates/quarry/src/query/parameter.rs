use super::Expr;

/// A value supplied from outside the query, bound when the query runs.
///
/// Parameters are never deduplicated: registering the same value twice
/// yields two parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalParameter {
    pub expr: Expr,
}

index_vec::define_index_type! {
    pub struct ParameterId = u32;
}
