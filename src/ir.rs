// Strongly-typed result of the structural walk. No serde_json::Value here.

/// Primitive kinds a single JSON sample can witness.
///
/// `Integer` vs `Float` is decided by a mathematical test on the sample
/// value, not a parser type tag (JSON has no separate int type). A field
/// that happens to be a whole number in the one sample we see is classified
/// `Integer` even if it is conceptually fractional; known limitation of
/// single-sample inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimKind {
    Integer,
    Float,
    Bool,
    Text,
    /// null, object-in-value-position, and anything else unclassifiable.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    Primitive(PrimKind),
    ListOf(Box<InferredType>),
    /// A class claimed in the registry during the same walk.
    Named(String),
}

impl InferredType {
    pub fn list_of(item: InferredType) -> Self {
        InferredType::ListOf(Box::new(item))
    }
}
