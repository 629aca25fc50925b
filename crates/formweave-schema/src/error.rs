use thiserror::Error;

/// Structural errors for schema trees supplied from outside the engine.
///
/// `parse` itself is total and never returns these; they come from
/// [`validate_tree`](crate::validate_tree) /
/// [`validate_schema`](crate::validate_schema) when a persisted or
/// hand-constructed tree violates the invariants the engine maintains.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing `__root_schema__` entry at the top level")]
    MissingRoot,

    #[error("unexpected top-level entry `{0}` (only `__root_schema__` is allowed)")]
    UnexpectedTopLevelKey(String),

    #[error("scalar node `{0}` must not have children")]
    ScalarWithChildren(String),

    #[error("array node `{name}` has unexpected child `{key}` (only `__array_item__` is allowed)")]
    UnexpectedArrayChild { name: String, key: String },
}
