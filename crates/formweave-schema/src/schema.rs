//! The inferred schema tree and its structural invariants.

use ahash::RandomState;
use convert_case::{Case, Casing};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use formweave_fields::Config;
use formweave_fields::FieldType;

use crate::data_type::DataType;
use crate::error::SchemaError;

/// Key of the single top-level entry wrapping the whole inferred tree.
pub const ROOT_SCHEMA_KEY: &str = "__root_schema__";

/// Key of the synthetic entry describing an array's merged element shape.
pub const ARRAY_ITEM_KEY: &str = "__array_item__";

/// One level of inferred form structure: field key to node.
///
/// Insertion order follows the source data's key order so renderers get a
/// stable field order, but equality and the engine's semantics are
/// order-insensitive.
pub type Schema = IndexMap<String, SchemaNode, RandomState>;

/// One inferred field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Identifier derived from the source key (camel-cased), or the verbatim
    /// reserved key for the synthetic array-item slot.
    pub name: String,

    /// Human-readable label derived from the source key (title-cased).
    pub label: String,

    /// Classification of the data this node was inferred from.
    pub data_type: DataType,

    /// The editable control this node renders as.
    pub field_type: FieldType,

    /// Field-specific settings. Seeded from the field-type catalog on a
    /// fresh build, then owned by the renderer: merges carry it over
    /// untouched.
    #[serde(default)]
    pub config: Config,

    /// Nested schema; populated only for object and array nodes.
    #[serde(default)]
    pub children: Schema,
}

/// Derive a node's `name` and `label` from a source key.
///
/// `"first_name"` becomes `("firstName", "First Name")`. This applies to
/// every real data key — including one that happens to be spelled like a
/// reserved key; only the differ-injected synthetic slots keep their
/// verbatim names.
pub fn name_and_label(key: &str) -> (String, String) {
    (key.to_case(Case::Camel), key.to_case(Case::Title))
}

/// Validate the structural invariants of a full tree (as returned by
/// [`parse`](crate::parse)): exactly one top-level entry, keyed
/// [`ROOT_SCHEMA_KEY`], with every node below it well-formed.
///
/// The engine never produces an invalid tree; this is the fail-fast check
/// for trees that enter from outside — deserialized from persistence or
/// hand-edited.
pub fn validate_tree(tree: &Schema) -> Result<(), SchemaError> {
    let root = tree.get(ROOT_SCHEMA_KEY).ok_or(SchemaError::MissingRoot)?;
    if let Some(stray) = tree.keys().find(|key| *key != ROOT_SCHEMA_KEY) {
        return Err(SchemaError::UnexpectedTopLevelKey(stray.clone()));
    }
    validate_node(root)
}

/// Validate every node of one schema level and its descendants.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    schema.values().try_for_each(validate_node)
}

fn validate_node(node: &SchemaNode) -> Result<(), SchemaError> {
    match node.data_type {
        DataType::Object => {}
        DataType::Array => {
            if let Some(stray) = node.children.keys().find(|key| *key != ARRAY_ITEM_KEY) {
                return Err(SchemaError::UnexpectedArrayChild {
                    name: node.name.clone(),
                    key: stray.clone(),
                });
            }
        }
        _ => {
            if !node.children.is_empty() {
                return Err(SchemaError::ScalarWithChildren(node.name.clone()));
            }
        }
    }
    validate_schema(&node.children)
}
