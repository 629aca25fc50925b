//! Incremental schema inference.
//!
//! One pass takes the current data and the tree inferred on the previous
//! pass. Per key the differ decides between two outcomes:
//!
//! - **fresh**: no matching previous node, or the data type changed — the
//!   node is rebuilt and its configuration reset to the field-type
//!   catalog's defaults;
//! - **preserved**: a previous node with the same data type exists — the
//!   node is carried over untouched except for its children, which are
//!   re-diffed recursively.
//!
//! Reconciliation is keyed by object property name; array elements have no
//! stable identity, so an array collapses into a single synthetic
//! `__array_item__` slot built from a representative element. Renamed keys
//! are not detected: a removed key plus a similarly shaped new key is a
//! remove and an add.
//!
//! Every function here is pure. The previous tree is read-only input and
//! the result is a freshly built value, so callers may keep old trees
//! around (undo stacks, snapshots) without aliasing concerns.

use serde_json::{Map as JsonMap, Value};

use crate::data_type::DataType;
use crate::resolve::resolve_field_type;
use crate::schema::{ARRAY_ITEM_KEY, ROOT_SCHEMA_KEY, Schema, SchemaNode, name_and_label};

/// Run one full inference pass.
///
/// `previous` is the tree returned by the last pass (empty on the first
/// call). Absent or `null` root data is a no-op returning the previous tree
/// unchanged — there is nothing new to infer from, and user customizations
/// must never be destroyed by a transient empty state.
///
/// The result always has exactly one top-level entry, keyed
/// [`ROOT_SCHEMA_KEY`]. The root node itself follows the same rule as any
/// other: preserved (configuration intact) while the root data type is
/// unchanged, rebuilt fresh when it changes.
pub fn parse(data: Option<&Value>, previous: &Schema) -> Schema {
    let data = match data {
        Some(value) if !value.is_null() => value,
        _ => return previous.clone(),
    };

    let root = match previous.get(ROOT_SCHEMA_KEY) {
        Some(prev) if DataType::of(data) == prev.data_type => merge_node(data, prev),
        _ => build_node("", data),
    };

    let mut tree = Schema::default();
    tree.insert(ROOT_SCHEMA_KEY.to_string(), root);
    tree
}

/// Build a fresh node for a key/value pair with no reusable prior state.
///
/// The name and label are derived from `key` (the root is built from the
/// empty key and gets empty ones), the configuration is seeded from the
/// resolved field type's catalog defaults, and container values recurse
/// with an empty previous schema — every descendant is fresh too.
pub fn build_node(key: &str, value: &Value) -> SchemaNode {
    let (name, label) = name_and_label(key);
    fresh_node(name, label, value)
}

fn fresh_node(name: String, label: String, value: &Value) -> SchemaNode {
    let field_type = resolve_field_type(value);
    SchemaNode {
        name,
        label,
        data_type: DataType::of(value),
        field_type,
        config: field_type.component_default_values(),
        children: diff_children(value, &Schema::default()),
    }
}

/// Update a node whose data type is unchanged: everything is carried over
/// from `previous` except the children, which are re-diffed against the new
/// value.
///
/// The caller must have checked that `DataType::of(value)` equals
/// `previous.data_type`; that check is what makes keeping the previous
/// name, field type and configuration safe.
pub fn merge_node(value: &Value, previous: &SchemaNode) -> SchemaNode {
    SchemaNode {
        children: diff_children(value, &previous.children),
        ..previous.clone()
    }
}

fn diff_children(value: &Value, previous: &Schema) -> Schema {
    match value {
        Value::Object(data) => diff_object(data, previous),
        Value::Array(items) => diff_array(items, previous),
        _ => Schema::default(),
    }
}

/// Diff an object's key set against the previous schema.
///
/// Keys present in both merge when their data type is unchanged and are
/// rebuilt fresh when it changed (no grandchild configuration is reused in
/// that case). New keys build fresh; keys no longer in the data are pruned.
pub fn diff_object(data: &JsonMap<String, Value>, previous: &Schema) -> Schema {
    let mut result = Schema::with_capacity_and_hasher(data.len(), Default::default());
    for (key, value) in data {
        let node = match previous.get(key.as_str()) {
            Some(prev) if DataType::of(value) == prev.data_type => merge_node(value, prev),
            _ => build_node(key, value),
        };
        result.insert(key.clone(), node);
    }
    result
}

/// Diff an array by collapsing its elements into one representative value
/// and reconciling the single synthetic [`ARRAY_ITEM_KEY`] slot against it.
///
/// An empty array has no representative and yields an empty schema — a
/// previously inferred item node is dropped along with the elements it
/// described.
pub fn diff_array(items: &[Value], previous: &Schema) -> Schema {
    let mut result = Schema::default();
    let Some(representative) = normalize_array_value(items) else {
        return result;
    };

    let node = match previous.get(ARRAY_ITEM_KEY) {
        Some(prev) if DataType::of(&representative) == prev.data_type => {
            merge_node(&representative, prev)
        }
        _ => {
            // The synthetic slot keeps its verbatim name; only the label is
            // derived.
            let (_, label) = name_and_label(ARRAY_ITEM_KEY);
            fresh_node(ARRAY_ITEM_KEY.to_string(), label, &representative)
        }
    };
    result.insert(ARRAY_ITEM_KEY.to_string(), node);
    result
}

/// Pick the representative element standing in for all of an array's
/// elements.
///
/// - empty array: `None`;
/// - all elements objects: the shallow union of every element (see
///   [`plausible_object_from_array`]);
/// - otherwise: the first element.
pub fn normalize_array_value(items: &[Value]) -> Option<Value> {
    let first = items.first()?;

    if items.iter().all(|item| DataType::of(item) == DataType::Object) {
        Some(Value::Object(plausible_object_from_array(items)))
    } else {
        Some(first.clone())
    }
}

/// Squash an array of objects into one object holding the union of all
/// keys, later elements winning on collision.
///
/// This is a shallow merge: nested structures are not merged across
/// elements, so the result may not reflect every element's shape for
/// highly heterogeneous arrays. That approximation is the documented
/// contract — downstream configuration depends on the collapsed shape.
pub fn plausible_object_from_array(items: &[Value]) -> JsonMap<String, Value> {
    let mut merged = JsonMap::new();
    for item in items {
        if let Value::Object(fields) = item {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}
