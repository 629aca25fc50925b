//! Data-type classification for JSON values.
//!
//! Classification is total: every JSON value maps to exactly one category.
//! The categories are coarse on purpose — the engine only needs enough
//! resolution to pick a form control and to detect type changes between
//! passes, not to distinguish e.g. integers from floats.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse category of a JSON value.
///
/// `null` classifies as [`DataType::Undefined`]: the engine treats both as
/// "no value to infer a shape from", and the resolver falls back to the
/// text-input control for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Undefined,
}

impl DataType {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> DataType {
        match value {
            Value::Null => DataType::Undefined,
            Value::Bool(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::String,
            Value::Array(_) => DataType::Array,
            Value::Object(_) => DataType::Object,
        }
    }

    /// Classify the element type of an array value.
    ///
    /// Returns the classification of the first element ([`DataType::Undefined`]
    /// for an empty array), or `None` when `value` is not an array. The first
    /// element stands in for the whole array; heterogeneous arrays are an
    /// accepted approximation here.
    pub fn of_element(value: &Value) -> Option<DataType> {
        match value {
            Value::Array(items) => Some(
                items
                    .first()
                    .map(DataType::of)
                    .unwrap_or(DataType::Undefined),
            ),
            _ => None,
        }
    }

    /// Whether nodes of this type carry children.
    pub fn is_container(&self) -> bool {
        matches!(self, DataType::Object | DataType::Array)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Object => "object",
            DataType::Array => "array",
            DataType::Undefined => "undefined",
        };
        write!(f, "{name}")
    }
}
