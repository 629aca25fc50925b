#![doc = include_str!("../README.md")]

mod data_type;
mod error;
mod parse;
mod resolve;
mod schema;

pub use data_type::DataType;
pub use error::SchemaError;
pub use parse::{
    build_node, diff_array, diff_object, merge_node, normalize_array_value, parse,
    plausible_object_from_array,
};
pub use resolve::{default_field_for, resolve_field_type};
pub use schema::{
    ARRAY_ITEM_KEY, Config, ROOT_SCHEMA_KEY, Schema, SchemaNode, name_and_label, validate_schema,
    validate_tree,
};

pub use formweave_fields::FieldType;
