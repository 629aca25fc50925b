//! Field-type resolution: picking the default form control for a value.

use formweave_fields::FieldType;
use serde_json::Value;

use crate::data_type::DataType;

/// Default field type for a data-type category.
///
/// This is the fixed capability table; [`resolve_field_type`] layers the
/// array-element override on top of it.
pub fn default_field_for(data_type: DataType) -> FieldType {
    match data_type {
        DataType::String => FieldType::TextInput,
        DataType::Number => FieldType::NumberInput,
        DataType::Boolean => FieldType::Switch,
        DataType::Object => FieldType::Object,
        DataType::Array => FieldType::Array,
        // No value to infer a shape from; a text input can hold anything.
        DataType::Undefined => FieldType::TextInput,
    }
}

/// Resolve the field type for a value.
///
/// Arrays of scalars (string or number elements) resolve to a multi-select
/// rather than the generic repeated-group control: editing a list of tags
/// or ids is a picking task, not a per-row form. Arrays of anything else
/// keep [`FieldType::Array`].
pub fn resolve_field_type(value: &Value) -> FieldType {
    if let Some(element) = DataType::of_element(value) {
        return match element {
            DataType::String | DataType::Number => FieldType::MultiSelect,
            _ => FieldType::Array,
        };
    }

    default_field_for(DataType::of(value))
}
