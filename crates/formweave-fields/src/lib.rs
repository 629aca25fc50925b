#![doc = include_str!("../README.md")]

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A node's configuration: the field-specific settings a renderer reads and
/// writes. Seeded from [`FieldType::component_default_values`] when a node is
/// first inferred, opaque to the inference engine afterwards.
pub type Config = serde_json::Map<String, Value>;

/// The kind of editable control a schema node renders as.
///
/// This is a closed catalog: the resolver in `formweave-schema` maps every
/// data-type category to one of these, so adding a variant here means
/// extending that mapping too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    TextInput,
    NumberInput,
    Switch,
    Checkbox,
    Select,
    MultiSelect,
    RadioGroup,
    Datepicker,
    /// Generic repeated-group control for arrays of objects or arrays.
    Array,
    /// Nested field group for objects.
    Object,
}

impl FieldType {
    /// Every field type in the catalog.
    pub const ALL: [FieldType; 10] = [
        FieldType::TextInput,
        FieldType::NumberInput,
        FieldType::Switch,
        FieldType::Checkbox,
        FieldType::Select,
        FieldType::MultiSelect,
        FieldType::RadioGroup,
        FieldType::Datepicker,
        FieldType::Array,
        FieldType::Object,
    ];

    /// Default configuration seeded into a freshly inferred node of this
    /// field type. The engine copies this once per fresh build; renderers
    /// own the copy from then on.
    pub fn component_default_values(&self) -> Config {
        let defaults = match self {
            FieldType::TextInput => json!({
                "isDisabled": false,
                "isRequired": false,
                "isSpellCheck": false,
                "isVisible": true,
                "placeholderText": "",
            }),
            FieldType::NumberInput => json!({
                "isDisabled": false,
                "isRequired": false,
                "isVisible": true,
            }),
            FieldType::Switch => json!({
                "alignWidget": "LEFT",
                "isDisabled": false,
                "isVisible": true,
            }),
            FieldType::Checkbox => json!({
                "alignWidget": "LEFT",
                "isDisabled": false,
                "isVisible": true,
            }),
            FieldType::Select => json!({
                "isDisabled": false,
                "isVisible": true,
                "serverSideFiltering": false,
                "options": default_options(),
            }),
            FieldType::MultiSelect => json!({
                "isDisabled": false,
                "isRequired": false,
                "isVisible": true,
                "serverSideFiltering": false,
                "options": default_options(),
            }),
            FieldType::RadioGroup => json!({
                "isDisabled": false,
                "isVisible": true,
                "options": [
                    { "label": "Yes", "value": "Y" },
                    { "label": "No", "value": "N" },
                ],
            }),
            FieldType::Datepicker => json!({
                "convertToISO": false,
                "dateFormat": "YYYY-MM-DD HH:mm",
                "isDisabled": false,
                "isRequired": false,
                "isVisible": true,
            }),
            FieldType::Array => json!({
                "isCollapsible": true,
                "isDisabled": false,
                "isVisible": true,
            }),
            FieldType::Object => json!({
                "isDisabled": false,
                "isVisible": true,
            }),
        };

        match defaults {
            Value::Object(map) => map,
            // json!({ ... }) with an object literal always yields an object
            _ => unreachable!(),
        }
    }
}

fn default_options() -> Value {
    json!([
        { "label": "Blue", "value": "BLUE" },
        { "label": "Green", "value": "GREEN" },
        { "label": "Red", "value": "RED" },
    ])
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::TextInput => "Text Input",
            FieldType::NumberInput => "Number Input",
            FieldType::Switch => "Switch",
            FieldType::Checkbox => "Checkbox",
            FieldType::Select => "Select",
            FieldType::MultiSelect => "Multiselect",
            FieldType::RadioGroup => "Radio Group",
            FieldType::Datepicker => "Datepicker",
            FieldType::Array => "Array",
            FieldType::Object => "Object",
        };
        write!(f, "{name}")
    }
}
