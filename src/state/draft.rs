//! Draft form domain layer: field definitions and the in-progress field list

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of input control a field represents.
///
/// Union of both catalogs the backend accepts; the subset offered by the
/// composer is configurable (see `TuiConfig::field_types`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Address,
    Email,
    Phone,
    Date,
    Checkbox,
    Textarea,
    Gender,
    Title,
}

impl FieldType {
    /// All known field types, in composer display order
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Address,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Date,
        FieldType::Checkbox,
        FieldType::Textarea,
        FieldType::Gender,
        FieldType::Title,
    ];

    /// Human-readable label for the type selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Address => "Address",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Date => "Date",
            Self::Checkbox => "Checkbox",
            Self::Textarea => "Textarea",
            Self::Gender => "Gender",
            Self::Title => "Title",
        }
    }

    /// Wire name, as serialized in the `type` field
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
            Self::Gender => "gender",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.wire_name() == s)
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

/// Error returned when parsing a field type name that isn't in the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type: {0}")]
pub struct UnknownFieldType(pub String);

/// A single named, typed input definition within a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The in-progress, unsaved sequence of fields being composed.
///
/// Local-only until submission; emptied after a successful save or on cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: Vec<FieldDef>,
}

impl Draft {
    /// Append a field, preserving insertion order.
    ///
    /// The name is trimmed first; a blank name is rejected and the draft is
    /// left unchanged. Returns whether the field was added.
    pub fn add_field(&mut self, name: &str, field_type: FieldType) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.fields.push(FieldDef::new(name, field_type));
        true
    }

    /// Remove the field at `index`, preserving the relative order of the
    /// rest. Out-of-range indices are ignored.
    pub fn delete_field(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        self.fields.remove(index);
        true
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Discard all fields (after a successful save or on cancel)
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
