//! Schema struct definitions.

use serde::{Deserialize, Serialize};

/// Field declarations for one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Record type name, used in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key of the field in the record document.
    pub name: String,

    /// Declared kind of the field's value.
    pub kind: FieldKind,

    /// Rule string; absent or empty means the field is not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Whether the field is visible to callers (default: true).
    #[serde(default = "default_true")]
    pub exported: bool,
}

/// Kind of value a schema field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A string.
    Text,
    /// An integer that fits in `i64`.
    Int,
    /// An array of strings.
    TextList,
    /// An array of integers.
    IntList,
    /// A boolean. Declarable, but no check applies to it.
    Bool,
    /// A floating-point number. Declarable, but no check applies to it.
    Float,
}

impl FieldKind {
    /// Name used in schema files and messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::TextList => "text_list",
            FieldKind::IntList => "int_list",
            FieldKind::Bool => "bool",
            FieldKind::Float => "float",
        }
    }

    /// Element kind of a list kind.
    pub fn element(self) -> Option<FieldKind> {
        match self {
            FieldKind::TextList => Some(FieldKind::Text),
            FieldKind::IntList => Some(FieldKind::Int),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FieldSpec {
    /// An exported field of the given kind and rule.
    pub fn new(name: impl Into<String>, kind: FieldKind, rule: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind,
            rule: rule.map(str::to_string),
            exported: true,
        }
    }

    /// Mark the field as not visible to callers.
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }
}

fn default_true() -> bool {
    true
}
