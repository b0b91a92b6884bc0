//! JSON documents viewed through a schema.

use serde_json::Value;

use super::model::{FieldKind, FieldSpec, Schema};
use crate::error::DocumentError;
use crate::reflect::{FieldRef, FieldValue, Reflect, Shape};

/// A JSON document read through the schema that describes it.
///
/// Built with [`SchemaRecord::bind`], which checks the document against the
/// declared field kinds before anything is validated.
#[derive(Debug, Clone)]
pub struct SchemaRecord<'a> {
    shape: Shape<'a>,
}

impl<'a> SchemaRecord<'a> {
    /// Read the declared fields of `value`.
    ///
    /// A non-object value binds and later reports as [`Shape::Other`]. For an
    /// object, every field with a rule must be present and hold a value of
    /// its declared kind. Fields declared `bool` or `float` are not read:
    /// validating them reports a configuration defect instead.
    pub fn bind(schema: &'a Schema, value: &'a Value) -> Result<Self, DocumentError> {
        let Value::Object(object) = value else {
            return Ok(Self {
                shape: Shape::Other {
                    type_name: json_kind(value),
                },
            });
        };

        let fields = schema
            .fields
            .iter()
            .map(|spec| match spec.rule.as_deref() {
                Some(rule) if !rule.is_empty() => {
                    let value = read_field(spec, object.get(&spec.name))?;
                    Ok(FieldRef::tagged(&spec.name, spec.exported, rule, value))
                }
                _ => Ok(FieldRef::untagged(&spec.name, spec.exported)),
            })
            .collect::<Result<Vec<_>, DocumentError>>()?;

        Ok(Self {
            shape: Shape::Record(fields),
        })
    }
}

impl Reflect for SchemaRecord<'_> {
    fn reflect(&self) -> Shape<'_> {
        self.shape.clone()
    }
}

fn read_field<'a>(spec: &FieldSpec, found: Option<&'a Value>) -> Result<FieldValue<'a>, DocumentError> {
    let wrong = |value: &Value| wrong_kind(spec.name.clone(), spec.kind, value);

    match (spec.kind, found) {
        (kind @ (FieldKind::Bool | FieldKind::Float), _) => Ok(FieldValue::Unsupported(kind.name())),
        (_, None) => Err(DocumentError::MissingField {
            field: spec.name.clone(),
        }),
        (FieldKind::Text, Some(value)) => value.as_str().map(FieldValue::Text).ok_or_else(|| wrong(value)),
        (FieldKind::Int, Some(value)) => value.as_i64().map(FieldValue::Int).ok_or_else(|| wrong(value)),
        (FieldKind::TextList, Some(value)) => {
            read_list(spec, value, Value::as_str).map(FieldValue::TextList)
        }
        (FieldKind::IntList, Some(value)) => {
            read_list(spec, value, Value::as_i64).map(FieldValue::IntList)
        }
    }
}

fn read_list<'a, T>(
    spec: &FieldSpec,
    value: &'a Value,
    read: impl Fn(&'a Value) -> Option<T>,
) -> Result<Vec<T>, DocumentError> {
    let Value::Array(items) = value else {
        return Err(wrong_kind(spec.name.clone(), spec.kind, value));
    };
    let element = spec.kind.element().unwrap_or(spec.kind);

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            read(item).ok_or_else(|| wrong_kind(format!("{}[{}]", spec.name, index), element, item))
        })
        .collect()
}

fn wrong_kind(field: String, expected: FieldKind, found: &Value) -> DocumentError {
    DocumentError::WrongKind {
        field,
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "integer outside the i64 range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
