//! The `validate` entry point.

use tracing::debug;

use super::shape::{Reflect, Shape, Tag};
use super::value::FieldValue;
use crate::error::{ConfigurationDefect, ValidateError};
use crate::rules::{evaluate_list, evaluate_number, evaluate_text};
use crate::violation::{ValidationErrors, Violation, ViolationKind};

/// Validate every rule-bearing field of `record`.
///
/// Fields are visited in declaration order. Fields without a rule are
/// skipped. A rule on an unexported field aborts the whole call with
/// [`ValidateError::UnexportedFieldValidation`], and violations already
/// collected from earlier fields are dropped. A configuration defect aborts
/// the call the same way. Otherwise every field's violation is collected
/// and returned together.
///
/// # Example
///
/// ```
/// fieldcheck::record! {
///     pub struct Signup {
///         #[validate("len:4")]
///         pub name: String,
///         #[validate("in:1,2,3")]
///         pub plan: i64,
///     }
/// }
///
/// let ok = Signup { name: "Anna".to_string(), plan: 2 };
/// assert!(fieldcheck::validate(&ok).is_ok());
///
/// let bad = Signup { name: "Bob".to_string(), plan: 9 };
/// let err = fieldcheck::validate(&bad).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "expected string of length 4, go string of length 3\nvalue 9 not found in [1 2 3]"
/// );
/// ```
pub fn validate<R: Reflect + ?Sized>(record: &R) -> Result<(), ValidateError> {
    let fields = match record.reflect() {
        Shape::Record(fields) => fields,
        Shape::Other { type_name } => {
            debug!(type_name, "refusing to validate a non-record value");
            return Err(ValidateError::NotAStruct { type_name });
        }
    };

    let mut violations = Vec::new();

    for field in &fields {
        let Some(tag) = &field.tag else {
            debug!(field = field.name, "skipping field without rule");
            continue;
        };

        if !field.exported {
            debug!(field = field.name, "rule on unexported field");
            return Err(ValidateError::UnexportedFieldValidation {
                field: field.name.to_string(),
            });
        }

        debug!(
            field = field.name,
            rule = tag.rule,
            kind = tag.value.kind_name(),
            "validating field"
        );

        let failure = evaluate(tag).map_err(|defect| ValidateError::Defect {
            field: field.name.to_string(),
            defect,
        })?;

        if let Some((index, kind)) = failure {
            violations.push(Violation {
                field: field.name.to_string(),
                index,
                kind,
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::from(violations).into())
    }
}

/// Dispatch one tagged field to the evaluator for its kind.
fn evaluate(tag: &Tag<'_>) -> Result<Option<(Option<usize>, ViolationKind)>, ConfigurationDefect> {
    let scalar = |found: Option<ViolationKind>| found.map(|kind| (None, kind));
    let element = |found: Option<(usize, ViolationKind)>| found.map(|(i, kind)| (Some(i), kind));

    match &tag.value {
        FieldValue::Text(value) => evaluate_text(value, tag.rule).map(scalar),
        FieldValue::Int(value) => evaluate_number(*value, tag.rule).map(scalar),
        FieldValue::TextList(items) => {
            evaluate_list(items, tag.rule, |item, rule| evaluate_text(item, rule)).map(element)
        }
        FieldValue::IntList(items) => {
            evaluate_list(items, tag.rule, |item, rule| evaluate_number(*item, rule)).map(element)
        }
        FieldValue::Unsupported(kind) => Err(ConfigurationDefect::UnsupportedFieldType { kind: *kind }),
    }
}
