//! Error types for fieldcheck.
//!
//! Uses thiserror for derive macros. Two families live here:
//! - [`ValidateError`] is what a single `validate` call returns.
//! - [`FieldcheckError`] covers tooling around it (schema files, the CLI)
//!   and maps each variant to a process exit code.

use crate::exit_codes;
use crate::schema::FieldKind;
use crate::violation::ValidationErrors;
use thiserror::Error;

/// A rule or field declaration the validator cannot interpret.
///
/// Defects point at a programming or configuration mistake, never at bad
/// input data, and are kept apart from [`ValidationErrors`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationDefect {
    /// A rule is attached to a field whose kind has no evaluator.
    #[error("unsupported field type {kind}")]
    UnsupportedFieldType { kind: &'static str },

    /// A rule names a check that does not exist (or does not apply to the field kind).
    #[error("unsupported validator type {name}")]
    UnsupportedValidatorType { name: String },
}

/// Outcome of a failed `validate` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The value handed to `validate` is not a record.
    #[error("wrong argument given, should be a struct")]
    NotAStruct { type_name: &'static str },

    /// A field carries a rule but is not publicly visible.
    #[error("validation for unexported field is not allowed")]
    UnexportedFieldValidation { field: String },

    /// One or more fields failed their rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// A rule or field kind could not be interpreted.
    #[error("field '{field}': {defect}")]
    Defect {
        field: String,
        #[source]
        defect: ConfigurationDefect,
    },
}

impl ValidateError {
    /// Whether this error signals a configuration defect rather than invalid data.
    pub fn is_defect(&self) -> bool {
        matches!(self, ValidateError::Defect { .. })
    }

    /// The collected violations, if this is an ordinary validation failure.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// A record document that does not fit its schema.
///
/// This is a fault in the data, reported per record. It never aborts a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A field with a rule is absent from the document.
    #[error("missing field '{field}'")]
    MissingField { field: String },

    /// A value does not match its declared kind.
    #[error("field '{field}' should be {expected}, found {found}")]
    WrongKind {
        field: String,
        expected: FieldKind,
        found: &'static str,
    },
}

/// Main error type for fieldcheck tooling.
#[derive(Error, Debug)]
pub enum FieldcheckError {
    /// User provided invalid arguments or an unreadable/invalid file.
    #[error("{0}")]
    UserError(String),

    /// One or more records failed validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A rule or schema cannot be interpreted.
    #[error("Configuration defect: {0}")]
    ConfigurationDefect(String),
}

impl FieldcheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FieldcheckError::UserError(_) => exit_codes::USER_ERROR,
            FieldcheckError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
            FieldcheckError::ConfigurationDefect(_) => exit_codes::CONFIGURATION_DEFECT,
        }
    }
}

/// Result type alias for fieldcheck tooling.
pub type Result<T> = std::result::Result<T, FieldcheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::{Violation, ViolationKind};

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = FieldcheckError::UserError("missing schema".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_failed_has_correct_exit_code() {
        let err = FieldcheckError::ValidationFailed("1 of 2 records".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn configuration_defect_has_correct_exit_code() {
        let err = FieldcheckError::ConfigurationDefect("unsupported validator type foo".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIGURATION_DEFECT);
    }

    #[test]
    fn call_level_messages_are_stable() {
        let err = ValidateError::NotAStruct { type_name: "i64" };
        assert_eq!(err.to_string(), "wrong argument given, should be a struct");

        let err = ValidateError::UnexportedFieldValidation {
            field: "secret".to_string(),
        };
        assert_eq!(err.to_string(), "validation for unexported field is not allowed");
    }

    #[test]
    fn document_error_messages() {
        let err = DocumentError::MissingField {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "missing field 'code'");

        let err = DocumentError::WrongKind {
            field: "tags[1]".to_string(),
            expected: FieldKind::Text,
            found: "integer",
        };
        assert_eq!(err.to_string(), "field 'tags[1]' should be text, found integer");
    }

    #[test]
    fn defect_is_distinguishable_from_violations() {
        let defect = ValidateError::Defect {
            field: "score".to_string(),
            defect: ConfigurationDefect::UnsupportedFieldType { kind: "f64" },
        };
        assert!(defect.is_defect());
        assert!(defect.violations().is_none());
        assert_eq!(defect.to_string(), "field 'score': unsupported field type f64");

        let invalid = ValidateError::from(ValidationErrors::from(vec![Violation::new(
            "name",
            ViolationKind::TooLong { actual: 6, max: 5 },
        )]));
        assert!(!invalid.is_defect());
        assert_eq!(invalid.violations().map(ValidationErrors::len), Some(1));
        assert_eq!(
            invalid.to_string(),
            "string of length 6 greater than expected max 5"
        );
    }
}
