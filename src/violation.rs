//! Violation types produced by the rule engine.
//!
//! A [`Violation`] pairs a failing check with the field it was attached to.
//! The message text of each [`ViolationKind`] is part of the observable
//! contract and must not change.

use std::fmt;

use thiserror::Error;

use crate::rules::CheckKind;

/// Candidate list of an `in` check, rendered as `[a b c]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates(pub Vec<String>);

impl<S: Into<String>> FromIterator<S> for Candidates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

/// Why a single value failed a single check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// `len:N` on text.
    #[error("expected string of length {expected}, go string of length {actual}")]
    LengthMismatch { expected: i64, actual: usize },

    /// `min:N` on text.
    #[error("string of length {actual} less than expected min {min}")]
    TooShort { actual: usize, min: i64 },

    /// `max:N` on text.
    #[error("string of length {actual} greater than expected max {max}")]
    TooLong { actual: usize, max: i64 },

    /// `in:...` on text.
    #[error("value {value} not found in {candidates}")]
    TextNotIn { value: String, candidates: Candidates },

    /// `min:N` on a number.
    #[error("field value {value} less than expected min {min}")]
    BelowMin { value: i64, min: i64 },

    /// `max:N` on a number.
    #[error("field value {value} greater than expected max {max}")]
    AboveMax { value: i64, max: i64 },

    /// `in:...` on a number.
    #[error("value {value} not found in {candidates}")]
    NumberNotIn { value: i64, candidates: Candidates },

    /// The check argument could not be parsed.
    #[error("invalid validator syntax")]
    InvalidValidatorSyntax { check: CheckKind, arg: Option<String> },
}

impl ViolationKind {
    /// The check that produced this violation.
    pub fn check(&self) -> CheckKind {
        match self {
            ViolationKind::LengthMismatch { .. } => CheckKind::Len,
            ViolationKind::TooShort { .. } | ViolationKind::BelowMin { .. } => CheckKind::Min,
            ViolationKind::TooLong { .. } | ViolationKind::AboveMax { .. } => CheckKind::Max,
            ViolationKind::TextNotIn { .. } | ViolationKind::NumberNotIn { .. } => CheckKind::In,
            ViolationKind::InvalidValidatorSyntax { check, .. } => *check,
        }
    }

    /// Whether this is a malformed-rule outcome rather than a data failure.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, ViolationKind::InvalidValidatorSyntax { .. })
    }
}

/// One failed check on one field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct Violation {
    /// Name of the field the rule was attached to.
    pub field: String,
    /// Position of the failing element when the field is a list.
    pub index: Option<usize>,
    /// What went wrong.
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a violation for a scalar field.
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            index: None,
            kind,
        }
    }

    /// Create a violation for one element of a list field.
    pub fn at(field: impl Into<String>, index: usize, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            index: Some(index),
            kind,
        }
    }

    /// The check that failed.
    pub fn check(&self) -> CheckKind {
        self.kind.check()
    }

    /// Field label for reports: `tags` or `tags[2]`.
    pub fn location(&self) -> String {
        match self.index {
            Some(index) => format!("{}[{}]", self.field, index),
            None => self.field.clone(),
        }
    }
}

/// Every violation found during one validation call, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
