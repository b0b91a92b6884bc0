//! Checks against a text value.

use tracing::trace;

use super::Evaluation;
use super::parser::{Check, CheckKind, checks};
use crate::violation::ViolationKind;

enum Step {
    Next,
    Accept,
}

/// Evaluate every check of `rule` against `value`, in order.
///
/// The first failing check is the only violation reported. A matching
/// `in` check accepts the value immediately.
pub fn evaluate_text(value: &str, rule: &str) -> Evaluation {
    for check in checks(rule) {
        let check = check?;
        trace!(check = %check.kind, arg = ?check.arg, "text check");

        match apply(&check, value) {
            Ok(Step::Next) => {}
            Ok(Step::Accept) => return Ok(None),
            Err(violation) => return Ok(Some(violation)),
        }
    }
    Ok(None)
}

fn apply(check: &Check<'_>, value: &str) -> Result<Step, ViolationKind> {
    let actual = value.len();
    let len = i64::try_from(actual).unwrap_or(i64::MAX);

    match check.kind {
        CheckKind::Len => {
            let expected = check.int_arg()?;
            if len != expected {
                return Err(ViolationKind::LengthMismatch { expected, actual });
            }
        }
        CheckKind::Min => {
            let min = check.int_arg()?;
            if len < min {
                return Err(ViolationKind::TooShort { actual, min });
            }
        }
        CheckKind::Max => {
            let max = check.int_arg()?;
            if len > max {
                return Err(ViolationKind::TooLong { actual, max });
            }
        }
        CheckKind::In => {
            let arg = check.raw_arg()?;
            let candidates: Vec<&str> = if arg.is_empty() {
                Vec::new()
            } else {
                arg.split(',').collect()
            };

            if candidates.contains(&value) {
                return Ok(Step::Accept);
            }
            return Err(ViolationKind::TextNotIn {
                value: value.to_string(),
                candidates: candidates.into_iter().collect(),
            });
        }
    }
    Ok(Step::Next)
}
