//! Checks against a whole-number value.

use tracing::trace;

use super::Evaluation;
use super::parser::{Check, CheckKind, checks};
use crate::error::ConfigurationDefect;
use crate::violation::ViolationKind;

/// Evaluate the first check of `rule` against `value`.
///
/// Any checks after the first are ignored: `min:5,max:1` accepts `10`.
/// `len` has no meaning for numbers and is reported as an unsupported
/// validator.
pub fn evaluate_number(value: i64, rule: &str) -> Evaluation {
    let Some(check) = checks(rule).next() else {
        return Ok(None);
    };
    let check = check?;
    trace!(check = %check.kind, arg = ?check.arg, "number check");

    let outcome = match check.kind {
        CheckKind::Len => {
            return Err(ConfigurationDefect::UnsupportedValidatorType {
                name: check.kind.name().to_string(),
            });
        }
        CheckKind::Min => at_least(&check, value),
        CheckKind::Max => at_most(&check, value),
        CheckKind::In => one_of(&check, value),
    };
    Ok(outcome.err())
}

fn at_least(check: &Check<'_>, value: i64) -> Result<(), ViolationKind> {
    let min = check.int_arg()?;
    if value < min {
        return Err(ViolationKind::BelowMin { value, min });
    }
    Ok(())
}

fn at_most(check: &Check<'_>, value: i64) -> Result<(), ViolationKind> {
    let max = check.int_arg()?;
    if value > max {
        return Err(ViolationKind::AboveMax { value, max });
    }
    Ok(())
}

fn one_of(check: &Check<'_>, value: i64) -> Result<(), ViolationKind> {
    let arg = check.raw_arg()?;
    // Parsed in order: a match ahead of a malformed candidate still passes.
    for candidate in arg.split(',') {
        let candidate: i64 = candidate.parse().map_err(|_| check.syntax_error())?;
        if candidate == value {
            return Ok(());
        }
    }
    Err(ViolationKind::NumberNotIn {
        value,
        candidates: arg.split(',').collect(),
    })
}
