//! Rule engine.
//!
//! A rule string such as `min:3,max:20` is parsed lazily into [`Check`]s
//! and evaluated against one value:
//! - Text values run every check in order until one fails.
//! - Number values consult only the first check of the rule string.
//! - Lists apply the element evaluator to each element and stop at the first failure.
//!
//! Evaluators return `Ok(None)` for a passing value, `Ok(Some(kind))` for a
//! violation (including malformed arguments), and `Err` for a configuration
//! defect such as an unknown check name.

mod list;
mod number;
mod parser;
mod text;


use crate::error::ConfigurationDefect;
use crate::violation::ViolationKind;

pub use list::evaluate_list;
pub use number::evaluate_number;
pub use parser::{Check, CheckKind, Checks, checks};
pub use text::evaluate_text;

/// Result of evaluating one value against one rule string.
pub type Evaluation = Result<Option<ViolationKind>, ConfigurationDefect>;
