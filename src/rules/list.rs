//! Element-wise evaluation of list values.

use crate::error::ConfigurationDefect;
use crate::violation::ViolationKind;

/// Apply `evaluate` to each element in order.
///
/// Returns the index and violation of the first failing element; later
/// elements are not inspected.
pub fn evaluate_list<T, F>(
    items: &[T],
    rule: &str,
    evaluate: F,
) -> Result<Option<(usize, ViolationKind)>, ConfigurationDefect>
where
    F: Fn(&T, &str) -> Result<Option<ViolationKind>, ConfigurationDefect>,
{
    for (index, item) in items.iter().enumerate() {
        if let Some(violation) = evaluate(item, rule)? {
            return Ok(Some((index, violation)));
        }
    }
    Ok(None)
}
