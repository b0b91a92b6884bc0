//! Implementation of the `fieldcheck explain` command.

use crate::cli::ExplainArgs;
use fieldcheck::error::{FieldcheckError, Result};
use fieldcheck::rules::checks;
use fieldcheck::violation::Candidates;
use fieldcheck::{Check, CheckKind};

/// Execute the `fieldcheck explain` command.
pub fn cmd_explain(args: ExplainArgs) -> Result<()> {
    for line in explain_rule(&args.rule)? {
        println!("{}", line);
    }
    Ok(())
}

/// Describe each check of a rule string, one line per check.
pub fn explain_rule(rule: &str) -> Result<Vec<String>> {
    if rule.is_empty() {
        return Err(FieldcheckError::UserError(
            "rule string is empty; fields without a rule are not validated".to_string(),
        ));
    }

    checks(rule)
        .map(|check| {
            check
                .map(describe)
                .map_err(|defect| FieldcheckError::ConfigurationDefect(defect.to_string()))
        })
        .collect()
}

fn describe(check: Check<'_>) -> String {
    match (check.kind, check.arg) {
        (CheckKind::In, Some(arg)) => {
            let candidates: Candidates = if arg.is_empty() {
                Candidates::default()
            } else {
                arg.split(',').collect()
            };
            format!("in {}", candidates)
        }
        (kind, Some(arg)) => format!("{} {}", kind, arg),
        (kind, None) => format!("{} (missing argument)", kind),
    }
}
