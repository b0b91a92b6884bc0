//! Implementation of the `fieldcheck check` command.
//!
//! 1. Load and validate the schema file
//! 2. Read each record document (JSON by extension, YAML otherwise)
//! 3. Bind it to the schema, then validate it
//! 4. Print one report per record
//!
//! A configuration defect stops the run at once; invalid records are
//! counted and reported together at the end.

use crate::cli::CheckArgs;
use fieldcheck::error::{FieldcheckError, Result};
use fieldcheck::{Schema, SchemaRecord, ValidateError, ValidationErrors, validate};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of validating one record document.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordStatus {
    /// Every rule passed.
    Valid,
    /// One or more fields violated their rules.
    Invalid(ValidationErrors),
    /// The whole record was refused: not an object, not shaped like the
    /// schema, or a rule on an unexported field.
    Rejected(String),
}

/// Report for one record file.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub path: PathBuf,
    pub status: RecordStatus,
}

impl RecordReport {
    /// Whether the record passed validation.
    pub fn passed(&self) -> bool {
        self.status == RecordStatus::Valid
    }

    /// Format the report for terminal output.
    ///
    /// ```text
    /// users/bob.json: invalid
    ///   - name: expected string of length 4, go string of length 3
    ///   - tags[1]: value x not found in [a b]
    /// ```
    pub fn format(&self) -> String {
        let path = self.path.display();
        match &self.status {
            RecordStatus::Valid => format!("{}: ok\n", path),
            RecordStatus::Rejected(reason) => format!("{}: rejected: {}\n", path, reason),
            RecordStatus::Invalid(errors) => {
                let mut msg = format!("{}: invalid\n", path);
                for violation in errors {
                    msg.push_str(&format!("  - {}: {}\n", violation.location(), violation));
                }
                msg
            }
        }
    }
}

/// Execute the `fieldcheck check` command.
///
/// # Exit Codes
///
/// - 0: All records valid
/// - 1: Unreadable or unparsable schema/record file
/// - 2: At least one record invalid or rejected
/// - 3: Configuration defect in the schema rules
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let schema = Schema::load(&args.schema)?;
    info!(
        schema = schema.display_name(),
        fields = schema.fields.len(),
        rules = schema.rule_count(),
        "loaded schema"
    );

    let mut failed = 0;
    for path in &args.records {
        let document = read_document(path)?;
        let report = RecordReport {
            path: path.clone(),
            status: check_document(&schema, &document)?,
        };

        if !report.passed() {
            failed += 1;
        }
        print!("{}", report.format());
    }

    if failed > 0 {
        return Err(FieldcheckError::ValidationFailed(format!(
            "{} of {} {} records failed",
            failed,
            args.records.len(),
            schema.display_name()
        )));
    }

    Ok(())
}

/// Validate one document, mapping call-level outcomes to a [`RecordStatus`].
///
/// Configuration defects are returned as errors: they describe the schema,
/// not the record, and abort the whole run. A document whose values do not
/// match the declared kinds is only rejected.
pub fn check_document(schema: &Schema, document: &Value) -> Result<RecordStatus> {
    let record = match SchemaRecord::bind(schema, document) {
        Ok(record) => record,
        Err(mismatch) => {
            debug!(%mismatch, "record does not fit the schema");
            return Ok(RecordStatus::Rejected(mismatch.to_string()));
        }
    };

    match validate(&record) {
        Ok(()) => Ok(RecordStatus::Valid),
        Err(ValidateError::Invalid(errors)) => Ok(RecordStatus::Invalid(errors)),
        Err(err @ ValidateError::NotAStruct { .. }) => Ok(RecordStatus::Rejected(err.to_string())),
        Err(ref err @ ValidateError::UnexportedFieldValidation { ref field }) => Ok(
            RecordStatus::Rejected(format!("{} (field '{}')", err, field)),
        ),
        Err(err @ ValidateError::Defect { .. }) => {
            Err(FieldcheckError::ConfigurationDefect(err.to_string()))
        }
    }
}

/// Read a record document from disk.
///
/// Files ending in `.json` are parsed as JSON; everything else as YAML.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        FieldcheckError::UserError(format!(
            "failed to read record file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "parsing record");

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| {
        FieldcheckError::UserError(format!(
            "failed to parse record file '{}': {}",
            path.display(),
            e
        ))
    })
}
