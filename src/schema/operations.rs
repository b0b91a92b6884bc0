//! Schema loading and validation.

use super::model::Schema;
use crate::error::{FieldcheckError, Result};
use std::collections::HashSet;
use std::path::Path;

impl Schema {
    /// Load a schema from a YAML (or JSON) file.
    ///
    /// # Returns
    ///
    /// * `Ok(Schema)` - Successfully loaded and validated schema
    /// * `Err(FieldcheckError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FieldcheckError::UserError(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: Schema = serde_yaml::from_str(yaml)
            .map_err(|e| FieldcheckError::UserError(format!("failed to parse schema YAML: {}", e)))?;

        schema.validate()?;
        Ok(schema)
    }

    /// Serialize the schema to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FieldcheckError::UserError(format!("failed to serialize schema to YAML: {}", e))
        })
    }

    /// Check the field declarations.
    ///
    /// - field names must be non-empty
    /// - field names must be unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for field in &self.fields {
            if field.name.is_empty() {
                return Err(FieldcheckError::UserError(
                    "schema validation failed: field names must be non-empty".to_string(),
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FieldcheckError::UserError(format!(
                    "schema validation failed: duplicate field '{}'",
                    field.name
                )));
            }
        }

        Ok(())
    }

    /// Name used in reports: the declared name or `record`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("record")
    }

    /// Number of fields that carry a non-empty rule.
    pub fn rule_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.rule.as_deref().is_some_and(|r| !r.is_empty()))
            .count()
    }
}
