//! Record schemas for dynamic data.
//!
//! A schema lists a record's fields in declaration order, each with a
//! declared kind, an optional rule string and an `exported` flag. It lets
//! JSON or YAML documents be validated exactly like `record!` structs.
//! Schema files are YAML (JSON is accepted too); unknown keys are ignored.

mod model;
mod operations;
mod record;


pub use model::{FieldKind, FieldSpec, Schema};
pub use record::SchemaRecord;
