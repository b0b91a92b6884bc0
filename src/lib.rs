//! Fieldcheck: tag-driven validation of record fields.
//!
//! Each field of a record may carry a rule string such as `min:3,max:20`
//! or `in:admin,staff`. [`validate`] evaluates every rule-bearing field and
//! returns all violations at once instead of failing on the first one.
//!
//! - [`reflect`]: how records expose their fields ([`Reflect`], [`record!`]).
//! - [`rules`]: rule parsing and the text/number/list evaluators.
//! - [`violation`]: violation types and their messages.
//! - [`schema`]: field declarations for records that arrive as JSON or YAML.

pub mod error;
pub mod exit_codes;
pub mod reflect;
pub mod rules;
pub mod schema;
pub mod violation;

pub use error::{ConfigurationDefect, DocumentError, FieldcheckError, ValidateError};
pub use reflect::{AsFieldValue, FieldRef, FieldValue, ListElement, Reflect, Shape, Tag, validate};
pub use rules::{Check, CheckKind};
pub use schema::{FieldKind, Schema, SchemaRecord};
pub use violation::{ValidationErrors, Violation, ViolationKind};
