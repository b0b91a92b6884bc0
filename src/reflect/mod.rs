//! Reflector: turns a record into the list of rule-bearing fields.
//!
//! Records describe themselves through [`Reflect`], either by hand, through
//! the [`record!`](crate::record) macro, or via a [`Schema`](crate::schema::Schema)
//! for dynamic data. [`validate`] walks those fields in declaration order and
//! hands each tagged one to the rule engine.

mod macros;
mod shape;
mod validator;
mod value;


pub use shape::{FieldRef, Reflect, Shape, Tag};
pub use validator::validate;
pub use value::{AsFieldValue, FieldValue, ListElement};
