//! Self-description of a value for the reflector.

use super::value::FieldValue;

/// What a value looks like to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A record with named fields in declaration order.
    Record(Vec<FieldRef<'a>>),
    /// Anything that is not a record.
    Other { type_name: &'static str },
}

/// One declared field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef<'a> {
    pub name: &'a str,
    /// Whether the field is visible outside its defining module.
    pub exported: bool,
    /// The rule and value, present only when the field carries a rule.
    pub tag: Option<Tag<'a>>,
}

/// A field's rule string together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub rule: &'a str,
    pub value: FieldValue<'a>,
}

impl<'a> FieldRef<'a> {
    /// A field that carries no rule and is never inspected.
    pub fn untagged(name: &'a str, exported: bool) -> Self {
        Self {
            name,
            exported,
            tag: None,
        }
    }

    /// A field with a rule. An empty rule string counts as no rule.
    pub fn tagged(name: &'a str, exported: bool, rule: &'a str, value: FieldValue<'a>) -> Self {
        let tag = (!rule.is_empty()).then_some(Tag { rule, value });
        Self {
            name,
            exported,
            tag,
        }
    }
}

/// Values the validator can inspect.
///
/// Implemented by [`record!`](crate::record) structs and
/// [`SchemaRecord`](crate::schema::SchemaRecord). Plain values report
/// [`Shape::Other`] so that `validate` can reject them.
pub trait Reflect {
    fn reflect(&self) -> Shape<'_>;
}

macro_rules! not_a_record {
    ($($t:ty),* $(,)?) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Shape<'_> {
                    Shape::Other { type_name: stringify!($t) }
                }
            }
        )*
    };
}

not_a_record!(
    str, String, bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize
);

impl<T> Reflect for Vec<T> {
    fn reflect(&self) -> Shape<'_> {
        Shape::Other { type_name: "Vec" }
    }
}

impl<T> Reflect for [T] {
    fn reflect(&self) -> Shape<'_> {
        Shape::Other { type_name: "slice" }
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Shape<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Shape<'_> {
        (**self).reflect()
    }
}
