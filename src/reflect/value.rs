//! Field values as seen by the rule engine.

/// The value of a rule-bearing field, by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A single text value.
    Text(&'a str),
    /// A single whole number.
    Int(i64),
    /// An ordered list of text values.
    TextList(Vec<&'a str>),
    /// An ordered list of whole numbers.
    IntList(Vec<i64>),
    /// A kind without an evaluator, named for diagnostics.
    Unsupported(&'static str),
}

impl FieldValue<'_> {
    /// Short kind name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) => "int",
            FieldValue::TextList(_) => "text list",
            FieldValue::IntList(_) => "int list",
            FieldValue::Unsupported(kind) => kind,
        }
    }
}

/// Conversion of a Rust field type into a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

/// Element types allowed inside a list field.
pub trait ListElement: Sized {
    fn list_value(items: &[Self]) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for &str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl ListElement for String {
    fn list_value(items: &[Self]) -> FieldValue<'_> {
        FieldValue::TextList(items.iter().map(String::as_str).collect())
    }
}

impl ListElement for &str {
    fn list_value(items: &[Self]) -> FieldValue<'_> {
        FieldValue::TextList(items.to_vec())
    }
}

macro_rules! whole_number {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }

            impl ListElement for $t {
                fn list_value(items: &[Self]) -> FieldValue<'_> {
                    FieldValue::IntList(items.iter().map(|v| i64::from(*v)).collect())
                }
            }
        )*
    };
}

whole_number!(i8, i16, i32, i64, u8, u16, u32);

impl AsFieldValue for isize {
    fn as_field_value(&self) -> FieldValue<'_> {
        match i64::try_from(*self) {
            Ok(value) => FieldValue::Int(value),
            Err(_) => FieldValue::Unsupported("isize"),
        }
    }
}

impl ListElement for isize {
    fn list_value(items: &[Self]) -> FieldValue<'_> {
        match items
            .iter()
            .map(|v| i64::try_from(*v))
            .collect::<Result<Vec<i64>, _>>()
        {
            Ok(values) => FieldValue::IntList(values),
            Err(_) => FieldValue::Unsupported("Vec<isize>"),
        }
    }
}

macro_rules! unsupported {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported(stringify!($t))
                }
            }

            impl ListElement for $t {
                fn list_value(_items: &[Self]) -> FieldValue<'_> {
                    FieldValue::Unsupported(concat!("Vec<", stringify!($t), ">"))
                }
            }
        )*
    };
}

unsupported!(bool, char, f32, f64, i128, u64, u128, usize);

impl<T: ListElement> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::list_value(self)
    }
}

impl<T: ListElement> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::list_value(self)
    }
}

impl<T: ListElement, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::list_value(self)
    }
}
