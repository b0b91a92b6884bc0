//! Declarative record definitions.

/// Define a struct together with its [`Reflect`](crate::Reflect) impl.
///
/// Fields may carry a `#[validate("rule")]` attribute placed after any doc
/// comments. A field counts as exported only when it is declared `pub`;
/// restricted visibilities such as `pub(crate)` do not qualify.
///
/// ```
/// fieldcheck::record! {
///     #[derive(Debug, Clone)]
///     pub struct Account {
///         /// Login handle.
///         #[validate("min:3,max:16")]
///         pub login: String,
///         #[validate("min:18")]
///         pub age: i32,
///         #[validate("in:admin,staff,guest")]
///         pub roles: Vec<String>,
///         pub nickname: String,
///     }
/// }
///
/// let account = Account {
///     login: "ann".to_string(),
///     age: 30,
///     roles: vec!["staff".to_string()],
///     nickname: String::new(),
/// };
/// assert!(fieldcheck::validate(&account).is_ok());
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$smeta:meta])*
        $svis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[validate($rule:literal)])?
                $fvis:vis $fname:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$smeta])*
        $svis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $fname: $fty,
            )*
        }

        impl $crate::Reflect for $name {
            fn reflect(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(::std::vec![
                    $(
                        $crate::__record_field!(
                            stringify!($fname),
                            stringify!($fvis) == "pub",
                            &self.$fname
                            $(, $rule)?
                        )
                    ),*
                ])
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    ($name:expr, $exported:expr, $value:expr) => {
        $crate::FieldRef::untagged($name, $exported)
    };
    ($name:expr, $exported:expr, $value:expr, $rule:literal) => {
        $crate::FieldRef::tagged(
            $name,
            $exported,
            $rule,
            $crate::AsFieldValue::as_field_value($value),
        )
    };
}
