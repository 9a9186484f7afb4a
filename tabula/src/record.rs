//! The record capability: named fields exposed as tagged values.
//!
//! Implement [`Record`] for a row type (usually with `#[derive(Record)]`)
//! and [`Field`] for any custom field type. Unit-only enums can use
//! `#[derive(Field)]` to render as their variant names.

use std::borrow::Cow;
use std::fmt;

/// One field of a record, tagged by shape.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// String-like data, drawn as-is.
    Text(&'a str),
    /// A sequence of strings.
    List(List<'a>),
    /// The symbolic name of an enumerated value.
    Enum(&'static str),
    /// A nullable value; `None` draws as `"-"`.
    Optional(Option<&'a dyn Field>),
    /// Anything else, drawn through its `Debug` rendering.
    Other {
        value: &'a dyn fmt::Debug,
        type_name: &'static str,
    },
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::List(list) => f.debug_list().entries(list.iter()).finish(),
            Self::Enum(name) => f.debug_tuple("Enum").field(name).finish(),
            Self::Optional(None) => f.write_str("Optional(None)"),
            Self::Optional(Some(inner)) => {
                f.debug_tuple("Optional").field(&inner.value()).finish()
            }
            Self::Other { value, type_name } => f
                .debug_struct("Other")
                .field("value", value)
                .field("type_name", type_name)
                .finish(),
        }
    }
}

/// A borrowed sequence of strings.
#[derive(Debug, Clone, Copy)]
pub enum List<'a> {
    Owned(&'a [String]),
    Borrowed(&'a [&'a str]),
}

impl<'a> List<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Owned(items) => items.len(),
            Self::Borrowed(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(self) -> impl Iterator<Item = &'a str> {
        let (owned, borrowed): (&'a [String], &'a [&'a str]) = match self {
            Self::Owned(items) => (items, &[]),
            Self::Borrowed(items) => (&[], items),
        };
        owned
            .iter()
            .map(String::as_str)
            .chain(borrowed.iter().copied())
    }

    /// Name used in the unsupported-type marker.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Owned(_) => "[String]",
            Self::Borrowed(_) => "[&str]",
        }
    }
}

/// A value that can appear as a table cell.
pub trait Field {
    fn value(&self) -> Value<'_>;
}

/// A row type whose fields become table columns.
pub trait Record {
    /// Column names, in declaration order.
    fn field_names() -> &'static [&'static str];

    /// The value of the field at `index`, or `None` past the last field.
    fn field(&self, index: usize) -> Option<Value<'_>>;

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        let index = Self::field_names().iter().position(|n| *n == name)?;
        self.field(index)
    }
}

impl Field for str {
    fn value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Field for String {
    fn value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Field for Cow<'_, str> {
    fn value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl<T: Field + ?Sized> Field for &T {
    fn value(&self) -> Value<'_> {
        (**self).value()
    }
}

impl Field for [String] {
    fn value(&self) -> Value<'_> {
        Value::List(List::Owned(self))
    }
}

impl Field for Vec<String> {
    fn value(&self) -> Value<'_> {
        Value::List(List::Owned(self))
    }
}

impl Field for Vec<&str> {
    fn value(&self) -> Value<'_> {
        Value::List(List::Borrowed(self))
    }
}

impl<T: Field> Field for Option<T> {
    fn value(&self) -> Value<'_> {
        Value::Optional(self.as_ref().map(|inner| inner as &dyn Field))
    }
}

macro_rules! impl_other_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Field for $ty {
                fn value(&self) -> Value<'_> {
                    Value::Other {
                        value: self,
                        type_name: std::any::type_name::<$ty>(),
                    }
                }
            }
        )*
    };
}

impl_other_field!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
