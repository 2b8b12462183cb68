use core::fmt;

use weft_core::{Kind, Shape, Value};

/// One step of a [`Path`](crate::Path): an integer or a string.
///
/// A token is a typed [`Value`], so it has a runtime kind and shape of its
/// own. That matters for maps, whose key type must accept the token: an
/// `i32` token does not look up entries of a map keyed by `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathToken(Value);

impl PathToken {
    /// Wrap a value as a token.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// The token's value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// The token's kind.
    pub fn kind(&self) -> Kind {
        self.0.kind()
    }

    /// The token's shape, `None` for a nil token.
    pub fn shape(&self) -> Option<&'static Shape> {
        self.0.shape()
    }

    /// The token as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// The token as a sequence index, if it is an integer of any width.
    ///
    /// The index is not bounds-checked here and may be negative.
    pub fn as_index(&self) -> Option<i128> {
        if let Some(i) = self.0.as_i64() {
            return Some(i.into());
        }
        self.0.as_u64().map(i128::from)
    }
}

impl From<Value> for PathToken {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_for_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PathToken {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self(Value::from(value))
                }
            }
        )*
    };
}

impl_from_for_token!(isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, String, &str);

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
