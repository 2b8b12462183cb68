use core::fmt;

use crate::Value;

/// The kind of a value: a closed classification every [`Value`] falls into.
///
/// Kinds are coarser than [`Shape`](crate::Shape)s. Two values of different
/// struct types both classify as [`Kind::Struct`], and a value's kind says
/// nothing about whether it fits a particular slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    /// No value at all, e.g. [`Value::Nil`]
    Invalid,
    /// `bool`
    Bool,
    /// Pointer-sized signed integer
    Isize,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// Pointer-sized unsigned integer
    Usize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// An integer wide enough to hold an address
    Uintptr,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Complex number made of two `f32`s
    Complex64,
    /// Complex number made of two `f64`s
    Complex128,
    /// Fixed-size sequence
    Array,
    /// Channel handle
    Channel,
    /// Function handle
    Function,
    /// A slot that can hold a value of any shape
    Interface,
    /// Key/value map
    Map,
    /// Pointer to another value, possibly empty
    Pointer,
    /// Variable-size sequence
    List,
    /// UTF-8 string
    String,
    /// Record with named fields
    Struct,
    /// Untyped address
    UnsafePointer,
}

impl Kind {
    /// Returns true for all signed integer kinds.
    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Kind::Isize | Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64
        )
    }

    /// Returns true for all unsigned integer kinds, `Uintptr` included.
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Kind::Usize | Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::Uintptr
        )
    }

    /// Returns true for any integer kind.
    pub const fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    /// Lowercase name of the kind, as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Isize => "isize",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Usize => "usize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Uintptr => "uintptr",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::Array => "array",
            Kind::Channel => "channel",
            Kind::Function => "function",
            Kind::Interface => "interface",
            Kind::Map => "map",
            Kind::Pointer => "pointer",
            Kind::List => "list",
            Kind::String => "string",
            Kind::Struct => "struct",
            Kind::UnsafePointer => "unsafe pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a value into its [`Kind`].
///
/// Never fails: [`Value::Nil`] classifies as [`Kind::Invalid`].
#[inline]
pub fn classify(value: &Value) -> Kind {
    value.kind()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_predicates() {
        assert!(Kind::I8.is_signed_integer());
        assert!(!Kind::I8.is_unsigned_integer());
        assert!(Kind::Uintptr.is_unsigned_integer());
        assert!(Kind::Usize.is_integer());
        assert!(!Kind::F64.is_integer());
        assert!(!Kind::String.is_integer());
    }

    #[test]
    fn kind_is_one_byte() {
        assert_eq!(core::mem::size_of::<Kind>(), 1);
    }
}
