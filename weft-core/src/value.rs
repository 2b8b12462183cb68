use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::{Def, Kind, ScalarType, Shape, shapes};

/// A dynamically-typed value that knows its own [`Shape`].
///
/// Scalars carry an implicit builtin shape (see [`shapes`]); composite values
/// carry the shape they were built from. The only shapeless value is
/// [`Value::Nil`], which stands for "no value at all".
///
/// Equality is structural. Floats compare by bit pattern, which makes `Value`
/// `Eq + Hash` and lets it key a map.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent, untyped value
    #[default]
    Nil,
    /// `bool`
    Bool(bool),
    /// `isize`
    Isize(isize),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `usize`
    Usize(usize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// address-sized unsigned integer
    Uintptr(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// complex number, real and imaginary parts
    Complex64(f32, f32),
    /// complex number, real and imaginary parts
    Complex128(f64, f64),
    /// `String`
    String(String),
    /// Fixed-size sequence
    Array {
        /// the array's shape
        shape: &'static Shape,
        /// exactly as many items as the shape says
        items: Vec<Value>,
    },
    /// Variable-size sequence
    List {
        /// the list's shape
        shape: &'static Shape,
        /// the elements
        items: Vec<Value>,
    },
    /// Key/value map, in insertion order
    Map {
        /// the map's shape
        shape: &'static Shape,
        /// the entries
        entries: IndexMap<Value, Value>,
    },
    /// Pointer, possibly empty
    Pointer {
        /// the pointer's shape
        shape: &'static Shape,
        /// the value pointed to
        pointee: Option<Box<Value>>,
    },
    /// Record with named fields
    Struct {
        /// the struct's shape
        shape: &'static Shape,
        /// one value per field, in declaration order
        fields: Vec<Value>,
    },
    /// Slot holding a value of any shape
    Interface {
        /// the interface's shape
        shape: &'static Shape,
        /// the dynamic value, if any
        content: Option<Box<Value>>,
    },
    /// Function, channel or unsafe pointer handle
    Opaque {
        /// the handle's shape
        shape: &'static Shape,
    },
}

impl Value {
    /// The zero value of a shape.
    ///
    /// Scalars are zero (or empty), arrays hold zero elements, lists and maps
    /// are empty, pointers and interfaces hold nothing, and structs hold the
    /// zero value of every field.
    pub fn zero(shape: &'static Shape) -> Value {
        match shape.def {
            Def::Scalar(scalar) => Value::zero_scalar(scalar),
            Def::Array(ad) => Value::Array {
                shape,
                items: (0..ad.n).map(|_| Value::zero(ad.t)).collect(),
            },
            Def::List(_) => Value::List {
                shape,
                items: Vec::new(),
            },
            Def::Map(_) => Value::Map {
                shape,
                entries: IndexMap::new(),
            },
            Def::Pointer(_) => Value::Pointer {
                shape,
                pointee: None,
            },
            Def::Struct(sd) => Value::Struct {
                shape,
                fields: sd.fields.iter().map(|f| Value::zero(f.shape)).collect(),
            },
            Def::Interface => Value::Interface {
                shape,
                content: None,
            },
            Def::Function | Def::Channel | Def::UnsafePointer => Value::Opaque { shape },
        }
    }

    fn zero_scalar(scalar: ScalarType) -> Value {
        match scalar {
            ScalarType::Bool => Value::Bool(false),
            ScalarType::Isize => Value::Isize(0),
            ScalarType::I8 => Value::I8(0),
            ScalarType::I16 => Value::I16(0),
            ScalarType::I32 => Value::I32(0),
            ScalarType::I64 => Value::I64(0),
            ScalarType::Usize => Value::Usize(0),
            ScalarType::U8 => Value::U8(0),
            ScalarType::U16 => Value::U16(0),
            ScalarType::U32 => Value::U32(0),
            ScalarType::U64 => Value::U64(0),
            ScalarType::Uintptr => Value::Uintptr(0),
            ScalarType::F32 => Value::F32(0.0),
            ScalarType::F64 => Value::F64(0.0),
            ScalarType::Complex64 => Value::Complex64(0.0, 0.0),
            ScalarType::Complex128 => Value::Complex128(0.0, 0.0),
            ScalarType::String => Value::String(String::new()),
        }
    }

    /// The shape of this value, `None` for [`Value::Nil`].
    pub fn shape(&self) -> Option<&'static Shape> {
        let shape = match self {
            Value::Nil => return None,
            Value::Bool(_) => &shapes::BOOL,
            Value::Isize(_) => &shapes::ISIZE,
            Value::I8(_) => &shapes::I8,
            Value::I16(_) => &shapes::I16,
            Value::I32(_) => &shapes::I32,
            Value::I64(_) => &shapes::I64,
            Value::Usize(_) => &shapes::USIZE,
            Value::U8(_) => &shapes::U8,
            Value::U16(_) => &shapes::U16,
            Value::U32(_) => &shapes::U32,
            Value::U64(_) => &shapes::U64,
            Value::Uintptr(_) => &shapes::UINTPTR,
            Value::F32(_) => &shapes::F32,
            Value::F64(_) => &shapes::F64,
            Value::Complex64(..) => &shapes::COMPLEX64,
            Value::Complex128(..) => &shapes::COMPLEX128,
            Value::String(_) => &shapes::STRING,
            Value::Array { shape, .. }
            | Value::List { shape, .. }
            | Value::Map { shape, .. }
            | Value::Pointer { shape, .. }
            | Value::Struct { shape, .. }
            | Value::Interface { shape, .. }
            | Value::Opaque { shape } => *shape,
        };
        Some(shape)
    }

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Isize(_) => Kind::Isize,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Usize(_) => Kind::Usize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Uintptr(_) => Kind::Uintptr,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Complex64(..) => Kind::Complex64,
            Value::Complex128(..) => Kind::Complex128,
            Value::String(_) => Kind::String,
            Value::Array { .. } => Kind::Array,
            Value::List { .. } => Kind::List,
            Value::Map { .. } => Kind::Map,
            Value::Pointer { .. } => Kind::Pointer,
            Value::Struct { .. } => Kind::Struct,
            Value::Interface { .. } => Kind::Interface,
            Value::Opaque { shape } => shape.kind(),
        }
    }

    /// Returns true for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Convert this value into what a slot of shape `slot` stores.
    ///
    /// Returns `None` if the value's shape is not assignable to `slot`.
    /// Values headed for an interface slot are wrapped in
    /// [`Value::Interface`]; an interface value is re-wrapped rather than
    /// nested.
    pub fn fit(self, slot: &'static Shape) -> Option<Value> {
        let value = match self {
            Value::Interface { shape, content } if slot.is_interface() && shape != slot => {
                return Some(Value::Interface {
                    shape: slot,
                    content,
                });
            }
            other => other,
        };

        let shape = value.shape()?;
        if !shape.is_assignable_to(slot) {
            return None;
        }
        if slot.is_interface() && shape != slot {
            return Some(Value::Interface {
                shape: slot,
                content: Some(Box::new(value)),
            });
        }
        Some(value)
    }

    /// Build a list, fitting every item to the element shape.
    pub fn list(shape: &'static Shape, items: impl IntoIterator<Item = Value>) -> Option<Value> {
        let Def::List(ld) = shape.def else {
            return None;
        };
        let items = items
            .into_iter()
            .map(|item| item.fit(ld.t))
            .collect::<Option<Vec<_>>>()?;
        Some(Value::List { shape, items })
    }

    /// Build an array. The number of items must match the shape.
    pub fn array(shape: &'static Shape, items: impl IntoIterator<Item = Value>) -> Option<Value> {
        let Def::Array(ad) = shape.def else {
            return None;
        };
        let items = items
            .into_iter()
            .map(|item| item.fit(ad.t))
            .collect::<Option<Vec<_>>>()?;
        if items.len() != ad.n {
            return None;
        }
        Some(Value::Array { shape, items })
    }

    /// Build a map, fitting every key and value to the map's shapes.
    pub fn map(
        shape: &'static Shape,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> Option<Value> {
        let Def::Map(md) = shape.def else {
            return None;
        };
        let entries = entries
            .into_iter()
            .map(|(k, v)| Some((k.fit(md.k)?, v.fit(md.v)?)))
            .collect::<Option<IndexMap<_, _>>>()?;
        Some(Value::Map { shape, entries })
    }

    /// Build a struct from named field values. Fields left out are zero.
    pub fn structure<'n>(
        shape: &'static Shape,
        fields: impl IntoIterator<Item = (&'n str, Value)>,
    ) -> Option<Value> {
        let Def::Struct(sd) = shape.def else {
            return None;
        };
        let mut values: Vec<Value> = sd.fields.iter().map(|f| Value::zero(f.shape)).collect();
        for (name, value) in fields {
            let (index, field) = shape.field(name)?;
            values[index] = value.fit(field.shape)?;
        }
        Some(Value::Struct {
            shape,
            fields: values,
        })
    }

    /// Move this value behind a fresh pointer of the interned pointer shape.
    ///
    /// Returns `None` for [`Value::Nil`], which has no shape to point to.
    pub fn into_pointer(self) -> Option<Value> {
        let shape = self.shape()?;
        Some(Value::Pointer {
            shape: shape.pointer_to(),
            pointee: Some(Box::new(self)),
        })
    }

    /// Wrap this value in the empty interface, [`shapes::ANY`].
    pub fn into_interface(self) -> Option<Value> {
        self.fit(&shapes::ANY)
    }

    /// The boolean, if this is a `bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Any signed integer, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Isize(i) => i64::try_from(i).ok(),
            Value::I8(i) => Some(i.into()),
            Value::I16(i) => Some(i.into()),
            Value::I32(i) => Some(i.into()),
            Value::I64(i) => Some(i),
            _ => None,
        }
    }

    /// Any unsigned integer, widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Usize(u) | Value::Uintptr(u) => u64::try_from(u).ok(),
            Value::U8(u) => Some(u.into()),
            Value::U16(u) => Some(u.into()),
            Value::U32(u) => Some(u.into()),
            Value::U64(u) => Some(u),
            _ => None,
        }
    }

    /// Any float, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(f) => Some(f.into()),
            Value::F64(f) => Some(f),
            _ => None,
        }
    }

    /// Element of an array or list.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array { items, .. } | Value::List { items, .. } => items.get(index),
            _ => None,
        }
    }

    /// Value stored under `key` in a map.
    pub fn get_key(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Map { entries, .. } => entries.get(key),
            _ => None,
        }
    }

    /// Field of a struct, by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct { shape, fields } => {
                let (index, _) = shape.field(name)?;
                fields.get(index)
            }
            _ => None,
        }
    }

    /// What a non-empty pointer points to.
    pub fn pointee(&self) -> Option<&Value> {
        match self {
            Value::Pointer { pointee, .. } => pointee.as_deref(),
            _ => None,
        }
    }

    /// The dynamic content of a non-empty interface.
    pub fn content(&self) -> Option<&Value> {
        match self {
            Value::Interface { content, .. } => content.as_deref(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Isize(a), Value::Isize(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::Usize(a), Value::Usize(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::Uintptr(a), Value::Uintptr(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::Complex64(ar, ai), Value::Complex64(br, bi)) => {
                ar.to_bits() == br.to_bits() && ai.to_bits() == bi.to_bits()
            }
            (Value::Complex128(ar, ai), Value::Complex128(br, bi)) => {
                ar.to_bits() == br.to_bits() && ai.to_bits() == bi.to_bits()
            }
            (Value::String(a), Value::String(b)) => a == b,
            (
                Value::Array {
                    shape: sa,
                    items: a,
                },
                Value::Array {
                    shape: sb,
                    items: b,
                },
            )
            | (
                Value::List {
                    shape: sa,
                    items: a,
                },
                Value::List {
                    shape: sb,
                    items: b,
                },
            )
            | (
                Value::Struct {
                    shape: sa,
                    fields: a,
                },
                Value::Struct {
                    shape: sb,
                    fields: b,
                },
            ) => sa == sb && a == b,
            (
                Value::Map {
                    shape: sa,
                    entries: a,
                },
                Value::Map {
                    shape: sb,
                    entries: b,
                },
            ) => sa == sb && a == b,
            (
                Value::Pointer {
                    shape: sa,
                    pointee: a,
                },
                Value::Pointer {
                    shape: sb,
                    pointee: b,
                },
            )
            | (
                Value::Interface {
                    shape: sa,
                    content: a,
                },
                Value::Interface {
                    shape: sb,
                    content: b,
                },
            ) => sa == sb && a == b,
            (Value::Opaque { shape: a }, Value::Opaque { shape: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Isize(i) => i.hash(state),
            Value::I8(i) => i.hash(state),
            Value::I16(i) => i.hash(state),
            Value::I32(i) => i.hash(state),
            Value::I64(i) => i.hash(state),
            Value::Usize(u) | Value::Uintptr(u) => u.hash(state),
            Value::U8(u) => u.hash(state),
            Value::U16(u) => u.hash(state),
            Value::U32(u) => u.hash(state),
            Value::U64(u) => u.hash(state),
            Value::F32(f) => f.to_bits().hash(state),
            Value::F64(f) => f.to_bits().hash(state),
            Value::Complex64(re, im) => {
                re.to_bits().hash(state);
                im.to_bits().hash(state);
            }
            Value::Complex128(re, im) => {
                re.to_bits().hash(state);
                im.to_bits().hash(state);
            }
            Value::String(s) => s.hash(state),
            Value::Array { shape, items } | Value::List { shape, items } => {
                shape.hash(state);
                items.hash(state);
            }
            Value::Struct { shape, fields } => {
                shape.hash(state);
                fields.hash(state);
            }
            Value::Map { shape, entries } => {
                // map equality ignores order, so only the length goes in
                shape.hash(state);
                entries.len().hash(state);
            }
            Value::Pointer { shape, pointee } => {
                shape.hash(state);
                pointee.hash(state);
            }
            Value::Interface { shape, content } => {
                shape.hash(state);
                content.hash(state);
            }
            Value::Opaque { shape } => shape.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Isize(i) => write!(f, "{i}"),
            Value::I8(i) => write!(f, "{i}"),
            Value::I16(i) => write!(f, "{i}"),
            Value::I32(i) => write!(f, "{i}"),
            Value::I64(i) => write!(f, "{i}"),
            Value::Usize(u) | Value::Uintptr(u) => write!(f, "{u}"),
            Value::U8(u) => write!(f, "{u}"),
            Value::U16(u) => write!(f, "{u}"),
            Value::U32(u) => write!(f, "{u}"),
            Value::U64(u) => write!(f, "{u}"),
            Value::F32(x) => write!(f, "{x}"),
            Value::F64(x) => write!(f, "{x}"),
            Value::Complex64(re, im) => write!(f, "({re}{im:+}i)"),
            Value::Complex128(re, im) => write!(f, "({re}{im:+}i)"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array { items, .. } | Value::List { items, .. } => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map { entries, .. } => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Pointer { pointee, .. } => match pointee {
                Some(pointee) => write!(f, "&{pointee}"),
                None => f.write_str("nil"),
            },
            Value::Struct { shape, fields } => {
                write!(f, "{shape} {{")?;
                for (i, (field, value)) in shape.fields().iter().zip(fields).enumerate() {
                    f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(f, "{}: {value}", field.name)?;
                }
                if fields.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
            Value::Interface { content, .. } => match content {
                Some(content) => write!(f, "{content}"),
                None => f.write_str("nil"),
            },
            Value::Opaque { shape } => write!(f, "<{shape}>"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    isize => Isize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Usize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_has_no_shape() {
        assert_eq!(Value::Nil.shape(), None);
        assert_eq!(Value::Nil.kind(), Kind::Invalid);
    }

    #[test]
    fn float_keys_compare_by_bits() {
        assert_eq!(Value::F64(f64::NAN), Value::F64(f64::NAN));
        assert_ne!(Value::F64(0.0), Value::F64(-0.0));
    }

    #[test]
    fn same_number_different_width_is_different() {
        assert_ne!(Value::I32(1), Value::I64(1));
    }
}
