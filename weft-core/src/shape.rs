use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Kind;

/// Describes a type: its name and how values of it are laid out.
///
/// Shapes are meant to live in static space. Declare them as `static` items
/// so that composite shapes can refer to each other (including cyclically,
/// through pointers):
///
/// ```
/// use weft_core::{Field, Shape, shapes};
///
/// static PERSON_FIELDS: [Field; 2] = [
///     Field::new("name", &shapes::STRING),
///     Field::new("friend", &PERSON_PTR),
/// ];
/// static PERSON: Shape = Shape::structure("Person", &PERSON_FIELDS);
/// static PERSON_PTR: Shape = Shape::pointer("*Person", &PERSON);
///
/// assert_eq!(PERSON.field("friend").unwrap().1.shape, &PERSON_PTR);
/// ```
///
/// Two shapes describe the same type if and only if their
/// `type_identifier`s are equal, so identifiers must be unique per type.
/// Pointer shapes created through [`Shape::pointer_to`] are named `*` followed
/// by the pointee's identifier; hand-written pointer shapes should follow the
/// same convention.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Unique name of the type, e.g. `i32`, `Person`, `Vec<String>`
    pub type_identifier: &'static str,

    /// What values of this type look like
    pub def: Def,
}

/// The definition of a shape: is it a scalar, a list, a struct?
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// A scalar, not composed of other values
    Scalar(ScalarType),

    /// Fixed-size sequence of homogeneous values, e.g. `[T; 3]`
    Array(ArrayDef),

    /// Variable-size sequence of homogeneous values, e.g. `Vec<T>`
    List(ListDef),

    /// Keys mapping to homogeneous values, e.g. `HashMap<K, V>`
    Map(MapDef),

    /// Possibly-empty pointer to a single value, e.g. `Option<Box<T>>`
    Pointer(PointerDef),

    /// Record with named fields
    Struct(StructDef),

    /// A slot that can hold a value of any shape
    Interface,

    /// Function handle. Opaque: it has no navigable contents.
    Function,

    /// Channel handle. Opaque: it has no navigable contents.
    Channel,

    /// Untyped address. Opaque: it has no navigable contents.
    UnsafePointer,
}

/// The scalar types a [`Shape`] can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarType {
    /// `bool`
    Bool,
    /// `isize`
    Isize,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `usize`
    Usize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// Address-sized unsigned integer
    Uintptr,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Complex number made of two `f32`s
    Complex64,
    /// Complex number made of two `f64`s
    Complex128,
    /// `String`
    String,
}

impl ScalarType {
    /// The kind of every value of this scalar type.
    pub const fn kind(self) -> Kind {
        match self {
            ScalarType::Bool => Kind::Bool,
            ScalarType::Isize => Kind::Isize,
            ScalarType::I8 => Kind::I8,
            ScalarType::I16 => Kind::I16,
            ScalarType::I32 => Kind::I32,
            ScalarType::I64 => Kind::I64,
            ScalarType::Usize => Kind::Usize,
            ScalarType::U8 => Kind::U8,
            ScalarType::U16 => Kind::U16,
            ScalarType::U32 => Kind::U32,
            ScalarType::U64 => Kind::U64,
            ScalarType::Uintptr => Kind::Uintptr,
            ScalarType::F32 => Kind::F32,
            ScalarType::F64 => Kind::F64,
            ScalarType::Complex64 => Kind::Complex64,
            ScalarType::Complex128 => Kind::Complex128,
            ScalarType::String => Kind::String,
        }
    }

    /// The builtin shape for this scalar type (see [`shapes`](crate::shapes)).
    pub fn shape(self) -> &'static Shape {
        use crate::shapes;
        match self {
            ScalarType::Bool => &shapes::BOOL,
            ScalarType::Isize => &shapes::ISIZE,
            ScalarType::I8 => &shapes::I8,
            ScalarType::I16 => &shapes::I16,
            ScalarType::I32 => &shapes::I32,
            ScalarType::I64 => &shapes::I64,
            ScalarType::Usize => &shapes::USIZE,
            ScalarType::U8 => &shapes::U8,
            ScalarType::U16 => &shapes::U16,
            ScalarType::U32 => &shapes::U32,
            ScalarType::U64 => &shapes::U64,
            ScalarType::Uintptr => &shapes::UINTPTR,
            ScalarType::F32 => &shapes::F32,
            ScalarType::F64 => &shapes::F64,
            ScalarType::Complex64 => &shapes::COMPLEX64,
            ScalarType::Complex128 => &shapes::COMPLEX128,
            ScalarType::String => &shapes::STRING,
        }
    }
}

/// Fixed-size array definition
#[derive(Clone, Copy, Debug)]
pub struct ArrayDef {
    /// shape of the elements
    pub t: &'static Shape,
    /// number of elements
    pub n: usize,
}

/// List definition
#[derive(Clone, Copy, Debug)]
pub struct ListDef {
    /// shape of the elements
    pub t: &'static Shape,
}

/// Map definition
#[derive(Clone, Copy, Debug)]
pub struct MapDef {
    /// shape of the keys
    pub k: &'static Shape,
    /// shape of the values
    pub v: &'static Shape,
}

/// Pointer definition
#[derive(Clone, Copy, Debug)]
pub struct PointerDef {
    /// shape of the value pointed to
    pub pointee: &'static Shape,
}

/// Struct definition
#[derive(Clone, Copy, Debug)]
pub struct StructDef {
    /// fields, in declaration order
    pub fields: &'static [Field],
}

/// Describes a field in a struct
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// name of the field, used to look it up by path
    pub name: &'static str,

    /// shape of the field's type
    pub shape: &'static Shape,

    /// whether the field can be read and written from outside
    pub visibility: Visibility,
}

/// Whether a [`Field`] is accessible from outside its struct.
///
/// Private fields can still be located by a path, but whatever is reached
/// through them can neither be read out nor written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// readable and writable
    #[default]
    Public,
    /// locatable only
    Private,
}

impl Field {
    /// A public field.
    pub const fn new(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            shape,
            visibility: Visibility::Public,
        }
    }

    /// A private field.
    pub const fn private(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            shape,
            visibility: Visibility::Private,
        }
    }

    /// Returns true if the field is public.
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }
}

impl Shape {
    /// Create a shape from its parts.
    pub const fn new(type_identifier: &'static str, def: Def) -> Self {
        Self {
            type_identifier,
            def,
        }
    }

    /// A scalar shape.
    pub const fn scalar(type_identifier: &'static str, scalar: ScalarType) -> Self {
        Self::new(type_identifier, Def::Scalar(scalar))
    }

    /// A fixed-size array of `n` elements of shape `t`.
    pub const fn array(type_identifier: &'static str, t: &'static Shape, n: usize) -> Self {
        Self::new(type_identifier, Def::Array(ArrayDef { t, n }))
    }

    /// A list of elements of shape `t`.
    pub const fn list(type_identifier: &'static str, t: &'static Shape) -> Self {
        Self::new(type_identifier, Def::List(ListDef { t }))
    }

    /// A map from `k` to `v`.
    pub const fn map(type_identifier: &'static str, k: &'static Shape, v: &'static Shape) -> Self {
        Self::new(type_identifier, Def::Map(MapDef { k, v }))
    }

    /// A pointer to `pointee`.
    pub const fn pointer(type_identifier: &'static str, pointee: &'static Shape) -> Self {
        Self::new(type_identifier, Def::Pointer(PointerDef { pointee }))
    }

    /// A struct with the given fields.
    pub const fn structure(type_identifier: &'static str, fields: &'static [Field]) -> Self {
        Self::new(type_identifier, Def::Struct(StructDef { fields }))
    }

    /// An interface: accepts values of any shape.
    pub const fn interface(type_identifier: &'static str) -> Self {
        Self::new(type_identifier, Def::Interface)
    }

    /// The kind of every value of this shape.
    pub const fn kind(&self) -> Kind {
        match self.def {
            Def::Scalar(scalar) => scalar.kind(),
            Def::Array(_) => Kind::Array,
            Def::List(_) => Kind::List,
            Def::Map(_) => Kind::Map,
            Def::Pointer(_) => Kind::Pointer,
            Def::Struct(_) => Kind::Struct,
            Def::Interface => Kind::Interface,
            Def::Function => Kind::Function,
            Def::Channel => Kind::Channel,
            Def::UnsafePointer => Kind::UnsafePointer,
        }
    }

    /// Returns true if this is an interface shape.
    pub const fn is_interface(&self) -> bool {
        matches!(self.def, Def::Interface)
    }

    /// Element shape of an array or list.
    pub const fn element(&self) -> Option<&'static Shape> {
        match self.def {
            Def::Array(ad) => Some(ad.t),
            Def::List(ld) => Some(ld.t),
            _ => None,
        }
    }

    /// Key shape of a map.
    pub const fn key(&self) -> Option<&'static Shape> {
        match self.def {
            Def::Map(md) => Some(md.k),
            _ => None,
        }
    }

    /// Value shape of a map.
    pub const fn value(&self) -> Option<&'static Shape> {
        match self.def {
            Def::Map(md) => Some(md.v),
            _ => None,
        }
    }

    /// Pointee shape of a pointer.
    pub const fn pointee(&self) -> Option<&'static Shape> {
        match self.def {
            Def::Pointer(pd) => Some(pd.pointee),
            _ => None,
        }
    }

    /// Fields of a struct; empty for anything else.
    pub const fn fields(&self) -> &'static [Field] {
        match self.def {
            Def::Struct(sd) => sd.fields,
            _ => &[],
        }
    }

    /// Look a struct field up by name, returning its index and definition.
    pub fn field(&self, name: &str) -> Option<(usize, &'static Field)> {
        self.fields()
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Whether a value of this shape may be stored in a slot of shape `slot`.
    ///
    /// Identical types are assignable to each other, and anything is
    /// assignable to an interface. Kinds alone do not decide this: two
    /// distinct struct types are not assignable to one another.
    pub fn is_assignable_to(&self, slot: &Shape) -> bool {
        slot.is_interface() || self == slot
    }

    /// The shape of a pointer to this shape.
    ///
    /// Pointer shapes are interned: asking twice for the same pointee yields
    /// the very same `&'static Shape`.
    pub fn pointer_to(&'static self) -> &'static Shape {
        crate::intern::pointer_to(self)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.type_identifier == other.type_identifier
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_identifier.hash(state);
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // composite shapes may be cyclic, so never recurse into `def`
        write!(f, "Shape({} : {})", self.type_identifier, self.kind())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier)
    }
}
