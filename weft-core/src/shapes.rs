//! Builtin shapes for scalars and the empty interface.

use crate::{ScalarType, Shape};

/// `bool`
pub static BOOL: Shape = Shape::scalar("bool", ScalarType::Bool);
/// `isize`
pub static ISIZE: Shape = Shape::scalar("isize", ScalarType::Isize);
/// `i8`
pub static I8: Shape = Shape::scalar("i8", ScalarType::I8);
/// `i16`
pub static I16: Shape = Shape::scalar("i16", ScalarType::I16);
/// `i32`
pub static I32: Shape = Shape::scalar("i32", ScalarType::I32);
/// `i64`
pub static I64: Shape = Shape::scalar("i64", ScalarType::I64);
/// `usize`
pub static USIZE: Shape = Shape::scalar("usize", ScalarType::Usize);
/// `u8`
pub static U8: Shape = Shape::scalar("u8", ScalarType::U8);
/// `u16`
pub static U16: Shape = Shape::scalar("u16", ScalarType::U16);
/// `u32`
pub static U32: Shape = Shape::scalar("u32", ScalarType::U32);
/// `u64`
pub static U64: Shape = Shape::scalar("u64", ScalarType::U64);
/// address-sized unsigned integer
pub static UINTPTR: Shape = Shape::scalar("uintptr", ScalarType::Uintptr);
/// `f32`
pub static F32: Shape = Shape::scalar("f32", ScalarType::F32);
/// `f64`
pub static F64: Shape = Shape::scalar("f64", ScalarType::F64);
/// complex number of two `f32`s
pub static COMPLEX64: Shape = Shape::scalar("complex64", ScalarType::Complex64);
/// complex number of two `f64`s
pub static COMPLEX128: Shape = Shape::scalar("complex128", ScalarType::Complex128);
/// `String`
pub static STRING: Shape = Shape::scalar("String", ScalarType::String);

/// The empty interface: any value fits in it.
pub static ANY: Shape = Shape::interface("any");
