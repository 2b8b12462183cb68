#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub use weft_core::*;
pub use weft_path::*;

mod assignable;
pub use assignable::*;

mod source;
pub use source::*;

mod filler;
pub use filler::*;

mod tally;
pub use tally::*;

mod descriptor;
pub use descriptor::*;

/// The kind of a value. Same as [`classify`].
pub fn kind_of(value: &Value) -> Kind {
    classify(value)
}

/// The shape a pointer value points to, or `None` if `value` is not a
/// pointer.
///
/// ```
/// use weft::{pointer_of, shapes, type_of_new, Value};
///
/// let pointer = pointer_of(Value::from(3_i32)).unwrap();
/// assert_eq!(type_of_new(&pointer), Some(&shapes::I32));
/// assert_eq!(type_of_new(&Value::from(3_i32)), None);
/// ```
pub fn type_of_new(value: &Value) -> Option<&'static Shape> {
    match value {
        Value::Pointer { shape, .. } => shape.pointee(),
        _ => None,
    }
}

/// Move a value behind a fresh pointer. `None` for [`Value::Nil`].
pub fn pointer_of(value: Value) -> Option<Value> {
    value.into_pointer()
}
