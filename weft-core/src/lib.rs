#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod kind;
pub use kind::*;

mod shape;
pub use shape::*;

pub mod shapes;

mod value;
pub use value::*;

mod intern;
