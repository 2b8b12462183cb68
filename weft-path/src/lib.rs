#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use weft_core::Value;

pub mod access;
pub use access::PathAccessError;

mod location;
pub use location::Location;

mod token;
pub use token::PathToken;

mod resolve;

/// Something that locates a nested slot inside a root value.
///
/// Implemented by [`Path`] (a sequence of tokens) and [`Root`] (the identity
/// path, which always resolves to the root itself).
pub trait ObjectPath {
    /// Locate the slot inside a root that may be mutated.
    ///
    /// Empty pointers on the way are given a zero pointee in place, as long
    /// as the pointer's own slot is settable. The returned location may or may
    /// not be settable; that is for the caller to check.
    fn resolve_value<'a>(&self, root: &'a mut Value) -> Result<Location<'a>, PathAccessError>;

    /// Locate the slot inside immutable data and read it out as a plain value.
    ///
    /// Fails where [`ObjectPath::resolve_value`] would fail, and additionally
    /// when the slot was reached through a private field.
    fn resolve_object(&self, root: &Value) -> Result<Value, PathAccessError>;
}

/// The identity path: resolves to the root itself, always successfully.
///
/// Like any other path, reading an interface root yields its dynamic content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Root;

/// The identity path.
pub const ROOT: Root = Root;

impl ObjectPath for Root {
    fn resolve_value<'a>(&self, root: &'a mut Value) -> Result<Location<'a>, PathAccessError> {
        Ok(Location::root(root))
    }

    fn resolve_object(&self, root: &Value) -> Result<Value, PathAccessError> {
        Ok(location::unwrap_interface(root))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<root>")
    }
}

/// An ordered sequence of [`PathToken`]s leading from a root to a nested slot.
///
/// Each token is applied to whatever the previous one reached:
///
/// - lists, arrays and strings take an integer index in `0..len`
/// - maps take a key whose type is assignable to the map's key type
/// - pointers pass the token on to their pointee
/// - structs take a field name
///
/// Nothing else can be navigated into. An empty path denotes the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    tokens: Vec<PathToken>,
}

impl Path {
    /// Create an empty path.
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a path from tokens.
    pub fn from_tokens<T: Into<PathToken>>(tokens: impl IntoIterator<Item = T>) -> Self {
        tokens.into_iter().collect()
    }

    /// Push a token onto the path.
    pub fn push(&mut self, token: impl Into<PathToken>) {
        self.tokens.push(token.into());
    }

    /// Pop the last token from the path.
    pub fn pop(&mut self) -> Option<PathToken> {
        self.tokens.pop()
    }

    /// Extend the path by one token, builder-style.
    ///
    /// ```
    /// use weft_path::Path;
    ///
    /// let path = Path::new().then("items").then(3).then("name");
    /// assert_eq!(path.to_string(), "items[3].name");
    /// ```
    #[must_use]
    pub fn then(mut self, token: impl Into<PathToken>) -> Self {
        self.push(token);
        self
    }

    /// The tokens of this path.
    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true for the empty path, which denotes the root.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T: Into<PathToken>> FromIterator<T> for Path {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ObjectPath for Path {
    fn resolve_value<'a>(&self, root: &'a mut Value) -> Result<Location<'a>, PathAccessError> {
        resolve::resolve_mut(root, &self.tokens)
    }

    fn resolve_object(&self, root: &Value) -> Result<Value, PathAccessError> {
        if self.tokens.is_empty() {
            return Ok(location::unwrap_interface(root));
        }
        let reached = resolve::resolve_ref(root, &self.tokens)?;
        if reached.read_only {
            return Err(PathAccessError::NotReadable);
        }
        Ok(location::unwrap_interface(&reached.value))
    }
}

impl<P: ObjectPath + ?Sized> ObjectPath for &P {
    fn resolve_value<'a>(&self, root: &'a mut Value) -> Result<Location<'a>, PathAccessError> {
        (**self).resolve_value(root)
    }

    fn resolve_object(&self, root: &Value) -> Result<Value, PathAccessError> {
        (**self).resolve_object(root)
    }
}

impl<P: ObjectPath + ?Sized> ObjectPath for alloc::boxed::Box<P> {
    fn resolve_value<'a>(&self, root: &'a mut Value) -> Result<Location<'a>, PathAccessError> {
        (**self).resolve_value(root)
    }

    fn resolve_object(&self, root: &Value) -> Result<Value, PathAccessError> {
        (**self).resolve_object(root)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str("<root>");
        }
        for (i, token) in self.tokens.iter().enumerate() {
            match token.value() {
                Value::String(name) if is_identifier(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                other => write!(f, "[{other}]")?,
            }
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier("first name"));
        assert!(!is_identifier("2nd"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn empty_path_displays_as_root() {
        assert_eq!(Path::new().to_string(), "<root>");
        assert_eq!(ROOT.to_string(), "<root>");
    }
}
