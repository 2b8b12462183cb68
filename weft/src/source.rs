use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::trace;
use weft_core::Value;
use weft_path::{ObjectPath, Root};

use crate::AssignableKind;

/// Extracts a candidate value from input data.
pub trait ValueSource {
    /// The candidate, or `None` if nothing usable was found.
    fn extract(&self, data: &Value) -> Option<Value>;
}

/// Reads the value at a path inside the data and runs it through an
/// [`AssignableKind`].
///
/// Both steps have to succeed. Without a kind, nothing is ever accepted.
pub struct ObjectAtPath {
    path: Box<dyn ObjectPath>,
    kind: Option<Box<dyn AssignableKind>>,
}

impl ObjectAtPath {
    /// Read at `path`, accepting what `kind` accepts.
    pub fn new(path: impl ObjectPath + 'static, kind: impl AssignableKind + 'static) -> Self {
        Self {
            path: Box::new(path),
            kind: Some(Box::new(kind)),
        }
    }

    /// Read at `path`, with no kind configured. Extraction always fails
    /// until one is set with [`ObjectAtPath::with_kind`].
    pub fn without_kind(path: impl ObjectPath + 'static) -> Self {
        Self {
            path: Box::new(path),
            kind: None,
        }
    }

    /// Replace the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl AssignableKind + 'static) -> Self {
        self.kind = Some(Box::new(kind));
        self
    }
}

impl Default for ObjectAtPath {
    /// Reads the data root, with no kind configured.
    fn default() -> Self {
        Self::without_kind(Root)
    }
}

impl ValueSource for ObjectAtPath {
    fn extract(&self, data: &Value) -> Option<Value> {
        let candidate = match self.path.resolve_object(data) {
            Ok(candidate) => candidate,
            Err(error) => {
                trace!(%error, "source path did not resolve");
                return None;
            }
        };
        let kind = self.kind.as_ref()?;
        if !kind.is_assignable(&candidate) {
            trace!(kind = %candidate.kind(), "candidate rejected");
            return None;
        }
        kind.assign(&candidate)
    }
}

impl fmt::Debug for ObjectAtPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectAtPath")
            .field("has_kind", &self.kind.is_some())
            .finish_non_exhaustive()
    }
}

/// Always yields the same value, whatever the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultValue(pub Value);

impl DefaultValue {
    /// Yield `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl ValueSource for DefaultValue {
    fn extract(&self, _data: &Value) -> Option<Value> {
        Some(self.0.clone())
    }
}

/// Fallback list: the first source that succeeds, in order, wins.
#[derive(Default)]
pub struct ValueSources(Vec<Box<dyn ValueSource>>);

impl ValueSources {
    /// An empty list, which never succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fallback, builder-style.
    #[must_use]
    pub fn or(mut self, source: impl ValueSource + 'static) -> Self {
        self.push(source);
        self
    }

    /// Append a fallback.
    pub fn push(&mut self, source: impl ValueSource + 'static) {
        self.0.push(Box::new(source));
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no sources.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueSource for ValueSources {
    fn extract(&self, data: &Value) -> Option<Value> {
        self.0.iter().find_map(|source| source.extract(data))
    }
}

impl FromIterator<Box<dyn ValueSource>> for ValueSources {
    fn from_iter<I: IntoIterator<Item = Box<dyn ValueSource>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An absent source never succeeds.
impl<S: ValueSource> ValueSource for Option<S> {
    fn extract(&self, data: &Value) -> Option<Value> {
        self.as_ref()?.extract(data)
    }
}

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    fn extract(&self, data: &Value) -> Option<Value> {
        (**self).extract(data)
    }
}

impl<S: ValueSource + ?Sized> ValueSource for &S {
    fn extract(&self, data: &Value) -> Option<Value> {
        (**self).extract(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::Kind;

    #[test]
    fn default_ignores_data() {
        let source = DefaultValue::new(7_i64);
        assert_eq!(source.extract(&Value::Nil), Some(Value::I64(7)));
        assert_eq!(source.extract(&Value::from("x")), Some(Value::I64(7)));
    }

    #[test]
    fn object_at_root_without_kind_fails() {
        assert_eq!(ObjectAtPath::default().extract(&Value::I64(1)), None);
        let source = ObjectAtPath::default().with_kind(Kind::I64);
        assert_eq!(source.extract(&Value::I64(1)), Some(Value::I64(1)));
    }

    #[test]
    fn empty_list_fails() {
        assert_eq!(ValueSources::new().extract(&Value::I64(1)), None);
        assert_eq!(None::<DefaultValue>.extract(&Value::I64(1)), None);
    }
}
