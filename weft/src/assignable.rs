//! Deciding whether a raw value can populate a destination, and converting it.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use weft_core::{Kind, Value, classify};

/// A conversion from a candidate value, which may fail.
pub type ConvertFn = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Accepts some candidate values and coerces them into what gets assigned.
///
/// [`is_assignable`](AssignableKind::is_assignable) is the cheap predicate;
/// [`assign`](AssignableKind::assign) performs the coercion and may still
/// fail.
pub trait AssignableKind {
    /// Whether this kind is willing to take the candidate.
    fn is_assignable(&self, candidate: &Value) -> bool;

    /// Coerce the candidate, or `None` if it can't be.
    fn assign(&self, candidate: &Value) -> Option<Value>;
}

/// A bare kind accepts candidates of exactly that kind, unchanged.
impl AssignableKind for Kind {
    fn is_assignable(&self, candidate: &Value) -> bool {
        classify(candidate) == *self
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        Some(candidate.clone())
    }
}

/// Accepts candidates of one kind and runs them through a conversion.
#[derive(Clone)]
pub struct ConvertibleKind {
    /// the kind of candidates accepted
    pub kind: Kind,
    /// the conversion; without one, every assignment fails
    pub convert: Option<ConvertFn>,
}

impl ConvertibleKind {
    /// Accept `kind`, converting through `convert`.
    pub fn new(
        kind: Kind,
        convert: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            convert: Some(Arc::new(convert)),
        }
    }

    /// Accept `kind`, with no conversion configured.
    pub const fn without_conversion(kind: Kind) -> Self {
        Self {
            kind,
            convert: None,
        }
    }
}

impl AssignableKind for ConvertibleKind {
    fn is_assignable(&self, candidate: &Value) -> bool {
        classify(candidate) == self.kind
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        let convert = self.convert.as_ref()?;
        convert(candidate)
    }
}

impl fmt::Debug for ConvertibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertibleKind")
            .field("kind", &self.kind)
            .field("convert", &self.convert.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Accepts any candidate, as long as a function is configured, and converts
/// it through that function.
#[derive(Clone, Default)]
pub struct AssignmentFunction(pub Option<ConvertFn>);

impl AssignmentFunction {
    /// Wrap a conversion function.
    pub fn new(function: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(function)))
    }
}

impl AssignableKind for AssignmentFunction {
    fn is_assignable(&self, _candidate: &Value) -> bool {
        self.0.is_some()
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        let function = self.0.as_ref()?;
        function(candidate)
    }
}

impl fmt::Debug for AssignmentFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AssignmentFunction")
            .field(&self.0.as_ref().map(|_| ".."))
            .finish()
    }
}

/// An ordered list of alternatives: the first member that accepts the
/// candidate and coerces it successfully wins.
///
/// Every member is offered the *original* candidate. A member that accepts
/// but fails to convert leaves nothing behind for the next one.
#[derive(Default)]
pub struct AssignableKinds(Vec<Box<dyn AssignableKind>>);

impl AssignableKinds {
    /// An empty list, which accepts nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alternative, builder-style.
    #[must_use]
    pub fn or(mut self, kind: impl AssignableKind + 'static) -> Self {
        self.push(kind);
        self
    }

    /// Append an alternative.
    pub fn push(&mut self, kind: impl AssignableKind + 'static) {
        self.0.push(Box::new(kind));
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AssignableKind for AssignableKinds {
    fn is_assignable(&self, _candidate: &Value) -> bool {
        !self.0.is_empty()
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        self.0
            .iter()
            .filter(|kind| kind.is_assignable(candidate))
            .find_map(|kind| kind.assign(candidate))
    }
}

impl FromIterator<Box<dyn AssignableKind>> for AssignableKinds {
    fn from_iter<I: IntoIterator<Item = Box<dyn AssignableKind>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An absent kind accepts nothing.
impl<K: AssignableKind> AssignableKind for Option<K> {
    fn is_assignable(&self, candidate: &Value) -> bool {
        self.as_ref().is_some_and(|kind| kind.is_assignable(candidate))
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        self.as_ref()?.assign(candidate)
    }
}

impl<K: AssignableKind + ?Sized> AssignableKind for Box<K> {
    fn is_assignable(&self, candidate: &Value) -> bool {
        (**self).is_assignable(candidate)
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        (**self).assign(candidate)
    }
}

impl<K: AssignableKind + ?Sized> AssignableKind for &K {
    fn is_assignable(&self, candidate: &Value) -> bool {
        (**self).is_assignable(candidate)
    }

    fn assign(&self, candidate: &Value) -> Option<Value> {
        (**self).assign(candidate)
    }
}
