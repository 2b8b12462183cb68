//! Token-by-token navigation into values.
//!
//! There are two walks over the same per-kind rules:
//!
//! - [`resolve_mut`] walks a root it may mutate, handing back a [`Location`]
//!   that can later be written. Empty pointers met on the way are filled with
//!   a zero pointee in place, provided the pointer's own slot is settable.
//! - [`resolve_ref`] walks data it may not mutate. Where the mutable walk
//!   would allocate a pointee, it continues through a detached zero value
//!   instead, which reads the same but leaves the data untouched.
//!
//! Either walk stops at the first token that does not apply.

use alloc::borrow::Cow;
use alloc::boxed::Box;

use tracing::trace;
use weft_core::{Kind, Shape, Value};

use crate::location::Slot;
use crate::{Location, PathAccessError, PathToken};

pub(crate) fn resolve_mut<'a>(
    root: &'a mut Value,
    tokens: &[PathToken],
) -> Result<Location<'a>, PathAccessError> {
    tokens
        .iter()
        .enumerate()
        .try_fold(Location::root(root), |location, (step_index, token)| {
            step_mut(location, token, step_index)
        })
}

fn step_mut<'a>(
    location: Location<'a>,
    token: &PathToken,
    step_index: usize,
) -> Result<Location<'a>, PathAccessError> {
    let (slot, addressable, read_only) = location.into_parts();
    let value = match slot {
        Slot::Borrowed(value) => value,
        Slot::Owned(value) => {
            return Err(PathAccessError::NotNavigable {
                step_index,
                kind: value.kind(),
            });
        }
    };

    match value {
        Value::Array { items, .. } => {
            let index = element_index(token, items.len(), Kind::Array, step_index)?;
            Ok(Location::new(
                Slot::Borrowed(&mut items[index]),
                addressable,
                read_only,
            ))
        }
        Value::List { items, .. } => {
            let index = element_index(token, items.len(), Kind::List, step_index)?;
            Ok(Location::new(
                Slot::Borrowed(&mut items[index]),
                true,
                read_only,
            ))
        }
        Value::String(s) => {
            let byte = string_byte(s, token, step_index)?;
            Ok(Location::new(Slot::Owned(byte), false, read_only))
        }
        Value::Map { shape, entries } => {
            let key = map_key(*shape, token, step_index)?;
            match entries.get_mut(&key) {
                Some(entry) => Ok(Location::new(Slot::Borrowed(entry), false, read_only)),
                None => Err(PathAccessError::MissingKey {
                    step_index,
                    key: token.clone(),
                }),
            }
        }
        Value::Pointer { shape, pointee } => {
            let shape: &'static Shape = *shape;
            if pointee.is_none() && (!addressable || read_only) {
                return Err(PathAccessError::NilPointerNotSettable { step_index, shape });
            }
            let pointee_shape = pointee_shape(shape, step_index)?;
            let target = pointee.get_or_insert_with(|| {
                trace!(%shape, "allocating zero pointee in place");
                Box::new(Value::zero(pointee_shape))
            });
            // the pointee gets the same token
            step_mut(
                Location::new(Slot::Borrowed(&mut **target), true, read_only),
                token,
                step_index,
            )
        }
        Value::Struct { shape, fields } => {
            let (index, private) = struct_field(*shape, token, step_index)?;
            let field = fields
                .get_mut(index)
                .ok_or_else(|| no_such_field(*shape, token, step_index))?;
            Ok(Location::new(
                Slot::Borrowed(field),
                addressable,
                read_only || private,
            ))
        }
        other => Err(PathAccessError::NotNavigable {
            step_index,
            kind: other.kind(),
        }),
    }
}

/// A value reached by the read-only walk.
pub(crate) struct Reached<'a> {
    pub(crate) value: Cow<'a, Value>,
    pub(crate) addressable: bool,
    pub(crate) read_only: bool,
}

impl<'a> Reached<'a> {
    fn borrowed(value: &'a Value, addressable: bool, read_only: bool) -> Self {
        Self {
            value: Cow::Borrowed(value),
            addressable,
            read_only,
        }
    }

    fn owned(value: Value, addressable: bool, read_only: bool) -> Self {
        Self {
            value: Cow::Owned(value),
            addressable,
            read_only,
        }
    }

    fn into_owned(self) -> Reached<'static> {
        Reached {
            value: Cow::Owned(self.value.into_owned()),
            addressable: self.addressable,
            read_only: self.read_only,
        }
    }
}

/// Walk `tokens` through immutable data. The data root is not addressable.
pub(crate) fn resolve_ref<'a>(
    root: &'a Value,
    tokens: &[PathToken],
) -> Result<Reached<'a>, PathAccessError> {
    let mut current = Reached::borrowed(root, false, false);
    for (step_index, token) in tokens.iter().enumerate() {
        let Reached {
            value,
            addressable,
            read_only,
        } = current;
        current = match value {
            Cow::Borrowed(value) => step_ref(value, addressable, read_only, token, step_index)?,
            Cow::Owned(value) => {
                step_ref(&value, addressable, read_only, token, step_index)?.into_owned()
            }
        };
    }
    Ok(current)
}

fn step_ref<'a>(
    value: &'a Value,
    addressable: bool,
    read_only: bool,
    token: &PathToken,
    step_index: usize,
) -> Result<Reached<'a>, PathAccessError> {
    match value {
        Value::Array { items, .. } => {
            let index = element_index(token, items.len(), Kind::Array, step_index)?;
            Ok(Reached::borrowed(&items[index], addressable, read_only))
        }
        Value::List { items, .. } => {
            let index = element_index(token, items.len(), Kind::List, step_index)?;
            Ok(Reached::borrowed(&items[index], true, read_only))
        }
        Value::String(s) => {
            let byte = string_byte(s, token, step_index)?;
            Ok(Reached::owned(byte, false, read_only))
        }
        Value::Map { shape, entries } => {
            let key = map_key(*shape, token, step_index)?;
            entries
                .get(&key)
                .map(|entry| Reached::borrowed(entry, false, read_only))
                .ok_or_else(|| PathAccessError::MissingKey {
                    step_index,
                    key: token.clone(),
                })
        }
        Value::Pointer { shape, pointee } => match pointee {
            Some(target) => step_ref(target, true, read_only, token, step_index),
            None => {
                if !addressable || read_only {
                    return Err(PathAccessError::NilPointerNotSettable {
                        step_index,
                        shape: *shape,
                    });
                }
                let zero = Value::zero(pointee_shape(*shape, step_index)?);
                Ok(step_ref(&zero, true, read_only, token, step_index)?.into_owned())
            }
        },
        Value::Struct { shape, fields } => {
            let (index, private) = struct_field(*shape, token, step_index)?;
            let field = fields
                .get(index)
                .ok_or_else(|| no_such_field(*shape, token, step_index))?;
            Ok(Reached::borrowed(field, addressable, read_only || private))
        }
        other => Err(PathAccessError::NotNavigable {
            step_index,
            kind: other.kind(),
        }),
    }
}

/// Validate an integer token against a sequence of `len` elements.
fn element_index(
    token: &PathToken,
    len: usize,
    container: Kind,
    step_index: usize,
) -> Result<usize, PathAccessError> {
    let Some(index) = token.as_index() else {
        return Err(PathAccessError::WrongTokenKind {
            step_index,
            token: token.kind(),
            container,
        });
    };
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(PathAccessError::IndexOutOfBounds {
            step_index,
            index,
            len,
        })
}

fn string_byte(s: &str, token: &PathToken, step_index: usize) -> Result<Value, PathAccessError> {
    let index = element_index(token, s.len(), Kind::String, step_index)?;
    Ok(Value::U8(s.as_bytes()[index]))
}

/// The token converted to the map's key type, ready for lookup.
fn map_key(
    shape: &'static Shape,
    token: &PathToken,
    step_index: usize,
) -> Result<Value, PathAccessError> {
    let Some(expected) = shape.key() else {
        return Err(PathAccessError::NotNavigable {
            step_index,
            kind: Kind::Map,
        });
    };
    token
        .value()
        .clone()
        .fit(expected)
        .ok_or(PathAccessError::KeyTypeMismatch {
            step_index,
            token: token.shape(),
            expected,
        })
}

fn pointee_shape(shape: &'static Shape, step_index: usize) -> Result<&'static Shape, PathAccessError> {
    shape.pointee().ok_or(PathAccessError::NotNavigable {
        step_index,
        kind: Kind::Pointer,
    })
}

/// Index of the named field, and whether it is private.
fn struct_field(
    shape: &'static Shape,
    token: &PathToken,
    step_index: usize,
) -> Result<(usize, bool), PathAccessError> {
    let Some(name) = token.as_str() else {
        return Err(PathAccessError::WrongTokenKind {
            step_index,
            token: token.kind(),
            container: Kind::Struct,
        });
    };
    let (index, field) = shape
        .field(name)
        .ok_or_else(|| no_such_field(shape, token, step_index))?;
    Ok((index, !field.is_public()))
}

fn no_such_field(shape: &'static Shape, token: &PathToken, step_index: usize) -> PathAccessError {
    PathAccessError::NoSuchField {
        step_index,
        shape,
        field: token.as_str().unwrap_or_default().to_owned(),
    }
}
