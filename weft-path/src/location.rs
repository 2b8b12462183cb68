use weft_core::{Kind, Shape, Value};

use crate::PathAccessError;

/// A slot inside a value, found by resolving a path against it.
///
/// Finding a location says nothing about whether it can be written: check
/// [`Location::can_set`] (or just call [`Location::set`], which checks).
///
/// A location is *addressable* when it refers to storage owned by the root
/// that was resolved against. The root itself is addressable; struct fields
/// and array elements are addressable when their container is; list elements
/// and pointees always are; map values and string bytes never are.
///
/// A location is *read-only* when any step on the way to it went through a
/// private field.
#[derive(Debug)]
pub struct Location<'a> {
    slot: Slot<'a>,
    addressable: bool,
    read_only: bool,
}

#[derive(Debug)]
pub(crate) enum Slot<'a> {
    Borrowed(&'a mut Value),
    /// not backed by storage, e.g. a byte read out of a string
    Owned(Value),
}

impl<'a> Location<'a> {
    /// The location of a whole root value.
    pub fn root(value: &'a mut Value) -> Self {
        Self {
            slot: Slot::Borrowed(value),
            addressable: true,
            read_only: false,
        }
    }

    pub(crate) fn new(slot: Slot<'a>, addressable: bool, read_only: bool) -> Self {
        Self {
            slot,
            addressable,
            read_only,
        }
    }

    pub(crate) fn into_parts(self) -> (Slot<'a>, bool, bool) {
        (self.slot, self.addressable, self.read_only)
    }

    /// Returns true if the location refers to storage inside the root.
    pub fn is_addressable(&self) -> bool {
        self.addressable
    }

    /// Returns true if [`Location::set`] would be allowed to write here.
    pub fn can_set(&self) -> bool {
        self.addressable && !self.read_only
    }

    /// Returns true if [`Location::read`] would be allowed to read here.
    pub fn can_read(&self) -> bool {
        !self.read_only
    }

    /// The value currently in the slot.
    pub fn get(&self) -> &Value {
        match &self.slot {
            Slot::Borrowed(value) => &**value,
            Slot::Owned(value) => value,
        }
    }

    /// The declared shape of the slot.
    pub fn shape(&self) -> Option<&'static Shape> {
        self.get().shape()
    }

    /// The kind of the slot.
    pub fn kind(&self) -> Kind {
        self.get().kind()
    }

    /// Read the slot out as a plain value.
    ///
    /// Interface slots yield their dynamic content, or [`Value::Nil`] when
    /// empty.
    pub fn read(&self) -> Result<Value, PathAccessError> {
        if !self.can_read() {
            return Err(PathAccessError::NotReadable);
        }
        Ok(unwrap_interface(self.get()))
    }

    /// Overwrite the slot.
    ///
    /// Fails if the slot cannot be written, or if `value`'s shape is not
    /// assignable to the slot's declared shape.
    pub fn set(&mut self, value: Value) -> Result<(), PathAccessError> {
        if !self.can_set() {
            return Err(PathAccessError::NotSettable);
        }
        let Slot::Borrowed(slot) = &mut self.slot else {
            return Err(PathAccessError::NotSettable);
        };
        let Some(slot_shape) = slot.shape() else {
            return Err(PathAccessError::NotAssignable {
                value: value.shape(),
                slot: None,
            });
        };
        let value_shape = value.shape();
        let fitted = value
            .fit(slot_shape)
            .ok_or(PathAccessError::NotAssignable {
                value: value_shape,
                slot: Some(slot_shape),
            })?;
        **slot = fitted;
        Ok(())
    }
}

/// What reading a value out as a plain object yields.
pub(crate) fn unwrap_interface(value: &Value) -> Value {
    match value {
        Value::Interface { content, .. } => content.as_deref().cloned().unwrap_or_default(),
        other => other.clone(),
    }
}
