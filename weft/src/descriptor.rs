use alloc::boxed::Box;
use core::fmt;

use tracing::debug;
use weft_core::{Shape, Value};

use crate::{Filler, Tally};

/// Builds fresh values of some type from input data.
pub trait Describable {
    /// Build a new value from `data`.
    ///
    /// Returns `(None, Tally::NOT_CONFIGURED)` when the describable is not
    /// fully configured. Otherwise the value is always returned, however many
    /// of its rules failed.
    fn describe(&self, data: &Value) -> (Option<Value>, Tally);

    /// A fresh zero value of the type, with no rules applied.
    fn prototype(&self) -> Option<Value>;
}

/// Pairs a target shape with the filler that populates it.
///
/// ```
/// use weft::{Descriptor, Describable, DefaultValue, ObjectFiller, Tally, Value, shapes};
///
/// let descriptor = Descriptor::new(&shapes::STRING, ObjectFiller::new(DefaultValue::new("hi")));
/// let (built, tally) = descriptor.describe(&Value::Nil);
/// assert_eq!(built, Some(Value::from("hi")));
/// assert_eq!(tally, Tally::SUCCESS);
/// ```
#[derive(Default)]
pub struct Descriptor {
    /// the type of the values built
    pub shape: Option<&'static Shape>,
    /// the rules that populate a fresh zero value
    pub filler: Option<Box<dyn Filler>>,
}

impl Descriptor {
    /// Describe values of `shape`, populated by `filler`.
    pub fn new(shape: &'static Shape, filler: impl Filler + 'static) -> Self {
        Self {
            shape: Some(shape),
            filler: Some(Box::new(filler)),
        }
    }
}

impl Describable for Descriptor {
    fn describe(&self, data: &Value) -> (Option<Value>, Tally) {
        let (Some(shape), Some(filler)) = (self.shape, self.filler.as_ref()) else {
            debug!(
                has_shape = self.shape.is_some(),
                has_filler = self.filler.is_some(),
                "descriptor is not configured"
            );
            return (None, Tally::NOT_CONFIGURED);
        };
        let mut target = Value::zero(shape);
        let tally = filler.fill(&mut target, data);
        (Some(target), tally)
    }

    fn prototype(&self) -> Option<Value> {
        self.shape.map(Value::zero)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("shape", &self.shape)
            .field("has_filler", &self.filler.is_some())
            .finish()
    }
}

/// The absent descriptor is never configured.
impl<D: Describable> Describable for Option<D> {
    fn describe(&self, data: &Value) -> (Option<Value>, Tally) {
        match self {
            Some(describable) => describable.describe(data),
            None => {
                debug!("descriptor is absent");
                (None, Tally::NOT_CONFIGURED)
            }
        }
    }

    fn prototype(&self) -> Option<Value> {
        self.as_ref()?.prototype()
    }
}

impl<D: Describable + ?Sized> Describable for &D {
    fn describe(&self, data: &Value) -> (Option<Value>, Tally) {
        (**self).describe(data)
    }

    fn prototype(&self) -> Option<Value> {
        (**self).prototype()
    }
}

impl<D: Describable + ?Sized> Describable for Box<D> {
    fn describe(&self, data: &Value) -> (Option<Value>, Tally) {
        (**self).describe(data)
    }

    fn prototype(&self) -> Option<Value> {
        (**self).prototype()
    }
}
