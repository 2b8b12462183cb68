use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::trace;
use weft_core::Value;
use weft_path::{ObjectPath, Root};

use crate::{Tally, ValueSource};

/// Populates part of a target value from input data.
pub trait Filler {
    /// Fill `target` from `data`, counting what worked and what didn't.
    fn fill(&self, target: &mut Value, data: &Value) -> Tally;
}

/// Writes one extracted value into one destination.
///
/// Filling resolves the destination inside the target, extracts a candidate
/// from the data, then writes it if its shape is assignable to the
/// destination's. It always reports exactly one success or one failure.
pub struct ObjectFiller {
    destination: Box<dyn ObjectPath>,
    source: Box<dyn ValueSource>,
}

impl ObjectFiller {
    /// Fill the whole target from `source`. Use [`ObjectFiller::at`] to aim
    /// somewhere inside it.
    pub fn new(source: impl ValueSource + 'static) -> Self {
        Self {
            destination: Box::new(Root),
            source: Box::new(source),
        }
    }

    /// Set the destination path, builder-style.
    #[must_use]
    pub fn at(mut self, destination: impl ObjectPath + 'static) -> Self {
        self.destination = Box::new(destination);
        self
    }
}

impl Filler for ObjectFiller {
    fn fill(&self, target: &mut Value, data: &Value) -> Tally {
        let mut location = match self.destination.resolve_value(target) {
            Ok(location) => location,
            Err(error) => {
                trace!(%error, "destination did not resolve");
                return Tally::FAILURE;
            }
        };
        if !location.can_set() {
            trace!(shape = ?location.shape(), "destination is not settable");
            return Tally::FAILURE;
        }
        let Some(candidate) = self.source.extract(data) else {
            trace!("source produced nothing");
            return Tally::FAILURE;
        };
        match location.set(candidate) {
            Ok(()) => Tally::SUCCESS,
            Err(error) => {
                trace!(%error, "candidate not written");
                Tally::FAILURE
            }
        }
    }
}

impl fmt::Debug for ObjectFiller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectFiller").finish_non_exhaustive()
    }
}

/// Runs every member against the same target and data, summing the tallies.
///
/// A failing member does not stop the ones after it.
#[derive(Default)]
pub struct Fillers(Vec<Box<dyn Filler>>);

impl Fillers {
    /// An empty list, which fills nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filler, builder-style.
    #[must_use]
    pub fn with(mut self, filler: impl Filler + 'static) -> Self {
        self.push(filler);
        self
    }

    /// Append a filler.
    pub fn push(&mut self, filler: impl Filler + 'static) {
        self.0.push(Box::new(filler));
    }

    /// Number of fillers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no fillers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Filler for Fillers {
    fn fill(&self, target: &mut Value, data: &Value) -> Tally {
        self.0.iter().map(|filler| filler.fill(target, data)).sum()
    }
}

impl FromIterator<Box<dyn Filler>> for Fillers {
    fn from_iter<I: IntoIterator<Item = Box<dyn Filler>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An absent filler does nothing and counts nothing.
impl<F: Filler> Filler for Option<F> {
    fn fill(&self, target: &mut Value, data: &Value) -> Tally {
        match self {
            Some(filler) => filler.fill(target, data),
            None => Tally::NONE,
        }
    }
}

impl<F: Filler + ?Sized> Filler for Box<F> {
    fn fill(&self, target: &mut Value, data: &Value) -> Tally {
        (**self).fill(target, data)
    }
}

impl<F: Filler + ?Sized> Filler for &F {
    fn fill(&self, target: &mut Value, data: &Value) -> Tally {
        (**self).fill(target, data)
    }
}
