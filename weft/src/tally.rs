use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// How many rule applications succeeded and how many failed.
///
/// Tallies only count. They don't say which rule failed or why; turn on
/// `trace` logging for the `weft` target to see that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    /// number of successful applications
    pub success: usize,
    /// number of failed applications
    pub failure: usize,
}

impl Tally {
    /// Nothing applied.
    pub const NONE: Tally = Tally::new(0, 0);

    /// One successful application.
    pub const SUCCESS: Tally = Tally::new(1, 0);

    /// One failed application.
    pub const FAILURE: Tally = Tally::new(0, 1);

    /// Failure count reported by a descriptor missing its shape or filler.
    ///
    /// Far larger than any realistic number of rules, so it reads as a
    /// configuration error rather than a data error.
    pub const NOT_CONFIGURED_FAILURES: usize = 0x7fff;

    /// What a descriptor missing its shape or filler reports.
    pub const NOT_CONFIGURED: Tally = Tally::new(0, Self::NOT_CONFIGURED_FAILURES);

    /// Create a tally.
    pub const fn new(success: usize, failure: usize) -> Self {
        Self { success, failure }
    }

    /// Returns true if nothing failed.
    pub const fn is_complete(&self) -> bool {
        self.failure == 0
    }

    /// Returns true if this is the misconfiguration sentinel.
    pub const fn is_not_configured(&self) -> bool {
        self.success == 0 && self.failure == Self::NOT_CONFIGURED_FAILURES
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally::new(self.success + rhs.success, self.failure + rhs.failure)
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::NONE, Add::add)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} succeeded, {} failed", self.success, self.failure)
    }
}
