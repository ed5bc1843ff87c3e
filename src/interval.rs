use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, Range, RangeBounds};

use chrono::TimeDelta;

use crate::boundary::{Boundary, Granularity};
use crate::error::{IntervalError, Result};

/// A non-empty span of time between two bounds of one granularity.
///
/// The only way to obtain an `Interval` is through [`Interval::new`] (or the
/// conversions that delegate to it), so every value upholds
/// `start < end` with both bounds sharing a granularity.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(
        try_from = "Bounds<T>",
        bound(deserialize = "T: Boundary + serde::Deserialize<'de>")
    )
)]
pub struct Interval<T> {
    start: T,
    end: T,
    granularity: Granularity,
}

#[cfg(feature = "serde_derive")]
#[derive(serde::Deserialize)]
struct Bounds<T> {
    start: T,
    end: T,
}

#[cfg(feature = "serde_derive")]
impl<T: Boundary> TryFrom<Bounds<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(bounds: Bounds<T>) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl<T: Boundary> Interval<T> {
    pub fn new(start: T, end: T) -> Result<Self> {
        let checked = Self::check(&start, &end);
        if let Err(ref error) = checked {
            tracing::trace!(%error, "rejected interval bounds");
        }
        checked.map(|granularity| Self { start, end, granularity })
    }

    fn check(start: &T, end: &T) -> Result<Granularity> {
        let granularity = start.granularity();
        if granularity != end.granularity() {
            return Err(IntervalError::IncorrectGranularity {
                start: granularity,
                end: end.granularity(),
            });
        }

        match start.cmp(end) {
            Ordering::Less => Ok(granularity),
            Ordering::Equal => Err(IntervalError::ZeroLength),
            Ordering::Greater => Err(IntervalError::Inverted),
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(&self.start)
    }

    /// The duration as fractional seconds; date intervals count whole days.
    pub fn seconds(&self) -> f64 {
        self.duration().as_seconds_f64()
    }
}

impl<T> Interval<T> {
    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn into_inner(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: Boundary> TryFrom<(T, T)> for Interval<T> {
    type Error = IntervalError;

    fn try_from((start, end): (T, T)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl<T: Boundary> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: Range<T>) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<T: Boundary> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt_iso(f)?;
        f.write_str("/")?;
        self.end.fmt_iso(f)
    }
}
