//! Boundary values an [`Interval`](crate::Interval) can be built from.
//!
//! An interval is generic over its boundary type. Statically typed boundaries
//! ([`NaiveDate`], [`NaiveDateTime`], [`DateTime`]) carry their granularity in
//! the type, so they can never be mixed. [`Moment`] carries it at runtime and
//! is checked when the interval is constructed.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// Whether a boundary is a calendar date or a date-and-time instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub enum Granularity {
    Date,
    DateTime,
}

impl Granularity {
    /// The finer of two granularities; a date-time resolves more than a date.
    pub fn finer(self, other: Granularity) -> Granularity {
        if self == Granularity::DateTime || other == Granularity::DateTime {
            Granularity::DateTime
        } else {
            Granularity::Date
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Date => f.write_str("date"),
            Granularity::DateTime => f.write_str("date-time"),
        }
    }
}

/// A totally ordered point in time usable as an interval bound.
pub trait Boundary: Ord + Clone {
    fn granularity(&self) -> Granularity;

    /// Signed distance from `earlier` to `self`.
    fn signed_duration_since(&self, earlier: &Self) -> TimeDelta;

    /// Re-express this bound at `granularity`, if the type can change it.
    ///
    /// Statically typed boundaries have a fixed granularity and return
    /// themselves unchanged.
    fn refine(&self, _granularity: Granularity) -> Self {
        self.clone()
    }

    /// Write this bound in ISO-8601 form.
    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Boundary for NaiveDate {
    fn granularity(&self) -> Granularity {
        Granularity::Date
    }

    fn signed_duration_since(&self, earlier: &Self) -> TimeDelta {
        NaiveDate::signed_duration_since(*self, *earlier)
    }

    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(ISO_DATE))
    }
}

impl Boundary for NaiveDateTime {
    fn granularity(&self) -> Granularity {
        Granularity::DateTime
    }

    fn signed_duration_since(&self, earlier: &Self) -> TimeDelta {
        NaiveDateTime::signed_duration_since(*self, *earlier)
    }

    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(ISO_DATETIME))
    }
}

impl<Tz: TimeZone> Boundary for DateTime<Tz> {
    fn granularity(&self) -> Granularity {
        Granularity::DateTime
    }

    fn signed_duration_since(&self, earlier: &Self) -> TimeDelta {
        self.naive_utc() - earlier.naive_utc()
    }

    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// A boundary whose granularity is only known at runtime.
///
/// Moments of different granularity still compare: a date sorts as the
/// midnight that begins it. Only an interval's own two bounds are required to
/// agree.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub enum Moment {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Moment {
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            Moment::Date(date) => date.and_time(NaiveTime::MIN),
            Moment::DateTime(datetime) => *datetime,
        }
    }
}

impl From<NaiveDate> for Moment {
    fn from(date: NaiveDate) -> Self {
        Moment::Date(date)
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(datetime: NaiveDateTime) -> Self {
        Moment::DateTime(datetime)
    }
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Moment {}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_datetime().cmp(&other.as_datetime())
    }
}

impl Hash for Moment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_datetime().hash(state)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_iso(f)
    }
}

impl Boundary for Moment {
    fn granularity(&self) -> Granularity {
        match self {
            Moment::Date(_) => Granularity::Date,
            Moment::DateTime(_) => Granularity::DateTime,
        }
    }

    fn signed_duration_since(&self, earlier: &Self) -> TimeDelta {
        self.as_datetime() - earlier.as_datetime()
    }

    fn refine(&self, granularity: Granularity) -> Self {
        match (self, granularity) {
            (Moment::Date(_), Granularity::DateTime) => Moment::DateTime(self.as_datetime()),
            _ => *self,
        }
    }

    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moment::Date(date) => date.fmt_iso(f),
            Moment::DateTime(datetime) => datetime.fmt_iso(f),
        }
    }
}
