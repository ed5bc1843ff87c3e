//! Intersection, union and subtraction of intervals.
//!
//! Each operation decides its outcome from the relation between its operands
//! and builds any result through [`Interval::new`]. Outcomes that are not a
//! single interval are `None` or an explicit [`Difference`], never errors.

use std::cmp::{max, min};
use std::ops::{BitAnd, BitOr, Sub};

use crate::boundary::Boundary;
use crate::interval::Interval;
use crate::relation::Relation;

/// What remains of an interval after removing another from it.
#[derive(Debug, Clone)]
pub enum Difference<T> {
    Empty,
    One(Interval<T>),
    Two(Interval<T>, Interval<T>),
}

impl<T> Difference<T> {
    fn from_pieces(leading: Option<Interval<T>>, trailing: Option<Interval<T>>) -> Self {
        match (leading, trailing) {
            (Some(l), Some(t)) => Difference::Two(l, t),
            (Some(piece), None) | (None, Some(piece)) => Difference::One(piece),
            (None, None) => Difference::Empty,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Difference::Empty => 0,
            Difference::One(_) => 1,
            Difference::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Difference::Empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval<T>> {
        let (first, second) = match self {
            Difference::Empty => (None, None),
            Difference::One(piece) => (Some(piece), None),
            Difference::Two(l, t) => (Some(l), Some(t)),
        };
        first.into_iter().chain(second)
    }

    pub fn into_vec(self) -> Vec<Interval<T>> {
        match self {
            Difference::Empty => Vec::new(),
            Difference::One(piece) => vec![piece],
            Difference::Two(l, t) => vec![l, t],
        }
    }
}

impl<T: Ord> PartialEq for Difference<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Difference::Empty, Difference::Empty) => true,
            (Difference::One(a), Difference::One(b)) => a == b,
            (Difference::Two(a1, a2), Difference::Two(b1, b2)) => a1 == b1 && a2 == b2,
            _ => false,
        }
    }
}

impl<T: Ord> Eq for Difference<T> {}

impl<T> IntoIterator for Difference<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

// bounds taken from two intervals may disagree in granularity (e.g. mixed
// `Moment` intervals); the result is expressed at the finer of the two
fn span<T: Boundary>(start: &T, end: &T) -> Option<Interval<T>> {
    let granularity = start.granularity().finer(end.granularity());
    Interval::new(start.refine(granularity), end.refine(granularity)).ok()
}

impl<T: Boundary> Interval<T> {
    /// The shared interior of both intervals, if any.
    ///
    /// Intervals that merely touch (`meets`/`met_by`) have no intersection.
    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if !self.overlaps_loosely(other) || self.meets(other) || self.met_by(other) {
            return None;
        }
        span(max(self.start(), other.start()), min(self.end(), other.end()))
    }

    /// The smallest interval covering both, or `None` if a gap separates them.
    pub fn union(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if !self.overlaps_loosely(other) {
            return None;
        }
        span(min(self.start(), other.start()), max(self.end(), other.end()))
    }

    /// The parts of `self` not covered by `other`.
    pub fn subtract(&self, other: &Interval<T>) -> Difference<T> {
        match self.relation(other) {
            Relation::Precedes | Relation::Meets | Relation::MetBy | Relation::PrecededBy => {
                Difference::One(self.clone())
            }
            Relation::Starts | Relation::Equals | Relation::During | Relation::Finishes => {
                Difference::Empty
            }
            Relation::Overlaps | Relation::FinishedBy => {
                Difference::from_pieces(span(self.start(), other.start()), None)
            }
            Relation::StartedBy | Relation::OverlappedBy => {
                Difference::from_pieces(None, span(other.end(), self.end()))
            }
            Relation::Contains => Difference::from_pieces(
                span(self.start(), other.start()),
                span(other.end(), self.end()),
            ),
        }
    }
}

impl<'a, 'b, T: Boundary> BitAnd<&'b Interval<T>> for &'a Interval<T> {
    type Output = Option<Interval<T>>;

    fn bitand(self, rhs: &'b Interval<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<'a, 'b, T: Boundary> BitOr<&'b Interval<T>> for &'a Interval<T> {
    type Output = Option<Interval<T>>;

    fn bitor(self, rhs: &'b Interval<T>) -> Self::Output {
        self.union(rhs)
    }
}

impl<'a, 'b, T: Boundary> Sub<&'b Interval<T>> for &'a Interval<T> {
    type Output = Difference<T>;

    fn sub(self, rhs: &'b Interval<T>) -> Self::Output {
        self.subtract(rhs)
    }
}
