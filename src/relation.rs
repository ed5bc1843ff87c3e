//! The thirteen relations of Allen's interval algebra.
//!
//! For any two intervals exactly one relation holds. Each predicate compares
//! bounds strictly; touching endpoints are `meets`/`met_by`, never an overlap.

use std::cmp::Ordering;
use std::fmt;

use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub enum Relation {
    Precedes,
    Meets,
    Overlaps,
    FinishedBy,
    Contains,
    Starts,
    Equals,
    StartedBy,
    During,
    Finishes,
    OverlappedBy,
    MetBy,
    PrecededBy,
}

impl Relation {
    pub const ALL: [Relation; 13] = [
        Relation::Precedes,
        Relation::Meets,
        Relation::Overlaps,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::Starts,
        Relation::Equals,
        Relation::StartedBy,
        Relation::During,
        Relation::Finishes,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::PrecededBy,
    ];

    /// Conventional one-letter code; inverse relations use the upper case.
    pub fn symbol(self) -> char {
        match self {
            Relation::Precedes => 'p',
            Relation::Meets => 'm',
            Relation::Overlaps => 'o',
            Relation::FinishedBy => 'F',
            Relation::Contains => 'D',
            Relation::Starts => 's',
            Relation::Equals => 'e',
            Relation::StartedBy => 'S',
            Relation::During => 'd',
            Relation::Finishes => 'f',
            Relation::OverlappedBy => 'O',
            Relation::MetBy => 'M',
            Relation::PrecededBy => 'P',
        }
    }

    /// The relation that holds with the operands swapped.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Precedes => Relation::PrecededBy,
            Relation::Meets => Relation::MetBy,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Contains => Relation::During,
            Relation::Starts => Relation::StartedBy,
            Relation::Equals => Relation::Equals,
            Relation::StartedBy => Relation::Starts,
            Relation::During => Relation::Contains,
            Relation::Finishes => Relation::FinishedBy,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::MetBy => Relation::Meets,
            Relation::PrecededBy => Relation::Precedes,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Relation::Precedes => "precedes",
            Relation::Meets => "meets",
            Relation::Overlaps => "overlaps",
            Relation::FinishedBy => "finished by",
            Relation::Contains => "contains",
            Relation::Starts => "starts",
            Relation::Equals => "equals",
            Relation::StartedBy => "started by",
            Relation::During => "during",
            Relation::Finishes => "finishes",
            Relation::OverlappedBy => "overlapped by",
            Relation::MetBy => "met by",
            Relation::PrecededBy => "preceded by",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: Ord> Interval<T> {
    pub fn precedes(&self, other: &Interval<T>) -> bool {
        self.end() < other.start()
    }

    pub fn meets(&self, other: &Interval<T>) -> bool {
        self.end() == other.start()
    }

    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start() < other.start() && other.start() < self.end() && self.end() < other.end()
    }

    pub fn finished_by(&self, other: &Interval<T>) -> bool {
        self.start() < other.start() && self.end() == other.end()
    }

    pub fn contains(&self, other: &Interval<T>) -> bool {
        self.start() < other.start() && self.end() > other.end()
    }

    pub fn starts(&self, other: &Interval<T>) -> bool {
        self.start() == other.start() && self.end() < other.end()
    }

    pub fn equals(&self, other: &Interval<T>) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }

    pub fn started_by(&self, other: &Interval<T>) -> bool {
        self.start() == other.start() && self.end() > other.end()
    }

    pub fn during(&self, other: &Interval<T>) -> bool {
        self.start() > other.start() && self.end() < other.end()
    }

    pub fn finishes(&self, other: &Interval<T>) -> bool {
        self.start() > other.start() && self.end() == other.end()
    }

    pub fn overlapped_by(&self, other: &Interval<T>) -> bool {
        other.start() < self.start() && self.start() < other.end() && other.end() < self.end()
    }

    pub fn met_by(&self, other: &Interval<T>) -> bool {
        self.start() == other.end()
    }

    pub fn preceded_by(&self, other: &Interval<T>) -> bool {
        self.start() > other.end()
    }

    /// True when the closed spans share any point, touching endpoints included.
    pub fn overlaps_loosely(&self, other: &Interval<T>) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    pub fn is(&self, other: &Interval<T>, relation: Relation) -> bool {
        match relation {
            Relation::Precedes => self.precedes(other),
            Relation::Meets => self.meets(other),
            Relation::Overlaps => self.overlaps(other),
            Relation::FinishedBy => self.finished_by(other),
            Relation::Contains => self.contains(other),
            Relation::Starts => self.starts(other),
            Relation::Equals => self.equals(other),
            Relation::StartedBy => self.started_by(other),
            Relation::During => self.during(other),
            Relation::Finishes => self.finishes(other),
            Relation::OverlappedBy => self.overlapped_by(other),
            Relation::MetBy => self.met_by(other),
            Relation::PrecededBy => self.preceded_by(other),
        }
    }

    /// The single relation holding between `self` and `other`.
    pub fn relation(&self, other: &Interval<T>) -> Relation {
        match self.end().cmp(other.start()) {
            Ordering::Less => return Relation::Precedes,
            Ordering::Equal => return Relation::Meets,
            Ordering::Greater => (),
        }
        match self.start().cmp(other.end()) {
            Ordering::Greater => return Relation::PrecededBy,
            Ordering::Equal => return Relation::MetBy,
            Ordering::Less => (),
        }

        // the interiors intersect from here on
        match (self.start().cmp(other.start()), self.end().cmp(other.end())) {
            (Ordering::Less, Ordering::Less) => Relation::Overlaps,
            (Ordering::Less, Ordering::Equal) => Relation::FinishedBy,
            (Ordering::Less, Ordering::Greater) => Relation::Contains,
            (Ordering::Equal, Ordering::Less) => Relation::Starts,
            (Ordering::Equal, Ordering::Equal) => Relation::Equals,
            (Ordering::Equal, Ordering::Greater) => Relation::StartedBy,
            (Ordering::Greater, Ordering::Less) => Relation::During,
            (Ordering::Greater, Ordering::Equal) => Relation::Finishes,
            (Ordering::Greater, Ordering::Greater) => Relation::OverlappedBy,
        }
    }
}
