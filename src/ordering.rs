//! Partial ordering of intervals, expressed through their relations.
//!
//! Overlapping or nested intervals are incomparable: none of `less_than`,
//! `greater_than` or `==` holds for them.

use std::hash::{Hash, Hasher};

use crate::interval::Interval;

impl<T: Ord> Interval<T> {
    pub fn less_than(&self, other: &Interval<T>) -> bool {
        self.precedes(other)
    }

    pub fn less_or_equal(&self, other: &Interval<T>) -> bool {
        self.precedes(other) || self.meets(other)
    }

    pub fn greater_than(&self, other: &Interval<T>) -> bool {
        self.preceded_by(other)
    }

    pub fn greater_or_equal(&self, other: &Interval<T>) -> bool {
        self.preceded_by(other) || self.met_by(other)
    }
}

impl<T: Ord> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Ord> Eq for Interval<T> {}

impl<T: Hash> Hash for Interval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start().hash(state);
        self.end().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn iv(start: u32, end: u32) -> Interval<NaiveDate> {
        let day = |n| NaiveDate::from_ymd_opt(2024, 1, n).unwrap();
        Interval::new(day(start), day(end)).unwrap()
    }

    #[test]
    fn gap_orders_strictly() {
        let a = iv(1, 3);
        let b = iv(5, 8);
        assert!(a.less_than(&b));
        assert!(a.less_or_equal(&b));
        assert!(b.greater_than(&a));
        assert!(b.greater_or_equal(&a));
        assert!(a != b);
    }

    #[test]
    fn touching_orders_loosely() {
        let a = iv(1, 5);
        let b = iv(5, 8);
        assert!(!a.less_than(&b));
        assert!(a.less_or_equal(&b));
        assert!(!b.greater_than(&a));
        assert!(b.greater_or_equal(&a));
    }

    #[test]
    fn overlapping_is_incomparable() {
        let a = iv(1, 6);
        let b = iv(4, 8);
        for (x, y) in [(&a, &b), (&b, &a)].iter() {
            assert!(!x.less_than(y));
            assert!(!x.less_or_equal(y));
            assert!(!x.greater_than(y));
            assert!(!x.greater_or_equal(y));
            assert!(x != y);
        }
    }

    #[test]
    fn equality_ignores_construction_path() {
        use crate::boundary::Moment;
        use std::collections::HashSet;

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let by_date = Interval::new(Moment::from(date), Moment::from(date.succ_opt().unwrap())).unwrap();
        let by_time = Interval::new(
            Moment::from(date.and_hms_opt(0, 0, 0).unwrap()),
            Moment::from(date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap()),
        )
        .unwrap();

        assert_eq!(by_date, by_time);
        let set = vec![by_date, by_time].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 1);
    }
}
