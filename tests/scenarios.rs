use allen_intervals::{Difference, Granularity, Interval, IntervalError, Moment, Relation};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn span(start: NaiveDate, end: NaiveDate) -> Interval<NaiveDate> {
    Interval::new(start, end).unwrap()
}

#[test]
fn overlapping_periods() {
    let a = span(d(2024, 1, 1), d(2024, 1, 10));
    let b = span(d(2024, 1, 5), d(2024, 1, 15));

    assert!(a.overlaps(&b));
    assert_eq!(a.relation(&b), Relation::Overlaps);
    assert_eq!(a.intersection(&b), Some(span(d(2024, 1, 5), d(2024, 1, 10))));
    assert_eq!(a.union(&b), Some(span(d(2024, 1, 1), d(2024, 1, 15))));
    assert_eq!(a.subtract(&b), Difference::One(span(d(2024, 1, 1), d(2024, 1, 5))));
}

#[test]
fn adjoining_periods() {
    let a = span(d(2024, 1, 1), d(2024, 1, 5));
    let b = span(d(2024, 1, 5), d(2024, 1, 10));

    assert!(a.meets(&b));
    assert!(b.met_by(&a));
    assert_eq!(a.intersection(&b), None);
    assert_eq!(a.union(&b), Some(span(d(2024, 1, 1), d(2024, 1, 10))));
    assert!(a.less_or_equal(&b));
    assert!(!a.less_than(&b));
}

#[test]
fn nested_periods() {
    let a = span(d(2024, 1, 1), d(2024, 1, 10));
    let b = span(d(2024, 1, 3), d(2024, 1, 6));

    assert!(a.contains(&b));
    assert!(b.during(&a));
    assert_eq!(
        a.subtract(&b),
        Difference::Two(
            span(d(2024, 1, 1), d(2024, 1, 3)),
            span(d(2024, 1, 6), d(2024, 1, 10)),
        )
    );
    assert!(b.subtract(&a).is_empty());
}

#[test]
fn separated_periods() {
    let a = span(d(2024, 1, 1), d(2024, 1, 5));
    let b = span(d(2024, 2, 1), d(2024, 2, 5));

    assert!(a.precedes(&b));
    assert!(a.less_than(&b));
    assert!(b.greater_than(&a));
    assert_eq!(a.intersection(&b), None);
    assert_eq!(a.union(&b), None);
    assert_eq!(a.subtract(&b), Difference::One(a));
}

#[test]
fn degenerate_periods_are_rejected() {
    assert_eq!(
        Interval::new(d(2024, 1, 1), d(2024, 1, 1)).unwrap_err(),
        IntervalError::ZeroLength
    );
    assert_eq!(
        Interval::new(d(2024, 1, 5), d(2024, 1, 1)).unwrap_err(),
        IntervalError::Inverted
    );
}

#[test]
fn runtime_bounds_must_agree() {
    let morning: NaiveDateTime = d(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap();
    let err = Interval::new(Moment::from(morning), Moment::from(d(2024, 1, 2))).unwrap_err();
    assert_eq!(
        err,
        IntervalError::IncorrectGranularity {
            start: Granularity::DateTime,
            end: Granularity::Date,
        }
    );
}

#[test]
fn shifts_within_a_day() {
    let at = |h, m| Utc.with_ymd_and_hms(2024, 3, 4, h, m, 0).unwrap();
    let shift = Interval::new(at(9, 0), at(17, 30)).unwrap();
    let lunch = Interval::new(at(12, 0), at(12, 45)).unwrap();

    assert_eq!(shift.granularity(), Granularity::DateTime);
    assert_eq!(shift.duration(), TimeDelta::minutes(510));
    assert_eq!(shift.seconds(), 30_600.0);
    assert_eq!(shift.relation(&lunch), Relation::Contains);

    let worked = (&shift - &lunch)
        .iter()
        .map(|piece| piece.seconds())
        .sum::<f64>();
    assert_eq!(worked, 30_600.0 - 2_700.0);
}
