//! Allen's interval algebra over date and date-time intervals.
//!
//! ```
//! use allen_intervals::{Interval, Relation};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let a = Interval::new(day(1), day(10))?;
//! let b = Interval::new(day(5), day(15))?;
//!
//! assert_eq!(a.relation(&b), Relation::Overlaps);
//! assert_eq!(a.intersection(&b), Some(Interval::new(day(5), day(10))?));
//! assert_eq!(a.union(&b), Some(Interval::new(day(1), day(15))?));
//! # Ok::<(), allen_intervals::IntervalError>(())
//! ```

pub mod boundary;
pub use boundary::{Boundary, Granularity, Moment};

pub mod error;
pub use error::{IntervalError, Result};

pub mod interval;
pub use interval::Interval;

mod ordering;

pub mod ops;
pub use ops::Difference;

pub mod relation;
pub use relation::Relation;
