use thiserror::Error;

use crate::boundary::Granularity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
    #[error("interval bounds must share one granularity (start is {start}, end is {end})")]
    IncorrectGranularity {
        start: Granularity,
        end: Granularity,
    },
    #[error("interval length cannot be zero")]
    ZeroLength,
    #[error("interval start must be before interval end")]
    Inverted,
}

pub type Result<T, E = IntervalError> = std::result::Result<T, E>;
