use crate::{Error, Result};
use std::fmt::{Display, Formatter};

/// An inclusive number of repeats, `min..=max`. A `max` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat {
    /// minimum number of repeats
    pub min: usize,
    /// maximum number of repeats, inclusive
    pub max: Option<usize>,
}

impl Repeat {
    /// Zero or more: `*`
    pub const fn any_count() -> Self {
        Self { min: 0, max: None }
    }

    /// One or more: `+`
    pub const fn at_least_one() -> Self {
        Self { min: 1, max: None }
    }

    /// Zero up to `n` repeats.
    pub const fn up_to(n: usize) -> Self {
        Self { min: 0, max: Some(n) }
    }

    /// `n` or more repeats.
    pub const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    /// Exactly `n` repeats.
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// Between `min` and `max` repeats, both inclusive.
    pub fn between(min: usize, max: usize) -> Result<Self> {
        if max < min {
            return Err(Error::InvalidRepeat { min, max });
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// Whether this repeat has a finite maximum.
    pub fn is_bounded(&self) -> bool {
        self.max.is_some()
    }

    /// The maximum used when counting repeats.
    /// Unbounded repeats are capped at `cap()`, but never below `min`.
    pub(crate) fn effective_max(&self, cap: impl FnOnce() -> usize) -> usize {
        self.max.unwrap_or_else(|| cap().max(self.min))
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (min, Some(max)) if min == max => write!(f, "{{{min}}}"),
            (min, Some(max)) => write!(f, "{{{min},{max}}}"),
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (min, None) => write!(f, "{{{min},}}"),
        }
    }
}
