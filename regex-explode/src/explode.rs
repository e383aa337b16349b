use crate::{Error, Index, Regex, Result};
use std::iter::FusedIterator;

/// Iterator over every output of a [`Regex`], in index order.
///
/// Calls [`Regex::at`] with `0, 1, 2, ...` and ends at the first index that
/// is out of range. Any other error is returned once, after which the
/// iterator is exhausted.
///
/// Created by [`Regex::iter`]. Iterating the same pattern again always gives
/// the same sequence.
#[derive(Debug, Clone)]
pub struct Explode<'a> {
    regex: &'a Regex,
    next: Index,
    done: bool,
}

impl<'a> Explode<'a> {
    pub(crate) fn new(regex: &'a Regex) -> Self {
        Self {
            regex,
            next: 0,
            done: false,
        }
    }
}

impl Iterator for Explode<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.regex.at(self.next) {
            Ok(output) => {
                self.next += 1;
                Some(Ok(output))
            }
            Err(Error::IndexOutOfRange { .. }) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.regex.cardinality() {
            Ok(cardinality) => {
                let remaining = cardinality.saturating_sub(self.next);
                let upper = usize::try_from(remaining).ok();
                (upper.unwrap_or(usize::MAX), upper)
            }
            // a single error
            Err(_) => (1, Some(1)),
        }
    }
}

impl FusedIterator for Explode<'_> {}
