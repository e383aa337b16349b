use crate::{check_index, config, Error, Index, Regex, Repeat, Result};

/// A child pattern repeated according to a [`Repeat`].
///
/// The cardinality is `child.cardinality() * (max - min + 1)`, where an
/// unbounded `max` is replaced by [`config::max_repeat`] (or `min`, if larger).
///
/// When the child has a single output, index `i` produces exactly `min + i`
/// copies of it. Otherwise the index is split into base-`choices` digits:
/// the first `min` digits are always emitted, after which digits are emitted
/// for as long as the remaining index is non-zero. The number of repeats thus
/// depends on the index itself, and the cardinality above does not count the
/// distinct strings this reaches: for a child with more than one output,
/// indices near the top of the range can emit more than `max` repeats, while
/// many repeat counts below `max` are never combined with every choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeated {
    child: Box<Regex>,
    repeat: Repeat,
}

impl Repeated {
    pub fn new(child: Regex, repeat: Repeat) -> Self {
        Self {
            child: Box::new(child),
            repeat,
        }
    }

    pub fn child(&self) -> &Regex {
        &self.child
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn render(&self) -> String {
        format!("{}{}", self.child.render(), self.repeat)
    }

    /// Number of repeat counts, `min..=max`.
    fn count(&self) -> Result<Index> {
        let Repeat { min, .. } = self.repeat;
        let max = self.repeat.effective_max(config::max_repeat);
        let span = max
            .checked_sub(min)
            .ok_or(Error::InvalidRepeat { min, max })?;
        Ok(span as Index + 1)
    }

    pub fn cardinality(&self) -> Result<Index> {
        self.child
            .cardinality()?
            .checked_mul(self.count()?)
            .ok_or(Error::Overflow)
    }

    pub fn at(&self, index: Index) -> Result<String> {
        check_index(index, self.cardinality()?)?;
        let choices = self.child.cardinality()?;
        let min = self.repeat.min;

        if choices == 1 {
            // in bounds, so min + index <= max
            let repeats = min + index as usize;
            return Ok(self.child.at(0)?.repeat(repeats));
        }

        let mut rest = index;
        let mut output = String::new();
        let mut repeats = 0;
        while repeats < min || rest > 0 {
            output.push_str(&self.child.at(rest % choices)?);
            rest /= choices;
            repeats += 1;
        }
        log::trace!("{} at {index}: {repeats} repeats", self.render());
        Ok(output)
    }
}
