//! Build pattern expressions, render them to regex text and explode them
//! into every concrete string they can match.
//!
//! A pattern is a tree of [`Regex`] nodes assembled with the combinators in
//! this crate:
//!
//! ```rust
//! use regex_explode::*;
//!
//! let greeting = concatenate(alternate("hello", "bye"), repeat_n(literal("!"), 2));
//!
//! assert_eq!(greeting.render(), "(((hello)|(bye))(!){2})");
//! assert_eq!(greeting.cardinality().unwrap(), 2);
//! assert_eq!(greeting.at(1).unwrap(), "bye!!");
//!
//! let all: Vec<String> = greeting.iter().collect::<Result<_>>().unwrap();
//! assert_eq!(all, vec!["hello!!", "bye!!"]);
//! ```
//!
//! Every node has a [cardinality](Regex::cardinality): the number of outputs
//! it can produce. [`Regex::at`] maps an index in `0..cardinality` to exactly one
//! output, and [`Regex::iter`] walks all of them in index order.
//!
//! Unbounded repetitions (`*`, `+`, `{n,}`) are capped at
//! [`config::max_repeat`] repeats for the purpose of enumeration.

pub mod config;
mod compound;
mod explode;
mod leaf;
mod regex;
mod repeat;
mod repeated;

pub use compound::{Product, Sum};
pub use explode::Explode;
pub use leaf::{CharacterRange, CharacterSet, Literal};
pub use regex::{
    alternate, concatenate, literal, negated_set, range, repeat, repeat_n, set, Regex,
};
pub use repeat::Repeat;
pub use repeated::Repeated;

/// Cardinalities and indices of pattern outputs.
pub type Index = u128;

/// Errors raised while building or exploding a pattern.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character range whose start lies after its end.
    #[error("start of range must not come after its end: {start:?} > {end:?}")]
    InvalidRange {
        /// first character of the range
        start: char,
        /// last character of the range
        end: char,
    },
    /// A repetition whose maximum is smaller than its minimum.
    #[error("repeat maximum {max} is smaller than minimum {min}")]
    InvalidRepeat {
        /// minimum number of repeats
        min: usize,
        /// maximum number of repeats
        max: usize,
    },
    /// An index outside of `0..cardinality`.
    #[error("index {index} out of bounds for pattern with {cardinality} choices")]
    IndexOutOfRange {
        /// the requested index
        index: Index,
        /// the cardinality of the node that was indexed
        cardinality: Index,
    },
    /// The node cannot be counted or indexed.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
    /// The number of choices does not fit in an [`Index`].
    #[error("number of choices overflows")]
    Overflow,
    /// A character range produced a value that is not a unicode scalar value.
    #[error("code point {0:#x} is not a valid character")]
    InvalidCodePoint(u32),
    /// [`config::set_max_repeat`] was called after the cap was fixed.
    #[error("max repeat is already fixed at {current}")]
    MaxRepeatAlreadySet {
        /// the value the cap was fixed at
        current: usize,
    },
}

/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails with [`Error::IndexOutOfRange`] unless `index < cardinality`.
pub(crate) fn check_index(index: Index, cardinality: Index) -> Result<()> {
    if index < cardinality {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, cardinality })
    }
}
