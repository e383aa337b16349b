use crate::{
    CharacterRange, CharacterSet, Explode, Index, Literal, Product, Repeat, Repeated, Result, Sum,
};
use std::fmt::{Display, Formatter};
use std::iter;

/// A pattern expression.
///
/// Build one with the combinators ([`literal`], [`range`], [`set`],
/// [`concatenate`], [`alternate`], [`repeat`]) rather than by hand: they keep
/// products and sums flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    Literal(Literal),
    CharacterRange(CharacterRange),
    CharacterSet(CharacterSet),
    /// Concatenation
    Product(Product),
    /// Alternation
    Sum(Sum),
    Repeated(Repeated),
}

impl Regex {
    /// A product of the given children, in order. Children are not flattened.
    pub fn product(children: impl IntoIterator<Item = Regex>) -> Self {
        Self::Product(Product::new(children))
    }

    /// A sum of the given children, in order. Children are not flattened.
    pub fn sum(children: impl IntoIterator<Item = Regex>) -> Self {
        Self::Sum(Sum::new(children))
    }

    /// Renders this pattern as regex text.
    pub fn render(&self) -> String {
        match self {
            Regex::Literal(l) => l.render(),
            Regex::CharacterRange(r) => r.render(),
            Regex::CharacterSet(s) => s.render(),
            Regex::Product(p) => p.render(),
            Regex::Sum(s) => s.render(),
            Regex::Repeated(r) => r.render(),
        }
    }

    /// The number of outputs of this pattern, i.e. the exclusive upper bound
    /// of the indices accepted by [`at`](Regex::at).
    pub fn cardinality(&self) -> Result<Index> {
        match self {
            Regex::Literal(l) => Ok(l.cardinality()),
            Regex::CharacterRange(r) => Ok(r.cardinality()),
            Regex::CharacterSet(s) => s.cardinality(),
            Regex::Product(p) => p.cardinality(),
            Regex::Sum(s) => s.cardinality(),
            Regex::Repeated(r) => r.cardinality(),
        }
    }

    /// The output at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)
    /// unless `index < self.cardinality()`.
    pub fn at(&self, index: Index) -> Result<String> {
        match self {
            Regex::Literal(l) => l.at(index),
            Regex::CharacterRange(r) => r.at(index),
            Regex::CharacterSet(s) => s.at(index),
            Regex::Product(p) => p.at(index),
            Regex::Sum(s) => s.at(index),
            Regex::Repeated(r) => r.at(index),
        }
    }

    /// Iterates over all outputs, in index order.
    pub fn iter(&self) -> Explode<'_> {
        Explode::new(self)
    }

    /// See [`concatenate`].
    pub fn then(self, other: impl Into<Regex>) -> Self {
        concatenate(self, other)
    }

    /// See [`alternate`].
    pub fn or(self, other: impl Into<Regex>) -> Self {
        alternate(self, other)
    }

    /// See [`repeat`].
    pub fn repeat(self, repeat: Repeat) -> Self {
        crate::repeat(self, repeat)
    }

    /// See [`repeat_n`].
    pub fn times(self, n: usize) -> Self {
        repeat_n(self, n)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<'a> IntoIterator for &'a Regex {
    type Item = Result<String>;
    type IntoIter = Explode<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for Regex {
    fn from(value: &str) -> Self {
        literal(value)
    }
}

impl From<String> for Regex {
    fn from(value: String) -> Self {
        literal(value)
    }
}

macro_rules! from_node {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Regex {
                fn from(value: $variant) -> Self {
                    Regex::$variant(value)
                }
            }
        )*
    };
}

from_node!(Literal, CharacterRange, CharacterSet, Product, Sum, Repeated);

/// A literal piece of text.
pub fn literal(text: impl Into<String>) -> Regex {
    Regex::Literal(Literal::new(text))
}

/// All characters from `start` to `end`, inclusive.
pub fn range(start: char, end: char) -> Result<Regex> {
    Ok(Regex::CharacterRange(CharacterRange::new(start, end)?))
}

/// Any one of `chars`.
pub fn set(chars: impl IntoIterator<Item = char>) -> Regex {
    Regex::CharacterSet(CharacterSet::new(chars, false))
}

/// Any character not in `chars`. Can be rendered, but not counted or indexed.
pub fn negated_set(chars: impl IntoIterator<Item = char>) -> Regex {
    Regex::CharacterSet(CharacterSet::new(chars, true))
}

/// `a` followed by `b`.
///
/// Two literals are joined into one literal. When `a` is a product, `b` is
/// appended to it (or all of `b`'s children, if `b` is a product too).
pub fn concatenate(a: impl Into<Regex>, b: impl Into<Regex>) -> Regex {
    match (a.into(), b.into()) {
        (Regex::Literal(a), Regex::Literal(b)) => Regex::Literal(a.join(&b)),
        (Regex::Product(a), Regex::Product(b)) => {
            Regex::product(a.into_children().into_iter().chain(b.into_children()))
        }
        (Regex::Product(a), b) => {
            Regex::product(a.into_children().into_iter().chain(iter::once(b)))
        }
        (a, b) => Regex::product([a, b]),
    }
}

/// Either `a` or `b`.
///
/// When `a` is a sum, `b` is appended to it (or all of `b`'s children, if `b`
/// is a sum too).
pub fn alternate(a: impl Into<Regex>, b: impl Into<Regex>) -> Regex {
    match (a.into(), b.into()) {
        (Regex::Sum(a), Regex::Sum(b)) => {
            Regex::sum(a.into_children().into_iter().chain(b.into_children()))
        }
        (Regex::Sum(a), b) => {
            Regex::sum(a.into_children().into_iter().chain(iter::once(b)))
        }
        (a, b) => Regex::sum([a, b]),
    }
}

/// `a`, repeated as specified by `repeat`.
pub fn repeat(a: impl Into<Regex>, repeat: Repeat) -> Regex {
    Regex::Repeated(Repeated::new(a.into(), repeat))
}

/// `a`, repeated exactly `n` times.
pub fn repeat_n(a: impl Into<Regex>, n: usize) -> Regex {
    repeat(a, Repeat::exactly(n))
}
