use crate::{check_index, Error, Index, Result};
use std::collections::BTreeSet;

/// A fixed piece of text. It has exactly one output: itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Joins two literals into one.
    pub(crate) fn join(mut self, other: &Literal) -> Self {
        self.text.push_str(&other.text);
        self
    }

    pub fn render(&self) -> String {
        format!("({})", self.text)
    }

    pub fn cardinality(&self) -> Index {
        1
    }

    pub fn at(&self, index: Index) -> Result<String> {
        check_index(index, self.cardinality())?;
        Ok(self.text.clone())
    }
}

/// An inclusive range of characters, `[a-z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterRange {
    start: char,
    end: char,
}

impl CharacterRange {
    /// Fails with [`Error::InvalidRange`] if `start` comes after `end`.
    pub fn new(start: char, end: char) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    pub fn render(&self) -> String {
        format!("[{}-{}]", self.start, self.end)
    }

    pub fn cardinality(&self) -> Index {
        Index::from(u32::from(self.end) - u32::from(self.start)) + 1
    }

    pub fn at(&self, index: Index) -> Result<String> {
        check_index(index, self.cardinality())?;
        // in bounds, so the offset is at most 0x10ffff
        let code_point = u32::from(self.start) + index as u32;
        char::from_u32(code_point)
            .map(String::from)
            .ok_or(Error::InvalidCodePoint(code_point))
    }
}

/// A set of characters, `[abc]`, optionally negated, `[^abc]`.
///
/// Characters are kept in code point order, except for `^` and `-` which are
/// moved to the end (in that order) so the rendered set stays a valid class.
/// Indexing follows the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterSet {
    chars: Vec<char>,
    negated: bool,
}

impl CharacterSet {
    const META: [char; 2] = ['^', '-'];

    pub fn new(chars: impl IntoIterator<Item = char>, negated: bool) -> Self {
        let mut distinct: BTreeSet<char> = chars.into_iter().collect();
        let meta: Vec<char> = Self::META
            .into_iter()
            .filter(|c| distinct.remove(c))
            .collect();

        let mut chars: Vec<char> = distinct.into_iter().collect();
        chars.extend(meta);
        Self { chars, negated }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn render(&self) -> String {
        let negation = if self.negated { "^" } else { "" };
        let chars: String = self.chars.iter().collect();
        format!("[{negation}{chars}]")
    }

    pub fn cardinality(&self) -> Result<Index> {
        if self.negated {
            return Err(Error::Unsupported("cannot count the outputs of a negated character set"));
        }
        Ok(self.chars.len() as Index)
    }

    pub fn at(&self, index: Index) -> Result<String> {
        check_index(index, self.cardinality()?)?;
        Ok(self.chars[index as usize].to_string())
    }
}
