use crate::{check_index, Error, Index, Regex, Result};
use itertools::Itertools;
use std::sync::OnceLock;

/// Child nodes of a [`Product`] or [`Sum`], with their cardinalities
/// computed on first use.
#[derive(Debug, Clone, Default)]
struct Children {
    nodes: Vec<Regex>,
    weights: OnceLock<Result<Vec<Index>>>,
}

impl Children {
    fn new(nodes: impl IntoIterator<Item = Regex>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            weights: OnceLock::new(),
        }
    }

    fn weights(&self) -> Result<&[Index]> {
        self.weights
            .get_or_init(|| self.nodes.iter().map(Regex::cardinality).collect())
            .as_deref()
            .map_err(Clone::clone)
    }

    fn weighted(&self) -> Result<impl Iterator<Item = (&Regex, Index)> + '_> {
        Ok(self.nodes.iter().zip(self.weights()?.iter().copied()))
    }

    fn render(&self, separator: &str) -> String {
        format!("({})", self.nodes.iter().map(Regex::render).join(separator))
    }
}

impl PartialEq for Children {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Children {}

/// Concatenation of its children, in order.
///
/// Outputs are numbered in mixed radix: the first child is the least
/// significant digit, so consecutive indices vary the first child fastest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    children: Children,
}

impl Product {
    pub fn new(children: impl IntoIterator<Item = Regex>) -> Self {
        Self {
            children: Children::new(children),
        }
    }

    pub fn children(&self) -> &[Regex] {
        &self.children.nodes
    }

    pub(crate) fn into_children(self) -> Vec<Regex> {
        self.children.nodes
    }

    pub fn render(&self) -> String {
        self.children.render("")
    }

    /// The product of the children's cardinalities. An empty product has one
    /// output, the empty string.
    pub fn cardinality(&self) -> Result<Index> {
        self.children
            .weights()?
            .iter()
            .try_fold(1, |acc: Index, weight| acc.checked_mul(*weight))
            .ok_or(Error::Overflow)
    }

    pub fn at(&self, index: Index) -> Result<String> {
        check_index(index, self.cardinality()?)?;

        let mut rest = index;
        let mut output = String::new();
        for (child, weight) in self.children.weighted()? {
            output.push_str(&child.at(rest % weight)?);
            rest /= weight;
        }
        Ok(output)
    }
}

/// Alternation between its children.
///
/// Outputs are numbered block by block: first all outputs of the first child,
/// then all of the second, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sum {
    children: Children,
}

impl Sum {
    pub fn new(children: impl IntoIterator<Item = Regex>) -> Self {
        Self {
            children: Children::new(children),
        }
    }

    pub fn children(&self) -> &[Regex] {
        &self.children.nodes
    }

    pub(crate) fn into_children(self) -> Vec<Regex> {
        self.children.nodes
    }

    pub fn render(&self) -> String {
        self.children.render("|")
    }

    pub fn cardinality(&self) -> Result<Index> {
        self.children
            .weights()?
            .iter()
            .try_fold(0, |acc: Index, weight| acc.checked_add(*weight))
            .ok_or(Error::Overflow)
    }

    pub fn at(&self, index: Index) -> Result<String> {
        let cardinality = self.cardinality()?;
        check_index(index, cardinality)?;

        let mut offset = index;
        for (child, weight) in self.children.weighted()? {
            if offset < weight {
                return child.at(offset);
            }
            offset -= weight;
        }
        Err(Error::IndexOutOfRange { index, cardinality })
    }
}
