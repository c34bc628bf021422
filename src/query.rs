/// Distinct query terms.
///
/// Repeated query tokens collapse to one entry. Iteration is lexicographic so
/// two equal sets always sum their contributions in the same order.
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTermSet {
    terms: BTreeSet<String>,
}

impl QueryTermSet {
    pub fn new() -> Self {
        QueryTermSet {
            terms: BTreeSet::new(),
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryTermSet {
            terms: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns false when the term was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for QueryTermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        QueryTermSet::from_tokens(iter)
    }
}
