use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::error::Result;
use crate::observe::{default_sink, WarningSink};
use crate::query::QueryTermSet;

/// A document's term vector for one field.
pub trait DocumentTerms {
    /// Call `visitor` with each (term, frequency) posting of the document.
    ///
    /// On failure the postings visited before the error stand.
    fn visit_terms(&self, visitor: &mut dyn FnMut(&str, u64)) -> Result<()>;
}

impl<S: AsRef<str>> DocumentTerms for [(S, u64)] {
    fn visit_terms(&self, visitor: &mut dyn FnMut(&str, u64)) -> Result<()> {
        for (term, freq) in self {
            visitor(term.as_ref(), *freq);
        }
        Ok(())
    }
}

impl<S: AsRef<str>> DocumentTerms for Vec<(S, u64)> {
    fn visit_terms(&self, visitor: &mut dyn FnMut(&str, u64)) -> Result<()> {
        self.as_slice().visit_terms(visitor)
    }
}

impl DocumentTerms for BTreeMap<String, u64> {
    fn visit_terms(&self, visitor: &mut dyn FnMut(&str, u64)) -> Result<()> {
        for (term, freq) in self {
            visitor(term.as_str(), *freq);
        }
        Ok(())
    }
}

impl DocumentTerms for HashMap<String, u64> {
    fn visit_terms(&self, visitor: &mut dyn FnMut(&str, u64)) -> Result<()> {
        for (term, freq) in self {
            visitor(term.as_str(), *freq);
        }
        Ok(())
    }
}

/// Per-document statistics for one scoring call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Sum of term frequencies over every term of the document.
    pub document_length: u64,
    /// Number of distinct terms in the document.
    pub distinct_term_count: u64,
    /// Frequencies of the query terms present in the document.
    pub term_frequencies: HashMap<String, u64>,
}

impl DocumentStats {
    /// Document-local frequency of `term`; 0 when absent.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }
}

/// Builds `DocumentStats` in a single pass over a document's postings.
#[derive(Clone)]
pub struct DocumentStatisticsCollector {
    sink: Arc<dyn WarningSink>,
}

impl Default for DocumentStatisticsCollector {
    fn default() -> Self {
        Self::new(default_sink())
    }
}

impl std::fmt::Debug for DocumentStatisticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStatisticsCollector").finish_non_exhaustive()
    }
}

impl DocumentStatisticsCollector {
    pub fn new(sink: Arc<dyn WarningSink>) -> Self {
        DocumentStatisticsCollector { sink }
    }

    pub fn collect<D>(&self, document: &D, query: &QueryTermSet) -> DocumentStats
    where
        D: DocumentTerms + ?Sized,
    {
        let mut stats = DocumentStats::default();
        let mut seen: HashSet<String> = HashSet::new();

        let outcome = document.visit_terms(&mut |term: &str, freq: u64| {
            stats.document_length += freq;
            if !seen.contains(term) {
                seen.insert(term.to_string());
            }
            if query.contains(term) {
                stats.term_frequencies.insert(term.to_string(), freq);
            }
        });

        if let Err(e) = outcome {
            self.sink.warn(&format!(
                "Unable to iterate document terms, keeping partial statistics: {}",
                e
            ));
        }

        stats.distinct_term_count = seen.len() as u64;
        stats
    }
}
