//! In-memory reference index over pre-tokenized documents.
//!
//! Keeps, per field, a frequency list for each term and a term vector for
//! each document, and serves both statistics interfaces from them. Tokenization is
//! the caller's job: documents arrive as token sequences.
pub mod postings;

use std::collections::{BTreeMap, HashMap};

use crate::error::{LmError, Result};
use crate::stats::CorpusStatisticsProvider;
use postings::PostingList;

/// Term vector of one document field: term -> frequency.
pub type TermVector = BTreeMap<String, u64>;

#[derive(Debug, Clone, Default)]
struct FieldIndex {
    postings: BTreeMap<String, PostingList>,
    documents: BTreeMap<u64, TermVector>,
    total_term_frequency: u64,
}

impl FieldIndex {
    fn add(&mut self, doc_id: u64, tokens: &[String]) {
        let mut vector = TermVector::new();
        for token in tokens {
            *vector.entry(token.clone()).or_default() += 1;
        }

        for (term, tf) in &vector {
            self.postings.entry(term.clone()).or_default().set(doc_id, *tf);
        }
        self.total_term_frequency += tokens.len() as u64;
        self.documents.insert(doc_id, vector);
    }

    fn remove(&mut self, doc_id: u64) -> bool {
        let Some(vector) = self.documents.remove(&doc_id) else {
            return false;
        };
        for (term, freq) in &vector {
            if let Some(pl) = self.postings.get_mut(term) {
                pl.remove(doc_id);
                if pl.is_empty() {
                    self.postings.remove(term);
                }
            }
            self.total_term_frequency -= freq;
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    fields: HashMap<String, FieldIndex>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `tokens` as the content of `field` for `doc_id`. Re-adding a
    /// document replaces its previous content in that field.
    pub fn add_document<I, S>(&mut self, field: &str, doc_id: u64, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        let fi = self.fields.entry(field.to_string()).or_default();
        fi.remove(doc_id);
        fi.add(doc_id, &tokens);
    }

    /// Returns false when the document was not indexed in `field`.
    pub fn remove_document(&mut self, field: &str, doc_id: u64) -> bool {
        self.fields
            .get_mut(field)
            .map(|fi| fi.remove(doc_id))
            .unwrap_or(false)
    }

    pub fn document_terms(&self, field: &str, doc_id: u64) -> Option<&TermVector> {
        self.fields.get(field)?.documents.get(&doc_id)
    }

    pub fn doc_count(&self, field: &str) -> usize {
        self.fields.get(field).map(|fi| fi.documents.len()).unwrap_or(0)
    }

    fn field(&self, field: &str) -> Result<&FieldIndex> {
        self.fields
            .get(field)
            .ok_or_else(|| LmError::StatisticsUnavailable(format!("field '{}' is not indexed", field)))
    }
}

impl CorpusStatisticsProvider for MemoryIndex {
    fn total_field_term_frequency(&self, field: &str) -> Result<u64> {
        Ok(self.field(field)?.total_term_frequency)
    }

    fn term_corpus_frequency(&self, field: &str, term: &str) -> Result<u64> {
        Ok(self
            .field(field)?
            .postings
            .get(term)
            .map(PostingList::cf)
            .unwrap_or(0))
    }
}
