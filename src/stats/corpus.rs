use std::collections::BTreeMap;

use crate::error::Result;
use crate::observe::WarningSink;
use crate::query::QueryTermSet;

/// Source of corpus-wide term statistics for a field.
pub trait CorpusStatisticsProvider {
    /// Sum of term frequencies of every term in every document of `field`.
    fn total_field_term_frequency(&self, field: &str) -> Result<u64>;

    /// Number of occurrences of `term` across the whole corpus for `field`.
    fn term_corpus_frequency(&self, field: &str, term: &str) -> Result<u64>;
}

impl<P: CorpusStatisticsProvider + ?Sized> CorpusStatisticsProvider for &P {
    fn total_field_term_frequency(&self, field: &str) -> Result<u64> {
        (**self).total_field_term_frequency(field)
    }

    fn term_corpus_frequency(&self, field: &str, term: &str) -> Result<u64> {
        (**self).term_corpus_frequency(field, term)
    }
}

/// Total term frequency of `field`, or 0 with a warning when unavailable.
pub fn total_field_term_frequency_or_zero<P>(
    provider: &P,
    field: &str,
    sink: &dyn WarningSink,
) -> u64
where
    P: CorpusStatisticsProvider + ?Sized,
{
    match provider.total_field_term_frequency(field) {
        Ok(total) => total,
        Err(e) => {
            sink.warn(&format!(
                "Unable to get total term frequency for field '{}', it might not be indexed: {}",
                field, e
            ));
            0
        }
    }
}

/// Corpus frequency of `term`, or 0 with a warning when unavailable.
pub fn term_corpus_frequency_or_zero<P>(
    provider: &P,
    field: &str,
    term: &str,
    sink: &dyn WarningSink,
) -> u64
where
    P: CorpusStatisticsProvider + ?Sized,
{
    match provider.term_corpus_frequency(field, term) {
        Ok(cf) => cf,
        Err(e) => {
            sink.warn(&format!(
                "Unable to retrieve corpus frequency of '{}' in field '{}': {}",
                term, field, e
            ));
            0
        }
    }
}

/// Immutable corpus statistics for one query.
///
/// Captured once per rerank pass and shared by every document scored in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSnapshot {
    field: String,
    total_term_frequency: u64,
    term_frequencies: BTreeMap<String, u64>,
}

impl CorpusSnapshot {
    /// Look up the field total and the corpus frequency of every distinct
    /// query term. One provider call per distinct term.
    pub fn capture<P>(
        provider: &P,
        field: &str,
        query: &QueryTermSet,
        sink: &dyn WarningSink,
    ) -> Self
    where
        P: CorpusStatisticsProvider + ?Sized,
    {
        let total_term_frequency = total_field_term_frequency_or_zero(provider, field, sink);
        let term_frequencies = query
            .iter()
            .map(|term| {
                let cf = term_corpus_frequency_or_zero(provider, field, term, sink);
                (term.to_string(), cf)
            })
            .collect();

        CorpusSnapshot {
            field: field.to_string(),
            total_term_frequency,
            term_frequencies,
        }
    }

    /// Build a snapshot from statistics computed elsewhere.
    pub fn from_parts<I, S>(field: &str, total_term_frequency: u64, term_frequencies: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        CorpusSnapshot {
            field: field.to_string(),
            total_term_frequency,
            term_frequencies: term_frequencies
                .into_iter()
                .map(|(t, cf)| (t.into(), cf))
                .collect(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn total_term_frequency(&self) -> u64 {
        self.total_term_frequency
    }

    /// Corpus frequency of `term`; 0 when it was never looked up or missing.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LmError;
    use crate::observe::RecordingSink;
    use std::cell::Cell;

    struct CountingProvider {
        total: Option<u64>,
        lookups: Cell<usize>,
    }

    impl CorpusStatisticsProvider for CountingProvider {
        fn total_field_term_frequency(&self, field: &str) -> Result<u64> {
            self.total
                .ok_or_else(|| LmError::StatisticsUnavailable(format!("field {}", field)))
        }

        fn term_corpus_frequency(&self, _field: &str, term: &str) -> Result<u64> {
            self.lookups.set(self.lookups.get() + 1);
            match term {
                "broken" => Err(LmError::StatisticsUnavailable("read failed".to_string())),
                _ => Ok(term.len() as u64),
            }
        }
    }

    #[test]
    fn test_capture_one_lookup_per_distinct_term() {
        let provider = CountingProvider {
            total: Some(1000),
            lookups: Cell::new(0),
        };
        let sink = RecordingSink::new();
        let query = QueryTermSet::from_tokens(["abc", "abc", "de"]);

        let snap = CorpusSnapshot::capture(&provider, "contents", &query, &sink);
        assert_eq!(provider.lookups.get(), 2);
        assert_eq!(snap.total_term_frequency(), 1000);
        assert_eq!(snap.term_frequency("abc"), 3);
        assert_eq!(snap.term_frequency("de"), 2);
        assert_eq!(snap.term_frequency("unseen"), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unavailable_statistics_recover_to_zero() {
        let provider = CountingProvider {
            total: None,
            lookups: Cell::new(0),
        };
        let sink = RecordingSink::new();
        let query = QueryTermSet::from_tokens(["broken", "ok"]);

        let snap = CorpusSnapshot::capture(&provider, "title", &query, &sink);
        assert_eq!(snap.total_term_frequency(), 0);
        assert_eq!(snap.term_frequency("broken"), 0);
        assert_eq!(snap.term_frequency("ok"), 2);

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("might not be indexed"));
        assert!(messages[1].contains("broken"));
    }
}
