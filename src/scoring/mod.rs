//! Language-model retrieval features.
//!
//! Each scorer sums, over the distinct query terms, the log ratio between a
//! smoothed document model and the corpus scale:
//!
//!   score(D, Q) = Σ_{t ∈ set(Q)} ln(numerator_t) − ln(denominator_t)
//!
//! Zero statistics are not guarded: `ln(0)` yields `-inf` and `-inf − -inf`
//! yields `NaN`, and both are returned to the caller as the feature value.
pub mod absolute_discount;
pub mod dirichlet;
pub mod jelinek_mercer;

pub use absolute_discount::{absolute_discount_score, AbsoluteDiscountExtractor};
pub use dirichlet::{dirichlet_score, DirichletExtractor};
pub use jelinek_mercer::{jelinek_mercer_score, JelinekMercerExtractor};

use crate::config::LmConfig;
use crate::observe::WarningSink;
use crate::query::QueryTermSet;
use crate::stats::{CorpusSnapshot, CorpusStatisticsProvider, DocumentTerms};

/// One named feature computed per query-document pair.
pub trait FeatureExtractor: Send + Sync {
    /// Fixed identifier of the feature, e.g. `"LM.DIR"`.
    fn name(&self) -> &str;

    /// Score one document from its term vector; the host's stored document is not needed.
    fn extract(&self, document: &dyn DocumentTerms, context: &RerankContext) -> f64;
}

/// Query-level inputs shared by every document of a rerank pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RerankContext {
    query: QueryTermSet,
    corpus: CorpusSnapshot,
}

impl RerankContext {
    /// Collapse `query_tokens` to a set and capture corpus statistics for it.
    pub fn new<P, I, S>(provider: &P, field: &str, query_tokens: I, sink: &dyn WarningSink) -> Self
    where
        P: CorpusStatisticsProvider + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = QueryTermSet::from_tokens(query_tokens);
        let corpus = CorpusSnapshot::capture(provider, field, &query, sink);
        RerankContext { query, corpus }
    }

    /// Same as `new`, reading the field from `config`.
    pub fn for_config<P, I, S>(
        provider: &P,
        config: &LmConfig,
        query_tokens: I,
        sink: &dyn WarningSink,
    ) -> Self
    where
        P: CorpusStatisticsProvider + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(provider, &config.field, query_tokens, sink)
    }

    pub fn from_snapshot(query: QueryTermSet, corpus: CorpusSnapshot) -> Self {
        RerankContext { query, corpus }
    }

    pub fn query(&self) -> &QueryTermSet {
        &self.query
    }

    pub fn corpus(&self) -> &CorpusSnapshot {
        &self.corpus
    }
}

/// `ln(numerator) − ln(denominator)` without any guard on either argument.
#[inline]
pub(crate) fn log_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator.ln() - denominator.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ratio_degenerate_inputs() {
        assert_eq!(log_ratio(0.0, 1.0), f64::NEG_INFINITY);
        assert!(log_ratio(0.0, 0.0).is_nan());
        assert_eq!(log_ratio(1.0, 0.0), f64::INFINITY);
        assert!(log_ratio(-1.0, 1.0).is_nan());
    }

    #[test]
    fn test_context_from_snapshot() {
        let query = QueryTermSet::from_tokens(["a"]);
        let corpus = CorpusSnapshot::from_parts("contents", 10, [("a", 4)]);
        let ctx = RerankContext::from_snapshot(query.clone(), corpus);
        assert_eq!(ctx.query(), &query);
        assert_eq!(ctx.corpus().term_frequency("a"), 4);
        assert_eq!(ctx.corpus().field(), "contents");
    }
}
