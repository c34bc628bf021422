/// Absolute-discounting query likelihood ("LM.ABS").
///
/// contribution(t) = ln(C · tf' + δ · |D|u · cf) − ln(|D| · C)
///
/// |D|u is the number of distinct terms in the document and tf' is tf, set to
/// zero when `tf − δ < 0`. With integer frequencies and δ < 1 that only
/// happens for tf = 0, so the clamp never changes a present term.
use std::sync::Arc;

use crate::config::AbsoluteDiscountParams;
use crate::observe::{default_sink, WarningSink};
use crate::query::QueryTermSet;
use crate::scoring::{log_ratio, FeatureExtractor, RerankContext};
use crate::stats::{CorpusSnapshot, DocumentStatisticsCollector, DocumentStats, DocumentTerms};

pub const NAME: &str = "LM.ABS";

/// Document frequency after the discount clamp.
#[inline]
pub fn discounted_tf(tf: u64, delta: f64) -> u64 {
    if (tf as f64) - delta < 0.0 {
        0
    } else {
        tf
    }
}

pub fn absolute_discount_score(
    doc: &DocumentStats,
    corpus: &CorpusSnapshot,
    query: &QueryTermSet,
    delta: f64,
) -> f64 {
    let total = corpus.total_term_frequency() as f64;
    let dl = doc.document_length as f64;
    let unique = doc.distinct_term_count as f64;
    let mut score = 0.0;

    for term in query.iter() {
        let tf = discounted_tf(doc.term_frequency(term), delta) as f64;
        let cf = corpus.term_frequency(term) as f64;
        let numerator = total * tf + delta * unique * cf;
        let denominator = dl * total;
        score += log_ratio(numerator, denominator);
    }

    score
}

#[derive(Debug, Clone)]
pub struct AbsoluteDiscountExtractor {
    params: AbsoluteDiscountParams,
    collector: DocumentStatisticsCollector,
}

impl Default for AbsoluteDiscountExtractor {
    fn default() -> Self {
        Self::new(AbsoluteDiscountParams::default(), default_sink())
    }
}

impl AbsoluteDiscountExtractor {
    pub fn new(params: AbsoluteDiscountParams, sink: Arc<dyn WarningSink>) -> Self {
        AbsoluteDiscountExtractor {
            params,
            collector: DocumentStatisticsCollector::new(sink),
        }
    }

    pub fn delta(&self) -> f64 {
        self.params.delta
    }

    pub fn score(&self, doc: &DocumentStats, context: &RerankContext) -> f64 {
        absolute_discount_score(doc, context.corpus(), context.query(), self.params.delta)
    }
}

impl FeatureExtractor for AbsoluteDiscountExtractor {
    fn name(&self) -> &str {
        NAME
    }

    fn extract(&self, document: &dyn DocumentTerms, context: &RerankContext) -> f64 {
        let doc = self.collector.collect(document, context.query());
        self.score(&doc, context)
    }
}
