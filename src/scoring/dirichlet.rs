/// Dirichlet-smoothed query likelihood ("LM.DIR").
///
/// contribution(t) = ln(tf · C + μ · cf) − ln(C · (|D| + μ))
///
/// C: total term frequency of the field, |D|: document length.
use std::sync::Arc;

use crate::config::DirichletParams;
use crate::observe::{default_sink, WarningSink};
use crate::query::QueryTermSet;
use crate::scoring::{log_ratio, FeatureExtractor, RerankContext};
use crate::stats::{CorpusSnapshot, DocumentStatisticsCollector, DocumentStats, DocumentTerms};

pub const NAME: &str = "LM.DIR";

pub fn dirichlet_score(
    doc: &DocumentStats,
    corpus: &CorpusSnapshot,
    query: &QueryTermSet,
    mu: f64,
) -> f64 {
    let total = corpus.total_term_frequency() as f64;
    let dl = doc.document_length as f64;
    let mut score = 0.0;

    for term in query.iter() {
        let tf = doc.term_frequency(term) as f64;
        let cf = corpus.term_frequency(term) as f64;
        let numerator = tf * total + mu * cf;
        let denominator = total * (dl + mu);
        score += log_ratio(numerator, denominator);
    }

    score
}

#[derive(Debug, Clone)]
pub struct DirichletExtractor {
    params: DirichletParams,
    collector: DocumentStatisticsCollector,
}

impl Default for DirichletExtractor {
    fn default() -> Self {
        Self::new(DirichletParams::default(), default_sink())
    }
}

impl DirichletExtractor {
    pub fn new(params: DirichletParams, sink: Arc<dyn WarningSink>) -> Self {
        DirichletExtractor {
            params,
            collector: DocumentStatisticsCollector::new(sink),
        }
    }

    pub fn mu(&self) -> f64 {
        self.params.mu
    }

    pub fn score(&self, doc: &DocumentStats, context: &RerankContext) -> f64 {
        dirichlet_score(doc, context.corpus(), context.query(), self.params.mu)
    }
}

impl FeatureExtractor for DirichletExtractor {
    fn name(&self) -> &str {
        NAME
    }

    fn extract(&self, document: &dyn DocumentTerms, context: &RerankContext) -> f64 {
        let doc = self.collector.collect(document, context.query());
        self.score(&doc, context)
    }
}
