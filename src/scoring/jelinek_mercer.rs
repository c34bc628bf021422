/// Jelinek-Mercer interpolated query likelihood ("LM.JM").
///
/// contribution(t) = ln(λ · C · tf + (1 − λ) · |D| · cf) − ln(|D| · C)
use std::sync::Arc;

use crate::config::JelinekMercerParams;
use crate::observe::{default_sink, WarningSink};
use crate::query::QueryTermSet;
use crate::scoring::{log_ratio, FeatureExtractor, RerankContext};
use crate::stats::{CorpusSnapshot, DocumentStatisticsCollector, DocumentStats, DocumentTerms};

pub const NAME: &str = "LM.JM";

pub fn jelinek_mercer_score(
    doc: &DocumentStats,
    corpus: &CorpusSnapshot,
    query: &QueryTermSet,
    lambda: f64,
) -> f64 {
    let total = corpus.total_term_frequency() as f64;
    let dl = doc.document_length as f64;
    let mut score = 0.0;

    for term in query.iter() {
        let tf = doc.term_frequency(term) as f64;
        let cf = corpus.term_frequency(term) as f64;
        let numerator = lambda * total * tf + (1.0 - lambda) * dl * cf;
        let denominator = dl * total;
        score += log_ratio(numerator, denominator);
    }

    score
}

#[derive(Debug, Clone)]
pub struct JelinekMercerExtractor {
    params: JelinekMercerParams,
    collector: DocumentStatisticsCollector,
}

impl Default for JelinekMercerExtractor {
    fn default() -> Self {
        Self::new(JelinekMercerParams::default(), default_sink())
    }
}

impl JelinekMercerExtractor {
    pub fn new(params: JelinekMercerParams, sink: Arc<dyn WarningSink>) -> Self {
        JelinekMercerExtractor {
            params,
            collector: DocumentStatisticsCollector::new(sink),
        }
    }

    pub fn lambda(&self) -> f64 {
        self.params.lambda
    }

    pub fn score(&self, doc: &DocumentStats, context: &RerankContext) -> f64 {
        jelinek_mercer_score(doc, context.corpus(), context.query(), self.params.lambda)
    }
}

impl FeatureExtractor for JelinekMercerExtractor {
    fn name(&self) -> &str {
        NAME
    }

    fn extract(&self, document: &dyn DocumentTerms, context: &RerankContext) -> f64 {
        let doc = self.collector.collect(document, context.query());
        self.score(&doc, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(total: u64, cfs: &[(&str, u64)], query: &[&str]) -> RerankContext {
        RerankContext::from_snapshot(
            QueryTermSet::from_tokens(query.iter().copied()),
            CorpusSnapshot::from_parts("contents", total, cfs.iter().copied()),
        )
    }

    #[test]
    fn test_closed_form() {
        let ctx = context(1000, &[("a", 100)], &["a"]);
        let doc = vec![("a", 5u64), ("filler", 45)];
        let score = JelinekMercerExtractor::default().extract(&doc, &ctx);

        let expected = (0.1f64 * 1000.0 * 5.0 + 0.9 * 50.0 * 100.0).ln() - (50.0f64 * 1000.0).ln();
        assert!((score - expected).abs() < 1e-12, "{} vs {}", score, expected);
    }

    #[test]
    fn test_absent_term_uses_corpus_part_only() {
        let ctx = context(1000, &[("a", 100)], &["a"]);
        let doc = vec![("b", 50u64)];
        let score = JelinekMercerExtractor::default().extract(&doc, &ctx);

        let expected = (0.9f64 * 50.0 * 100.0).ln() - (50.0f64 * 1000.0).ln();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lambda_one_ignores_corpus() {
        let ext = JelinekMercerExtractor::new(JelinekMercerParams { lambda: 1.0 }, default_sink());
        assert_eq!(ext.lambda(), 1.0);
        let ctx = context(1000, &[("a", 100)], &["a"]);
        let score = ext.extract(&vec![("a", 5u64), ("b", 45)], &ctx);
        // Pure maximum-likelihood estimate tf / |D|.
        assert!((score - (5.0f64 / 50.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_is_degenerate() {
        let ctx = context(1000, &[("a", 100)], &["a"]);
        let doc: Vec<(&str, u64)> = Vec::new();
        let score = JelinekMercerExtractor::default().extract(&doc, &ctx);
        assert!(score.is_nan());
    }

    #[test]
    fn test_zero_corpus_total_is_not_finite() {
        let ctx = context(0, &[], &["a"]);
        let score = JelinekMercerExtractor::default().extract(&vec![("a", 3u64)], &ctx);
        assert!(score.is_nan() || score == f64::NEG_INFINITY);
    }

    #[test]
    fn test_name() {
        assert_eq!(JelinekMercerExtractor::default().name(), "LM.JM");
    }
}
