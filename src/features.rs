/// Ordered chains of feature extractors.
///
/// A chain runs every extractor over one document and returns the values in
/// registration order. `extract_batch` does the same for a whole candidate
/// list on the rayon pool; each document is scored independently against the
/// shared, read-only `RerankContext`.
use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;

use crate::config::LmConfig;
use crate::error::{LmError, Result};
use crate::observe::WarningSink;
use crate::scoring::{
    AbsoluteDiscountExtractor, DirichletExtractor, FeatureExtractor, JelinekMercerExtractor,
    RerankContext,
};
use crate::stats::DocumentTerms;

/// Feature values of one document, in extractor order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// SVMlight / LETOR line: `<label> qid:<qid> 1:<v1> 2:<v2> ... # <docid>`.
    ///
    /// Feature indices start at 1. Non-finite values are written as Rust
    /// formats them (`NaN`, `-inf`); the consumer decides how to treat them.
    pub fn to_svmlight(&self, label: i32, qid: &str, docid: &str) -> String {
        let mut parts = vec![label.to_string(), format!("qid:{}", qid)];
        parts.extend(
            self.values
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{}:{}", i + 1, value)),
        );
        parts.push(format!("# {}", docid));
        parts.join(" ")
    }
}

#[derive(Default)]
pub struct FeatureExtractors {
    extractors: Vec<Box<dyn FeatureExtractor>>,
    names: HashSet<String>,
}

impl std::fmt::Debug for FeatureExtractors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractors")
            .field("names", &self.names())
            .finish()
    }
}

impl FeatureExtractors {
    pub fn new() -> Self {
        Self::default()
    }

    /// `LM.DIR`, `LM.JM` and `LM.ABS`, in that order, parameterized by `config`.
    pub fn language_models(config: &LmConfig, sink: Arc<dyn WarningSink>) -> Result<Self> {
        config.validate()?;
        let mut chain = Self::new();
        chain.add(Box::new(DirichletExtractor::new(config.dirichlet, sink.clone())))?;
        chain.add(Box::new(JelinekMercerExtractor::new(
            config.jelinek_mercer,
            sink.clone(),
        )))?;
        chain.add(Box::new(AbsoluteDiscountExtractor::new(
            config.absolute_discount,
            sink,
        )))?;
        Ok(chain)
    }

    pub fn add(&mut self, extractor: Box<dyn FeatureExtractor>) -> Result<()> {
        let name = extractor.name().to_string();
        if !self.names.insert(name.clone()) {
            return Err(LmError::DuplicateFeature(name));
        }
        self.extractors.push(extractor);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    pub fn extract_all(&self, document: &dyn DocumentTerms, context: &RerankContext) -> FeatureVector {
        FeatureVector {
            values: self
                .extractors
                .iter()
                .map(|e| e.extract(document, context))
                .collect(),
        }
    }

    /// Score every document of a candidate list. Output order matches input.
    pub fn extract_batch<D>(&self, documents: &[D], context: &RerankContext) -> Vec<FeatureVector>
    where
        D: DocumentTerms + Sync,
    {
        tracing::debug!(
            documents = documents.len(),
            features = self.extractors.len(),
            "extracting feature batch"
        );
        documents
            .par_iter()
            .map(|doc| self.extract_all(doc, context))
            .collect()
    }
}
