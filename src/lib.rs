//! lmrank: language-model retrieval features for learning-to-rank
//!
//! Scores a query-document pair with three smoothed query-likelihood models:
//! - `LM.DIR` Dirichlet prior smoothing
//! - `LM.JM` Jelinek-Mercer interpolation
//! - `LM.ABS` absolute discounting
//!
//! Index access goes through two small traits (`CorpusStatisticsProvider`,
//! `DocumentTerms`), so any engine that can report term frequencies can feed
//! the scorers. Missing statistics degrade to zero with a warning; scorers
//! never return an error.

pub mod error;
pub mod observe;
pub mod config;
pub mod query;
pub mod stats;
pub mod scoring;
pub mod features;
pub mod index;

pub use config::LmConfig;
pub use error::{LmError, Result};
pub use features::{FeatureExtractors, FeatureVector};
pub use index::MemoryIndex;
pub use observe::{RecordingSink, TracingSink, WarningSink};
pub use query::QueryTermSet;
pub use scoring::{
    AbsoluteDiscountExtractor, DirichletExtractor, FeatureExtractor, JelinekMercerExtractor,
    RerankContext,
};
pub use stats::{
    CorpusSnapshot, CorpusStatisticsProvider, DocumentStatisticsCollector, DocumentStats,
    DocumentTerms,
};
