//! Corpus- and document-level term statistics consumed by the scorers.
//!
//! Both sides fail soft: a lookup that cannot be served is reported through
//! the injected `WarningSink` and treated as zero.
pub mod corpus;
pub mod document;

pub use corpus::{CorpusSnapshot, CorpusStatisticsProvider};
pub use document::{DocumentStatisticsCollector, DocumentStats, DocumentTerms};

/// Default indexed field holding document bodies.
pub const FIELD_BODY: &str = "contents";
