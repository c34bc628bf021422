/// Injectable warning reporting.
///
/// Statistics lookups never fail past their boundary; instead they report a
/// warning through a `WarningSink` handed to the scorer (or rerank context)
/// at construction. The default sink forwards to `tracing`.
use std::sync::Arc;

use parking_lot::Mutex;

pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing::warn!` under the `lmrank` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "lmrank", "{}", message);
    }
}

/// Keeps every warning in memory. Useful in tests and in batch tools that
/// want to report degraded features after a run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

pub fn default_sink() -> Arc<dyn WarningSink> {
    Arc::new(TracingSink)
}
