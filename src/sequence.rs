use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Source of log sequence ids, shared by every logger that holds a clone.
///
/// Ids start at 1 and never repeat for loggers sharing a counter, so lines produced
/// by a logger and all of its sub-loggers are totally ordered.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter(Arc<AtomicU64>);

static GLOBAL: OnceLock<SequenceCounter> = OnceLock::new();

impl SequenceCounter {
    /// A fresh counter, independent from the process-wide one.
    pub fn new() -> SequenceCounter {
        SequenceCounter::default()
    }

    /// The process-wide counter used by loggers built without an explicit one.
    pub fn global() -> SequenceCounter {
        GLOBAL.get_or_init(SequenceCounter::new).clone()
    }

    /// Reserves the next id.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The last id handed out, 0 if none was.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Checks whether both handles share the same cell.
    pub fn shares_with(&self, other: &SequenceCounter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
