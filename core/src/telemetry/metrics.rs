use std::sync::Mutex;

/// Counters for workflow activity, shared across threads.
pub struct UsageMetrics {
    inner: Mutex<Counters>,
}

#[derive(Default, Clone, Copy)]
struct Counters {
    layouts: usize,
    reviews: usize,
    errors: usize,
}

impl UsageMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_layout(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.layouts += 1;
        }
    }

    pub fn record_review(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.reviews += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    /// (layouts, reviews, errors) at the time of the call.
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.layouts, counters.reviews, counters.errors)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self::new()
    }
}
