//! Cursor configuration.

/// Tuning knobs for a [`Segmenter`](super::Segmenter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Spans to preallocate in the history stack.
    pub history_capacity: usize,
}

impl SegmenterConfig {
    /// Preallocate room for `capacity` history entries.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
