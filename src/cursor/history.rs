//! LIFO of previously visited spans backing [`Segmenter::previous`](super::Segmenter::previous).

use crate::detect::Span;

/// Stack of spans that were current before a forward step replaced them.
///
/// Clearing truncates in place, so a cursor reused across many buffers keeps
/// its allocation.
#[derive(Debug, Default, Clone)]
pub struct History {
    spans: Vec<Span>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create an empty history with room for `capacity` spans.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spans: Vec::with_capacity(capacity),
        }
    }

    /// Push a span on top.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Remove and return the top span.
    pub fn pop(&mut self) -> Option<Span> {
        self.spans.pop()
    }

    /// Top span without removing it.
    pub fn peek(&self) -> Option<Span> {
        self.spans.last().copied()
    }

    /// Drop every span, keeping the allocation.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Current depth.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Allocated capacity in spans.
    pub fn capacity(&self) -> usize {
        self.spans.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = History::new();
        history.push(Span::new(0, 2));
        history.push(Span::new(5, 8));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(Span::new(5, 8)));
        assert_eq!(history.pop(), Some(Span::new(5, 8)));
        assert_eq!(history.pop(), Some(Span::new(0, 2)));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut history = History::with_capacity(4);
        for i in 0..64 {
            history.push(Span::new(i, i + 1));
        }
        let grown = history.capacity();

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), grown);
    }
}
