//! Stateful cursor that walks a buffer segment by segment.
//!
//! The cursor drives a stateless [`Detector`] over the unconsumed suffix of
//! the buffer. Every forward step records the span it replaces, so stepping
//! back is a pop rather than a rescan.

mod config;
mod history;

pub use config::SegmenterConfig;
pub use history::History;

use tracing::{debug, trace, warn};

use crate::detect::{Detector, Span};
use crate::error::SegmentError;
use crate::{Bidirectional, Forward};

/// Bidirectional iterator over the segments of a byte buffer.
///
/// ```
/// use segment::{detect::Whitespace, Segmenter};
///
/// let mut seg = Segmenter::new(Whitespace);
/// seg.set_text(b"This is an example.");
///
/// let mut words = Vec::new();
/// while seg.next() {
///     words.push(seg.bytes());
/// }
/// assert!(seg.err().is_none());
/// let expected: [&[u8]; 4] = [b"This", b"is", b"an", b"example."];
/// assert_eq!(words, expected);
/// ```
#[derive(Debug)]
pub struct Segmenter<'a, D> {
    detector: D,
    data: &'a [u8],
    current: Span,
    history: History,
    err: Option<SegmentError>,
}

#[allow(clippy::should_implement_trait)]
impl<'a, D: Detector> Segmenter<'a, D> {
    /// Create a cursor with default configuration and an empty buffer.
    pub fn new(detector: D) -> Self {
        Self::with_config(detector, SegmenterConfig::default())
    }

    /// Create a cursor with explicit configuration.
    pub fn with_config(detector: D, config: SegmenterConfig) -> Self {
        Self {
            detector,
            data: &[],
            current: Span::default(),
            history: History::with_capacity(config.history_capacity),
            err: None,
        }
    }

    /// Replace the buffer and reset position, history, and error state.
    pub fn set_text(&mut self, data: &'a [u8]) {
        self.data = data;
        self.current = Span::default();
        self.history.clear();
        self.err = None;
    }

    /// Advance to the next segment.
    ///
    /// Returns false at the end of the buffer or when an error occurred; check
    /// [`err`](Self::err) to tell them apart. Errors latch until the next
    /// [`set_text`](Self::set_text).
    pub fn next(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }

        let data = self.data;
        let consumed = self.current.end;
        if consumed == data.len() {
            return false;
        }

        let remaining = &data[consumed..];
        let found = match self.detector.detect(remaining, true) {
            Ok(span) => span,
            Err(err) => {
                debug!(offset = consumed, error = %err, "detector failed");
                self.err = Some(err);
                return false;
            }
        };

        if found.start > found.end {
            return self.violation(SegmentError::StartAfterEnd {
                start: found.start,
                end: found.end,
            });
        }

        // No segment left.
        if found.end == 0 || found.start == found.end {
            return false;
        }

        if found.end > remaining.len() {
            return self.violation(SegmentError::EndOutOfBounds {
                end: found.end,
                len: remaining.len(),
            });
        }

        // Nothing was current before the first step.
        if consumed != 0 {
            self.history.push(self.current);
        }
        self.current = found.offset(consumed);

        trace!(
            start = self.current.start,
            end = self.current.end,
            depth = self.history.len(),
            "next"
        );
        true
    }

    /// Step back to the segment that was current before the last forward step.
    ///
    /// Returns false, leaving the position untouched, when there is no history
    /// or an error has latched.
    pub fn previous(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }

        match self.history.pop() {
            Some(span) => {
                self.current = span;
                trace!(
                    start = span.start,
                    end = span.end,
                    depth = self.history.len(),
                    "previous"
                );
                true
            }
            None => false,
        }
    }

    fn violation(&mut self, err: SegmentError) -> bool {
        warn!(offset = self.current.end, error = %err, "detector broke its contract");
        self.err = Some(err);
        false
    }

    /// Offset of the first byte of the current segment.
    pub fn start(&self) -> usize {
        self.current.start
    }

    /// Offset one past the last byte of the current segment.
    pub fn end(&self) -> usize {
        self.current.end
    }

    /// Current segment as a span.
    pub fn span(&self) -> Span {
        self.current
    }

    /// Bytes of the current segment, `text()[start()..end()]`.
    pub fn bytes(&self) -> &'a [u8] {
        &self.data[self.current.range()]
    }

    /// The whole buffer.
    pub fn text(&self) -> &'a [u8] {
        self.data
    }

    /// Last error recorded by [`next`](Self::next).
    pub fn err(&self) -> Option<&SegmentError> {
        self.err.as_ref()
    }

    /// Number of spans [`previous`](Self::previous) can still step back through.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The detector driving this cursor.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Iterate over the remaining segments, yielding their bytes.
    ///
    /// Iteration stops at the end of the buffer or on error; the cursor keeps
    /// the position and any error afterwards.
    pub fn segments(&mut self) -> Segments<'_, 'a, D> {
        Segments { seg: self }
    }
}

impl<'a, D: Detector> Forward<'a> for Segmenter<'a, D> {
    fn set_text(&mut self, data: &'a [u8]) {
        Segmenter::set_text(self, data)
    }

    fn next(&mut self) -> bool {
        Segmenter::next(self)
    }

    fn start(&self) -> usize {
        Segmenter::start(self)
    }

    fn end(&self) -> usize {
        Segmenter::end(self)
    }

    fn err(&self) -> Option<&SegmentError> {
        Segmenter::err(self)
    }
}

impl<'a, D: Detector> Bidirectional<'a> for Segmenter<'a, D> {
    fn previous(&mut self) -> bool {
        Segmenter::previous(self)
    }
}

/// Iterator returned by [`Segmenter::segments`].
#[derive(Debug)]
pub struct Segments<'s, 'a, D> {
    seg: &'s mut Segmenter<'a, D>,
}

impl<'a, D: Detector> Iterator for Segments<'_, 'a, D> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.seg.next() {
            Some(self.seg.bytes())
        } else {
            None
        }
    }
}
