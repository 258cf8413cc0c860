//! # Bidirectional segment cursor
//!
//! This library walks an in-memory byte buffer one logical unit (word, line,
//! sentence...) at a time, forward and backward, without rescanning from the
//! start.
//!
//! ## Pieces
//!
//! 1. **Detector**: a stateless strategy that finds the first segment in a slice
//! 2. **Segmenter**: a cursor that drives a detector over the unconsumed suffix
//! 3. **History**: spans replaced by forward steps, popped by `previous()`
//! 4. **Split adapter**: the same detector driven by a chunked scanner
//!
//! ## Usage Example
//!
//! ```
//! use segment::{detect::Whitespace, Segmenter};
//!
//! let mut seg = Segmenter::new(Whitespace);
//! seg.set_text(b"hi   how are you!!");
//!
//! assert!(seg.next());
//! assert!(seg.next());
//! assert_eq!(seg.bytes(), b"how");
//! assert!(seg.previous());
//! assert_eq!(seg.bytes(), b"hi");
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod cursor; // Segment cursor and its history stack
pub mod detect; // Detector contract and reference detectors
pub mod error; // Error taxonomy
pub mod stream; // Chunked-scanner adapter

// Re-exports for convenience
pub use cursor::{History, Segmenter, SegmenterConfig, Segments};
pub use detect::{from_fn, Detector, Span};
pub use error::{ErrorKind, SegmentError};
pub use stream::{split, Split, SplitAdapter};

/// Forward-only iteration over the segments of a buffer.
pub trait Forward<'a> {
    /// Replace the buffer and reset all position and error state.
    fn set_text(&mut self, data: &'a [u8]);

    /// Advance to the next segment; false at the end or on error.
    fn next(&mut self) -> bool;

    /// Offset of the first byte of the current segment.
    fn start(&self) -> usize;

    /// Offset one past the last byte of the current segment.
    fn end(&self) -> usize;

    /// Last recorded error, if any.
    fn err(&self) -> Option<&SegmentError>;
}

/// Forward iteration plus stepping back.
pub trait Bidirectional<'a>: Forward<'a> {
    /// Return to the segment that was current before the last forward step.
    fn previous(&mut self) -> bool;
}

/// Collect the spans of every remaining segment from any forward cursor.
///
/// Stops at the end of the buffer or at the first error; the error stays
/// available through [`Forward::err`].
pub fn collect_spans<'a, F>(cursor: &mut F) -> Vec<Span>
where
    F: Forward<'a> + ?Sized,
{
    let mut spans = Vec::new();
    while cursor.next() {
        spans.push(Span::new(cursor.start(), cursor.end()));
    }
    spans
}
