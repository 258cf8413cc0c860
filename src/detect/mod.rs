//! Boundary detectors: the stateless strategies that locate the next segment.
//!
//! A detector sees only the unconsumed suffix of the buffer and reports the
//! offsets of the first segment in it. It keeps no state between calls, so
//! the same slice always produces the same answer.

mod registry;
pub mod lines;
pub mod whitespace;

use std::ops::Range;
use std::sync::Arc;

use crate::error::SegmentError;

pub use lines::Lines;
pub use registry::{DetectorInfo, DetectorRegistry, SharedDetector};
pub use whitespace::Whitespace;

/// Half-open byte range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span. No ordering check is done here; the cursor validates.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered (zero for inverted spans).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span as a slicing range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Shift both offsets by `base`, turning a relative span into an absolute one.
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: base + self.start,
            end: base + self.end,
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Strategy that finds the first segment in a byte slice.
///
/// Contract:
/// - `start` is the first byte of the segment; bytes before it are skipped.
/// - `end` is one past the last byte; `end == 0` means no segment was found.
/// - `start <= end <= data.len()` must hold. Anything else is a detector bug.
/// - When `at_eof` is false and the answer depends on bytes not yet seen,
///   return [`SegmentError::IncompleteMinimalUnit`] or
///   [`SegmentError::IncompleteToken`] so a streaming caller can fetch more.
pub trait Detector {
    /// Locate the next segment in `data`.
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError>;
}

impl<D: Detector + ?Sized> Detector for &D {
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        (**self).detect(data, at_eof)
    }
}

impl<D: Detector + ?Sized> Detector for Box<D> {
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        (**self).detect(data, at_eof)
    }
}

impl<D: Detector + ?Sized> Detector for Arc<D> {
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        (**self).detect(data, at_eof)
    }
}

/// Detector backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnDetector<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnDetector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDetector").finish_non_exhaustive()
    }
}

impl<F> Detector for FnDetector<F>
where
    F: Fn(&[u8], bool) -> Result<Span, SegmentError>,
{
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        (self.f)(data, at_eof)
    }
}

/// Turn a plain function or closure into a [`Detector`].
///
/// ```
/// use segment::detect::{from_fn, Span};
/// use segment::Segmenter;
///
/// // Every byte is its own segment.
/// let bytes = from_fn(|data: &[u8], _at_eof| Ok(Span::new(0, data.len().min(1))));
/// let mut seg = Segmenter::new(bytes);
/// seg.set_text(b"ab");
/// assert!(seg.next());
/// assert_eq!(seg.bytes(), b"a");
/// ```
pub fn from_fn<F>(f: F) -> FnDetector<F>
where
    F: Fn(&[u8], bool) -> Result<Span, SegmentError>,
{
    FnDetector { f }
}
