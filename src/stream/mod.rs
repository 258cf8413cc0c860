//! Adapter exposing a [`Detector`] to chunked scanners.
//!
//! A chunked scanner owns a sliding window over its input. It calls the split
//! function with the window and learns how far to slide (`advance`) and which
//! token, if any, was found. Advancing by zero with no token means "read more
//! bytes and call again".

use tracing::trace;

use crate::detect::Detector;
use crate::error::SegmentError;

/// Outcome of one split call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'d> {
    /// Bytes the scanner should drop from the front of its window.
    pub advance: usize,
    /// Segment found in the window, if any.
    pub token: Option<&'d [u8]>,
}

impl<'d> Split<'d> {
    /// Ask the scanner for more input.
    pub const fn need_more() -> Self {
        Self {
            advance: 0,
            token: None,
        }
    }

    /// True when the scanner should read more input before calling again.
    pub fn needs_more(&self) -> bool {
        self.advance == 0 && self.token.is_none()
    }
}

/// Run `detector` over a scanner window.
///
/// - An empty window asks for more data.
/// - Incompleteness sentinels ask for more data unless `at_eof`, in which case
///   they are returned unchanged.
/// - A window with no segment in it asks for more data, or is dropped whole at EOF.
/// - Offsets that break the detector contract become errors, never panics.
pub fn split<'d, D>(detector: &D, data: &'d [u8], at_eof: bool) -> Result<Split<'d>, SegmentError>
where
    D: Detector + ?Sized,
{
    if data.is_empty() {
        return Ok(Split::need_more());
    }

    let found = match detector.detect(data, at_eof) {
        Ok(span) => span,
        Err(err) if err.is_incomplete() && !at_eof => {
            trace!(window = data.len(), error = %err, "requesting more data");
            return Ok(Split::need_more());
        }
        Err(err) => return Err(err),
    };

    if found.start > found.end {
        return Err(SegmentError::StartAfterEnd {
            start: found.start,
            end: found.end,
        });
    }
    if found.end > data.len() {
        return Err(SegmentError::EndOutOfBounds {
            end: found.end,
            len: data.len(),
        });
    }

    if found.end == 0 {
        return Ok(if at_eof {
            Split {
                advance: data.len(),
                token: None,
            }
        } else {
            Split::need_more()
        });
    }

    let token = (found.start < found.end).then(|| &data[found.range()]);
    Ok(Split {
        advance: found.end,
        token,
    })
}

/// Owns a detector and exposes it through [`split`].
#[derive(Debug, Clone, Default)]
pub struct SplitAdapter<D> {
    detector: D,
}

impl<D: Detector> SplitAdapter<D> {
    /// Wrap a detector.
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// See [`split`].
    pub fn split<'d>(&self, data: &'d [u8], at_eof: bool) -> Result<Split<'d>, SegmentError> {
        split(&self.detector, data, at_eof)
    }

    /// The wrapped detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Unwrap the detector.
    pub fn into_inner(self) -> D {
        self.detector
    }
}
