//! Reference detector that yields non-empty lines.

use crate::detect::{Detector, Span};
use crate::error::SegmentError;

/// Segments are lines without their terminator.
///
/// `\n` ends a line and a `\r` directly before it is dropped. Empty lines are
/// skipped. A final line without a terminator is a segment at EOF and
/// [`SegmentError::IncompleteToken`] otherwise. Bytes are not decoded, so any
/// ASCII-compatible encoding works.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lines;

impl Detector for Lines {
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        // Skip empty lines: bare `\n` and `\r\n` pairs only.
        let mut start = 0;
        loop {
            match &data[start..] {
                [b'\n', ..] => start += 1,
                [b'\r', b'\n', ..] => start += 2,
                _ => break,
            }
        }

        let rest = &data[start..];
        let end = match rest.iter().position(|&b| b == b'\n') {
            Some(newline) if newline > 0 && rest[newline - 1] == b'\r' => start + newline - 1,
            Some(newline) => start + newline,
            None if rest.is_empty() => return Ok(Span::new(start, start)),
            None if !at_eof => return Err(SegmentError::IncompleteToken),
            None => data.len(),
        };

        Ok(Span::new(start, end))
    }
}
