//! Reference detector that splits on Unicode whitespace.

use crate::cursor::Segmenter;
use crate::detect::{Detector, Span};
use crate::error::SegmentError;

/// Segments are maximal runs of non-whitespace characters.
///
/// Input must be UTF-8. When `at_eof` is false a character cut off at the end
/// of the slice yields [`SegmentError::IncompleteMinimalUnit`] and a segment
/// that reaches the end of the slice yields [`SegmentError::IncompleteToken`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

/// Create a cursor over `data` using the whitespace detector.
pub fn segmenter(data: &[u8]) -> Segmenter<'_, Whitespace> {
    let mut seg = Segmenter::new(Whitespace);
    seg.set_text(data);
    seg
}

impl Detector for Whitespace {
    fn detect(&self, data: &[u8], at_eof: bool) -> Result<Span, SegmentError> {
        let mut pos = 0;

        // Skip leading whitespace
        while let Some((c, width)) = char_at(data, pos, at_eof)? {
            if !c.is_whitespace() {
                break;
            }
            pos += width;
        }
        let start = pos;

        // Continue through non-whitespace
        while let Some((c, width)) = char_at(data, pos, at_eof)? {
            if c.is_whitespace() {
                break;
            }
            pos += width;
        }
        let end = pos;

        if !at_eof && start < end && end == data.len() {
            return Err(SegmentError::IncompleteToken);
        }

        Ok(Span::new(start, end))
    }
}

enum Decoded {
    Char(char, usize),
    Truncated,
    Invalid,
}

fn char_at(data: &[u8], pos: usize, at_eof: bool) -> Result<Option<(char, usize)>, SegmentError> {
    if pos >= data.len() {
        return Ok(None);
    }
    match decode(&data[pos..]) {
        Decoded::Char(c, width) => Ok(Some((c, width))),
        Decoded::Truncated if !at_eof => Err(SegmentError::IncompleteMinimalUnit),
        Decoded::Truncated | Decoded::Invalid => Err(SegmentError::InvalidUtf8 { offset: pos }),
    }
}

/// Decode the first UTF-8 character of a non-empty slice.
fn decode(data: &[u8]) -> Decoded {
    let first = data[0];
    let width = match first {
        0x00..=0x7F => return Decoded::Char(first as char, 1),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Decoded::Invalid,
    };

    if data.len() < width {
        // Only a prefix that could still become valid counts as truncated.
        return match std::str::from_utf8(data) {
            Err(e) if e.error_len().is_none() => Decoded::Truncated,
            _ => Decoded::Invalid,
        };
    }

    match std::str::from_utf8(&data[..width]) {
        Ok(s) => s
            .chars()
            .next()
            .map_or(Decoded::Invalid, |c| Decoded::Char(c, width)),
        Err(_) => Decoded::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    #[test_case(b"hello world", 0, 5 ; "leading word")]
    #[test_case(b"   hi", 3, 5 ; "skips leading spaces")]
    #[test_case(b"\t\n\r x", 4, 5 ; "skips control whitespace")]
    #[test_case(b"    ", 4, 4 ; "whitespace only")]
    #[test_case(b"", 0, 0 ; "empty")]
    #[test_case("\u{3000}日本 語".as_bytes(), 3, 9 ; "ideographic space")]
    #[test_case("caf\u{e9}!\u{a0}x".as_bytes(), 0, 6 ; "no-break space ends segment")]
    fn test_detect_at_eof(data: &[u8], start: usize, end: usize) {
        let span = Whitespace.detect(data, true).expect("valid input");
        assert_eq!(span, Span::new(start, end));
    }

    #[test_case(b"ab\xffcd", 2 ; "stray continuation byte")]
    #[test_case(b"  \xc0\x80", 2 ; "overlong encoding")]
    #[test_case(b"x\xe2\x82", 1 ; "truncated at eof")]
    fn test_invalid_utf8(data: &[u8], offset: usize) {
        match Whitespace.detect(data, true) {
            Err(SegmentError::InvalidUtf8 { offset: got }) => assert_eq!(got, offset),
            other => panic!("expected invalid UTF-8, got {other:?}"),
        }
    }

    #[test_case(b"word", ErrorKind::IncompleteToken ; "segment touches end")]
    #[test_case(b"  \xe2\x82", ErrorKind::IncompleteMinimalUnit ; "rune cut in skipped prefix")]
    #[test_case(b"ab\xe2", ErrorKind::IncompleteMinimalUnit ; "rune cut in segment")]
    fn test_incomplete_before_eof(data: &[u8], kind: ErrorKind) {
        let err = Whitespace.detect(data, false).expect_err("needs more data");
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_complete_segment_before_eof() {
        assert_eq!(Whitespace.detect(b"ab cd", false).ok(), Some(Span::new(0, 2)));
        assert_eq!(Whitespace.detect(b"   ", false).ok(), Some(Span::new(3, 3)));
    }

    #[test]
    fn test_replacement_character_is_valid() {
        let data = "a\u{fffd}b c".as_bytes();
        assert_eq!(Whitespace.detect(data, true).ok(), Some(Span::new(0, 5)));
    }

    #[test]
    fn test_segmenter_helper() {
        let mut seg = segmenter(b"one two");
        assert!(seg.next());
        assert_eq!(seg.bytes(), b"one");
    }
}
