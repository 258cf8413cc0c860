//! Shared helpers for integration tests.

#![allow(dead_code)]

use segment::detect::{from_fn, Detector, Span};
use segment::{SegmentError, Segmenter, SplitAdapter};

/// Detector that always reports `start > end`.
pub fn inverted() -> impl Detector {
    from_fn(|_: &[u8], _| Ok(Span::new(3, 1)))
}

/// Detector that always fails with a semantic error.
pub fn failing(msg: &'static str) -> impl Detector {
    from_fn(move |_: &[u8], _| Err(SegmentError::detector(msg)))
}

/// Detector that always claims the token continues past the window.
pub fn always_incomplete_token() -> impl Detector {
    from_fn(|_: &[u8], _| Err(SegmentError::IncompleteToken))
}

/// Drain a cursor into owned UTF-8 strings (lossy).
pub fn collect_strings<D: Detector>(seg: &mut Segmenter<'_, D>) -> Vec<String> {
    seg.segments()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

/// Drive `detector` the way a chunked scanner would: feed `input` in pieces of
/// `chunk` bytes, growing the window whenever the adapter asks for more.
pub fn scan_chunked<D: Detector>(
    detector: D,
    input: &[u8],
    chunk: usize,
) -> Result<Vec<Vec<u8>>, SegmentError> {
    assert!(chunk > 0, "chunk size must be positive");
    let adapter = SplitAdapter::new(detector);
    let mut window: Vec<u8> = Vec::new();
    let mut fed = 0;
    let mut tokens = Vec::new();

    loop {
        let at_eof = fed == input.len();
        let out = adapter.split(&window, at_eof)?;

        if out.needs_more() {
            if at_eof {
                break;
            }
            let next = (fed + chunk).min(input.len());
            window.extend_from_slice(&input[fed..next]);
            fed = next;
            continue;
        }

        let advance = out.advance;
        if let Some(token) = out.token {
            tokens.push(token.to_vec());
        }
        window.drain(..advance);
    }

    Ok(tokens)
}
