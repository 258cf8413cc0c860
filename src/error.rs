//! Error taxonomy shared by the cursor, detectors, and streaming adapter.

use thiserror::Error;

/// Coarse classification of a [`SegmentError`].
///
/// Callers match on the kind rather than on a particular error value, so a
/// sentinel stays recognisable after being wrapped with [`SegmentError::context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A multi-byte code unit was cut off at the end of the available data.
    IncompleteMinimalUnit,
    /// A segment may continue into bytes that are not yet available.
    IncompleteToken,
    /// The input itself is malformed.
    Semantic,
    /// The detector returned offsets that break its contract.
    ContractViolation,
}

/// Errors produced while locating segments.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Sentinel: a minimal code unit (e.g. a UTF-8 sequence) is truncated.
    #[error("incomplete rune")]
    IncompleteMinimalUnit,

    /// Sentinel: the next segment may extend past the available data.
    #[error("incomplete token")]
    IncompleteToken,

    /// Input contains bytes that are not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Offset of the offending byte, relative to the slice handed to the detector.
        offset: usize,
    },

    /// Free-form semantic failure reported by a custom detector.
    #[error("detector error: {0}")]
    Detector(String),

    /// Detector returned `start > end`.
    #[error(
        "the start of the next segment ({start}) is greater than the end ({end}); \
         this is likely a bug in the detector"
    )]
    StartAfterEnd {
        /// Reported start offset.
        start: usize,
        /// Reported end offset.
        end: usize,
    },

    /// Detector returned an `end` past the slice it was given.
    #[error(
        "the end of the next segment ({end}) exceeds the length of the remaining text ({len}); \
         this is likely a bug in the detector"
    )]
    EndOutOfBounds {
        /// Reported end offset.
        end: usize,
        /// Length of the slice the detector saw.
        len: usize,
    },

    /// Another error annotated with extra context.
    #[error("{context}")]
    Context {
        /// Human-readable annotation.
        context: String,
        /// The wrapped error.
        #[source]
        source: Box<SegmentError>,
    },
}

impl SegmentError {
    /// Helper for constructing detector-originated semantic errors.
    pub fn detector(msg: impl Into<String>) -> Self {
        SegmentError::Detector(msg.into())
    }

    /// Wrap this error with additional context, keeping its kind.
    pub fn context(self, context: impl Into<String>) -> Self {
        SegmentError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Classify the error, looking through any [`SegmentError::Context`] layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentError::IncompleteMinimalUnit => ErrorKind::IncompleteMinimalUnit,
            SegmentError::IncompleteToken => ErrorKind::IncompleteToken,
            SegmentError::InvalidUtf8 { .. } | SegmentError::Detector(_) => ErrorKind::Semantic,
            SegmentError::StartAfterEnd { .. } | SegmentError::EndOutOfBounds { .. } => {
                ErrorKind::ContractViolation
            }
            SegmentError::Context { source, .. } => source.kind(),
        }
    }

    /// True for either incompleteness sentinel.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::IncompleteMinimalUnit | ErrorKind::IncompleteToken
        )
    }

    /// True when the error points at a faulty detector rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        self.kind() == ErrorKind::ContractViolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_survives_wrapping() {
        let err = SegmentError::IncompleteToken
            .context("scanning chunk 3")
            .context("reading stdin");
        assert_eq!(err.kind(), ErrorKind::IncompleteToken);
        assert!(err.is_incomplete());
        assert_eq!(err.to_string(), "reading stdin");
    }

    #[test]
    fn test_context_chain_prints_each_layer_once() {
        let err = SegmentError::IncompleteToken
            .context("scanning chunk 3")
            .context("reading stdin");
        let report = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(report, "reading stdin: scanning chunk 3: incomplete token");

        let single = anyhow::Error::new(SegmentError::IncompleteToken.context("outer"));
        assert_eq!(format!("{single:#}"), "outer: incomplete token");
    }

    #[test]
    fn test_contract_violation_message_is_distinct() {
        let violation = SegmentError::StartAfterEnd { start: 4, end: 2 };
        let semantic = SegmentError::InvalidUtf8 { offset: 2 };

        assert!(violation.is_contract_violation());
        assert!(!semantic.is_contract_violation());
        assert_eq!(semantic.kind(), ErrorKind::Semantic);
        assert!(violation.to_string().contains("bug in the detector"));
        assert!(!semantic.to_string().contains("bug"));
    }

    #[test]
    fn test_semantic_errors_are_not_incomplete() {
        assert!(!SegmentError::detector("bad escape").is_incomplete());
        assert!(SegmentError::IncompleteMinimalUnit.is_incomplete());
    }
}
