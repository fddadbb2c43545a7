//! Error types for collection lookups and spatial queries.
//!
//! Every condition here is local and caller-recoverable: it signals malformed
//! input or a degenerate query, never a transient failure.

use thiserror::Error;

/// Errors arising from collection access, filtering, or geometric queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A collection lookup found no entity under the requested key.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Debug rendering of the missing key.
        key: String,
    },
    /// A filter was given a comparator token outside the recognized set.
    #[error("unsupported comparator: {token:?}")]
    UnsupportedComparator {
        /// The offending token.
        token: String,
    },
    /// A nearest-neighbour search was run over an empty candidate set.
    #[error("nearest-neighbour search over an empty candidate set")]
    EmptyInput,
    /// A compass-rose lookup was given an unrecognized label.
    #[error("unknown compass label: {label:?}")]
    UnknownCompassLabel {
        /// The offending label.
        label: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GridError::KeyNotFound {
            key: "Point(3, 4)".into(),
        };
        assert_eq!(err.to_string(), "key not found: Point(3, 4)");

        let err = GridError::UnsupportedComparator { token: "~=".into() };
        assert_eq!(err.to_string(), "unsupported comparator: \"~=\"");

        let err = GridError::UnknownCompassLabel { label: "XNX".into() };
        assert_eq!(err.to_string(), "unknown compass label: \"XNX\"");
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&GridError::EmptyInput);
    }
}
