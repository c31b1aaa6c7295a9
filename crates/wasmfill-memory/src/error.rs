//! Host memory error types.

use std::error::Error;
use std::fmt;

use wasmfill_core::SpanError;

use crate::units::{Bytes, Pages};

/// Errors from configuring, growing, or addressing host memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// The memory configuration is inconsistent.
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
    /// The memory could not grow by the requested number of pages.
    CouldNotGrow {
        /// Current size.
        current: Pages,
        /// Requested increase.
        delta: Pages,
        /// Configured maximum.
        maximum: Pages,
    },
    /// A fixed-size memory has no room for an allocation.
    OutOfMemory {
        /// Bytes the allocation needs, counted from address 0.
        requested: Bytes,
        /// Bytes the memory holds.
        available: Bytes,
    },
    /// No array is registered under this name.
    UnknownArray {
        /// The requested name.
        name: String,
    },
    /// An element index past the end of an array.
    IndexOutOfBounds {
        /// The requested index.
        index: u32,
        /// Array length in elements.
        len: u32,
    },
    /// A span failed validation against the memory.
    Span(SpanError),
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid memory config: {reason}"),
            Self::CouldNotGrow {
                current,
                delta,
                maximum,
            } => {
                write!(
                    f,
                    "memory could not grow: current {current}, requested increase {delta}, maximum {maximum}"
                )
            }
            Self::OutOfMemory {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of memory: need {requested} but only {available} are available"
                )
            }
            Self::UnknownArray { name } => write!(f, "no array named '{name}'"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for array of length {len}")
            }
            Self::Span(e) => write!(f, "invalid span: {e}"),
        }
    }
}

impl Error for MemoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Span(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpanError> for MemoryError {
    fn from(e: SpanError) -> Self {
        Self::Span(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_error_is_source() {
        let e = MemoryError::from(SpanError::RaggedBytes {
            len: 3,
            elem_size: 4,
        });
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("invalid span"));
    }

    #[test]
    fn out_of_memory_display() {
        let e = MemoryError::OutOfMemory {
            requested: Bytes(131_076),
            available: Bytes(131_072),
        };
        assert_eq!(
            e.to_string(),
            "out of memory: need 131076 bytes but only 131072 bytes are available"
        );
    }
}
