//! Error types for checked span operations.
//!
//! The raw fill surface reports nothing. Everything that validates a span
//! before writing to it (slice fills, byte-storage fills, host memory)
//! reports through [`SpanError`].

use std::error::Error;
use std::fmt;

use crate::element::ElementKind;

/// Why a span could not be filled or resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanError {
    /// The span reaches past the end of the accessible region.
    OutOfBounds {
        /// Elements (or bytes, for byte regions) the span asked for.
        requested: usize,
        /// Elements (or bytes) actually available.
        available: usize,
    },
    /// `base + len * size` does not fit in the address space.
    AddressOverflow {
        /// Byte address of the first element.
        base: u64,
        /// Element count.
        len: u64,
        /// Bytes per element.
        elem_size: usize,
    },
    /// The base address is not aligned to the element size.
    Misaligned {
        /// Byte address of the first element.
        base: u64,
        /// Required alignment in bytes.
        align: usize,
    },
    /// A byte region whose length is not a whole number of elements.
    RaggedBytes {
        /// Length of the byte region.
        len: usize,
        /// Bytes per element.
        elem_size: usize,
    },
    /// The span holds a different element type than the value written to it.
    KindMismatch {
        /// Element kind of the span.
        expected: ElementKind,
        /// Element kind of the value or accessor.
        found: ElementKind,
    },
    /// A type name that is not one of `i32`, `i64`, `f32`, `f64`.
    UnknownElementKind {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "span out of bounds: requested {requested}, available {available}"
                )
            }
            Self::AddressOverflow {
                base,
                len,
                elem_size,
            } => {
                write!(
                    f,
                    "span address overflow: base {base} + {len} x {elem_size} bytes"
                )
            }
            Self::Misaligned { base, align } => {
                write!(f, "span base {base} is not aligned to {align} bytes")
            }
            Self::RaggedBytes { len, elem_size } => {
                write!(
                    f,
                    "byte region of {len} bytes is not a multiple of {elem_size}"
                )
            }
            Self::KindMismatch { expected, found } => {
                write!(f, "element kind mismatch: span holds {expected}, got {found}")
            }
            Self::UnknownElementKind { name } => {
                write!(f, "<<{name}>> is not a valid array type")
            }
        }
    }
}

impl Error for SpanError {}
