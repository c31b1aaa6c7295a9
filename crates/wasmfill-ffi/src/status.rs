//! C-compatible status codes for the checked exports.
//!
//! [`WasmfillStatus`] is a `repr(i32)` enum. `Ok` is zero, every error is
//! negative, and values are ABI-stable. Conversions from [`SpanError`] are
//! provided so Rust-side validation maps onto the same codes.

use wasmfill_core::SpanError;

/// C-compatible status code returned by the checked exports.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasmfillStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, unknown, or otherwise invalid.
    InvalidArgument = -1,
    /// Base pointer is not aligned for the element type.
    Misaligned = -2,
    /// `len * element size` overflows the address space.
    LengthOverflow = -3,
    /// The span reaches past the accessible region.
    OutOfBounds = -4,
    /// The span and value element types differ.
    KindMismatch = -5,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&SpanError> for WasmfillStatus {
    fn from(e: &SpanError) -> Self {
        match e {
            SpanError::OutOfBounds { .. } => WasmfillStatus::OutOfBounds,
            SpanError::AddressOverflow { .. } => WasmfillStatus::LengthOverflow,
            SpanError::Misaligned { .. } => WasmfillStatus::Misaligned,
            SpanError::RaggedBytes { .. } => WasmfillStatus::InvalidArgument,
            SpanError::KindMismatch { .. } => WasmfillStatus::KindMismatch,
            SpanError::UnknownElementKind { .. } => WasmfillStatus::InvalidArgument,
        }
    }
}

impl From<Result<(), SpanError>> for WasmfillStatus {
    fn from(r: Result<(), SpanError>) -> Self {
        match r {
            Ok(()) => WasmfillStatus::Ok,
            Err(e) => WasmfillStatus::from(&e),
        }
    }
}
