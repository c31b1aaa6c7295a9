//! Safe fill operations.
//!
//! Every function here writes one repeated value over a region and touches
//! nothing outside it. They differ only in how the region is described:
//!
//! - [`fill`]: a whole typed slice.
//! - [`fill_prefix`]: the first `len` elements of a typed slice, checked.
//! - [`fill_le_bytes`]: little-endian byte storage, as in a linear memory.
//! - [`fill_value_le_bytes`]: byte storage with a runtime-typed value.

use crate::element::{FillElement, FillValue};
use crate::error::SpanError;

/// Overwrite every element of `dst` with `value`.
#[inline]
pub fn fill<T: FillElement>(dst: &mut [T], value: T) {
    dst.fill(value);
}

/// Overwrite `dst[..len]` with `value`, leaving `dst[len..]` untouched.
///
/// Fails with [`SpanError::OutOfBounds`] if `len > dst.len()`; nothing is
/// written in that case.
pub fn fill_prefix<T: FillElement>(dst: &mut [T], len: usize, value: T) -> Result<(), SpanError> {
    let available = dst.len();
    let head = dst.get_mut(..len).ok_or(SpanError::OutOfBounds {
        requested: len,
        available,
    })?;
    fill(head, value);
    Ok(())
}

/// Overwrite little-endian byte storage with repeated copies of `value`.
///
/// `bytes.len()` must be a whole number of elements, otherwise
/// [`SpanError::RaggedBytes`] is returned and nothing is written. No
/// alignment is required: the storage is treated as unaligned bytes.
pub fn fill_le_bytes<T: FillElement>(bytes: &mut [u8], value: T) -> Result<(), SpanError> {
    if bytes.len() % T::SIZE != 0 {
        return Err(SpanError::RaggedBytes {
            len: bytes.len(),
            elem_size: T::SIZE,
        });
    }
    for chunk in bytes.chunks_exact_mut(T::SIZE) {
        value.write_le(chunk);
    }
    Ok(())
}

/// [`fill_le_bytes`] for a value whose type is known only at runtime.
pub fn fill_value_le_bytes(bytes: &mut [u8], value: FillValue) -> Result<(), SpanError> {
    match value {
        FillValue::I32(v) => fill_le_bytes(bytes, v),
        FillValue::I64(v) => fill_le_bytes(bytes, v),
        FillValue::F32(v) => fill_le_bytes(bytes, v),
        FillValue::F64(v) => fill_le_bytes(bytes, v),
    }
}
